// SPDX-License-Identifier: MPL-2.0
//! Observable contract of `Notifier::notify`.

use iced_notifier::ui::notifications::{Category, Notifier, Phase, HIDDEN_CLASS};
use std::time::{Duration, Instant};

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

#[test]
fn notify_mounts_exactly_one_element_with_the_message() {
    for message in ["ok", "", "multi\nline", "<em>not markup</em>", "émoji ✓"] {
        let mut notifier = Notifier::new();
        let id = notifier.notify_default(message);

        assert_eq!(notifier.len(), 1);
        let notification = notifier.get(id).expect("mounted");
        assert_eq!(notification.message(), message);
    }
}

#[test]
fn default_category_is_success() {
    let mut notifier = Notifier::new();
    let id = notifier.notify_default("ok");

    let notification = notifier.get(id).expect("mounted");
    assert!(notification.has_class("success"));
    assert_eq!(notification.category(), &Category::default());
}

#[test]
fn explicit_category_replaces_default() {
    let mut notifier = Notifier::new();
    let id = notifier.notify("bad", "error");

    let notification = notifier.get(id).expect("mounted");
    assert!(notification.has_class("error"));
    assert!(!notification.has_class("success"));
}

#[test]
fn sequential_calls_produce_independent_elements() {
    let mut notifier = Notifier::new();
    let first = notifier.notify_default("one");
    let second = notifier.notify_default("two");

    assert_ne!(first, second);
    assert_eq!(notifier.len(), 2);
    assert!(notifier.contains(first));
    assert!(notifier.contains(second));

    let messages: Vec<_> = notifier.notifications().map(|n| n.message()).collect();
    assert_eq!(messages, vec!["one", "two"]);
}

#[test]
fn timing_follows_fixed_delays() {
    let start = Instant::now();
    let mut notifier = Notifier::new();
    let id = notifier.notify_at(start, "x", Category::default());

    notifier.tick(at(start, 2999));
    let notification = notifier.get(id).expect("mounted before 3000 ms");
    assert!(!notification.has_class(HIDDEN_CLASS));
    assert_eq!(notification.phase_at(at(start, 2999)), Phase::Visible);

    notifier.tick(at(start, 3001));
    let notification = notifier.get(id).expect("mounted while hidden");
    assert!(notification.has_class(HIDDEN_CLASS));
    assert_eq!(notification.phase_at(at(start, 3001)), Phase::Hidden);

    notifier.tick(at(start, 3499));
    assert!(notifier.contains(id));

    notifier.tick(at(start, 3501));
    assert!(!notifier.contains(id));
    assert!(notifier.is_empty());
    assert!(!notifier.has_pending());
}

#[test]
fn hide_always_precedes_remove() {
    let start = Instant::now();
    let mut notifier = Notifier::new();
    let id = notifier.notify_at(start, "x", "info");

    // Only the hide action is pending until it fires.
    assert_eq!(notifier.next_deadline(), Some(at(start, 3000)));
    notifier.tick(at(start, 3000));
    assert!(notifier.get(id).is_some_and(|n| n.is_hidden()));
    assert_eq!(notifier.next_deadline(), Some(at(start, 3500)));
}

#[test]
fn empty_message_and_category_do_not_fail() {
    let mut notifier = Notifier::new();
    let id = notifier.notify("", "");

    let notification = notifier.get(id).expect("mounted");
    assert_eq!(notification.message(), "");
    assert_eq!(notification.classes(), vec!["notification"]);
}

#[test]
fn unknown_category_is_accepted() {
    let mut notifier = Notifier::new();
    let id = notifier.notify("party", "confetti");
    assert!(notifier.get(id).is_some_and(|n| n.has_class("confetti")));
}

#[test]
fn category_words_become_separate_classes() {
    let mut notifier = Notifier::new();
    let id = notifier.notify("x", "error wide");
    let blank = notifier.notify("y", " \t ");

    let notification = notifier.get(id).expect("mounted");
    assert_eq!(notification.classes(), vec!["notification", "error", "wide"]);
    assert_eq!(
        notifier.get(blank).expect("mounted").classes(),
        vec!["notification"]
    );
}

#[test]
fn overlapping_calls_keep_their_own_schedule() {
    let start = Instant::now();
    let mut notifier = Notifier::new();
    let early = notifier.notify_at(start, "early", "success");
    let late = notifier.notify_at(at(start, 2000), "late", "warning");

    notifier.tick(at(start, 3600));
    assert!(!notifier.contains(early));
    assert!(notifier.get(late).is_some_and(|n| !n.is_hidden()));

    notifier.tick(at(start, 5001));
    assert!(notifier.get(late).is_some_and(|n| n.is_hidden()));

    notifier.tick(at(start, 5500));
    assert!(notifier.is_empty());
}
