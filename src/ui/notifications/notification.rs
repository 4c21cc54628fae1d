// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and the free-form `Category`
//! tag used to pick its presentation style.

use super::lifecycle::{self, Phase};
use std::fmt;
use std::time::Instant;

/// Style class shared by every notification.
pub const BASE_CLASS: &str = "notification";

/// Style class applied once the hide action has run.
pub const HIDDEN_CLASS: &str = "hidden";

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Free-form tag selecting the presentation style of a notification.
///
/// Any string is accepted. Tags without a matching style simply render with
/// the base appearance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// Tag used when the caller does not pick one.
    pub const DEFAULT: &'static str = "success";

    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the individual class names in the tag.
    ///
    /// The tag is split on ASCII whitespace, so `"error wide"` yields `error`
    /// and `wide`, and an empty or blank tag yields nothing.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.0.split_ascii_whitespace()
    }
}

impl Default for Category {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A notification mounted on the page.
///
/// Instances are owned by the [`Notifier`](super::Notifier), which applies
/// the hidden state and drops them on removal. A dropped notification is
/// never re-mounted.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    /// Plain text, never interpreted as markup.
    message: String,
    category: Category,
    created_at: Instant,
    /// Set once by the hide action.
    hidden_at: Option<Instant>,
}

impl Notification {
    pub(super) fn new(message: String, category: Category, created_at: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            message,
            category,
            created_at,
            hidden_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the message text exactly as given by the caller.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns when the hidden state was applied, if it has been.
    #[must_use]
    pub fn hidden_at(&self) -> Option<Instant> {
        self.hidden_at
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden_at.is_some()
    }

    /// Applies the hidden state. Later calls keep the first timestamp.
    pub(super) fn hide(&mut self, at: Instant) {
        if self.hidden_at.is_none() {
            self.hidden_at = Some(at);
        }
    }

    /// Returns the lifecycle phase expected at `now` from the fixed delays.
    #[must_use]
    pub fn phase_at(&self, now: Instant) -> Phase {
        Phase::at(now.saturating_duration_since(self.created_at))
    }

    /// Returns how far the fade-out has progressed at `now`, or `0.0` while visible.
    #[must_use]
    pub fn fade_progress(&self, now: Instant) -> f32 {
        self.hidden_at.map_or(0.0, |hidden_at| {
            lifecycle::fade_progress(now.saturating_duration_since(hidden_at))
        })
    }

    /// Returns the style classes carried by this notification, in order:
    /// the base class, the category's classes, then the hidden class.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        let mut classes = vec![BASE_CLASS];
        classes.extend(self.category.classes());
        if self.is_hidden() {
            classes.push(HIDDEN_CLASS);
        }
        classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }
}
