// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Notifier` mounts notifications and drives their two chained timers:
//! the hide action fires [`HIDE_DELAY`] after creation and schedules the
//! remove action [`REMOVE_DELAY`] later. Scheduled actions cannot be
//! cancelled; they always run, in order, as long as ticks keep arriving.

use super::lifecycle::{HIDE_DELAY, REMOVE_DELAY};
use super::notification::{Category, Notification, NotificationId};
use super::scheduler::{Scheduler, TimerHandle};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick carrying the current time; fires due actions.
    Tick(Instant),
}

/// Delayed action registered for a single notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Hide(NotificationId),
    Remove(NotificationId),
}

/// Owns the mounted notifications and their pending actions.
#[derive(Debug, Default)]
pub struct Notifier {
    /// Mounted notifications in mount order.
    mounted: Vec<Notification>,
    timers: Scheduler<Action>,
    /// Last time observed through `notify_at` or `tick`.
    now: Option<Instant>,
}

impl Notifier {
    /// Creates a notifier with nothing mounted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `message` styled by `category`.
    ///
    /// Returns immediately. The notification is mounted now, hidden after
    /// [`HIDE_DELAY`], and removed [`REMOVE_DELAY`] after that.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        category: impl Into<Category>,
    ) -> NotificationId {
        self.notify_at(Instant::now(), message, category)
    }

    /// Shows `message` with the default `success` category.
    pub fn notify_default(&mut self, message: impl Into<String>) -> NotificationId {
        self.notify(message, Category::default())
    }

    /// Same as [`notify`](Self::notify), with an explicit creation time.
    pub fn notify_at(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        category: impl Into<Category>,
    ) -> NotificationId {
        let notification = Notification::new(message.into(), category.into(), now);
        let id = notification.id();

        let category = notification.category().to_string();
        let message_len = notification.message().len();
        self.mounted.push(notification);
        let timer = self.timers.schedule(now + HIDE_DELAY, Action::Hide(id));

        tracing::debug!(%id, ?timer, %category, message_len, "mounted notification");
        self.observe(now);
        id
    }

    /// Fires every action due at `now`, in deadline order.
    ///
    /// A remove action scheduled by a hide action that fires during this tick
    /// is processed in the same tick if it is already due.
    pub fn tick(&mut self, now: Instant) {
        self.observe(now);
        while let Some((timer, action)) = self.timers.pop_due(now) {
            self.apply(timer, action, now);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(now) => self.tick(*now),
        }
    }

    fn apply(&mut self, timer: TimerHandle, action: Action, now: Instant) {
        match action {
            Action::Hide(id) => {
                let Some(notification) = self.mounted.iter_mut().find(|n| n.id() == id) else {
                    return;
                };
                // Chained from the hide deadline so removal lands at creation + 3500 ms.
                let hide_deadline = notification.created_at() + HIDE_DELAY;
                notification.hide(now);
                let remove_timer = self
                    .timers
                    .schedule(hide_deadline + REMOVE_DELAY, Action::Remove(id));
                tracing::debug!(%id, ?timer, ?remove_timer, "notification hidden");
            }
            Action::Remove(id) => {
                if let Some(pos) = self.mounted.iter().position(|n| n.id() == id) {
                    self.mounted.remove(pos);
                    tracing::debug!(%id, ?timer, "notification removed");
                }
            }
        }
    }

    fn observe(&mut self, now: Instant) {
        self.now = Some(self.now.map_or(now, |seen| seen.max(now)));
    }

    /// Returns the mounted notifications in mount order.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.mounted.iter()
    }

    /// Looks up a mounted notification.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.mounted.iter().find(|n| n.id() == id)
    }

    /// Returns whether the notification is still mounted.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of mounted notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mounted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mounted.is_empty()
    }

    /// Returns whether any hide or remove action is still scheduled.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Returns the number of scheduled actions.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Returns when the next scheduled action is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns the latest time this notifier has observed.
    #[must_use]
    pub fn now(&self) -> Option<Instant> {
        self.now
    }
}
