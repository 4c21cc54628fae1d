// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::notifications::NotificationMessage;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick that drives notification timers.
///
/// Ticks only run while at least one hide or remove action is scheduled.
pub fn create_tick_subscription(has_pending: bool, interval: Duration) -> Subscription<Message> {
    if has_pending {
        time::every(interval).map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}
