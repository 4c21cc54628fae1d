// SPDX-License-Identifier: MPL-2.0
//! Transient notification banners.
//!
//! A notification is mounted on the page as soon as it is raised, switches to
//! a hidden state after three seconds so the toast can fade out, and is
//! detached half a second later. Calls are independent: several notifications
//! can be on screen at once and nothing is shared between them.
//!
//! # Components
//!
//! - [`notification`] - `Notification` element and its `Category` tag
//! - [`notifier`] - `Notifier` that mounts notifications and runs their timers
//! - [`lifecycle`] - fixed delays and lifecycle phases
//! - [`scheduler`] - deadline-ordered timer queue fed by ticks
//! - [`toast`] - toast widget and presentation styles
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notifier, NotificationMessage, Toast};
//!
//! let mut notifier = Notifier::new();
//! notifier.notify("Expense added successfully!", "success");
//! notifier.notify_default("Saved");
//!
//! // Feed ticks from a `time::every` subscription
//! notifier.handle_message(&NotificationMessage::Tick(std::time::Instant::now()));
//!
//! // In your view function, render toasts
//! let overlay = Toast::view_overlay(&notifier, Anchor::default()).map(Message::Notification);
//! ```

pub mod lifecycle;
mod notification;
mod notifier;
pub mod scheduler;
mod toast;

pub use lifecycle::Phase;
pub use notification::{Category, Notification, NotificationId, BASE_CLASS, HIDDEN_CLASS};
pub use notifier::{Message as NotificationMessage, Notifier};
pub use toast::{category_accent, Anchor, Toast};
