// SPDX-License-Identifier: MPL-2.0
//! `iced_notifier` shows transient, auto-dismissing notification banners in
//! Iced applications.
//!
//! The core is [`ui::notifications::Notifier`]: `notify(message, category)`
//! mounts a toast, hides it after three seconds and removes it half a second
//! later. The binary wraps it in a small demo page.

pub mod app;
pub mod error;
pub mod logging;
pub mod ui;
