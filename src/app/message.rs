// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::page;
use crate::ui::theming::ThemeMode;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_NOTIFIER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional theme override; wins over the configured theme mode.
    pub theme: Option<ThemeMode>,
    /// Optional notification raised at startup.
    pub message: Option<String>,
    /// Category for the startup notification; defaults to `success`.
    pub category: Option<String>,
}
