// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the demo page to the notifier: page events become
//! `notify` calls, and a tick subscription drives the notifier's timers while
//! anything is pending.

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::ui::notifications::{self, Anchor, Notifier, Toast};
use crate::ui::page;
use crate::ui::theming::ThemeMode;
use iced::widget::Stack;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

const APP_NAME: &str = "Iced Notifier";

/// Root Iced application state.
pub struct App {
    page: page::State,
    notifier: Notifier,
    theme_mode: ThemeMode,
    anchor: Anchor,
    tick_interval: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("mounted", &self.notifier.len())
            .field("pending_timers", &self.notifier.pending_timers())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            page: page::State::new(config::DEFAULT_CATEGORY),
            notifier: Notifier::new(),
            theme_mode: ThemeMode::System,
            anchor: Anchor::default(),
            tick_interval: Duration::from_millis(config::DEFAULT_TICK_INTERVAL_MS),
        }
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = App {
            page: page::State::new(config.notifications.initial_category()),
            notifier: Notifier::new(),
            theme_mode: flags.theme.unwrap_or(config.general.theme_mode),
            anchor: config.notifications.anchor,
            tick_interval: config.notifications.tick_interval(),
        };

        tracing::info!(
            theme_mode = ?app.theme_mode,
            anchor = ?app.anchor,
            tick_interval_ms = app.tick_interval.as_millis() as u64,
            "application started"
        );

        if let Some(warning) = config_warning {
            app.notifier.notify(warning, "warning");
        }

        if let Some(message) = flags.message {
            let category = flags
                .category
                .map_or_else(notifications::Category::default, notifications::Category::from);
            app.notifier.notify(message, category);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.notifier.len() {
            0 => APP_NAME.to_string(),
            count => format!("({count}) {APP_NAME}"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifier.has_pending(), self.tick_interval)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(page_message) => {
                if let page::Event::Notify { message, category } =
                    page::update(&mut self.page, page_message)
                {
                    self.notifier.notify(message, category);
                }
            }
            Message::Notification(notification_message) => {
                self.notifier.handle_message(&notification_message);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let content = page::view(&self.page).map(Message::Page);
        let overlay = Toast::view_overlay(&self.notifier, self.anchor).map(Message::Notification);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(overlay)
            .into()
    }
}
