// SPDX-License-Identifier: MPL-2.0
//! Demo page for raising notifications.
//!
//! The page holds a message draft, a free-form category field, and a row of
//! presets. It never talks to the notifier directly: it emits an
//! [`Event::Notify`] and the application forwards it.

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Canned notifications mirroring the flash messages of a typical
/// sign-in and expense-tracking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Registered,
    UsernameTaken,
    InvalidCredentials,
    LoggedOut,
    MissingFields,
    InvalidAmount,
    ExpenseAdded,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Registered,
        Preset::UsernameTaken,
        Preset::InvalidCredentials,
        Preset::LoggedOut,
        Preset::MissingFields,
        Preset::InvalidAmount,
        Preset::ExpenseAdded,
    ];

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Preset::Registered => "Registration successful! Please log in.",
            Preset::UsernameTaken => "Username already exists. Please choose a different one.",
            Preset::InvalidCredentials => "Invalid credentials. Please try again.",
            Preset::LoggedOut => "You have been logged out.",
            Preset::MissingFields => "Please fill in all fields.",
            Preset::InvalidAmount => "Amount should be a valid number.",
            Preset::ExpenseAdded => "Expense added successfully!",
        }
    }

    #[must_use]
    pub fn category(self) -> &'static str {
        match self {
            Preset::Registered | Preset::ExpenseAdded => "success",
            Preset::UsernameTaken
            | Preset::InvalidCredentials
            | Preset::MissingFields
            | Preset::InvalidAmount => "danger",
            Preset::LoggedOut => "info",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Preset::Registered => "Registered",
            Preset::UsernameTaken => "Username taken",
            Preset::InvalidCredentials => "Bad login",
            Preset::LoggedOut => "Logged out",
            Preset::MissingFields => "Missing fields",
            Preset::InvalidAmount => "Bad amount",
            Preset::ExpenseAdded => "Expense added",
        }
    }
}

/// Draft inputs of the page.
#[derive(Debug, Clone, Default)]
pub struct State {
    message: String,
    category: String,
}

impl State {
    #[must_use]
    pub fn new(default_category: impl Into<String>) -> Self {
        Self {
            message: String::new(),
            category: default_category.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Messages emitted by the page widgets.
#[derive(Debug, Clone)]
pub enum Message {
    MessageEdited(String),
    CategoryEdited(String),
    Submit,
    Preset(Preset),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Notify { message: String, category: String },
}

/// Process a page message and return the corresponding event.
///
/// Submitting does not validate: an empty message or category is forwarded
/// as is. The message draft is cleared, the category is kept.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::MessageEdited(value) => {
            state.message = value;
            Event::None
        }
        Message::CategoryEdited(value) => {
            state.category = value;
            Event::None
        }
        Message::Submit => Event::Notify {
            message: std::mem::take(&mut state.message),
            category: state.category.clone(),
        },
        Message::Preset(preset) => Event::Notify {
            message: preset.message().to_string(),
            category: preset.category().to_string(),
        },
    }
}

/// Renders the page.
pub fn view(state: &State) -> Element<'_, Message> {
    let title = Text::new("Notifications").size(typography::TITLE_MD);

    let message_input = text_input("Message", &state.message)
        .on_input(Message::MessageEdited)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    let category_input = text_input("Category", &state.category)
        .on_input(Message::CategoryEdited)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fixed(sizing::CATEGORY_INPUT_WIDTH));

    let submit = button(Text::new("Notify").size(typography::BODY))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .style(button::primary);

    let form = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(message_input)
        .push(category_input)
        .push(submit);

    let presets = Preset::ALL.into_iter().fold(
        Row::new().spacing(spacing::XS),
        |row, preset| {
            row.push(
                button(Text::new(preset.label()).size(typography::CAPTION))
                    .on_press(Message::Preset(preset))
                    .padding([spacing::XXS, spacing::XS])
                    .style(button::secondary),
            )
        },
    );

    let hint = Text::new("Unknown categories are accepted and shown with the base style.")
        .size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::PAGE_MAX_WIDTH)
        .push(title)
        .push(form)
        .push(presets.wrap())
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_update_drafts_without_event() {
        let mut state = State::new("success");
        assert_eq!(
            update(&mut state, Message::MessageEdited("hello".into())),
            Event::None
        );
        assert_eq!(
            update(&mut state, Message::CategoryEdited("info".into())),
            Event::None
        );
        assert_eq!(state.message(), "hello");
        assert_eq!(state.category(), "info");
    }

    #[test]
    fn submit_emits_draft_and_clears_message() {
        let mut state = State::new("warning");
        update(&mut state, Message::MessageEdited("disk almost full".into()));

        let event = update(&mut state, Message::Submit);
        assert_eq!(
            event,
            Event::Notify {
                message: "disk almost full".into(),
                category: "warning".into(),
            }
        );
        assert_eq!(state.message(), "");
        assert_eq!(state.category(), "warning");
    }

    #[test]
    fn submit_forwards_empty_inputs() {
        let mut state = State::new("");
        let event = update(&mut state, Message::Submit);
        assert_eq!(
            event,
            Event::Notify {
                message: String::new(),
                category: String::new(),
            }
        );
    }

    #[test]
    fn presets_use_flash_categories() {
        assert_eq!(Preset::ExpenseAdded.category(), "success");
        assert_eq!(Preset::UsernameTaken.category(), "danger");
        assert_eq!(Preset::LoggedOut.category(), "info");
        assert_eq!(Preset::InvalidAmount.category(), "danger");
    }

    #[test]
    fn invalid_amount_preset_is_offered() {
        assert!(Preset::ALL.contains(&Preset::InvalidAmount));

        let mut state = State::default();
        let event = update(&mut state, Message::Preset(Preset::InvalidAmount));
        assert_eq!(
            event,
            Event::Notify {
                message: "Amount should be a valid number.".into(),
                category: "danger".into(),
            }
        );
    }

    #[test]
    fn preset_event_carries_its_text() {
        let mut state = State::default();
        let event = update(&mut state, Message::Preset(Preset::LoggedOut));
        assert_eq!(
            event,
            Event::Notify {
                message: "You have been logged out.".into(),
                category: "info".into(),
            }
        );
    }
}
