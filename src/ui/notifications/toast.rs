// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering mounted notifications.
//!
//! The notifier only toggles classes; this module supplies the matching
//! styles. Every toast gets the base card style, a known category adds a
//! colored accent, and the hidden class fades the card out over the removal
//! window.

use super::notification::{Category, Notification};
use super::notifier::{Message, Notifier};
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Shadow, Theme};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Corner of the window where toasts are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Anchor {
    fn horizontal(self) -> alignment::Horizontal {
        match self {
            Anchor::TopLeft | Anchor::BottomLeft => alignment::Horizontal::Left,
            Anchor::TopRight | Anchor::BottomRight => alignment::Horizontal::Right,
        }
    }

    fn vertical(self) -> alignment::Vertical {
        match self {
            Anchor::TopLeft | Anchor::TopRight => alignment::Vertical::Top,
            Anchor::BottomLeft | Anchor::BottomRight => alignment::Vertical::Bottom,
        }
    }
}

/// Returns the accent color of the first class in `category` with a known style.
///
/// Each class is matched exactly, like a class selector. A tag with no styled
/// class gets `None` and renders with the base style only.
#[must_use]
pub fn category_accent(category: &Category) -> Option<Color> {
    category.classes().find_map(class_accent)
}

fn class_accent(class: &str) -> Option<Color> {
    match class {
        "success" => Some(palette::SUCCESS_500),
        "info" => Some(palette::INFO_500),
        "warning" => Some(palette::WARNING_500),
        "error" | "danger" => Some(palette::ERROR_500),
        _ => None,
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification as it looks at `now`.
    pub fn view(notification: &Notification, now: Instant) -> Element<'_, Message> {
        let accent = category_accent(notification.category());
        let alpha = 1.0 - notification.fade_progress(now);

        // Text widgets never interpret their content, so the message stays plain text.
        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(with_alpha(theme.palette().text, alpha)),
            });

        Container::new(message_widget)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders the toast overlay with all mounted notifications, in mount
    /// order, stacked at `anchor`.
    pub fn view_overlay(notifier: &Notifier, anchor: Anchor) -> Element<'_, Message> {
        let now = notifier.now().unwrap_or_else(Instant::now);
        let toasts: Vec<Element<'_, Message>> = notifier
            .notifications()
            .map(|notification| Self::view(notification, now))
            .collect();

        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(anchor.horizontal());

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(anchor.horizontal())
            .align_y(anchor.vertical())
            .padding(spacing::MD)
            .into()
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
///
/// `accent` is the category modifier (if any) and `alpha` the remaining
/// opacity from the hidden-state fade.
fn toast_container_style(theme: &Theme, accent: Option<Color>, alpha: f32) -> container::Style {
    let extended = theme.extended_palette();
    let border_color = accent.unwrap_or(extended.background.strong.color);
    let border_width = if accent.is_some() {
        border::WIDTH_MD
    } else {
        border::WIDTH_SM
    };

    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            extended.background.base.color,
            alpha,
        ))),
        border: iced::Border {
            color: with_alpha(border_color, alpha),
            width: border_width,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: with_alpha(shadow::MD.color, alpha),
            ..shadow::MD
        },
        text_color: Some(with_alpha(theme.palette().text, alpha)),
        ..Default::default()
    }
}
