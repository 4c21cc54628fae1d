// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Follows the Elm-style "state down, messages up" pattern used by Iced.
//!
//! - [`notifications`] - Transient notification banners and their lifecycle
//! - [`page`] - Demo page used to raise notifications
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod page;
pub mod theming;
