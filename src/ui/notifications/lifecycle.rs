// SPDX-License-Identifier: MPL-2.0
//! Fixed timing of a notification's life.
//!
//! A notification stays fully visible for [`HIDE_DELAY`], then carries the
//! hidden state for [`REMOVE_DELAY`] while the toast fades out, then is
//! detached. Both delays are constants and cannot be overridden.

use std::time::Duration;

/// Delay between mounting a notification and applying the hidden state.
pub const HIDE_DELAY: Duration = Duration::from_millis(3000);

/// Delay between the hidden state and removal from the page.
pub const REMOVE_DELAY: Duration = Duration::from_millis(500);

/// Full lifetime from creation to removal.
pub const TOTAL_LIFETIME: Duration = HIDE_DELAY.saturating_add(REMOVE_DELAY);

/// Where a notification stands in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mounted and fully visible.
    Visible,
    /// Mounted with the hidden state applied; the fade-out is running.
    Hidden,
    /// Detached and discarded. Terminal.
    Removed,
}

impl Phase {
    /// Returns the phase of a notification that was created `age` ago.
    #[must_use]
    pub fn at(age: Duration) -> Self {
        if age < HIDE_DELAY {
            Phase::Visible
        } else if age < TOTAL_LIFETIME {
            Phase::Hidden
        } else {
            Phase::Removed
        }
    }
}

/// Progress of the fade-out, from `0.0` (just hidden) to `1.0` (about to be removed).
#[must_use]
pub fn fade_progress(since_hidden: Duration) -> f32 {
    let progress = since_hidden.as_secs_f32() / REMOVE_DELAY.as_secs_f32();
    progress.clamp(0.0, 1.0)
}

const _: () = {
    assert!(HIDE_DELAY.as_millis() == 3000);
    assert!(REMOVE_DELAY.as_millis() == 500);
    assert!(TOTAL_LIFETIME.as_millis() == 3500);
};
