// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.
//!
//! Notification delays are not listed here: they are fixed in
//! [`crate::ui::notifications::lifecycle`] and cannot be configured.

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default interval between ticks while notifications are pending (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Category pre-filled in the page's category field.
pub const DEFAULT_CATEGORY: &str = "success";

const _: () = {
    assert!(MIN_TICK_INTERVAL_MS <= DEFAULT_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
};
