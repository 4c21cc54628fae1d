// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set. Otherwise the filter passed on the command line
//! is used, falling back to [`DEFAULT_FILTER`].

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_FILTER: &str = "info,iced_notifier=debug";

/// Builds the filter from the environment, then `fallback`, then the default.
#[must_use]
pub fn env_filter(fallback: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to stderr.
///
/// Does nothing if a subscriber is already installed. A malformed `fallback`
/// is reported once the subscriber is up.
pub fn init(fallback: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(fallback))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init();

    if let Some(filter) = fallback {
        if let Err(err) = EnvFilter::try_new(filter) {
            tracing::warn!(filter, error = %err, "ignoring malformed --log-level");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes access to RUST_LOG between tests.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn without_rust_log<R>(f: impl FnOnce() -> R) -> R {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let saved = std::env::var_os(EnvFilter::DEFAULT_ENV);
        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        let result = f();
        if let Some(value) = saved {
            std::env::set_var(EnvFilter::DEFAULT_ENV, value);
        }
        result
    }

    #[test]
    fn invalid_fallback_uses_default_filter() {
        let rendered = without_rust_log(|| env_filter(Some("iced_notifier=loud")).to_string());
        assert!(rendered.contains("iced_notifier=debug"), "got {rendered}");
    }

    #[test]
    fn valid_fallback_replaces_default_filter() {
        let rendered = without_rust_log(|| env_filter(Some("warn")).to_string());
        assert!(rendered.contains("warn"), "got {rendered}");
        assert!(!rendered.contains("iced_notifier=debug"), "got {rendered}");
    }

    #[test]
    fn missing_fallback_uses_default_filter() {
        let rendered = without_rust_log(|| env_filter(None).to_string());
        assert!(rendered.contains("iced_notifier=debug"), "got {rendered}");
    }

    #[test]
    fn init_twice_is_harmless() {
        init(Some("warn"));
        init(Some("debug"));
    }
}
