//! Logging bootstrap for applications using dburl.
//!
//! The engine logs through `tracing`; this module installs a subscriber when
//! asked to via environment variables.
//!
//! # Environment Variables
//!
//! - `DBURL_DEBUG=true` or `DBURL_DEBUG=1` - Enable debug logging
//! - `DBURL_LOG_LEVEL=debug|info|warn|error|trace` - Set specific log level
//! - `DBURL_LOG_FORMAT=json|pretty|compact` - Set output format (default: json)
//!
//! ```rust,no_run
//! use dburl_core::logging;
//!
//! // Call once at startup, before reading the database URL.
//! logging::init();
//! ```

use std::env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Check if debug logging is enabled via `DBURL_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    env::var("DBURL_DEBUG")
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Get the configured log level from `DBURL_LOG_LEVEL`.
///
/// Defaults to "debug" if `DBURL_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    let fallback = if is_debug_enabled() { "debug" } else { "warn" };
    match env::var("DBURL_LOG_LEVEL") {
        Ok(level) => level_from_str(&level).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

fn level_from_str(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Get the configured log format from `DBURL_LOG_FORMAT`.
pub fn get_log_format() -> &'static str {
    env::var("DBURL_LOG_FORMAT")
        .map(|f| match f.to_lowercase().as_str() {
            "pretty" => "pretty",
            "compact" => "compact",
            _ => "json",
        })
        .unwrap_or("json")
}

/// Initialize logging. Subsequent calls are no-ops.
///
/// Nothing is installed unless `DBURL_DEBUG` or `DBURL_LOG_LEVEL` is set, or
/// when the `tracing-subscriber` feature is disabled.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && env::var("DBURL_LOG_LEVEL").is_err() {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "dburl={},dburl_core={},dburl_cli={}",
                level, level, level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match get_log_format() {
                "json" => registry.with(fmt::layer().json()).try_init(),
                "compact" => registry.with(fmt::layer().compact()).try_init(),
                _ => registry.with(fmt::layer().pretty()).try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level = level, format = get_log_format(), "dburl logging initialized");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!(level_from_str("TRACE"), Some("trace"));
        assert_eq!(level_from_str("warn"), Some("warn"));
        assert_eq!(level_from_str("verbose"), None);
    }

    #[test]
    fn test_debug_disabled_by_default() {
        // SAFETY: no other test in this crate touches DBURL_DEBUG.
        unsafe {
            env::remove_var("DBURL_DEBUG");
        }
        assert!(!is_debug_enabled());
    }
}
