//! Error types for URL parsing.

use thiserror::Error;

/// Error returned by a post-processing hook.
pub type HookError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for URL parsing operations.
pub type DbUrlResult<T> = Result<T, DbUrlError>;

/// Errors that can occur while turning a URL into a configuration.
#[derive(Error, Debug)]
pub enum DbUrlError {
    /// The string could not be split into its URL components.
    #[error(
        "This string is not a valid url, possibly because some of its parts \
         is not properly percent-encoded: {reason}"
    )]
    UrlMalformed {
        /// Which part of the URL grammar was violated.
        reason: String,
    },

    /// No backend is registered for the scheme.
    #[error(
        "Scheme '{scheme}://' is unknown. Did you forget to register custom backend? \
         Following schemes have registered backends: {}.",
        .registered.join(", ")
    )]
    SchemeUnknown {
        /// The scheme token as it appeared in the URL.
        scheme: String,
        /// Registered scheme tokens, sorted.
        registered: Vec<String>,
    },

    /// A post-processing hook rejected the assembled configuration.
    #[error("{source}")]
    Hook {
        /// Backend identifier whose hook failed.
        backend: String,
        /// The error raised by the hook.
        #[source]
        source: HookError,
    },
}

impl DbUrlError {
    /// Create a malformed-URL error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::UrlMalformed {
            reason: reason.into(),
        }
    }

    /// Check if this is a malformed-URL error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::UrlMalformed { .. })
    }

    /// Check if this is an unknown-scheme error.
    pub fn is_unknown_scheme(&self) -> bool {
        matches!(self, Self::SchemeUnknown { .. })
    }
}
