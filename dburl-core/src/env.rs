//! Reading the database URL from the environment.

use crate::config::{DatabaseConfig, Settings};
use crate::error::DbUrlResult;
use crate::registry::{self, SchemeRegistry};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Default environment variable holding the database URL.
pub const DEFAULT_ENV: &str = "DATABASE_URL";

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get an environment variable value.
    fn get(&self, name: &str) -> Option<String>;

    /// Check if a variable exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Default environment source using std::env.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Environment source backed by a HashMap.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    /// Create a new map-based environment source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Where [`config`] looks for the URL and what it falls back to.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    /// Name of the environment variable.
    pub env: String,
    /// URL used when the variable is unset or empty.
    pub default: Option<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            env: DEFAULT_ENV.to_string(),
            default: None,
        }
    }
}

impl EnvConfig {
    /// Read from `DATABASE_URL` with no fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from a different variable.
    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.env = name.into();
        self
    }

    /// Fall back to this URL.
    pub fn default_url(mut self, url: impl Into<String>) -> Self {
        self.default = Some(url.into());
        self
    }

    /// Resolve the URL from a source: the variable if non-empty, else the default.
    pub fn url_from<S: EnvSource>(&self, source: &S) -> Option<String> {
        source
            .get(&self.env)
            .filter(|value| !value.is_empty())
            .or_else(|| self.default.clone())
            .filter(|value| !value.is_empty())
    }
}

/// Parse the URL in `DATABASE_URL` (or the configured variable) with the
/// global registry.
///
/// Returns `Ok(None)` when neither the variable nor a default is available.
///
/// # Examples
///
/// ```rust
/// use dburl_core::env::{config, EnvConfig};
/// use dburl_core::Settings;
///
/// let lookup = EnvConfig::new()
///     .env("DBURL_DOC_EXAMPLE_URL")
///     .default_url("sqlite://");
/// let db = config(&lookup, &Settings::new()).unwrap().unwrap();
/// assert_eq!(db.name, ":memory:");
/// ```
pub fn config(lookup: &EnvConfig, settings: &Settings) -> DbUrlResult<Option<DatabaseConfig>> {
    config_from(&StdEnvSource, lookup, settings)
}

/// Like [`config`], reading variables from a custom source.
pub fn config_from<S: EnvSource>(
    source: &S,
    lookup: &EnvConfig,
    settings: &Settings,
) -> DbUrlResult<Option<DatabaseConfig>> {
    match resolve_url(source, lookup) {
        Some(url) => registry::parse_with(&url, settings).map(Some),
        None => Ok(None),
    }
}

/// Like [`config_from`], parsing with a specific registry.
pub fn config_with_registry<S: EnvSource>(
    registry: &SchemeRegistry,
    source: &S,
    lookup: &EnvConfig,
    settings: &Settings,
) -> DbUrlResult<Option<DatabaseConfig>> {
    match resolve_url(source, lookup) {
        Some(url) => registry.parse(&url, settings).map(Some),
        None => Ok(None),
    }
}

fn resolve_url<S: EnvSource>(source: &S, lookup: &EnvConfig) -> Option<String> {
    let url = lookup.url_from(source);
    match &url {
        Some(_) => debug!(env = %lookup.env, "Loading database configuration"),
        None if !source.contains(&lookup.env) => warn!(
            env = %lookup.env,
            "No {} environment variable set, and so no databases setup", lookup.env
        ),
        None => warn!(env = %lookup.env, "Environment variable is empty, no databases setup"),
    }
    url
}
