//! The configuration record and caller settings.

use crate::options::{Options, merge_query};
use crate::parser::{BackendFamily, ConnectionUrl};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Port of a configuration record.
///
/// Backends disagree on the port's type: most accept an integer, some
/// require a string. An unset port serializes as an empty string.
///
/// `Unset` and `Text("")` serialize identically, and an empty string
/// deserializes as `Unset`. Compare ports with [`Port::to_string`] when the
/// difference must not matter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Port {
    /// No port in the URL.
    #[default]
    Unset,
    /// Numeric port.
    Number(u16),
    /// Port in string form.
    Text(String),
}

impl Port {
    /// Get the numeric port, if any.
    pub fn as_number(&self) -> Option<u16> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.parse().ok(),
            Self::Unset => None,
        }
    }

    /// Check if the port is unset.
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Convert to the string form (`""` when unset).
    pub fn stringify(&self) -> Self {
        Self::Text(self.to_string())
    }
}

impl From<Option<u16>> for Port {
    fn from(port: Option<u16>) -> Self {
        port.map_or(Self::Unset, Self::Number)
    }
}

impl From<u16> for Port {
    fn from(port: u16) -> Self {
        Self::Number(port)
    }
}

impl From<&str> for Port {
    fn from(port: &str) -> Self {
        Self::Text(port.to_string())
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => Ok(()),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Port {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unset => serializer.serialize_str(""),
            Self::Number(n) => serializer.serialize_u16(*n),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Port {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u16),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self::Number(n),
            Raw::Text(s) if s.is_empty() => Self::Unset,
            Raw::Text(s) => Self::Text(s),
        })
    }
}

/// Test-database settings attached to a record under `TEST`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct TestSettings {
    /// Name of the test database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Character set for the test database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// Collation for the test database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collation: Option<String>,
    /// Alias this database mirrors during tests.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<String>,
    /// Template database to create the test database from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Whether to run migrations when creating the test database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate: Option<bool>,
    /// Whether to serialize the database state for test isolation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serialize: Option<bool>,
    /// Aliases the test database depends on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

impl TestSettings {
    /// Create empty test settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the test database name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the test database charset.
    pub fn charset(mut self, charset: impl Into<String>) -> Self {
        self.charset = Some(charset.into());
        self
    }

    /// Set the test database template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Enable or disable migrations for the test database.
    pub fn migrate(mut self, migrate: bool) -> Self {
        self.migrate = Some(migrate);
        self
    }
}

/// A database configuration record.
///
/// Every connection field is always present; unset strings are empty. The
/// optional fields only appear when the caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct DatabaseConfig {
    /// Backend identifier.
    pub engine: String,
    /// Database name or file path.
    pub name: String,
    /// Username.
    pub user: String,
    /// Password.
    pub password: String,
    /// Host or socket directory.
    pub host: String,
    /// Port.
    pub port: Port,
    /// Backend-specific options.
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    /// Connection lifetime in seconds (`0` closes after each request).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conn_max_age: Option<u64>,
    /// Check connection health before reuse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conn_health_checks: Option<bool>,
    /// Disable server-side cursors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_server_side_cursors: Option<bool>,
    /// Wrap each request in a transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atomic_requests: Option<bool>,
    /// Enable autocommit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocommit: Option<bool>,
    /// Time zone for this connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Test-database settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<TestSettings>,
}

impl DatabaseConfig {
    /// Create an empty record for a backend.
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
            name: String::new(),
            user: String::new(),
            password: String::new(),
            host: String::new(),
            port: Port::Unset,
            options: Options::new(),
            conn_max_age: None,
            conn_health_checks: None,
            disable_server_side_cursors: None,
            atomic_requests: None,
            autocommit: None,
            time_zone: None,
            test: None,
        }
    }
}

/// Caller overrides applied on top of the URL-derived record.
///
/// Every field set here replaces the URL-derived value, except `options`,
/// which is merged key by key into the query-string options.
///
/// # Examples
///
/// ```rust
/// use dburl_core::Settings;
///
/// let settings = Settings::new()
///     .conn_max_age(600)
///     .option("connect_timeout", "10")
///     .ssl_require(true);
///
/// assert_eq!(settings.options.get_str("sslmode"), Some("require"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Replacement backend identifier.
    pub engine: Option<String>,
    /// Replacement database name.
    pub name: Option<String>,
    /// Replacement username.
    pub user: Option<String>,
    /// Replacement password.
    pub password: Option<String>,
    /// Replacement host.
    pub host: Option<String>,
    /// Replacement port.
    pub port: Option<Port>,
    /// Options merged over the query-string options.
    pub options: Options,
    /// Connection lifetime in seconds.
    pub conn_max_age: Option<u64>,
    /// Check connection health before reuse.
    pub conn_health_checks: Option<bool>,
    /// Disable server-side cursors.
    pub disable_server_side_cursors: Option<bool>,
    /// Wrap each request in a transaction.
    pub atomic_requests: Option<bool>,
    /// Enable autocommit.
    pub autocommit: Option<bool>,
    /// Time zone for this connection.
    pub time_zone: Option<String>,
    /// Test-database settings.
    pub test: Option<TestSettings>,
}

impl Settings {
    /// Create empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the backend identifier.
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Override the database name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the username.
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Override the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Override the host.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Override the port.
    pub fn port(mut self, port: impl Into<Port>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set a single option.
    pub fn option(
        mut self,
        key: impl Into<String>,
        value: impl Into<crate::options::OptionValue>,
    ) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Merge a set of options.
    pub fn options(mut self, options: Options) -> Self {
        self.options.merge(&options);
        self
    }

    /// Set the connection lifetime in seconds.
    pub fn conn_max_age(mut self, seconds: u64) -> Self {
        self.conn_max_age = Some(seconds);
        self
    }

    /// Enable or disable connection health checks.
    pub fn conn_health_checks(mut self, enabled: bool) -> Self {
        self.conn_health_checks = Some(enabled);
        self
    }

    /// Enable or disable server-side cursors.
    pub fn disable_server_side_cursors(mut self, disabled: bool) -> Self {
        self.disable_server_side_cursors = Some(disabled);
        self
    }

    /// Wrap each request in a transaction.
    pub fn atomic_requests(mut self, enabled: bool) -> Self {
        self.atomic_requests = Some(enabled);
        self
    }

    /// Enable or disable autocommit.
    pub fn autocommit(mut self, enabled: bool) -> Self {
        self.autocommit = Some(enabled);
        self
    }

    /// Set the connection time zone.
    pub fn time_zone(mut self, tz: impl Into<String>) -> Self {
        self.time_zone = Some(tz.into());
        self
    }

    /// Attach test-database settings.
    pub fn test(mut self, test: TestSettings) -> Self {
        self.test = Some(test);
        self
    }

    /// Require SSL by setting the `sslmode=require` option.
    ///
    /// Passing `false` leaves the options untouched.
    pub fn ssl_require(self, required: bool) -> Self {
        if required {
            self.option("sslmode", "require")
        } else {
            self
        }
    }

    /// Apply the top-level overrides to a record. Options are handled by
    /// [`assemble`].
    fn apply_to(&self, config: &mut DatabaseConfig) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        fn set_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                *target = value.clone();
            }
        }

        set(&mut config.engine, &self.engine);
        set(&mut config.name, &self.name);
        set(&mut config.user, &self.user);
        set(&mut config.password, &self.password);
        set(&mut config.host, &self.host);
        set(&mut config.port, &self.port);
        set_opt(&mut config.conn_max_age, &self.conn_max_age);
        set_opt(&mut config.conn_health_checks, &self.conn_health_checks);
        set_opt(
            &mut config.disable_server_side_cursors,
            &self.disable_server_side_cursors,
        );
        set_opt(&mut config.atomic_requests, &self.atomic_requests);
        set_opt(&mut config.autocommit, &self.autocommit);
        set_opt(&mut config.time_zone, &self.time_zone);
        set_opt(&mut config.test, &self.test);
    }
}

/// Assemble a record from a decomposed URL, before any hook runs.
///
/// File-based backends only carry a name; network backends carry
/// credentials, host and port as well. Caller settings are applied last.
pub fn assemble(
    url: &ConnectionUrl,
    engine: &str,
    family: BackendFamily,
    settings: &Settings,
) -> DatabaseConfig {
    let mut config = DatabaseConfig::new(engine);
    config.name = url.database_name().to_string();

    if family == BackendFamily::Network {
        config.user = url.user.clone().unwrap_or_default();
        config.password = url.password.clone().unwrap_or_default();
        config.host = url.host.clone().unwrap_or_default();
        config.port = Port::from(url.port);
    }

    config.options = merge_query(&url.query, &settings.options);
    settings.apply_to(&mut config);

    debug!(
        engine = %config.engine,
        host = %config.host,
        database = %config.name,
        options = config.options.len(),
        "Configuration assembled"
    );

    config
}
