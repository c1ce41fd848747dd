//! # dburl
//!
//! Configure a database connection from one URL.
//!
//! dburl provides:
//! - A scheme registry mapping URL schemes to backend identifiers, with
//!   built-in entries for PostgreSQL, MySQL, SQLite, Oracle, SQL Server and
//!   friends
//! - Decomposition of connection URLs, including socket-path hosts, IPv6
//!   hosts and the relative/absolute path forms of file databases
//! - Query-string options merged with caller overrides
//! - Backend post-processing hooks
//!
//! ## Quick Start
//!
//! ```rust
//! use dburl::prelude::*;
//!
//! // Reads DBURL_QUICKSTART_URL, falling back to an in-memory SQLite database.
//! let lookup = EnvConfig::new()
//!     .env("DBURL_QUICKSTART_URL")
//!     .default_url("sqlite://");
//! let database = config(&lookup, &Settings::new().conn_max_age(600))
//!     .unwrap()
//!     .expect("a default URL was given");
//!
//! assert_eq!(database.engine, "django.db.backends.sqlite3");
//! assert_eq!(database.conn_max_age, Some(600));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub use dburl_core::*;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use dburl_core::{
        DatabaseConfig, DbUrlError, EnvConfig, OptionValue, Options, Port, Settings,
        TestSettings, config, parse, parse_with, register, register_hook, register_with_hook,
    };
}
