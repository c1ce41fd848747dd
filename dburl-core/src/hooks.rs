//! Built-in post-processing hooks.
//!
//! A hook runs once on the fully assembled record and may change any field.
//! The built-in backends use these to match what their drivers expect.

use crate::config::DatabaseConfig;
use crate::error::HookError;
use crate::options::Options;
use crate::parser::MEMORY_PATH;

/// Result of running a post-processing hook.
pub type HookResult = Result<(), HookError>;

/// Use an in-memory database when no path was given.
pub fn default_to_in_memory_db(config: &mut DatabaseConfig) -> HookResult {
    if config.name.is_empty() {
        config.name = MEMORY_PATH.to_string();
    }
    Ok(())
}

/// Convert the port to its string form; an unset port becomes `""`.
pub fn stringify_port(config: &mut DatabaseConfig) -> HookResult {
    config.port = config.port.stringify();
    Ok(())
}

/// Move the `ssl-ca` option into a nested `ssl = { ca = ... }` option.
pub fn apply_ssl_ca(config: &mut DatabaseConfig) -> HookResult {
    if let Some(ca) = config.options.remove("ssl-ca") {
        if !ca.is_blank() {
            config
                .options
                .insert("ssl", Options::new().with("ca", ca));
        }
    }
    Ok(())
}

/// Turn the `currentSchema` option into a `search_path` startup option.
pub fn apply_current_schema(config: &mut DatabaseConfig) -> HookResult {
    if let Some(schema) = config.options.remove("currentSchema") {
        if !schema.is_blank() {
            config
                .options
                .insert("options", format!("-c search_path={}", schema));
        }
    }
    Ok(())
}
