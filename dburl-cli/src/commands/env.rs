//! `dburl env` command - Parse the URL held in an environment variable.

use crate::cli::{EnvArgs, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output;
use dburl_core::EnvConfig;

/// Run the env command
pub fn run(args: EnvArgs, format: OutputFormat) -> CliResult<()> {
    let mut lookup = EnvConfig::new().env(&args.var);
    if let Some(default) = &args.default {
        lookup = lookup.default_url(default);
    }

    match dburl_core::config(&lookup, &args.settings.to_settings())? {
        Some(config) => output::config(&config, format),
        None => Err(CliError::NotConfigured(args.var)),
    }
}
