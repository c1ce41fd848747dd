//! `dburl parse` command - Parse a URL given on the command line.

use crate::cli::{OutputFormat, ParseArgs};
use crate::error::CliResult;
use crate::output;
use tracing::debug;

/// Run the parse command
pub fn run(args: ParseArgs, format: OutputFormat) -> CliResult<()> {
    let settings = args.settings.to_settings();
    debug!(url_len = args.url.len(), "Parsing URL from command line");

    let config = dburl_core::parse_with(&args.url, &settings)?;
    output::config(&config, format)
}
