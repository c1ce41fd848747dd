//! `dburl version` command - Display version information.

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub fn run() -> CliResult<()> {
    output::header("dburl");

    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);
    kv(
        "Schemes",
        &dburl_core::registry::registered_schemes().len().to_string(),
    );

    output::newline();
    output::dim("Set DBURL_DEBUG=1 to log how URLs are parsed.");

    Ok(())
}
