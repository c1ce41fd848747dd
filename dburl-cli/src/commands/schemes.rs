//! `dburl schemes` command - List registered URL schemes.

use crate::cli::OutputFormat;
use crate::error::CliResult;
use crate::output::{self, list_item};
use serde::Serialize;

#[derive(Serialize)]
struct SchemeEntry<'a> {
    scheme: &'a str,
    backend: &'a str,
    family: &'static str,
    hook: bool,
}

#[derive(Serialize)]
struct SchemeTable<'a> {
    schemes: Vec<SchemeEntry<'a>>,
}

/// Run the schemes command
pub fn run(format: OutputFormat) -> CliResult<()> {
    let registry = dburl_core::registry::snapshot();
    let schemes: Vec<SchemeEntry<'_>> = registry
        .iter()
        .map(|(scheme, engine)| SchemeEntry {
            scheme,
            backend: engine.backend(),
            family: engine.backend_family().name(),
            hook: engine.has_hook(),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&schemes)?),
        OutputFormat::Toml => print!("{}", toml::to_string_pretty(&SchemeTable { schemes })?),
        OutputFormat::Pretty => {
            output::header("Registered schemes");
            for entry in &schemes {
                let mut line = format!("{}:// → {}", entry.scheme, entry.backend);
                if entry.family == "file" {
                    line.push_str(" (file)");
                }
                list_item(&line);
            }
            output::newline();
        }
    }

    Ok(())
}
