//! Styled terminal output utilities.

use crate::cli::OutputFormat;
use crate::error::CliResult;
use dburl_core::DatabaseConfig;
use owo_colors::OwoColorize;

/// Print a header/title
pub fn header(text: &str) {
    println!();
    println!("{}", text.bold().cyan());
    println!("{}", "─".repeat(text.chars().count()).dimmed());
    println!();
}

/// Print a section header
pub fn section(text: &str) {
    println!("{}", text.bold().white());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", key.dimmed(), value);
}

/// Print an error message
pub fn error(text: &str) {
    eprintln!("{} {}", "✖".red().bold(), text.red());
}

/// Print a list item
pub fn list_item(text: &str) {
    println!("  {} {}", "•".dimmed(), text);
}

/// Print a newline
pub fn newline() {
    println!();
}

/// Print dimmed text
pub fn dim(text: &str) {
    println!("{}", text.dimmed());
}

/// Mask a secret for display, keeping empty values visibly empty.
pub fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "********".to_string()
    }
}

/// Print a configuration record in the requested format.
pub fn config(config: &DatabaseConfig, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Toml => print!("{}", toml::to_string_pretty(config)?),
        OutputFormat::Pretty => pretty_config(config),
    }
    Ok(())
}

fn pretty_config(config: &DatabaseConfig) {
    header("Database configuration");

    kv("ENGINE", &config.engine);
    kv("NAME", &config.name);
    kv("USER", &config.user);
    kv("PASSWORD", &mask(&config.password));
    kv("HOST", &config.host);
    kv("PORT", &config.port.to_string());

    if let Some(age) = config.conn_max_age {
        kv("CONN_MAX_AGE", &age.to_string());
    }
    if let Some(checks) = config.conn_health_checks {
        kv("CONN_HEALTH_CHECKS", &checks.to_string());
    }

    if !config.options.is_empty() {
        newline();
        section("OPTIONS");
        for (key, value) in config.options.iter() {
            kv(key, &value.to_string());
        }
    }

    if let Some(test) = &config.test {
        newline();
        section("TEST");
        if let Some(name) = &test.name {
            kv("NAME", name);
        }
    }
}
