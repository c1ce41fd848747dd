//! dburl CLI - Inspect database URLs from the command line.
//!
//! Parses a URL given on the command line or read from an environment
//! variable and prints the resulting configuration record.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
