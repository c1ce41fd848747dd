//! CLI command implementations.

pub mod env;
pub mod parse;
pub mod schemes;
pub mod version;
