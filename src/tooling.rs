//! Tooling Layer
//!
//! Command-line surface over the extraction pipeline.

pub mod cli;
pub mod format;

pub use cli::{Cli, CliContext, Commands};
