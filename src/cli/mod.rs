//! Command-line interface
//!
//! Argument parsing and the single `generate` command.

pub mod args;
pub mod generate;

pub use args::Cli;
