//! CLI argument definitions
//!
//! Clap derive structs for `glossgen` command-line parsing. Every argument
//! has a default, so a bare `glossgen` regenerates the site glossary from
//! `terms/` into `resources/glossary.mdx`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{DEFAULT_OUTPUT_FILE, DEFAULT_TERMS_DIR, GeneratorConfig};
use crate::observability::LogFormat;

/// Generate the glossary navigation page from term documents.
#[derive(Parser, Debug)]
#[command(name = "glossgen", author, version, about)]
pub struct Cli {
    /// Directory containing the `*.mdx` term documents.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TERMS_DIR)]
    pub terms: PathBuf,

    /// Glossary page to overwrite.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human")]
    pub log_format: LogFormat,
}

impl Cli {
    /// Generator paths selected by the arguments.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new(self.terms.clone(), self.output.clone())
    }
}

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}
