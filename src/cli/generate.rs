//! Generate command handler.

use crate::cli::args::Cli;
use crate::error::GlossaryError;
use crate::glossary::{GenerationReport, YamlFrontMatter, generate};

/// Execute a generation run for the parsed arguments.
///
/// Prints the summary line unless `--quiet` was given. Skipped documents are
/// reported through the log as they are encountered.
///
/// # Errors
///
/// Returns an error if the term directory cannot be listed, a document cannot
/// be read, or the output cannot be written.
pub fn run(cli: &Cli) -> Result<GenerationReport, GlossaryError> {
    let config = cli.generator_config();
    let report = generate(&config, &YamlFrontMatter)?;

    if !cli.quiet {
        println!("{}", summary_line(&config.output_name(), report.entry_count));
    }

    Ok(report)
}

/// Operator summary, e.g. `glossary.mdx generated with 12 entries`.
#[must_use]
pub fn summary_line(output_name: &str, entry_count: usize) -> String {
    format!("{output_name} generated with {entry_count} entries")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        assert_eq!(
            summary_line("glossary.mdx", 2),
            "glossary.mdx generated with 2 entries"
        );
        assert_eq!(
            summary_line("glossary.mdx", 0),
            "glossary.mdx generated with 0 entries"
        );
    }
}
