//! Generator configuration
//!
//! Source and destination paths for a generation run. The defaults are the
//! fixed locations used by the docs site build; the CLI and tests may point
//! the same logic elsewhere.

use std::path::PathBuf;

/// Default directory holding the term documents.
pub const DEFAULT_TERMS_DIR: &str = "terms";

/// Default location of the generated glossary page.
pub const DEFAULT_OUTPUT_FILE: &str = "resources/glossary.mdx";

/// File extension recognized as a term document.
pub const DOCUMENT_EXTENSION: &str = ".mdx";

/// File name that is never treated as a term document.
pub const RESERVED_OUTPUT_NAME: &str = "glossary.mdx";

/// Paths for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory scanned for `*.mdx` term documents.
    pub terms_dir: PathBuf,
    /// File overwritten with the rendered page.
    pub output_file: PathBuf,
}

impl GeneratorConfig {
    /// Creates a config for the given source directory and output file.
    pub fn new(terms_dir: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            terms_dir: terms_dir.into(),
            output_file: output_file.into(),
        }
    }

    /// Display name of the output file, used in the summary line.
    #[must_use]
    pub fn output_name(&self) -> String {
        self.output_file.file_name().map_or_else(
            || self.output_file.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TERMS_DIR, DEFAULT_OUTPUT_FILE)
    }
}
