//! Error types for `glossgen`
//!
//! Fatal failures surface as [`GlossaryError`]; per-document problems are
//! recovered locally and recorded as [`SkipReason`] in the run report.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `glossgen` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// I/O error (directory missing, unreadable document, write failure)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Fatal errors that abort a generation run.
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// The source directory could not be listed.
    #[error("cannot list term directory {path}: {source}")]
    DirectoryUnavailable {
        /// Directory that was scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A discovered term document could not be read.
    #[error("cannot read term document {path}: {source}")]
    DocumentUnreadable {
        /// Document that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The generated page could not be written.
    #[error("cannot write {path}: {source}")]
    WriteFailure {
        /// Output file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl GlossaryError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::DirectoryUnavailable { .. }
            | Self::DocumentUnreadable { .. }
            | Self::WriteFailure { .. } => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Front Matter Errors
// ============================================================================

/// Failure to parse a document's front-matter block.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    /// The block is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The block parsed, but not to a key-value mapping.
    #[error("front matter is not a mapping")]
    NotAMapping,
}

// ============================================================================
// Recoverable Skips
// ============================================================================

/// Why a term document was left out of the glossary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `title`, `description`, or both are absent, empty, or not strings.
    MissingMetadata {
        /// Names of the fields that failed the check
        fields: Vec<&'static str>,
    },

    /// The front-matter block could not be parsed.
    InvalidFrontMatter {
        /// Parser message
        message: String,
    },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMetadata { fields } => {
                write!(f, "missing {}", fields.join(" and "))
            }
            Self::InvalidFrontMatter { message } => {
                write!(f, "invalid front matter ({message})")
            }
        }
    }
}
