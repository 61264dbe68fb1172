//! End-to-end glossary generation.
//!
//! One synchronous pass: discover the term documents, extract their
//! metadata, group and render, then overwrite the output file. A skipped
//! document is logged and recorded; any I/O failure aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::error::GlossaryError;
use crate::glossary::discovery::discover_documents;
use crate::glossary::entry::{GlossaryEntry, SkippedDocument, extract_entry};
use crate::glossary::frontmatter::FrontMatterParser;
use crate::glossary::group::group_entries;
use crate::glossary::render::render_groups;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of entries written to the page.
    pub entry_count: usize,
    /// Documents left out, in discovery order.
    pub skipped: Vec<SkippedDocument>,
    /// Section letters in page order.
    pub letters: Vec<String>,
    /// File that was written.
    pub output_file: PathBuf,
}

/// Entries and skips collected from a term directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedEntries {
    /// Valid entries in discovery order.
    pub entries: Vec<GlossaryEntry>,
    /// Documents that failed validation.
    pub skipped: Vec<SkippedDocument>,
}

/// Reads every term document in `dir` and validates its metadata.
///
/// Each skipped document gets one warning naming the file.
///
/// # Errors
///
/// Returns [`GlossaryError::DirectoryUnavailable`] if `dir` cannot be listed
/// and [`GlossaryError::DocumentUnreadable`] if a document cannot be read.
/// Bytes that are not valid UTF-8 are decoded lossily, not treated as an
/// error.
pub fn collect_entries(
    dir: &Path,
    parser: &dyn FrontMatterParser,
) -> Result<CollectedEntries, GlossaryError> {
    let mut collected = CollectedEntries::default();

    for file in discover_documents(dir)? {
        let path = dir.join(&file);
        let bytes = fs::read(&path).map_err(|source| GlossaryError::DocumentUnreadable {
            path: path.clone(),
            source,
        })?;
        // Invalid UTF-8 is replaced with U+FFFD rather than failing the run.
        let raw = String::from_utf8_lossy(&bytes);

        match extract_entry(&file, &raw, parser) {
            Ok(entry) => {
                debug!(file = %file, slug = %entry.slug, "collected term");
                collected.entries.push(entry);
            }
            Err(reason) => {
                warn!("Skipping {file}: {reason}");
                collected.skipped.push(SkippedDocument { file, reason });
            }
        }
    }

    Ok(collected)
}

/// Generates the glossary page described by `config`.
///
/// The output file is overwritten unconditionally. Its parent directory must
/// already exist.
///
/// # Errors
///
/// Returns an error if the term directory cannot be listed, a document cannot
/// be read, or the output cannot be written. Nothing is written unless every
/// document was read.
pub fn generate(
    config: &GeneratorConfig,
    parser: &dyn FrontMatterParser,
) -> Result<GenerationReport, GlossaryError> {
    info!(terms_dir = %config.terms_dir.display(), "scanning term documents");
    let CollectedEntries { entries, skipped } = collect_entries(&config.terms_dir, parser)?;

    let entry_count = entries.len();
    let groups = group_entries(entries);
    let page = render_groups(&groups);

    fs::write(&config.output_file, page).map_err(|source| GlossaryError::WriteFailure {
        path: config.output_file.clone(),
        source,
    })?;
    info!(
        output = %config.output_file.display(),
        entries = entry_count,
        skipped = skipped.len(),
        "wrote glossary page"
    );

    Ok(GenerationReport {
        entry_count,
        skipped,
        letters: groups.into_iter().map(|g| g.letter).collect(),
        output_file: config.output_file.clone(),
    })
}
