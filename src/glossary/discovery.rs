//! Term document discovery.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::{DOCUMENT_EXTENSION, RESERVED_OUTPUT_NAME};
use crate::error::GlossaryError;

/// Lists the term documents directly inside `dir`.
///
/// Returns file names (not paths) of regular files ending in `.mdx`,
/// excluding `glossary.mdx`. Sub-directories are not descended into. The
/// result is sorted by file name so that discovery order, and therefore the
/// tie-break between equal titles, is the same on every run.
///
/// # Errors
///
/// Returns [`GlossaryError::DirectoryUnavailable`] if the directory does not
/// exist or cannot be listed.
pub fn discover_documents(dir: &Path) -> Result<Vec<String>, GlossaryError> {
    let unavailable = |source| GlossaryError::DirectoryUnavailable {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(unavailable)? {
        let entry = entry.map_err(unavailable)?;

        // Non-UTF-8 names can never end in ".mdx" as a str; skip them.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !is_term_document(&name) {
            continue;
        }

        // Follows symlinks, so a link to a regular file still counts.
        let is_file = fs::metadata(entry.path()).is_ok_and(|m| m.is_file());
        if !is_file {
            debug!(name = %name, "ignoring non-file entry");
            continue;
        }

        names.push(name);
    }

    names.sort();
    debug!(dir = %dir.display(), count = names.len(), "discovered term documents");
    Ok(names)
}

/// Whether a file name is a term document rather than the generated page.
#[must_use]
pub fn is_term_document(name: &str) -> bool {
    name.ends_with(DOCUMENT_EXTENSION) && name != RESERVED_OUTPUT_NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_term_document() {
        assert!(is_term_document("apple.mdx"));
        assert!(is_term_document("Banana.mdx"));
        assert!(!is_term_document("glossary.mdx"));
        assert!(!is_term_document("notes.md"));
        assert!(!is_term_document("apple.mdx.bak"));
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["zebra.mdx", "apple.mdx", "glossary.mdx", "readme.md"] {
            fs::write(dir.path().join(name), "---\ntitle: x\n---\n").unwrap();
        }
        fs::create_dir(dir.path().join("nested.mdx")).unwrap();

        let names = discover_documents(dir.path()).unwrap();
        assert_eq!(names, vec!["apple.mdx", "zebra.mdx"]);
    }

    #[test]
    fn test_discover_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_documents(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_discover_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = discover_documents(&missing).unwrap_err();
        assert!(matches!(err, GlossaryError::DirectoryUnavailable { .. }));
    }
}
