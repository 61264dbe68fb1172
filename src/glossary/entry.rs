//! Glossary entries and metadata extraction.

use serde_yaml::Value;

use crate::config::DOCUMENT_EXTENSION;
use crate::error::SkipReason;
use crate::glossary::frontmatter::{FrontMatter, FrontMatterParser};

/// Front-matter key holding the term title.
pub const TITLE_KEY: &str = "title";

/// Front-matter key holding the term description.
pub const DESCRIPTION_KEY: &str = "description";

/// A validated term ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// File name without the `.mdx` extension, used in `/terms/{slug}` links.
    pub slug: String,
    /// Term title, verbatim from front matter.
    pub title: String,
    /// Term description, verbatim from front matter.
    pub description: String,
}

impl GlossaryEntry {
    /// Creates an entry from its parts.
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Section letter: the upper-cased first character of the title.
    ///
    /// Upper-casing can expand a character (`ß` becomes `SS`), so this
    /// returns a `String`.
    #[must_use]
    pub fn letter(&self) -> String {
        self.title
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// A term document left out of the glossary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    /// File name of the document.
    pub file: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Derives the slug from a document file name by removing `.mdx`.
#[must_use]
pub fn slug_from_file_name(file: &str) -> &str {
    file.strip_suffix(DOCUMENT_EXTENSION).unwrap_or(file)
}

/// Parses `raw` and builds an entry for the document `file`.
///
/// # Errors
///
/// Returns the [`SkipReason`] when the front matter cannot be parsed or
/// `title`/`description` fail validation.
pub fn extract_entry(
    file: &str,
    raw: &str,
    parser: &dyn FrontMatterParser,
) -> Result<GlossaryEntry, SkipReason> {
    let front_matter = parser
        .parse(raw)
        .map_err(|e| SkipReason::InvalidFrontMatter {
            message: e.to_string(),
        })?;

    entry_from_front_matter(file, &front_matter)
}

/// Builds an entry from already-parsed front matter.
///
/// `title` and `description` must be strings that are not blank. Any other
/// shape (absent, number, list, null, empty) counts as missing.
///
/// # Errors
///
/// Returns [`SkipReason::MissingMetadata`] naming every field that failed.
pub fn entry_from_front_matter(
    file: &str,
    front_matter: &FrontMatter,
) -> Result<GlossaryEntry, SkipReason> {
    let title = required_string(front_matter, TITLE_KEY);
    let description = required_string(front_matter, DESCRIPTION_KEY);

    match (title, description) {
        (Some(title), Some(description)) => Ok(GlossaryEntry::new(
            slug_from_file_name(file),
            title,
            description,
        )),
        (title, description) => {
            let mut fields = Vec::new();
            if title.is_none() {
                fields.push(TITLE_KEY);
            }
            if description.is_none() {
                fields.push(DESCRIPTION_KEY);
            }
            Err(SkipReason::MissingMetadata { fields })
        }
    }
}

fn required_string<'a>(front_matter: &'a FrontMatter, key: &str) -> Option<&'a str> {
    match front_matter.get(key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.as_str()),
        _ => None,
    }
}
