//! Alphabetic grouping of entries.

use std::collections::BTreeMap;

use crate::glossary::collate::CollationKey;
use crate::glossary::entry::GlossaryEntry;

/// Entries sharing a section letter, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup {
    /// Upper-cased first character of every title in the group.
    pub letter: String,
    /// Entries sorted by title; equal titles keep their input order.
    pub entries: Vec<GlossaryEntry>,
}

/// Partitions entries by [`GlossaryEntry::letter`] and sorts everything.
///
/// Groups come back in ascending code point order of their letter. Within a
/// group, titles are ordered by [`CollationKey`]; the sort is stable, so
/// entries with equal titles stay in the order they were passed in.
#[must_use]
pub fn group_entries(entries: Vec<GlossaryEntry>) -> Vec<LetterGroup> {
    let mut by_letter: BTreeMap<String, Vec<GlossaryEntry>> = BTreeMap::new();
    for entry in entries {
        by_letter.entry(entry.letter()).or_default().push(entry);
    }

    by_letter
        .into_iter()
        .map(|(letter, mut entries)| {
            entries.sort_by_cached_key(|e| CollationKey::new(&e.title));
            LetterGroup { letter, entries }
        })
        .collect()
}
