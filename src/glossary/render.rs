//! Glossary page rendering.
//!
//! Produces `glossary.mdx`: frontmatter, a navigation panel with one link per
//! letter, a fixed notice, then one section per letter. Titles and
//! descriptions are inserted as-is.

use crate::glossary::entry::GlossaryEntry;
use crate::glossary::group::{LetterGroup, group_entries};

/// Page title written to the frontmatter.
pub const PAGE_TITLE: &str = "Glossary of Terms";

/// Notice shown under the navigation panel.
pub const DISCLAIMER: &str = "Please note: The terms and definitions listed in this Glossary are subject to change without notice.";

/// Base path of term pages.
const TERMS_ROUTE: &str = "/terms";

/// Groups, sorts and renders `entries` into the full page.
#[must_use]
pub fn render_glossary(entries: &[GlossaryEntry]) -> String {
    render_groups(&group_entries(entries.to_vec()))
}

/// Renders already grouped and sorted letter groups.
#[must_use]
pub fn render_groups(groups: &[LetterGroup]) -> String {
    let mut page = render_header(groups);
    for group in groups {
        page.push_str(&render_section(group));
    }
    page
}

/// Frontmatter, navigation panel and notice.
fn render_header(groups: &[LetterGroup]) -> String {
    let navigation = groups
        .iter()
        .map(|g| format!("- [{}](##{})", g.letter, g.letter.to_lowercase()))
        .collect::<Vec<_>>()
        .join("\n");

    let mut sections = Vec::new();

    // Frontmatter must be first in MDX files
    sections.push("---".to_string());
    sections.push(format!("title: {PAGE_TITLE}"));
    sections.push("---".to_string());
    sections.push(String::new());

    sections.push("<Panel>".to_string());
    sections.push(String::new());
    sections.push("### Glossary Navigation".to_string());
    sections.push(String::new());
    sections.push(navigation);
    sections.push(String::new());
    sections.push("</Panel>".to_string());
    sections.push(String::new());

    sections.push("<Note>".to_string());
    sections.push(DISCLAIMER.to_string());
    sections.push("</Note>".to_string());
    sections.push(String::new());

    sections.join("\n")
}

/// One letter section: rule, heading, then every term.
fn render_section(group: &LetterGroup) -> String {
    let mut section = format!("\n\n---\n\n## {}\n", group.letter);
    for entry in &group.entries {
        section.push_str(&render_term(entry));
    }
    section
}

fn render_term(entry: &GlossaryEntry) -> String {
    let link = format!("{TERMS_ROUTE}/{}", entry.slug);
    format!(
        "\n#### [{}]({link})\n{}\n\n[More →]({link})\n",
        entry.title, entry.description
    )
}
