//! Glossary page generation.
//!
//! Turns a directory of term documents into a single `glossary.mdx`:
//! - discovery of `*.mdx` documents
//! - frontmatter parsing and metadata validation
//! - grouping by first letter with locale-aware ordering
//! - rendering of the navigation page

pub mod collate;
pub mod discovery;
pub mod entry;
pub mod frontmatter;
pub mod generate;
pub mod group;
pub mod render;

pub use entry::{GlossaryEntry, SkippedDocument};
pub use frontmatter::{FrontMatter, FrontMatterParser, YamlFrontMatter};
pub use generate::{CollectedEntries, GenerationReport, collect_entries, generate};
pub use group::{LetterGroup, group_entries};
pub use render::render_glossary;
