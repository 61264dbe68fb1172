//! `glossgen` - glossary page generator for the docs site
//!
//! Scans a directory of term documents, reads each document's `title` and
//! `description` frontmatter, and writes one alphabetized glossary page.

pub mod cli;
pub mod config;
pub mod error;
pub mod glossary;
pub mod observability;
