//! Front-matter parsing for term documents.
//!
//! A document may open with a block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Apple
//! description: A fruit.
//! ---
//! Body text...
//! ```
//!
//! The generator only depends on the [`FrontMatterParser`] trait, so tests can
//! feed it synthetic metadata without touching YAML or the filesystem.

use serde_yaml::{Mapping, Value};

use crate::error::FrontMatterError;

/// Line that opens and closes a front-matter block.
const DELIMITER: &str = "---";

/// Metadata and body split out of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    /// Key-value metadata from the leading block. Empty when there is none.
    pub data: Mapping,
    /// Everything after the closing delimiter.
    pub body: String,
}

impl FrontMatter {
    /// Looks up a metadata value by string key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

/// Splits raw document text into metadata and body.
pub trait FrontMatterParser {
    /// Parses `raw` into its front matter and body.
    ///
    /// # Errors
    ///
    /// Returns an error if a front-matter block is present but cannot be
    /// parsed into a mapping.
    fn parse(&self, raw: &str) -> Result<FrontMatter, FrontMatterError>;
}

/// YAML front-matter parser backed by `serde_yaml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFrontMatter;

impl FrontMatterParser for YamlFrontMatter {
    fn parse(&self, raw: &str) -> Result<FrontMatter, FrontMatterError> {
        let Some((block, body)) = split_block(raw) else {
            return Ok(FrontMatter {
                data: Mapping::new(),
                body: raw.to_string(),
            });
        };

        if block.trim().is_empty() {
            return Ok(FrontMatter {
                data: Mapping::new(),
                body: body.to_string(),
            });
        }

        let data = match serde_yaml::from_str::<Value>(block)? {
            Value::Mapping(map) => map,
            Value::Null => Mapping::new(),
            _ => return Err(FrontMatterError::NotAMapping),
        };

        Ok(FrontMatter {
            data,
            body: body.to_string(),
        })
    }
}

/// Returns `(block, body)` when `raw` opens with a delimiter line.
///
/// A block with no closing delimiter runs to the end of the text.
fn split_block(raw: &str) -> Option<(&str, &str)> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some((&text[start..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }

    Some((&text[start..], ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> FrontMatter {
        YamlFrontMatter.parse(raw).unwrap()
    }

    #[test]
    fn test_basic_block() {
        let fm = parse("---\ntitle: Apple\ndescription: A fruit.\n---\nBody here.\n");
        assert_eq!(fm.get("title"), Some(&Value::from("Apple")));
        assert_eq!(fm.get("description"), Some(&Value::from("A fruit.")));
        assert_eq!(fm.body, "Body here.\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let fm = parse("---\r\ntitle: Apple\r\n---\r\nBody\r\n");
        assert_eq!(fm.get("title"), Some(&Value::from("Apple")));
        assert_eq!(fm.body, "Body\r\n");
    }

    #[test]
    fn test_no_front_matter() {
        let fm = parse("# Just a heading\n");
        assert!(fm.data.is_empty());
        assert_eq!(fm.body, "# Just a heading\n");
    }

    #[test]
    fn test_empty_block() {
        let fm = parse("---\n---\nBody\n");
        assert!(fm.data.is_empty());
        assert_eq!(fm.body, "Body\n");
    }

    #[test]
    fn test_unterminated_block_runs_to_end() {
        let fm = parse("---\ntitle: Apple\ndescription: A fruit.\n");
        assert_eq!(fm.get("title"), Some(&Value::from("Apple")));
        assert!(fm.body.is_empty());
    }

    #[test]
    fn test_leading_bom_is_ignored() {
        let fm = parse("\u{feff}---\ntitle: Apple\n---\n");
        assert_eq!(fm.get("title"), Some(&Value::from("Apple")));
    }

    #[test]
    fn test_thematic_break_is_not_a_delimiter() {
        let fm = parse("----\ntitle: Apple\n----\n");
        assert!(fm.data.is_empty());
    }

    #[test]
    fn test_non_mapping_block_is_rejected() {
        let err = YamlFrontMatter.parse("---\n- a\n- b\n---\n").unwrap_err();
        assert!(matches!(err, FrontMatterError::NotAMapping));
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let err = YamlFrontMatter
            .parse("---\ntitle: [unclosed\n---\n")
            .unwrap_err();
        assert!(matches!(err, FrontMatterError::Yaml(_)));
    }
}
