//! Locale-aware title ordering.
//!
//! Titles are compared in three passes, each only breaking ties left by the
//! previous one:
//!
//! 1. base characters, with accents stripped and case folded, where
//!    punctuation and spaces sort before digits and digits before letters;
//! 2. accents, unaccented first;
//! 3. case, lowercase first.
//!
//! This gives `apple < Apple < Banana < cote < coté < côte`, the order a
//! reader expects, rather than the byte order `Apple < Banana < apple`.
//!
//! Letters with no canonical decomposition (`ø`, `æ`, `ß`, `ł`, ...) are
//! expanded to their base letters for the first pass and carry a secondary
//! weight of their own, so `Straße` sorts beside `Strasse` and `Øl` beside
//! `Ol`.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Sort key for a title. Compare keys, not the strings themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: Vec<Vec<char>>,
    tertiary: Vec<bool>,
}

/// Coarse character class used ahead of code point in the primary pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_alphabetic() {
            Self::Letter
        } else if c.is_numeric() {
            Self::Digit
        } else {
            Self::Punctuation
        }
    }
}

impl CollationKey {
    /// Builds the key for `title`.
    #[must_use]
    pub fn new(title: &str) -> Self {
        let mut primary = Vec::new();
        let mut secondary: Vec<Vec<char>> = Vec::new();
        let mut tertiary = Vec::new();

        for c in title.nfd() {
            if is_combining_mark(c) {
                match secondary.last_mut() {
                    Some(marks) => marks.push(c),
                    None => secondary.push(vec![c]),
                }
                continue;
            }

            let mut marks = Vec::new();
            for l in c.to_lowercase().filter(|l| !is_combining_mark(*l)) {
                match expansion(l) {
                    Some(base) => {
                        marks.push(l);
                        primary.extend(base.chars().map(|b| (CharClass::Letter, b)));
                    }
                    None => primary.push((CharClass::of(l), l)),
                }
            }
            secondary.push(marks);
            tertiary.push(c.is_uppercase());
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

/// Base letters for lowercase letters that do not decompose under NFD.
const fn expansion(c: char) -> Option<&'static str> {
    match c {
        'ß' => Some("ss"),
        'æ' => Some("ae"),
        'œ' => Some("oe"),
        'ø' => Some("o"),
        'ł' => Some("l"),
        'đ' | 'ð' => Some("d"),
        'þ' => Some("th"),
        'ħ' => Some("h"),
        'ı' => Some("i"),
        'ŧ' => Some("t"),
        'ŀ' => Some("l"),
        _ => None,
    }
}

/// Compares two titles in reading order.
#[must_use]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(titles: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = titles.iter().map(ToString::to_string).collect();
        v.sort_by(|a, b| compare_titles(a, b));
        v
    }

    #[test]
    fn test_case_insensitive_primary() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry"]),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_next_to_base_letter() {
        assert_eq!(
            sorted(&["Zebra", "Éclair", "Eagle", "Ezra"]),
            vec!["Eagle", "Éclair", "Ezra", "Zebra"]
        );
    }

    #[test]
    fn test_accent_position_breaks_ties() {
        assert_eq!(
            sorted(&["côte", "coté", "cote", "côté"]),
            vec!["cote", "coté", "côte", "côté"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare_titles("App", "Apple"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_then_digits_then_letters() {
        assert_eq!(
            sorted(&["Alpha", "2FA", "-flag", "Zed"]),
            vec!["-flag", "2FA", "Alpha", "Zed"]
        );
    }

    #[test]
    fn test_composed_and_decomposed_are_equal() {
        assert_eq!(compare_titles("\u{e9}t\u{e9}", "e\u{301}te\u{301}"), Ordering::Equal);
    }

    #[test]
    fn test_letters_without_decomposition_sort_by_base() {
        assert_eq!(compare_titles("Oøk", "Ozone"), Ordering::Less);
        assert_eq!(compare_titles("Straße", "Strasze"), Ordering::Less);
        assert_eq!(compare_titles("Læser", "Lzz"), Ordering::Less);
        assert_eq!(compare_titles("Łódź", "Lux"), Ordering::Less);
        assert_eq!(compare_titles("Œuvre", "Ozone"), Ordering::Less);
        assert_eq!(compare_titles("Þorn", "Tango"), Ordering::Greater);
        assert_eq!(compare_titles("Þorn", "Tiger"), Ordering::Less);
    }

    #[test]
    fn test_expanded_letter_follows_plain_spelling() {
        assert_eq!(compare_titles("Strasse", "Straße"), Ordering::Less);
        assert_eq!(compare_titles("Ol", "Øl"), Ordering::Less);
        assert_eq!(compare_titles("Øl", "Olm"), Ordering::Less);
    }

    #[test]
    fn test_expanded_letters_within_section() {
        assert_eq!(
            sorted(&["Ozone", "Øre", "Oak", "Œuvre"]),
            vec!["Oak", "Œuvre", "Øre", "Ozone"]
        );
    }

    #[test]
    fn test_identical_titles_equal() {
        assert_eq!(compare_titles("API", "API"), Ordering::Equal);
    }
}
