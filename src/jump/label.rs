//! Two-letter jump labels
//!
//! Labels are drawn from `a..=z` and handed out in lexicographic order:
//! `aa, ab, ..., az, ba, ..., zz`. The order decides which on-screen target gets
//! which label, so generation is a pure function of the requested count.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::error::JumpError;

/// The closed label alphabet, in label order
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Number of symbols in [`ALPHABET`]
pub const ALPHABET_SIZE: usize = 26;

/// Characters per label
pub const LABEL_LEN: usize = 2;

/// Maximum number of simultaneously labelled targets (26 * 26)
pub const MAX_LABELS: usize = ALPHABET_SIZE * ALPHABET_SIZE;

/// Check if a character belongs to the label alphabet
#[inline]
pub fn is_label_char(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// A two-letter jump label
///
/// Ordering is lexicographic over (first, second), matching generation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label([u8; LABEL_LEN]);

impl Label {
    /// Label at `index` in generation order, or `None` past capacity
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= MAX_LABELS {
            return None;
        }
        let first = b'a' + (index / ALPHABET_SIZE) as u8;
        let second = b'a' + (index % ALPHABET_SIZE) as u8;
        Some(Label([first, second]))
    }

    /// First character of the label
    pub fn first(&self) -> char {
        self.0[0] as char
    }

    /// Second character of the label
    pub fn second(&self) -> char {
        self.0[1] as char
    }

    /// Label as a string slice
    pub fn as_str(&self) -> &str {
        // Both bytes are always ASCII lowercase
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Whether the label begins with `prefix` (an empty prefix matches everything)
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Label {
    type Err = JumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_label(s) {
            return Err(JumpError::InvalidLabel(s.to_string()));
        }
        let bytes = s.as_bytes();
        Ok(Label([bytes[0], bytes[1]]))
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Generate `count` labels in lexicographic order
///
/// Accepts any integer type so that host-supplied signed counts are rejected
/// explicitly rather than wrapping.
pub fn generate_labels<N>(count: N) -> Result<Vec<Label>, JumpError>
where
    N: TryInto<usize> + fmt::Display + Copy,
{
    let requested: usize = count.try_into().map_err(|_| {
        JumpError::InvalidArgument(format!("label count must be non-negative, got {}", count))
    })?;

    if requested > MAX_LABELS {
        return Err(JumpError::OutOfCapacity {
            requested,
            capacity: MAX_LABELS,
        });
    }

    Ok((0..requested).filter_map(Label::from_index).collect())
}

/// Check if a string is exactly two characters from the label alphabet
pub fn is_valid_label(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(a), Some(b), None) if is_label_char(a) && is_label_char(b)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_zero() {
        assert!(generate_labels(0).unwrap().is_empty());
    }

    #[test]
    fn test_generate_first_labels() {
        let labels = generate_labels(3).unwrap();
        let strs: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
        assert_eq!(strs, vec!["aa", "ab", "ac"]);
    }

    #[test]
    fn test_generate_wraps_to_next_first_char() {
        let labels = generate_labels(28).unwrap();
        assert_eq!(labels[25].as_str(), "az");
        assert_eq!(labels[26].as_str(), "ba");
        assert_eq!(labels[27].as_str(), "bb");
    }

    #[test]
    fn test_generate_full_capacity() {
        let labels = generate_labels(MAX_LABELS).unwrap();
        assert_eq!(labels.len(), 676);
        assert_eq!(labels.last().unwrap().as_str(), "zz");
    }

    #[test]
    fn test_generate_over_capacity() {
        assert_eq!(
            generate_labels(677),
            Err(JumpError::OutOfCapacity {
                requested: 677,
                capacity: 676
            })
        );
    }

    #[test]
    fn test_generate_negative() {
        assert!(matches!(
            generate_labels(-1),
            Err(JumpError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_label_parse() {
        let label: Label = "qx".parse().unwrap();
        assert_eq!(label.first(), 'q');
        assert_eq!(label.second(), 'x');
        assert!("Qx".parse::<Label>().is_err());
    }

    #[test]
    fn test_is_valid_label() {
        assert!(is_valid_label("aa"));
        assert!(is_valid_label("zz"));
        assert!(!is_valid_label(""));
        assert!(!is_valid_label("a"));
        assert!(!is_valid_label("abc"));
        assert!(!is_valid_label("aB"));
        assert!(!is_valid_label("a1"));
        assert!(!is_valid_label("a-"));
        assert!(!is_valid_label("éa"));
    }

    #[test]
    fn test_starts_with() {
        let label: Label = "ab".parse().unwrap();
        assert!(label.starts_with(""));
        assert!(label.starts_with("a"));
        assert!(label.starts_with("ab"));
        assert!(!label.starts_with("b"));
    }
}
