//! Label → position lookup for one jump session

use std::collections::BTreeMap;

use super::error::JumpError;
use super::label::{generate_labels, Label, MAX_LABELS};
use super::position::Position;

/// Read-only mapping from labels to jump targets
///
/// Labels are generated in the same order as the targets were scanned, so
/// iterating in label order also walks the targets in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpIndex {
    entries: BTreeMap<Label, Position>,
}

impl JumpIndex {
    /// Pair `positions` with `labels` one to one
    ///
    /// Every label must be distinct; a repeated label is an error rather than
    /// a silently dropped position.
    pub fn build(positions: Vec<Position>, labels: Vec<Label>) -> Result<Self, JumpError> {
        if positions.len() != labels.len() {
            return Err(JumpError::LengthMismatch {
                positions: positions.len(),
                labels: labels.len(),
            });
        }

        let mut entries = BTreeMap::new();
        for (label, position) in labels.into_iter().zip(positions) {
            if entries.insert(label, position).is_some() {
                return Err(JumpError::DuplicateLabel(label));
            }
        }

        Ok(Self { entries })
    }

    /// Label scanned targets, keeping at most [`MAX_LABELS`] in document order
    pub fn from_targets(mut positions: Vec<Position>) -> Self {
        if positions.len() > MAX_LABELS {
            tracing::debug!(
                dropped = positions.len() - MAX_LABELS,
                "more targets than labels, dropping the tail"
            );
            positions.truncate(MAX_LABELS);
        }

        let labels = generate_labels(positions.len()).unwrap_or_default();
        Self {
            entries: labels.into_iter().zip(positions).collect(),
        }
    }

    /// Target for an exact label
    pub fn lookup(&self, label: &Label) -> Option<&Position> {
        self.entries.get(label)
    }

    /// Target for typed input, `None` if it is not an assigned label
    pub fn lookup_str(&self, typed: &str) -> Option<&Position> {
        let label: Label = typed.parse().ok()?;
        self.lookup(&label)
    }

    /// Check if any assigned label starts with `prefix`
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.matching(prefix).next().is_some()
    }

    /// Entries whose label starts with `prefix`, in label order
    pub fn matching<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a Label, &'a Position)> + 'a {
        self.entries
            .iter()
            .filter(move |(label, _)| label.starts_with(prefix))
    }

    /// All entries in label order
    pub fn iter(&self) -> impl Iterator<Item = (&Label, &Position)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(offsets: &[usize]) -> Vec<Position> {
        offsets.iter().map(|&o| Position::at_offset(o)).collect()
    }

    #[test]
    fn test_build_pairs_in_order() {
        let index = JumpIndex::build(targets(&[5, 20]), generate_labels(2).unwrap()).unwrap();
        assert_eq!(index.lookup_str("aa").map(|p| p.offset), Some(5));
        assert_eq!(index.lookup_str("ab").map(|p| p.offset), Some(20));
        assert_eq!(index.lookup_str("ac"), None);
    }

    #[test]
    fn test_build_rejects_length_mismatch() {
        let result = JumpIndex::build(targets(&[1, 2, 3]), generate_labels(2).unwrap());
        assert_eq!(
            result,
            Err(JumpError::LengthMismatch {
                positions: 3,
                labels: 2
            })
        );
    }

    #[test]
    fn test_build_rejects_duplicate_labels() {
        let aa: Label = "aa".parse().unwrap();
        let result = JumpIndex::build(targets(&[1, 2]), vec![aa, aa]);
        assert_eq!(result, Err(JumpError::DuplicateLabel(aa)));
    }

    #[test]
    fn test_build_accepts_labels_out_of_order() {
        let labels = vec!["ba".parse().unwrap(), "aa".parse().unwrap()];
        let index = JumpIndex::build(targets(&[1, 2]), labels).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup_str("ba").map(|p| p.offset), Some(1));
    }

    #[test]
    fn test_has_prefix() {
        let index = JumpIndex::from_targets(targets(&[1, 2, 3]));
        assert!(index.has_prefix(""));
        assert!(index.has_prefix("a"));
        assert!(index.has_prefix("ac"));
        assert!(!index.has_prefix("ad"));
        assert!(!index.has_prefix("b"));
    }

    #[test]
    fn test_matching_prefix() {
        let index = JumpIndex::from_targets(targets(&(0..30).collect::<Vec<_>>()));
        let b_labels: Vec<String> = index.matching("b").map(|(l, _)| l.to_string()).collect();
        assert_eq!(b_labels, vec!["ba", "bb", "bc", "bd"]);
    }

    #[test]
    fn test_lookup_str_rejects_garbage() {
        let index = JumpIndex::from_targets(targets(&[1]));
        assert_eq!(index.lookup_str("AA"), None);
        assert_eq!(index.lookup_str("a"), None);
    }

    #[test]
    fn test_from_targets_truncates() {
        let index = JumpIndex::from_targets(targets(&(0..700).collect::<Vec<_>>()));
        assert_eq!(index.len(), MAX_LABELS);
        assert_eq!(index.lookup_str("zz").map(|p| p.offset), Some(675));
    }

    #[test]
    fn test_empty_index() {
        let index = JumpIndex::from_targets(Vec::new());
        assert!(index.is_empty());
        assert!(!index.has_prefix(""));
    }
}
