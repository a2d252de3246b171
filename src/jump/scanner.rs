//! Visible-text scanning for jump targets
//!
//! The scanner only looks at the lines it is handed. Which lines are visible,
//! and where each character lands on screen, is the host's business; the host
//! answers the second question through [`AnchorMapper`] and the scanner drops
//! any target that maps outside the viewport rectangle.

use serde::{Deserialize, Serialize};

use super::position::{Point, Position, ViewportRect};
use crate::util::is_word_char;

/// Word-boundary detection policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// Word character preceded by a non-word character or line start
    #[default]
    Simple,
    /// Simple boundaries plus camelCase and ACRONYMWord splits
    CamelCase,
}

/// One visible line of the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleLine {
    /// Zero-based line index in the document
    pub index: usize,
    /// Line content without its terminator
    pub text: String,
    /// Character offset of the first character of the line
    pub start_offset: usize,
}

impl VisibleLine {
    pub fn new(index: usize, text: impl Into<String>, start_offset: usize) -> Self {
        Self {
            index,
            text: text.into(),
            start_offset,
        }
    }
}

/// Maps a candidate position to where it is painted
///
/// Returning `None` means the position is not painted at all.
pub trait AnchorMapper {
    fn anchor_for(&self, position: &Position) -> Option<Point>;
}

impl<F> AnchorMapper for F
where
    F: Fn(&Position) -> Option<Point>,
{
    fn anchor_for(&self, position: &Position) -> Option<Point> {
        self(position)
    }
}

/// Columns (in chars) of every word start in `text`
pub fn word_starts(text: &str, mode: ScanMode) -> Vec<usize> {
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len())
        .filter(|&i| is_boundary(&chars, i, mode))
        .collect()
}

fn is_boundary(chars: &[char], i: usize, mode: ScanMode) -> bool {
    let ch = chars[i];
    if !is_word_char(ch) {
        return false;
    }

    let prev = if i > 0 { Some(chars[i - 1]) } else { None };
    let Some(prev) = prev.filter(|&p| is_word_char(p)) else {
        return true;
    };

    if mode == ScanMode::Simple || !ch.is_uppercase() {
        return false;
    }

    // fooBar: boundary at 'B'
    if prev.is_lowercase() {
        return true;
    }

    // XMLParser: boundary at 'P', the last capital before lowercase resumes
    prev.is_uppercase() && chars.get(i + 1).is_some_and(|next| next.is_lowercase())
}

/// Word-start positions in the given lines, in document order, without anchors
pub fn scan_lines(lines: &[VisibleLine], mode: ScanMode) -> Vec<Position> {
    let mut ordered: Vec<&VisibleLine> = lines.iter().collect();
    ordered.sort_by_key(|line| line.index);

    ordered
        .into_iter()
        .flat_map(|line| {
            word_starts(&line.text, mode).into_iter().map(move |column| {
                Position::new(line.start_offset + column, line.index, column)
            })
        })
        .collect()
}

/// Word-start positions that are actually painted inside `viewport`
pub fn scan(
    lines: &[VisibleLine],
    viewport: ViewportRect,
    mode: ScanMode,
    anchors: &impl AnchorMapper,
) -> Vec<Position> {
    let candidates = scan_lines(lines, mode);
    let candidate_count = candidates.len();

    let targets: Vec<Position> = candidates
        .into_iter()
        .filter_map(|position| {
            let anchor = anchors.anchor_for(&position)?;
            viewport
                .contains(anchor)
                .then(|| position.with_anchor(anchor))
        })
        .collect();

    tracing::debug!(
        lines = lines.len(),
        candidates = candidate_count,
        visible = targets.len(),
        ?mode,
        "scanned jump targets"
    );

    targets
}
