//! Document model - the text buffer the jump scanner reads from

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use ropey::Rope;

use super::viewport::Viewport;
use crate::jump::VisibleLine;

/// Text buffer plus the file it came from
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for in-memory text)
    pub file_path: Option<PathBuf>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            buffer: Rope::new(),
            file_path: None,
        }
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self {
            buffer: Rope::from(content),
            file_path: Some(path.to_path_buf()),
        })
    }

    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Line content without its terminator
    ///
    /// Borrowed when the line sits in a single rope chunk.
    pub fn line_text(&self, line_idx: usize) -> Option<Cow<'_, str>> {
        if line_idx >= self.buffer.len_lines() {
            return None;
        }

        let line = self.buffer.line(line_idx);
        let len = line.len_chars();

        let trim_len = if len > 0 && line.char(len - 1) == '\n' {
            if len > 1 && line.char(len - 2) == '\r' {
                2 // CRLF
            } else {
                1 // LF
            }
        } else {
            0
        };

        let trimmed = line.slice(..len - trim_len);
        Some(match trimmed.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(trimmed.to_string()),
        })
    }

    /// Convert a buffer offset to (line, column)
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(clamped);
        let line_start = self.buffer.line_to_char(line);
        (line, clamped - line_start)
    }

    /// Scanner input for the rows the viewport paints
    ///
    /// Includes the row just below the last full row, which may be partially
    /// painted; the scanner's visibility filter decides what survives.
    pub fn visible_lines(&self, viewport: &Viewport) -> Vec<VisibleLine> {
        let first = viewport.top_line.min(self.line_count());
        let last = viewport
            .top_line
            .saturating_add(viewport.visible_lines)
            .saturating_add(1)
            .min(self.line_count());

        (first..last)
            .filter_map(|idx| {
                let text = self.line_text(idx)?;
                Some(VisibleLine::new(
                    idx,
                    text.into_owned(),
                    self.buffer.line_to_char(idx),
                ))
            })
            .collect()
    }
}
