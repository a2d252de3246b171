//! Host editor adapter
//!
//! A minimal editor surface: a rope-backed document, a scrolled viewport, a
//! single caret and monospace metrics. It supplies the jump engine with
//! visible lines and screen anchors, and applies resolved jumps.

mod document;
mod viewport;

pub use document::Document;
pub use viewport::{LayoutMetrics, Viewport};

use crate::jump::{AnchorMapper, Point, Position, VisibleLine, ViewportRect};
use crate::util::char_col_to_visual_col;

/// Caret location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Caret {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// A document shown through a viewport
#[derive(Debug, Clone, Default)]
pub struct EditorView {
    pub document: Document,
    pub viewport: Viewport,
    pub metrics: LayoutMetrics,
    pub caret: Caret,
}

impl EditorView {
    pub fn new(document: Document, viewport: Viewport, metrics: LayoutMetrics) -> Self {
        Self {
            document,
            viewport,
            metrics,
            caret: Caret::default(),
        }
    }

    /// Lines handed to the scanner
    pub fn visible_lines(&self) -> Vec<VisibleLine> {
        self.document.visible_lines(&self.viewport)
    }

    /// Painted area in pixels
    pub fn viewport_rect(&self) -> ViewportRect {
        self.metrics.viewport_rect(&self.viewport)
    }

    /// Move the caret to a document offset and scroll it into view
    pub fn move_caret_to(&mut self, offset: usize) {
        let offset = offset.min(self.document.len_chars());
        let (line, column) = self.document.offset_to_line_col(offset);
        self.caret = Caret {
            offset,
            line,
            column,
        };
        self.viewport.scroll_to_line(line);
        tracing::debug!(offset, line, column, "caret moved");
    }
}

impl AnchorMapper for EditorView {
    fn anchor_for(&self, position: &Position) -> Option<Point> {
        let row = position.line.checked_sub(self.viewport.top_line)?;
        let text = self.document.line_text(position.line)?;
        let visual_col = char_col_to_visual_col(&text, position.column);

        Some(Point::new(
            self.metrics
                .column_x(visual_col, self.viewport.left_column),
            (row * self.metrics.line_height) as i32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(text: &str, visible_lines: usize, visible_columns: usize) -> EditorView {
        EditorView::new(
            Document::with_text(text),
            Viewport::new(visible_lines, visible_columns),
            LayoutMetrics::default(),
        )
    }

    #[test]
    fn test_anchor_accounts_for_tabs_and_rows() {
        let mut view = view("x\n\tfoo\n", 10, 80);
        view.viewport.top_line = 1;
        let anchor = view.anchor_for(&Position::new(3, 1, 1));
        assert_eq!(anchor, Some(Point::new(40, 0)));
    }

    #[test]
    fn test_anchor_above_viewport_is_none() {
        let mut view = view("a\nb\n", 10, 80);
        view.viewport.top_line = 1;
        assert_eq!(view.anchor_for(&Position::new(0, 0, 0)), None);
    }

    #[test]
    fn test_move_caret_scrolls() {
        let text = "w\n".repeat(100);
        let mut view = view(&text, 10, 80);
        view.move_caret_to(120);
        assert_eq!(view.caret.line, 60);
        assert_eq!(view.caret.column, 0);
        assert!(view.viewport.shows_line(60));
    }
}
