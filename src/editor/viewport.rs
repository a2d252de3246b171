//! Viewport and monospace layout metrics

use crate::jump::ViewportRect;

/// Viewport - the visible region of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible line (0-indexed)
    pub top_line: usize,
    /// First visible column (for horizontal scrolling)
    pub left_column: usize,
    /// Number of lines that fit in the viewport
    pub visible_lines: usize,
    /// Number of columns that fit in the viewport
    pub visible_columns: usize,
}

impl Viewport {
    /// Create a new viewport with the given dimensions
    pub fn new(visible_lines: usize, visible_columns: usize) -> Self {
        Self {
            top_line: 0,
            left_column: 0,
            visible_lines,
            visible_columns,
        }
    }

    /// Check if a line is fully painted
    pub fn shows_line(&self, line: usize) -> bool {
        line >= self.top_line && line < self.top_line.saturating_add(self.visible_lines)
    }

    /// Scroll so `line` sits in the middle, unless it is already visible
    pub fn scroll_to_line(&mut self, line: usize) {
        if self.shows_line(line) {
            return;
        }
        self.top_line = line.saturating_sub(self.visible_lines / 2);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(25, 80)
    }
}

/// Pixel metrics for a monospace editor surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Width of one column in pixels
    pub char_width: f32,
    /// Height of one line in pixels
    pub line_height: usize,
}

impl LayoutMetrics {
    pub fn new(char_width: f32, line_height: usize) -> Self {
        Self {
            char_width,
            line_height,
        }
    }

    /// The painted area for a viewport, anchored at the origin
    pub fn viewport_rect(&self, viewport: &Viewport) -> ViewportRect {
        ViewportRect::new(
            0,
            0,
            (viewport.visible_columns as f32 * self.char_width).round() as i32,
            (viewport.visible_lines * self.line_height) as i32,
        )
    }

    /// Left edge of a visual column, relative to the scrolled viewport
    pub fn column_x(&self, visual_col: usize, left_column: usize) -> i32 {
        ((visual_col as f32 - left_column as f32) * self.char_width).round() as i32
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::new(10.0, 20)
    }
}
