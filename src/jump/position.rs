//! Jump target positions and viewport geometry

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A point in pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The painted area of the editor in pixel space
///
/// `contains` is half-open: the right and bottom edges are outside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewportRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl ViewportRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge X coordinate (exclusive)
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge Y coordinate (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if the point is painted inside this rectangle
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// A jump target: a character offset into the document
///
/// Equality, ordering and hashing use the offset only. The line/column pair and
/// the render anchor are carried for the editor and the overlay.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Position {
    /// Zero-based character offset into the document
    pub offset: usize,
    /// Zero-based line index
    pub line: usize,
    /// Zero-based character column within the line
    pub column: usize,
    /// Where the label is drawn, if the host mapped this position to the screen
    pub anchor: Option<Point>,
}

impl Position {
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
            anchor: None,
        }
    }

    /// Position known only by its document offset
    pub const fn at_offset(offset: usize) -> Self {
        Self::new(offset, 0, 0)
    }

    /// Attach a render anchor
    pub fn with_anchor(mut self, anchor: Point) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}
