//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use wordjump::editor::{Document, EditorView, LayoutMetrics, Viewport};
use wordjump::jump::{JumpSession, Position};
use wordjump::{JumpConfig, JumpController};

/// Positions known only by offset, in the given order
pub fn targets(offsets: &[usize]) -> Vec<Position> {
    offsets.iter().map(|&o| Position::at_offset(o)).collect()
}

/// An active session over targets at the given offsets
pub fn active_session(offsets: &[usize]) -> JumpSession {
    let mut session = JumpSession::new();
    session.activate_targets(targets(offsets));
    session
}

/// An editor view over `text` with a 25x80 viewport and 10x20px cells
pub fn test_view(text: &str) -> EditorView {
    EditorView::new(
        Document::with_text(text),
        Viewport::new(25, 80),
        LayoutMetrics::default(),
    )
}

/// A controller over `text` with default configuration
pub fn test_controller(text: &str) -> JumpController {
    JumpController::new(test_view(text), JumpConfig::default())
}

pub fn offsets(positions: &[Position]) -> Vec<usize> {
    positions.iter().map(|p| p.offset).collect()
}
