//! Target scanner tests
//!
//! Word boundaries in both modes, viewport filtering and ordering.

mod common;

use common::{offsets, test_view};
use wordjump::jump::{
    scan, scan_lines, word_starts, Point, Position, ScanMode, ViewportRect, VisibleLine,
};

// ========================================================================
// Boundaries
// ========================================================================

#[test]
fn test_simple_mode_word_starts() {
    let lines = vec![VisibleLine::new(0, "foo bar_baz 42x", 0)];
    assert_eq!(offsets(&scan_lines(&lines, ScanMode::Simple)), vec![0, 4, 12]);
}

#[test]
fn test_camel_case_acronym_then_words() {
    let lines = vec![VisibleLine::new(0, "XMLHttpRequest", 0)];
    assert_eq!(
        offsets(&scan_lines(&lines, ScanMode::CamelCase)),
        vec![0, 3, 7]
    );
}

#[test]
fn test_camel_case_includes_simple_boundaries() {
    assert_eq!(
        word_starts("let parseXMLDoc = new_value;", ScanMode::CamelCase),
        vec![0, 4, 9, 12, 18]
    );
}

#[test]
fn test_unicode_letters_are_word_chars() {
    assert_eq!(word_starts("über straße", ScanMode::Simple), vec![0, 5]);
}

#[test]
fn test_offsets_are_char_based() {
    let lines = vec![
        VisibleLine::new(0, "héllo wörld", 0),
        VisibleLine::new(1, "x", 12),
    ];
    assert_eq!(offsets(&scan_lines(&lines, ScanMode::Simple)), vec![0, 6, 12]);
}

// ========================================================================
// Visibility
// ========================================================================

#[test]
fn test_partially_painted_row_is_dropped() {
    let text = (0..30).map(|i| format!("w{}\n", i)).collect::<String>();
    let view = test_view(&text);
    let lines = view.visible_lines();

    // 25 full rows plus the partially painted one below
    assert_eq!(lines.len(), 26);

    let targets = scan(&lines, view.viewport_rect(), ScanMode::Simple, &view);
    assert_eq!(targets.len(), 25);
    assert_eq!(targets.last().map(|p| p.line), Some(24));
}

#[test]
fn test_horizontal_scroll_hides_left_words() {
    let mut view = test_view("aa bb cc dd");
    view.viewport.left_column = 4;
    let targets = scan(
        &view.visible_lines(),
        view.viewport_rect(),
        ScanMode::Simple,
        &view,
    );
    assert_eq!(offsets(&targets), vec![6, 9]);
    assert_eq!(targets[0].anchor, Some(Point::new(20, 0)));
}

#[test]
fn test_viewport_with_offset_origin() {
    let lines = vec![VisibleLine::new(0, "a b c", 0)];
    let viewport = ViewportRect::new(100, 0, 30, 20);
    let mapper = |p: &Position| Some(Point::new(100 + p.column as i32 * 10, 0));
    assert_eq!(
        offsets(&scan(&lines, viewport, ScanMode::Simple, &mapper)),
        vec![0, 2]
    );
}

#[test]
fn test_empty_lines_have_no_targets() {
    let lines = vec![
        VisibleLine::new(0, "", 0),
        VisibleLine::new(1, "   ", 1),
        VisibleLine::new(2, "--", 5),
    ];
    assert!(scan_lines(&lines, ScanMode::CamelCase).is_empty());
}

#[test]
fn test_scan_is_deterministic() {
    let view = test_view("fooBar bazQux\n  XMLParser\n");
    let run = |mode| {
        scan(
            &view.visible_lines(),
            view.viewport_rect(),
            mode,
            &view,
        )
    };
    assert_eq!(run(ScanMode::Simple), run(ScanMode::Simple));
    assert_eq!(run(ScanMode::CamelCase), run(ScanMode::CamelCase));
    assert_eq!(offsets(&run(ScanMode::CamelCase)), vec![0, 3, 7, 10, 16, 19]);
}
