//! Host integration for jump mode
//!
//! The controller owns the editor view and the jump session. While a session
//! is active every keystroke is routed to it; otherwise keystrokes pass
//! through untouched to the host's normal input path.

use crate::config::JumpConfig;
use crate::editor::EditorView;
use crate::jump::{JumpIndex, JumpSession, Resolution};
use crate::keys::Keystroke;
use crate::overlay::{layout_labels, LabelBox};

/// Source of keystrokes forwarded by the host while jump mode is active
pub trait KeystrokeSource {
    /// Next keystroke, or `None` once the host stops forwarding
    fn next_keystroke(&mut self) -> Option<Keystroke>;
}

/// A fixed sequence of keystrokes, e.g. from a script or a test
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: std::collections::VecDeque<Keystroke>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Keystroke>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Keystrokes not yet consumed
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }

    /// Keystrokes not yet consumed, in order
    pub fn pending(&self) -> impl Iterator<Item = &Keystroke> {
        self.keys.iter()
    }
}

impl KeystrokeSource for ScriptedKeys {
    fn next_keystroke(&mut self) -> Option<Keystroke> {
        self.keys.pop_front()
    }
}

/// Where a keystroke went
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyDispatch {
    /// Jump mode handled the key
    Jump(Resolution),
    /// Jump mode is inactive; the host should process the key normally
    Passthrough(Keystroke),
}

/// Owns the editor view and the jump session for one editor
#[derive(Debug)]
pub struct JumpController {
    pub view: EditorView,
    pub config: JumpConfig,
    session: JumpSession,
}

impl JumpController {
    pub fn new(view: EditorView, config: JumpConfig) -> Self {
        Self {
            view,
            config,
            session: JumpSession::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Enter jump mode over the currently visible text
    pub fn activate(&mut self) -> &JumpIndex {
        let lines = self.view.visible_lines();
        let rect = self.view.viewport_rect();
        self.session
            .activate(&lines, rect, self.config.scan_mode, &self.view)
    }

    /// The jump action: enter jump mode, or leave it if already active
    pub fn toggle(&mut self) {
        if self.session.is_active() {
            self.session.cancel();
        } else {
            self.activate();
        }
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    /// Route one keystroke
    ///
    /// Named cancel keys and modified or non-character keys leave jump mode
    /// without reaching the session's character handling.
    pub fn handle_keystroke(&mut self, keystroke: Keystroke) -> KeyDispatch {
        if !self.session.is_active() {
            return KeyDispatch::Passthrough(keystroke);
        }

        let resolution = match keystroke.typed_char() {
            Some(ch) if !keystroke.key.is_cancel_key() => self.session.consume(ch),
            _ => {
                self.session.cancel();
                Resolution::Cancelled
            }
        };

        if let Resolution::Resolved(position) = &resolution {
            self.view.move_caret_to(position.offset);
        }

        KeyDispatch::Jump(resolution)
    }

    /// Pump keystrokes from `source` until the session ends or the source runs dry
    ///
    /// Returns the last resolution, or `None` if nothing was consumed.
    pub fn run(&mut self, source: &mut impl KeystrokeSource) -> Option<Resolution> {
        let mut last = None;
        while self.session.is_active() {
            let Some(keystroke) = source.next_keystroke() else {
                break;
            };
            if let KeyDispatch::Jump(resolution) = self.handle_keystroke(keystroke) {
                last = Some(resolution);
            }
        }
        last
    }

    /// Label boxes for the overlay, reflecting the typed prefix
    pub fn label_boxes(&self) -> Vec<LabelBox> {
        match (self.session.index(), self.session.typed_prefix()) {
            (Some(index), Some(prefix)) => layout_labels(index, prefix, &self.view.metrics),
            _ => Vec::new(),
        }
    }

    pub fn session(&self) -> &JumpSession {
        &self.session
    }

    /// Tear down: leave jump mode and hand back the editor view
    pub fn dispose(mut self) -> EditorView {
        self.session.cancel();
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Document, LayoutMetrics, Viewport};
    use crate::keys::{KeyCode, Modifiers};

    fn controller(text: &str) -> JumpController {
        let view = EditorView::new(
            Document::with_text(text),
            Viewport::new(10, 80),
            LayoutMetrics::default(),
        );
        JumpController::new(view, JumpConfig::default())
    }

    #[test]
    fn test_passthrough_when_inactive() {
        let mut ctl = controller("foo bar");
        let key = Keystroke::char('a');
        assert_eq!(ctl.handle_keystroke(key), KeyDispatch::Passthrough(key));
    }

    #[test]
    fn test_jump_moves_caret() {
        let mut ctl = controller("foo bar\nbaz");
        ctl.activate();
        ctl.handle_keystroke(Keystroke::char('a'));
        let dispatch = ctl.handle_keystroke(Keystroke::char('c'));

        assert!(matches!(
            dispatch,
            KeyDispatch::Jump(Resolution::Resolved(p)) if p.offset == 8
        ));
        assert_eq!((ctl.view.caret.line, ctl.view.caret.column), (1, 0));
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_escape_cancels() {
        let mut ctl = controller("foo");
        ctl.activate();
        assert_eq!(
            ctl.handle_keystroke(Keystroke::key(KeyCode::Escape)),
            KeyDispatch::Jump(Resolution::Cancelled)
        );
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_modified_char_cancels() {
        let mut ctl = controller("foo");
        ctl.activate();
        let key = Keystroke::new(KeyCode::Char('a'), Modifiers::CTRL);
        assert_eq!(
            ctl.handle_keystroke(key),
            KeyDispatch::Jump(Resolution::Cancelled)
        );
    }

    #[test]
    fn test_toggle() {
        let mut ctl = controller("foo");
        ctl.toggle();
        assert!(ctl.is_active());
        ctl.toggle();
        assert!(!ctl.is_active());
    }

    #[test]
    fn test_run_stops_at_resolution() {
        let mut ctl = controller("one two three");
        ctl.activate();
        let mut keys = ScriptedKeys::new("abzz".chars().map(Keystroke::char));
        let result = ctl.run(&mut keys);

        assert!(matches!(result, Some(Resolution::Resolved(p)) if p.offset == 4));
        assert_eq!(keys.remaining(), 2);
        let pending: Vec<String> = keys.pending().map(ToString::to_string).collect();
        assert_eq!(pending, vec!["z", "z"]);
    }

    #[test]
    fn test_label_boxes_track_prefix() {
        let mut ctl = controller("a b c");
        ctl.activate();
        assert!(ctl.label_boxes().iter().all(|b| !b.highlighted));

        ctl.handle_keystroke(Keystroke::char('a'));
        let boxes = ctl.label_boxes();
        assert_eq!(boxes.len(), 3);
        assert!(boxes.iter().all(|b| b.highlighted && b.typed() == "a"));
    }

    #[test]
    fn test_dispose_leaves_jump_mode() {
        let mut ctl = controller("foo");
        ctl.activate();
        let view = ctl.dispose();
        assert_eq!(view.caret.offset, 0);
    }
}
