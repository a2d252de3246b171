//! Jump mode state machine
//!
//! A session is created inactive. `activate` scans, labels and indexes the
//! visible targets; each typed character is then fed to `consume`, which
//! resolves once two characters have been typed or as soon as a character
//! outside the label alphabet arrives.
//!
//! # Contract
//!
//! `consume` must only be called while the session is active. Calling it on an
//! inactive session is an integration bug and panics.

use serde::Serialize;

use super::index::JumpIndex;
use super::label::{is_label_char, LABEL_LEN};
use super::position::{Position, ViewportRect};
use super::scanner::{scan, AnchorMapper, ScanMode, VisibleLine};

/// Outcome of feeding one character to an active session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum Resolution {
    /// Partial label typed; highlight labels starting with this prefix
    AwaitingMore(String),
    /// Label matched; move the caret here
    Resolved(Position),
    /// A well-formed label that is not assigned to any target
    Unmatched,
    /// Session aborted by a key outside the label alphabet
    Cancelled,
}

impl Resolution {
    /// Whether this outcome ended the session
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Resolution::AwaitingMore(_))
    }
}

/// Session lifecycle state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Inactive,
    Active { index: JumpIndex, typed: String },
}

/// The jump mode session, owned by the host integration
#[derive(Debug, Default)]
pub struct JumpSession {
    state: SessionState,
}

impl JumpSession {
    /// Create an inactive session
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the visible lines and enter jump mode
    ///
    /// An already active session is reset first. Returns the index so the
    /// caller can render every label.
    pub fn activate(
        &mut self,
        lines: &[VisibleLine],
        viewport: ViewportRect,
        mode: ScanMode,
        anchors: &impl AnchorMapper,
    ) -> &JumpIndex {
        let targets = scan(lines, viewport, mode, anchors);
        self.activate_targets(targets)
    }

    /// Enter jump mode with already scanned targets in document order
    pub fn activate_targets(&mut self, targets: Vec<Position>) -> &JumpIndex {
        self.cancel();

        let index = JumpIndex::from_targets(targets);
        tracing::debug!(labels = index.len(), "jump mode activated");

        self.state = SessionState::Active {
            index,
            typed: String::with_capacity(LABEL_LEN),
        };

        match &self.state {
            SessionState::Active { index, .. } => index,
            SessionState::Inactive => unreachable!("state was just set to active"),
        }
    }

    /// Feed one typed character
    ///
    /// # Panics
    ///
    /// Panics if the session is not active.
    pub fn consume(&mut self, ch: char) -> Resolution {
        let SessionState::Active { index, typed } = &mut self.state else {
            panic!("JumpSession::consume called while inactive");
        };

        if !is_label_char(ch) {
            tracing::debug!(?ch, "non-label key, cancelling jump mode");
            self.deactivate();
            return Resolution::Cancelled;
        }

        typed.push(ch);
        if typed.chars().count() < LABEL_LEN {
            return Resolution::AwaitingMore(typed.clone());
        }

        let resolution = match index.lookup_str(typed.as_str()) {
            Some(position) => Resolution::Resolved(*position),
            None => Resolution::Unmatched,
        };
        tracing::debug!(label = %typed, ?resolution, "jump label resolved");

        self.deactivate();
        resolution
    }

    /// Leave jump mode; does nothing if already inactive
    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::debug!("jump mode cancelled");
            self.deactivate();
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Characters typed so far, if active
    pub fn typed_prefix(&self) -> Option<&str> {
        match &self.state {
            SessionState::Active { typed, .. } => Some(typed),
            SessionState::Inactive => None,
        }
    }

    /// Labels of the live session, if active
    pub fn index(&self) -> Option<&JumpIndex> {
        match &self.state {
            SessionState::Active { index, .. } => Some(index),
            SessionState::Inactive => None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    fn deactivate(&mut self) {
        self.state = SessionState::Inactive;
    }
}
