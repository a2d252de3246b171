//! Jump-to-visible-word engine
//!
//! # Architecture
//!
//! ```text
//! VisibleLine[] → scan() → Position[] → JumpIndex::from_targets() → JumpSession
//!                                          ↑ generate_labels()
//! ```
//!
//! The engine is synchronous and holds no global state. The host owns a
//! [`JumpSession`] and feeds it characters while it is active.

mod error;
mod index;
mod label;
mod position;
mod scanner;
mod session;

pub use error::JumpError;
pub use index::JumpIndex;
pub use label::{
    generate_labels, is_label_char, is_valid_label, Label, ALPHABET, ALPHABET_SIZE, LABEL_LEN,
    MAX_LABELS,
};
pub use position::{Point, Position, ViewportRect};
pub use scanner::{scan, scan_lines, word_starts, AnchorMapper, ScanMode, VisibleLine};
pub use session::{JumpSession, Resolution, SessionState};
