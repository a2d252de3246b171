//! wordjump - jump to any visible word by typing a two-letter label
//!
//! The core engine lives in [`jump`]: it scans the visible lines for word
//! starts, labels them `aa`, `ab`, ... in document order and resolves typed
//! labels to document offsets. The remaining modules are a small host around
//! it: a rope-backed editor view, keystroke routing, the label overlay and
//! configuration.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod controller;
pub mod editor;
pub mod jump;
pub mod keys;
pub mod overlay;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::JumpConfig;
pub use controller::{JumpController, KeyDispatch, KeystrokeSource, ScriptedKeys};
pub use jump::{JumpIndex, JumpSession, Position, Resolution, ScanMode};
