//! Errors raised by label generation and index construction

use std::fmt;

use super::label::Label;

/// Errors that can occur while building labels or a jump index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpError {
    /// Label count was negative or not representable
    InvalidArgument(String),
    /// More labels were requested than the alphabet can produce
    OutOfCapacity { requested: usize, capacity: usize },
    /// A string that is not a two-letter label
    InvalidLabel(String),
    /// Positions and labels must pair up one to one
    LengthMismatch { positions: usize, labels: usize },
    /// The same label was given for two positions
    DuplicateLabel(Label),
}

impl fmt::Display for JumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            JumpError::OutOfCapacity {
                requested,
                capacity,
            } => write!(
                f,
                "Cannot generate {} labels (capacity is {})",
                requested, capacity
            ),
            JumpError::InvalidLabel(label) => write!(f, "Invalid label: {:?}", label),
            JumpError::LengthMismatch { positions, labels } => write!(
                f,
                "Length mismatch: {} positions but {} labels",
                positions, labels
            ),
            JumpError::DuplicateLabel(label) => write!(f, "Duplicate label: {}", label),
        }
    }
}

impl std::error::Error for JumpError {}
