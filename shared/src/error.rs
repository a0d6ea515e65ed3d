//! Error types for wheel option and configuration handling

use thiserror::Error;
use validator::ValidationError;

/// Errors raised by option list edits and configuration checks.
///
/// Spin requests never produce these; see [`crate::engine::SpinRejection`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WheelError {
    #[error("Invalid option field: {0}")]
    InvalidField(#[from] ValidationError),

    #[error("No option at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("At least {min} options are required")]
    TooFewOptions { min: usize },

    #[error("Options cannot be changed while the wheel is spinning")]
    Spinning,

    #[error("Invalid spin configuration: {0}")]
    Config(String),
}

/// Result type alias for wheel operations
pub type Result<T> = std::result::Result<T, WheelError>;
