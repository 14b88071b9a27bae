//! # Layer Error Types
//!
//! All errors that can occur when a pipeline is assembled.
//!
//! Queries never fail: once a pipeline constructs successfully, every
//! `get(x, z)` returns a valid value. Anything wrong with a pipeline is
//! caught here, at construction time.

use thiserror::Error;

/// Errors that can occur while assembling a layer pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    /// A source layer was given no candidate values to pick from.
    #[error("source layer has no candidate values")]
    EmptyCandidates,

    /// A binary combinator was given operands at different resolutions.
    #[error("operand resolutions differ: primary x{primary}, secondary x{secondary}")]
    ScaleMismatch {
        /// Magnification of the primary operand.
        primary: u32,
        /// Magnification of the secondary operand.
        secondary: u32,
    },

    /// A pipeline recipe failed validation.
    #[error("invalid pipeline recipe: {0}")]
    InvalidConfig(String),
}

/// Result type for pipeline construction.
pub type LayerResult<T> = Result<T, LayerError>;
