//! Error handling for layer clipping.
//!
//! Only one failure kind exists: the polygon engine reporting that it
//! could not complete a boolean step. Geometric degeneracy (zero-area
//! parts, too-thin regions) is not an error and surfaces as empty
//! results instead.

use thiserror::Error;

/// Clipping error type.
#[derive(Error, Debug, Clone)]
pub enum ClipError {
    /// The polygon engine could not complete an operation, e.g. on
    /// malformed input topology. Final for the current call; there is
    /// no retry at this level.
    #[error("polygon engine operation failed: {0}")]
    Engine(String),
}

/// Result type using [`ClipError`].
pub type Result<T> = std::result::Result<T, ClipError>;
