//! Domain-level error types.

use thiserror::Error;

/// Repository-level errors.
///
/// The in-memory store never returns one of these; they exist so a
/// persistent backend can report failures through the same port.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
