//! Error types for the todo service.
//!
//! # Design
//! `Error` is the single failure type flowing from the repository through the
//! service to the handlers. Only the handlers module knows how a variant maps
//! to an HTTP status. `StartupError` covers process bring-up in `main` and is
//! never seen by request handling.

use sea_orm::DbErr;

/// Failures surfaced by repository and service operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or missing input.
    #[error("{0}")]
    Validation(String),

    /// No live (non-deleted) record has the requested identifier.
    #[error("record not found")]
    NotFound,

    /// The underlying database call failed.
    #[error("storage error: {0}")]
    Storage(#[from] DbErr),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures while bringing the process up or serving.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database setup failed: {0}")]
    Database(#[from] DbErr),

    #[error("listener failed: {0}")]
    Io(#[from] std::io::Error),
}
