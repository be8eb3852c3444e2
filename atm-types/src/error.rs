//! Error types for the ATM banking service.

/// Repository-level errors (data access failures).
///
/// The dispatch layer never branches on these; they pass straight through
/// to the caller as an application fault.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

/// Application-level errors (for HTTP responses).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(e) => AppError::Internal(e),
        }
    }
}
