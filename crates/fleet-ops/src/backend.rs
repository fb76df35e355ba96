//! Error kinds shared by every data-access contract with the managed backend.

/// Failure taxonomy for repository calls.
///
/// `Unavailable` covers transport and backend faults (timeout, 5xx, expired
/// session); the caller surfaces it and the user re-triggers the action.
/// There is no automatic retry anywhere in this crate.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}
