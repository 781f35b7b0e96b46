//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use mindset_core::model::EntryError;
use storage::repository::CatalogLoadError;

/// Errors emitted by the challenge session.
///
/// `Catalog` is fatal: a session cannot start without challenges. The other
/// variants are user-correctable and leave the session untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("please write a reflection before saving")]
    EmptyReflection,
    #[error("no challenge is active")]
    NoActiveChallenge,
    #[error(transparent)]
    Catalog(#[from] CatalogLoadError),
}

impl From<EntryError> for SessionError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::EmptyReflection => Self::EmptyReflection,
        }
    }
}

/// Errors emitted while assembling app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("catalog and user data cannot share the file {}", .0.display())]
    SharedPath(PathBuf),
    #[error(transparent)]
    Session(#[from] SessionError),
}
