use std::path::PathBuf;
use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use storage::repository::Storage;

use crate::error::AppServicesError;
use crate::sessions::{ChallengeSession, SessionUpdate};
use crate::Clock;

/// Assembles the storage backend and opens challenge sessions on it.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    storage: Storage,
}

impl AppServices {
    /// Build services backed by JSON documents on disk.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::SharedPath` if the catalog and the user data
    /// point at the same file, since saving progress would overwrite the catalog.
    pub fn new_json(
        catalog_path: impl Into<PathBuf>,
        state_path: impl Into<PathBuf>,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let catalog_path = catalog_path.into();
        let state_path = state_path.into();
        if catalog_path == state_path {
            return Err(AppServicesError::SharedPath(catalog_path));
        }
        Ok(Self::from_storage(Storage::json(catalog_path, state_path), clock))
    }

    /// Wrap an already-built storage aggregate.
    #[must_use]
    pub fn from_storage(storage: Storage, clock: Clock) -> Self {
        Self { clock, storage }
    }

    #[must_use]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Open a session with an OS-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Session` if the catalog cannot be loaded.
    pub fn open_session(&self) -> Result<(ChallengeSession, SessionUpdate), AppServicesError> {
        self.open_session_with_rng(StdRng::from_os_rng())
    }

    /// Open a session drawing challenges from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Session` if the catalog cannot be loaded.
    pub fn open_session_with_rng<R: Rng>(
        &self,
        rng: R,
    ) -> Result<(ChallengeSession<R>, SessionUpdate), AppServicesError> {
        let opened = ChallengeSession::start_with_rng(
            self.storage.catalog.as_ref(),
            Arc::clone(&self.storage.state),
            self.clock,
            rng,
        )?;
        Ok(opened)
    }
}
