use mindset_core::model::{Catalog, CatalogError, ChallengeError, UserState};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Errors surfaced by storage adapters on write paths.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("i/o error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Why a persisted user-state document was discarded on load.
///
/// This is a side-channel report, not a failure: the caller still receives a
/// usable fresh state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadWarning {
    #[error(
        "user data at {} is corrupted ({reason}); {}",
        .path.display(),
        corrupt_outcome(.moved_to.as_deref())
    )]
    Corrupt {
        path: PathBuf,
        reason: String,
        /// Where the unreadable document was moved, if that succeeded.
        moved_to: Option<PathBuf>,
    },

    #[error("user data at {} could not be read ({reason}); starting with fresh data", .path.display())]
    Unreadable { path: PathBuf, reason: String },
}

fn corrupt_outcome(moved_to: Option<&Path>) -> String {
    match moved_to {
        Some(backup) => format!(
            "it was kept as {} and you are starting with fresh data",
            backup.display()
        ),
        None => "starting with fresh data; the file will be replaced on the next save".to_owned(),
    }
}

/// Result of loading user state: always a usable state, plus an optional warning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedState {
    pub state: UserState,
    pub warning: Option<LoadWarning>,
}

impl LoadedState {
    #[must_use]
    pub fn clean(state: UserState) -> Self {
        Self {
            state,
            warning: None,
        }
    }

    #[must_use]
    pub fn discarded(warning: LoadWarning) -> Self {
        Self {
            state: UserState::default(),
            warning: Some(warning),
        }
    }
}

/// Errors that make a catalog unusable. All of them are fatal for a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error("challenge catalog not found at {}", .path.display())]
    Missing { path: PathBuf },

    #[error("challenge catalog at {} could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("challenge catalog at {} is not valid JSON: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error(transparent)]
    Challenge(#[from] ChallengeError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Record store for the single user's state.
pub trait UserStateRepository: Send + Sync {
    /// Load the persisted state.
    ///
    /// A missing document yields a fresh state; a malformed one yields a
    /// fresh state together with a `LoadWarning`.
    fn load(&self) -> LoadedState;

    /// Persist the full state, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the state cannot be written.
    fn save(&self, state: &UserState) -> Result<(), StorageError>;

    /// Remove the persisted state. Removing an absent document succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if an existing document cannot be removed.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Read-only source of the challenge catalog.
pub trait CatalogSource: Send + Sync {
    /// Load the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` when the catalog is missing, malformed, empty,
    /// or contains invalid challenges.
    fn load_catalog(&self) -> Result<Catalog, CatalogLoadError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<Option<UserState>>>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with a persisted state.
    #[must_use]
    pub fn with_state(state: UserState) -> Self {
        Self {
            state: Arc::new(Mutex::new(Some(state))),
            fail_writes: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Make subsequent `save`/`clear` calls fail, simulating a read-only disk.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// The currently persisted state, if any document "exists".
    #[must_use]
    pub fn persisted(&self) -> Option<UserState> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn check_writable(&self) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("writes disabled".into()));
        }
        Ok(())
    }
}

impl UserStateRepository for InMemoryRepository {
    fn load(&self) -> LoadedState {
        LoadedState::clean(self.persisted().unwrap_or_default())
    }

    fn save(&self, state: &UserState) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.check_writable()?;
        let mut guard = self
            .state
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = None;
        Ok(())
    }
}

/// Catalog held in memory, for tests and embedded defaults.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for StaticCatalog {
    fn load_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        Ok(self.catalog.clone())
    }
}

/// Aggregates the state store and catalog source behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub state: Arc<dyn UserStateRepository>,
    pub catalog: Arc<dyn CatalogSource>,
}
