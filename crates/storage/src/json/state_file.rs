use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use mindset_core::model::UserState;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use super::mapping::UserStateDocument;
use crate::repository::{LoadWarning, LoadedState, StorageError, UserStateRepository};

/// User state persisted as a pretty-printed JSON document.
///
/// Writes land in a sibling `.tmp` file that is renamed over the target, so
/// an interrupted save leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonStateFile {
    path: PathBuf,
}

impl JsonStateFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    /// Where a corrupted document is moved so the next save cannot destroy it.
    #[must_use]
    pub fn corrupt_backup_path(&self) -> PathBuf {
        self.sibling_path(".corrupt")
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "user_data.json".into());
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn move_corrupt_aside(&self) -> Option<PathBuf> {
        let backup = self.corrupt_backup_path();
        match fs::rename(&self.path, &backup) {
            Ok(()) => {
                warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    "moved corrupted user data aside"
                );
                Some(backup)
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not move corrupted user data aside"
                );
                None
            }
        }
    }

    fn write_temp(&self, temp: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(temp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);
        fs::rename(temp, &self.path)
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn encode(state: &UserState) -> Result<Vec<u8>, StorageError> {
    let document = UserStateDocument::from_state(state);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    document
        .serialize(&mut serializer)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    buf.push(b'\n');
    Ok(buf)
}

impl UserStateRepository for JsonStateFile {
    fn load(&self) -> LoadedState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no user data yet; starting fresh");
                return LoadedState::default();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "user data unreadable");
                return LoadedState::discarded(LoadWarning::Unreadable {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        };

        match serde_json::from_str::<UserStateDocument>(&raw) {
            Ok(document) => {
                let state = document.into_state();
                debug!(
                    path = %self.path.display(),
                    entries = state.completed_entries().len(),
                    "loaded user data"
                );
                LoadedState::clean(state)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "user data corrupted");
                LoadedState::discarded(LoadWarning::Corrupt {
                    path: self.path.clone(),
                    reason: e.to_string(),
                    moved_to: self.move_corrupt_aside(),
                })
            }
        }
    }

    fn save(&self, state: &UserState) -> Result<(), StorageError> {
        let bytes = encode(state)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let temp = self.temp_path();
        if let Err(e) = self.write_temp(&temp, &bytes) {
            let _ = fs::remove_file(&temp);
            return Err(self.io_error(e));
        }

        debug!(
            path = %self.path.display(),
            entries = state.completed_entries().len(),
            "saved user data"
        );
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "removed user data");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
