//! Starter catalog bundled into the binary.

use std::fs;
use std::path::{Path, PathBuf};

use storage::json::parse_catalog;
use storage::repository::CatalogLoadError;
use thiserror::Error;
use tracing::info;

const BUNDLED_CATALOG: &str = include_str!("../assets/challenges.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error("catalog already exists at {}; pass --force to overwrite it", .0.display())]
    AlreadyExists(PathBuf),
    #[error("bundled catalog is invalid: {0}")]
    Bundled(#[from] CatalogLoadError),
    #[error("could not write catalog to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Writes the bundled catalog to `path` and returns how many challenges it holds.
///
/// # Errors
///
/// Returns `SeedError::AlreadyExists` when `path` exists and `force` is false,
/// or `SeedError::Io` when the file cannot be written.
pub fn write_catalog(path: &Path, force: bool) -> Result<usize, SeedError> {
    if path.exists() && !force {
        return Err(SeedError::AlreadyExists(path.to_path_buf()));
    }
    let catalog = parse_catalog(BUNDLED_CATALOG, Path::new("<bundled>"))?;

    let io_err = |source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, BUNDLED_CATALOG).map_err(io_err)?;

    info!(path = %path.display(), challenges = catalog.len(), "wrote starter catalog");
    Ok(catalog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::json::JsonCatalogFile;
    use storage::repository::CatalogSource;
    use tempfile::TempDir;

    #[test]
    fn bundled_catalog_is_valid() {
        let catalog = parse_catalog(BUNDLED_CATALOG, Path::new("<bundled>")).unwrap();
        assert!(catalog.len() >= 10);
    }

    #[test]
    fn writes_then_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("challenges.json");

        let count = write_catalog(&path, false).unwrap();
        let loaded = JsonCatalogFile::new(&path).load_catalog().unwrap();
        assert_eq!(loaded.len(), count);

        assert!(matches!(
            write_catalog(&path, false),
            Err(SeedError::AlreadyExists(_))
        ));
        assert_eq!(write_catalog(&path, true).unwrap(), count);
    }
}
