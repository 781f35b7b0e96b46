use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use mindset_core::model::{Catalog, Challenge};
use tracing::info;

use super::mapping::ChallengeDocument;
use crate::repository::{CatalogLoadError, CatalogSource};

/// Catalog read from a JSON array of `{id, challenge, category?}` objects.
#[derive(Debug, Clone)]
pub struct JsonCatalogFile {
    path: PathBuf,
}

impl JsonCatalogFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Parses catalog JSON text.
///
/// `origin` is only used to label errors.
///
/// # Errors
///
/// Returns `CatalogLoadError::Malformed` for invalid JSON, and the challenge or
/// catalog validation errors for blank fields, duplicates, or an empty list.
pub fn parse_catalog(raw: &str, origin: &Path) -> Result<Catalog, CatalogLoadError> {
    let documents: Vec<ChallengeDocument> =
        serde_json::from_str(raw).map_err(|e| CatalogLoadError::Malformed {
            path: origin.to_path_buf(),
            reason: e.to_string(),
        })?;

    let challenges = documents
        .into_iter()
        .map(ChallengeDocument::into_challenge)
        .collect::<Result<Vec<Challenge>, _>>()?;

    Ok(Catalog::new(challenges)?)
}

impl CatalogSource for JsonCatalogFile {
    fn load_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CatalogLoadError::Missing {
                    path: self.path.clone(),
                }
            } else {
                CatalogLoadError::Unreadable {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let catalog = parse_catalog(&raw, &self.path)?;
        info!(path = %self.path.display(), challenges = catalog.len(), "loaded challenge catalog");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mindset_core::model::{CatalogError, ChallengeError, ChallengeId};

    fn origin() -> &'static Path {
        Path::new("challenges.json")
    }

    #[test]
    fn parses_mixed_catalog() {
        let catalog = parse_catalog(
            r#"[
                {"id": "c1", "challenge": "Try a new food", "category": "Comfort Zone"},
                {"id": 2, "challenge": "Learn a new skill"}
            ]"#,
            origin(),
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        let second = catalog.find_by_id(&ChallengeId::new("2")).unwrap();
        assert_eq!(second.category_label(), "General");
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        let err = parse_catalog("[]", origin()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Catalog(CatalogError::Empty)));
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        let err = parse_catalog(r#"{"id": "c1"}"#, origin()).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Malformed { .. }));
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let err = parse_catalog(r#"[{"id": "c1", "challenge": "  "}]"#, origin()).unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Challenge(ChallengeError::EmptyPrompt(_))
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse_catalog(
            r#"[{"id": "c1", "challenge": "a"}, {"id": "c1", "challenge": "b"}]"#,
            origin(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            CatalogLoadError::Catalog(CatalogError::DuplicateId(_))
        ));
    }
}
