use std::collections::HashSet;

use thiserror::Error;

use crate::model::challenge::Challenge;
use crate::model::ids::ChallengeId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("challenge catalog is empty")]
    Empty,

    #[error("challenge id {0} appears more than once in the catalog")]
    DuplicateId(ChallengeId),
}

/// The static, read-only set of all possible challenges.
///
/// A catalog is never empty and never contains two challenges with the same
/// id. Order follows the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    challenges: Vec<Challenge>,
}

impl Catalog {
    /// Builds a catalog from loaded challenges.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` when no challenges are given, or
    /// `CatalogError::DuplicateId` for the first repeated id.
    pub fn new(challenges: Vec<Challenge>) -> Result<Self, CatalogError> {
        if challenges.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(challenges.len());
        for challenge in &challenges {
            if !seen.insert(challenge.id()) {
                return Err(CatalogError::DuplicateId(challenge.id().clone()));
            }
        }

        Ok(Self { challenges })
    }

    #[must_use]
    pub fn find_by_id(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Challenge> {
        self.challenges.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }
}
