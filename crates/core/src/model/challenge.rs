use thiserror::Error;

use crate::model::ids::ChallengeId;

/// Label shown for challenges that carry no category.
pub const DEFAULT_CATEGORY: &str = "General";

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChallengeError {
    #[error("challenge id cannot be empty")]
    EmptyId,

    #[error("challenge {0} has an empty prompt")]
    EmptyPrompt(ChallengeId),
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

/// A catalog entry presented to the user as a prompt to act on.
///
/// Challenges are immutable once loaded. A blank category is normalised to
/// `None` so callers only ever see a meaningful label or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    id: ChallengeId,
    text: String,
    category: Option<String>,
}

impl Challenge {
    /// Creates a challenge.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::EmptyId` if the id is blank, or
    /// `ChallengeError::EmptyPrompt` if the prompt text is blank.
    pub fn new(
        id: ChallengeId,
        text: impl Into<String>,
        category: Option<String>,
    ) -> Result<Self, ChallengeError> {
        if id.is_blank() {
            return Err(ChallengeError::EmptyId);
        }
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ChallengeError::EmptyPrompt(id));
        }
        let category = category.filter(|c| !c.trim().is_empty());

        Ok(Self { id, text, category })
    }

    #[must_use]
    pub fn id(&self) -> &ChallengeId {
        &self.id
    }

    /// The prompt text shown to the user.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Category for display, falling back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category().unwrap_or(DEFAULT_CATEGORY)
    }
}
