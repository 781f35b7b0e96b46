use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::challenge::Challenge;
use crate::model::ids::ChallengeId;
use crate::time::{format_timestamp, parse_timestamp};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Reflection validation failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("reflection cannot be empty")]
    EmptyReflection,
}

//
// ─── COMPLETED ENTRY ──────────────────────────────────────────────────────────
//

/// A persisted record of a challenge the user marked done.
///
/// `challenge_text` is a snapshot of the prompt at completion time, so later
/// catalog edits do not rewrite history. `date_completed` keeps the stored
/// text verbatim; use [`CompletedEntry::completed_at`] for the parsed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedEntry {
    challenge_id: ChallengeId,
    challenge_text: String,
    reflection: String,
    date_completed: String,
}

impl CompletedEntry {
    /// Records completion of `challenge` with the given reflection.
    ///
    /// The reflection is trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyReflection` if nothing remains after trimming.
    pub fn record(
        challenge: &Challenge,
        reflection: &str,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, EntryError> {
        let reflection = reflection.trim();
        if reflection.is_empty() {
            return Err(EntryError::EmptyReflection);
        }

        Ok(Self {
            challenge_id: challenge.id().clone(),
            challenge_text: challenge.text().to_owned(),
            reflection: reflection.to_owned(),
            date_completed: format_timestamp(completed_at),
        })
    }

    /// Rehydrates an entry from storage without validation.
    #[must_use]
    pub fn from_persisted(
        challenge_id: ChallengeId,
        challenge_text: String,
        reflection: String,
        date_completed: String,
    ) -> Self {
        Self {
            challenge_id,
            challenge_text,
            reflection,
            date_completed,
        }
    }

    #[must_use]
    pub fn challenge_id(&self) -> &ChallengeId {
        &self.challenge_id
    }

    #[must_use]
    pub fn challenge_text(&self) -> &str {
        &self.challenge_text
    }

    #[must_use]
    pub fn reflection(&self) -> &str {
        &self.reflection
    }

    /// The completion timestamp exactly as stored.
    #[must_use]
    pub fn date_completed(&self) -> &str {
        &self.date_completed
    }

    /// Parsed completion time, or `None` if the stored text is not a timestamp.
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn learn_skill() -> Challenge {
        Challenge::new(ChallengeId::new("c2"), "Learn a new skill", None).unwrap()
    }

    #[test]
    fn record_snapshots_challenge_and_trims_reflection() {
        let entry =
            CompletedEntry::record(&learn_skill(), "  Learned something new \n", fixed_now())
                .unwrap();

        assert_eq!(entry.challenge_id(), &ChallengeId::new("c2"));
        assert_eq!(entry.challenge_text(), "Learn a new skill");
        assert_eq!(entry.reflection(), "Learned something new");
        assert_eq!(entry.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn record_rejects_blank_reflection() {
        for blank in ["", "   ", "\n\t "] {
            let err = CompletedEntry::record(&learn_skill(), blank, fixed_now()).unwrap_err();
            assert_eq!(err, EntryError::EmptyReflection);
        }
    }

    #[test]
    fn persisted_entry_keeps_unparseable_date() {
        let entry = CompletedEntry::from_persisted(
            ChallengeId::new("c1"),
            "Try a new food".into(),
            "Did it!".into(),
            "last tuesday".into(),
        );
        assert_eq!(entry.date_completed(), "last tuesday");
        assert_eq!(entry.completed_at(), None);
    }
}
