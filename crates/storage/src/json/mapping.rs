use mindset_core::model::{Challenge, ChallengeError, ChallengeId, CompletedEntry, UserState};
use serde::{Deserialize, Serialize};

/// Challenge ids as they appear on disk: hand-written catalogs often use
/// bare integers, everything this crate writes uses strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum IdDocument {
    Text(String),
    Number(i64),
}

impl IdDocument {
    pub(crate) fn into_id(self) -> ChallengeId {
        match self {
            IdDocument::Text(text) => ChallengeId::new(text),
            IdDocument::Number(n) => ChallengeId::new(n.to_string()),
        }
    }

    pub(crate) fn from_id(id: &ChallengeId) -> Self {
        IdDocument::Text(id.as_str().to_owned())
    }
}

/// One object in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ChallengeDocument {
    pub id: IdDocument,
    pub challenge: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ChallengeDocument {
    pub(crate) fn into_challenge(self) -> Result<Challenge, ChallengeError> {
        Challenge::new(self.id.into_id(), self.challenge, self.category)
    }
}

/// Persisted shape of the user-state document.
///
/// Both keys default when missing so older or hand-edited files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct UserStateDocument {
    #[serde(default)]
    pub completed_entries: Vec<CompletedEntryDocument>,
    #[serde(default)]
    pub current_challenge_id: Option<IdDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CompletedEntryDocument {
    pub challenge_id: IdDocument,
    pub challenge_text: String,
    pub reflection: String,
    pub date_completed: String,
}

impl UserStateDocument {
    pub(crate) fn from_state(state: &UserState) -> Self {
        Self {
            completed_entries: state
                .completed_entries()
                .iter()
                .map(|entry| CompletedEntryDocument {
                    challenge_id: IdDocument::from_id(entry.challenge_id()),
                    challenge_text: entry.challenge_text().to_owned(),
                    reflection: entry.reflection().to_owned(),
                    date_completed: entry.date_completed().to_owned(),
                })
                .collect(),
            current_challenge_id: state.current_challenge_id().map(IdDocument::from_id),
        }
    }

    pub(crate) fn into_state(self) -> UserState {
        let entries = self
            .completed_entries
            .into_iter()
            .map(|doc| {
                CompletedEntry::from_persisted(
                    doc.challenge_id.into_id(),
                    doc.challenge_text,
                    doc.reflection,
                    doc.date_completed,
                )
            })
            .collect();
        // A blank id means "nothing assigned", same as null.
        let current = self
            .current_challenge_id
            .map(IdDocument::into_id)
            .filter(|id| !id.is_blank());
        UserState::new(entries, current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_normalise() {
        let doc: ChallengeDocument =
            serde_json::from_str(r#"{"id": 7, "challenge": "Ask for feedback"}"#).unwrap();
        let challenge = doc.into_challenge().unwrap();
        assert_eq!(challenge.id().as_str(), "7");
        assert_eq!(challenge.category(), None);
    }

    #[test]
    fn challenge_document_keeps_all_three_fields() {
        let raw = r#"{"id":"c2","challenge":"Learn a new skill","category":"Learning"}"#;
        let doc: ChallengeDocument = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&doc).unwrap(), raw);
    }

    #[test]
    fn missing_keys_default() {
        let doc: UserStateDocument = serde_json::from_str("{}").unwrap();
        let state = doc.into_state();
        assert!(state.completed_entries().is_empty());
        assert!(state.current_challenge_id().is_none());
    }

    #[test]
    fn blank_current_id_reads_as_none() {
        let doc: UserStateDocument =
            serde_json::from_str(r#"{"completed_entries": [], "current_challenge_id": ""}"#)
                .unwrap();
        assert!(doc.into_state().current_challenge_id().is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc: UserStateDocument = serde_json::from_str(
            r#"{"current_challenge_id": "c3", "theme": "dark", "completed_entries": []}"#,
        )
        .unwrap();
        assert_eq!(
            doc.into_state().current_challenge_id(),
            Some(&ChallengeId::new("c3"))
        );
    }
}
