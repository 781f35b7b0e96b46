use std::collections::HashSet;

use crate::model::entry::CompletedEntry;
use crate::model::ids::ChallengeId;

/// Everything persisted for the single user: the journal and the active challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    completed_entries: Vec<CompletedEntry>,
    current_challenge_id: Option<ChallengeId>,
}

impl UserState {
    #[must_use]
    pub fn new(
        completed_entries: Vec<CompletedEntry>,
        current_challenge_id: Option<ChallengeId>,
    ) -> Self {
        Self {
            completed_entries,
            current_challenge_id,
        }
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn completed_entries(&self) -> &[CompletedEntry] {
        &self.completed_entries
    }

    #[must_use]
    pub fn current_challenge_id(&self) -> Option<&ChallengeId> {
        self.current_challenge_id.as_ref()
    }

    /// Ids of every challenge that has a completed entry.
    #[must_use]
    pub fn completed_ids(&self) -> HashSet<ChallengeId> {
        self.completed_entries
            .iter()
            .map(|e| e.challenge_id().clone())
            .collect()
    }

    pub fn push_entry(&mut self, entry: CompletedEntry) {
        self.completed_entries.push(entry);
    }

    pub fn set_current(&mut self, id: Option<ChallengeId>) {
        self.current_challenge_id = id;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.completed_entries.is_empty() && self.current_challenge_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> CompletedEntry {
        CompletedEntry::from_persisted(
            ChallengeId::new(id),
            format!("prompt {id}"),
            "done".into(),
            "2024-01-01T10:00:00".into(),
        )
    }

    #[test]
    fn completed_ids_deduplicate_repeats() {
        let state = UserState::new(vec![entry("c1"), entry("c2"), entry("c1")], None);
        let ids = state.completed_ids();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&ChallengeId::new("c1")));
        assert!(ids.contains(&ChallengeId::new("c2")));
    }

    #[test]
    fn push_entry_preserves_insertion_order() {
        let mut state = UserState::default();
        state.push_entry(entry("c3"));
        state.push_entry(entry("c1"));
        let order: Vec<_> = state
            .completed_entries()
            .iter()
            .map(|e| e.challenge_id().as_str())
            .collect();
        assert_eq!(order, ["c3", "c1"]);
    }

    #[test]
    fn default_state_is_empty() {
        let mut state = UserState::default();
        assert!(state.is_empty());
        state.set_current(Some(ChallengeId::new("c1")));
        assert!(!state.is_empty());
    }
}
