use std::fmt;

use mindset_core::model::{Challenge, ChallengeId, CompletedEntry};
use storage::repository::LoadWarning;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

/// Where the session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    #[default]
    NoChallengeAssigned,
    ChallengeActive(Challenge),
    AllCompleted,
}

impl SessionStatus {
    #[must_use]
    pub fn active_challenge(&self) -> Option<&Challenge> {
        match self {
            SessionStatus::ChallengeActive(challenge) => Some(challenge),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, SessionStatus::ChallengeActive(_))
    }
}

//
// ─── EVENTS & NOTICES ──────────────────────────────────────────────────────────
//

/// Something a session operation did, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The persisted current challenge was found in the catalog.
    Resumed(ChallengeId),
    /// A fresh challenge was picked and persisted as current.
    Assigned(ChallengeId),
    /// No unseen challenge is left.
    Exhausted,
    /// A reflection was recorded.
    Completed(CompletedEntry),
    /// All progress was deleted.
    Reset,
}

/// A recoverable problem the presentation layer should surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionNotice {
    CorruptStateDiscarded(LoadWarning),
    SaveFailed(String),
    ClearFailed(String),
}

impl fmt::Display for SessionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionNotice::CorruptStateDiscarded(warning) => write!(f, "{warning}"),
            SessionNotice::SaveFailed(reason) => write!(
                f,
                "could not save your progress ({reason}); changes are kept for this session only"
            ),
            SessionNotice::ClearFailed(reason) => {
                write!(f, "could not delete the saved data file ({reason})")
            }
        }
    }
}

/// Explicit result of a session operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub events: Vec<SessionEvent>,
    pub notices: Vec<SessionNotice>,
}

impl SessionUpdate {
    /// The entry recorded by this update, if any.
    #[must_use]
    pub fn completed_entry(&self) -> Option<&CompletedEntry> {
        self.events.iter().find_map(|event| match event {
            SessionEvent::Completed(entry) => Some(entry),
            _ => None,
        })
    }
}
