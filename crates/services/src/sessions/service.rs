use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use mindset_core::model::{Catalog, Challenge, ChallengeId, CompletedEntry, UserState};
use mindset_core::selector::pick_next_avoiding;
use storage::repository::{CatalogSource, UserStateRepository};

use super::progress::SessionProgress;
use super::status::{SessionEvent, SessionNotice, SessionStatus, SessionUpdate};
use crate::error::SessionError;
use crate::journal::{JournalRow, journal_rows};
use crate::Clock;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Challenge session for the single user.
///
/// Owns the catalog, the in-memory `UserState` and the random source. Every
/// mutation is persisted through the store right away; when a write fails the
/// in-memory state stays authoritative and the failure is reported as a
/// `SessionNotice` on the returned update.
pub struct ChallengeSession<R = StdRng> {
    clock: Clock,
    catalog: Catalog,
    store: Arc<dyn UserStateRepository>,
    rng: R,
    user_state: UserState,
    status: SessionStatus,
}

impl ChallengeSession<StdRng> {
    /// Start a session with an OS-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` if the catalog cannot be loaded.
    pub fn start(
        catalogs: &dyn CatalogSource,
        store: Arc<dyn UserStateRepository>,
        clock: Clock,
    ) -> Result<(Self, SessionUpdate), SessionError> {
        Self::start_with_rng(catalogs, store, clock, StdRng::from_os_rng())
    }
}

impl<R: Rng> ChallengeSession<R> {
    /// Start a session: load the catalog and the persisted state, then resolve
    /// the current challenge.
    ///
    /// A corrupted state document does not stop the session; it shows up as
    /// `SessionNotice::CorruptStateDiscarded` on the returned update.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` if the catalog cannot be loaded.
    pub fn start_with_rng(
        catalogs: &dyn CatalogSource,
        store: Arc<dyn UserStateRepository>,
        clock: Clock,
        rng: R,
    ) -> Result<(Self, SessionUpdate), SessionError> {
        let catalog = catalogs.load_catalog()?;
        let loaded = store.load();

        let mut session = Self {
            clock,
            catalog,
            store,
            rng,
            user_state: loaded.state,
            status: SessionStatus::NoChallengeAssigned,
        };

        let mut update = SessionUpdate::default();
        if let Some(warning) = loaded.warning {
            update
                .notices
                .push(SessionNotice::CorruptStateDiscarded(warning));
        }
        session.resolve_into(&mut update);
        Ok((session, update))
    }

    #[must_use]
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    #[must_use]
    pub fn current_challenge(&self) -> Option<&Challenge> {
        self.status.active_challenge()
    }

    #[must_use]
    pub fn user_state(&self) -> &UserState {
        &self.user_state
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let completed = self.user_state.completed_ids();
        let done = self
            .catalog
            .iter()
            .filter(|c| completed.contains(c.id()))
            .count();
        SessionProgress::new(self.catalog.len(), done)
    }

    /// Past reflections, newest first when every timestamp parses.
    #[must_use]
    pub fn journal(&self) -> Vec<JournalRow> {
        journal_rows(self.user_state.completed_entries())
    }

    /// Resume the persisted current challenge, or assign a new one if none is
    /// set or the id no longer exists in the catalog.
    pub fn resolve_current(&mut self) -> SessionUpdate {
        let mut update = SessionUpdate::default();
        self.resolve_into(&mut update);
        update
    }

    /// Pick a fresh unseen challenge and persist it as current.
    pub fn assign_new(&mut self) -> SessionUpdate {
        let mut update = SessionUpdate::default();
        self.assign_into(None, &mut update);
        update
    }

    /// Record a reflection for the active challenge, then move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveChallenge` when nothing is active, and
    /// `SessionError::EmptyReflection` when the text is blank. Neither changes
    /// any state.
    pub fn complete(&mut self, reflection: &str) -> Result<SessionUpdate, SessionError> {
        let SessionStatus::ChallengeActive(challenge) = &self.status else {
            return Err(SessionError::NoActiveChallenge);
        };
        let entry = CompletedEntry::record(challenge, reflection, self.clock.now())?;

        info!(challenge_id = %entry.challenge_id(), "challenge completed");
        self.user_state.push_entry(entry.clone());

        let mut update = SessionUpdate::default();
        update.events.push(SessionEvent::Completed(entry));
        // The assignment below persists the new entry together with the next challenge.
        self.assign_into(None, &mut update);
        Ok(update)
    }

    /// Move to a different challenge without recording anything.
    ///
    /// The current challenge is only offered again when it is the last unseen one.
    pub fn skip(&mut self) -> SessionUpdate {
        let current = self.user_state.current_challenge_id().cloned();
        debug!(skipped = ?current, "skipping challenge");
        let mut update = SessionUpdate::default();
        self.assign_into(current, &mut update);
        update
    }

    /// Delete all progress and start over.
    ///
    /// Callers are expected to have confirmed this with the user.
    pub fn reset_all(&mut self) -> SessionUpdate {
        let mut update = SessionUpdate::default();
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to remove user data");
            update.notices.push(SessionNotice::ClearFailed(e.to_string()));
        }
        self.user_state = UserState::default();
        self.status = SessionStatus::NoChallengeAssigned;
        info!("all progress reset");
        update.events.push(SessionEvent::Reset);

        self.resolve_into(&mut update);
        update
    }

    fn resolve_into(&mut self, update: &mut SessionUpdate) {
        if let Some(id) = self.user_state.current_challenge_id() {
            if let Some(challenge) = self.catalog.find_by_id(id) {
                debug!(challenge_id = %id, "resuming current challenge");
                update.events.push(SessionEvent::Resumed(id.clone()));
                self.status = SessionStatus::ChallengeActive(challenge.clone());
                return;
            }
            // Dangling reference: reassign without recording the old one.
            debug!(challenge_id = %id, "current challenge not in catalog; reassigning");
        }
        self.assign_into(None, update);
    }

    fn assign_into(&mut self, avoid: Option<ChallengeId>, update: &mut SessionUpdate) {
        let completed = self.user_state.completed_ids();
        let picked =
            pick_next_avoiding(&self.catalog, &completed, avoid.as_ref(), &mut self.rng).cloned();

        match picked {
            Some(challenge) => {
                info!(challenge_id = %challenge.id(), "assigned challenge");
                self.user_state.set_current(Some(challenge.id().clone()));
                update
                    .events
                    .push(SessionEvent::Assigned(challenge.id().clone()));
                self.status = SessionStatus::ChallengeActive(challenge);
            }
            None => {
                info!("all challenges completed");
                self.user_state.set_current(None);
                update.events.push(SessionEvent::Exhausted);
                self.status = SessionStatus::AllCompleted;
            }
        }
        self.persist(update);
    }

    fn persist(&self, update: &mut SessionUpdate) {
        if let Err(e) = self.store.save(&self.user_state) {
            warn!(error = %e, "failed to save user data");
            update.notices.push(SessionNotice::SaveFailed(e.to_string()));
        }
    }
}
