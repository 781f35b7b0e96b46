//! Challenge selection.
//!
//! Picks are uniform over the challenges the user has not completed yet.
//! Nothing is remembered between calls; the caller owns the random source so
//! tests can pass a seeded generator.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::{Catalog, Challenge, ChallengeId};

/// Challenges whose ids are not in `completed`, in catalog order.
#[must_use]
pub fn available<'a>(catalog: &'a Catalog, completed: &HashSet<ChallengeId>) -> Vec<&'a Challenge> {
    catalog
        .iter()
        .filter(|c| !completed.contains(c.id()))
        .collect()
}

/// Picks an unseen challenge uniformly at random.
///
/// Returns `None` when every catalog challenge is in `completed` (exhaustion).
pub fn pick_next<'a, R>(
    catalog: &'a Catalog,
    completed: &HashSet<ChallengeId>,
    rng: &mut R,
) -> Option<&'a Challenge>
where
    R: Rng + ?Sized,
{
    available(catalog, completed).choose(rng).copied()
}

/// Like [`pick_next`], but prefers any candidate other than `avoid`.
///
/// `avoid` is only returned when it is the sole unseen challenge left.
pub fn pick_next_avoiding<'a, R>(
    catalog: &'a Catalog,
    completed: &HashSet<ChallengeId>,
    avoid: Option<&ChallengeId>,
    rng: &mut R,
) -> Option<&'a Challenge>
where
    R: Rng + ?Sized,
{
    let candidates = available(catalog, completed);
    let Some(avoid) = avoid else {
        return candidates.choose(rng).copied();
    };

    let others: Vec<&Challenge> = candidates
        .iter()
        .copied()
        .filter(|c| c.id() != avoid)
        .collect();
    if others.is_empty() {
        candidates.choose(rng).copied()
    } else {
        others.choose(rng).copied()
    }
}
