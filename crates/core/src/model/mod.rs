mod catalog;
mod challenge;
mod entry;
mod ids;
mod user_state;

pub use ids::{ChallengeId, ParseIdError};

pub use catalog::{Catalog, CatalogError};
pub use challenge::{Challenge, ChallengeError, DEFAULT_CATEGORY};
pub use entry::{CompletedEntry, EntryError};
pub use user_state::UserState;
