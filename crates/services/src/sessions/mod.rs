mod progress;
mod service;
mod status;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::SessionProgress;
pub use service::ChallengeSession;
pub use status::{SessionEvent, SessionNotice, SessionStatus, SessionUpdate};
