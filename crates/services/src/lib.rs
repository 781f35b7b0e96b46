#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod journal;
pub mod sessions;

pub use mindset_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, SessionError};
pub use journal::{JournalRow, journal_rows};
pub use sessions::{
    ChallengeSession, SessionEvent, SessionNotice, SessionProgress, SessionStatus, SessionUpdate,
};
