#![forbid(unsafe_code)]

pub mod model;
pub mod selector;
pub mod time;

pub use time::Clock;
