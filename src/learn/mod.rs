//! The learning loop
//!
//! Session scheduling over one vocabulary file: which entries belong to
//! the active session, how difficult entries carry over between the
//! three session slots, how the exercise queue advances and refills as
//! entries are learned, and when an entry counts as learned.

pub mod models;
pub mod service;

pub use models::{EntryView, LearnSession, SessionSnapshot};
pub use service::{LearnError, LearnService};
