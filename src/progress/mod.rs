//! Per-file learning progress
//!
//! Every vocabulary file gets a JSON sidecar (`<file>.progress.json`)
//! recording, for each entry, the state of the three learning sessions.
//! The whole document is rewritten on every mutation.

pub mod models;
pub mod store;

pub use models::{EntryRecord, SessionSlot, VocabularyProgress, SESSION_COUNT};
pub use store::{ProgressStore, ProgressStoreError};
