//! Learning session models

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::vocabulary::VocabularyEntry;

/// In-memory state of the running session
#[derive(Debug, Clone, Default)]
pub struct LearnSession {
    /// Which of the three sessions is running (0..=2)
    pub session_index: usize,

    /// Terms the session covers: neither learned nor cut by the
    /// difficulty carry-over when the session was built
    pub entries: HashSet<String>,

    /// The exercise queue currently cycling
    pub queue: Vec<String>,
    pub queue_index: usize,

    /// Set when the previous answer learned the current entry; the next
    /// advance then holds its position, because the learned entry was
    /// already removed from the queue
    pub last_learned: bool,

    /// All entries of the vocabulary file
    pub total_entries: usize,

    /// Entries the session no longer serves (learned or carried out)
    pub learned_entries: usize,
}

/// Session counters sent along with every served entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub queue_index: usize,
    pub queue_count: usize,
    pub learned_entries: usize,
    pub total_entries: usize,
}

/// One vocabulary entry joined with its progress in the running session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryView {
    pub entry: VocabularyEntry,
    pub learned: bool,
    pub last_attempt_correct: bool,
    pub correct_answers: u32,
    pub total_attempts: u32,
    pub session: SessionSnapshot,
}
