//! Progress document models

use serde::{Deserialize, Serialize};

use crate::vocabulary::Vocabulary;

/// Fixed number of learning sessions per vocabulary file
pub const SESSION_COUNT: usize = 3;

/// State of one entry within one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSlot {
    /// Carried out of the session by the difficulty cut
    #[serde(default)]
    pub skipped: bool,

    /// Reached the configured correct-answer count
    #[serde(default)]
    pub learned: bool,

    #[serde(default)]
    pub correct_answers: u32,

    #[serde(default)]
    pub total_attempts: u32,
}

/// Progress of one vocabulary entry across the three sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    /// The entry's term; records are matched to vocabulary rows by it
    pub term: String,

    pub sessions: Vec<SessionSlot>,
}

impl EntryRecord {
    pub fn new(term: String) -> Self {
        Self {
            term,
            sessions: vec![SessionSlot::default(); SESSION_COUNT],
        }
    }

    fn pad_sessions(&mut self) {
        while self.sessions.len() < SESSION_COUNT {
            self.sessions.push(SessionSlot::default());
        }
    }
}

/// The progress document for one vocabulary file. Records are kept in
/// vocabulary order; synchronization rebuilds the list from the current
/// entry list, so removed entries drop out and new ones start blank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyProgress {
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

impl VocabularyProgress {
    /// Rebuild the record list in vocabulary order, carrying existing
    /// records over by term and padding every record to three sessions
    pub fn synchronize(&mut self, vocabulary: &Vocabulary) {
        let mut old = std::mem::take(&mut self.entries);

        self.entries = vocabulary
            .entries
            .iter()
            .map(|entry| {
                let mut record = old
                    .iter()
                    .position(|r| r.term == entry.term)
                    .map(|i| old.swap_remove(i))
                    .unwrap_or_else(|| EntryRecord::new(entry.term.clone()));
                record.pad_sessions();
                record
            })
            .collect();
    }

    pub fn record(&self, term: &str) -> Option<&EntryRecord> {
        self.entries.iter().find(|r| r.term == term)
    }

    pub fn record_mut(&mut self, term: &str) -> Option<&mut EntryRecord> {
        self.entries.iter_mut().find(|r| r.term == term)
    }

    /// Learned and total counts for one session, counting only entries
    /// the session actually covers (non-skipped)
    pub fn session_progress(&self, session_index: usize) -> (usize, usize) {
        if session_index >= SESSION_COUNT {
            return (0, 0);
        }

        let total = self
            .entries
            .iter()
            .filter(|r| r.sessions.len() > session_index && !r.sessions[session_index].skipped)
            .count();

        if total == 0 {
            return (0, 0);
        }

        let learned = self
            .entries
            .iter()
            .filter(|r| {
                r.sessions.len() > session_index
                    && !r.sessions[session_index].skipped
                    && r.sessions[session_index].learned
            })
            .count();

        (learned, total)
    }

    /// Mean attempt count over the entries a session covers, `None`
    /// before any attempt was recorded
    pub fn average_attempts(&self, session_index: usize) -> Option<f64> {
        if session_index >= SESSION_COUNT {
            return None;
        }

        let attempts: Vec<u32> = self
            .entries
            .iter()
            .filter(|r| r.sessions.len() > session_index && !r.sessions[session_index].skipped)
            .map(|r| r.sessions[session_index].total_attempts)
            .collect();

        let sum: u32 = attempts.iter().sum();
        if attempts.is_empty() || sum == 0 {
            return None;
        }

        Some(f64::from(sum) / attempts.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::VocabularyEntry;

    fn vocabulary(terms: &[&str]) -> Vocabulary {
        Vocabulary {
            file_name: "en.test.xlsx".to_string(),
            file_path: "en.test.xlsx".to_string(),
            entries: terms
                .iter()
                .map(|t| VocabularyEntry {
                    term: t.to_string(),
                    translation: format!("{}-translation", t),
                    ..Default::default()
                })
                .collect(),
            error_message: String::new(),
        }
    }

    #[test]
    fn test_synchronize_follows_vocabulary_order() {
        let mut progress = VocabularyProgress::default();
        progress.entries.push(EntryRecord::new("old".to_string()));
        let mut kept = EntryRecord::new("kept".to_string());
        kept.sessions[0].total_attempts = 7;
        progress.entries.push(kept);

        progress.synchronize(&vocabulary(&["new", "kept"]));

        let terms: Vec<&str> = progress.entries.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["new", "kept"]);
        assert_eq!(progress.record("kept").unwrap().sessions[0].total_attempts, 7);
        assert!(progress.record("old").is_none());
    }

    #[test]
    fn test_synchronize_pads_short_records_to_three_sessions() {
        let mut progress = VocabularyProgress::default();
        progress.entries.push(EntryRecord {
            term: "word".to_string(),
            sessions: vec![SessionSlot::default()],
        });

        progress.synchronize(&vocabulary(&["word"]));

        assert_eq!(progress.record("word").unwrap().sessions.len(), SESSION_COUNT);
    }

    #[test]
    fn test_session_progress_ignores_skipped_entries() {
        let mut progress = VocabularyProgress::default();
        progress.synchronize(&vocabulary(&["a", "b", "c", "d"]));

        progress.record_mut("a").unwrap().sessions[1].learned = true;
        progress.record_mut("b").unwrap().sessions[1].skipped = true;
        progress.record_mut("b").unwrap().sessions[1].learned = true;

        let (learned, total) = progress.session_progress(1);
        assert_eq!(learned, 1);
        assert_eq!(total, 3);
    }

    #[test]
    fn test_session_progress_out_of_range_or_empty() {
        let progress = VocabularyProgress::default();
        assert_eq!(progress.session_progress(0), (0, 0));
        assert_eq!(progress.session_progress(SESSION_COUNT), (0, 0));
    }

    #[test]
    fn test_average_attempts() {
        let mut progress = VocabularyProgress::default();
        progress.synchronize(&vocabulary(&["a", "b", "c"]));
        assert_eq!(progress.average_attempts(0), None);

        progress.record_mut("a").unwrap().sessions[0].total_attempts = 4;
        progress.record_mut("b").unwrap().sessions[0].total_attempts = 2;
        progress.record_mut("c").unwrap().sessions[0].skipped = true;

        assert_eq!(progress.average_attempts(0), Some(3.0));
    }
}
