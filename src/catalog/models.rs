//! Catalog data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

use crate::progress::SESSION_COUNT;

/// Summary of one session of one vocabulary file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// When the session was last started or advanced; `None` until the
    /// session has ever run
    pub last_updated: Option<DateTime<Utc>>,

    #[serde(default)]
    pub learned_entries: usize,

    #[serde(default)]
    pub total_entries: usize,

    /// Mean attempts per covered entry, fed from the progress document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_attempts: Option<f64>,
}

impl SessionSummary {
    pub fn update(
        &mut self,
        last_updated: Option<DateTime<Utc>>,
        learned_entries: usize,
        total_entries: usize,
        average_attempts: Option<f64>,
    ) {
        self.last_updated = last_updated;
        self.learned_entries = learned_entries;
        self.total_entries = total_entries;
        self.average_attempts = average_attempts;
    }

    /// `learned/total`, or `-/-` before the session has ever run
    pub fn display(&self) -> String {
        match self.last_updated {
            Some(_) => format!("{}/{}", self.learned_entries, self.total_entries),
            None => "-/-".to_string(),
        }
    }
}

/// One registered vocabulary file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyRef {
    /// Unique identifier
    pub id: Uuid,

    /// Absolute path of the `.xlsx` file
    pub file_path: String,

    /// Derived from the path; refreshed on every load
    #[serde(default)]
    pub file_name: String,

    /// Last validation failure, empty when the file is usable
    #[serde(default)]
    pub error_message: String,

    #[serde(default)]
    pub sessions: Vec<SessionSummary>,
}

impl VocabularyRef {
    pub fn new(file_path: String) -> Self {
        let mut vocabulary_ref = Self {
            id: Uuid::new_v4(),
            file_name: String::new(),
            file_path,
            error_message: String::new(),
            sessions: Vec::new(),
        };
        vocabulary_ref.ensure_valid();
        vocabulary_ref
    }

    /// Re-derive the file name and pad the summaries to three sessions;
    /// run after deserialization
    pub fn ensure_valid(&mut self) {
        self.file_name = Path::new(&self.file_path)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        while self.sessions.len() < SESSION_COUNT {
            self.sessions.push(SessionSummary::default());
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Most recent session timestamp across the three slots
    pub fn last_session_time(&self) -> Option<DateTime<Utc>> {
        self.sessions.iter().filter_map(|s| s.last_updated).max()
    }

    /// A later session is outdated when an earlier one ran more recently
    pub fn session_outdated(&self, session_index: usize) -> bool {
        if session_index == 0 || session_index >= self.sessions.len() {
            return false;
        }

        self.sessions[session_index - 1].last_updated > self.sessions[session_index].last_updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_ref_is_padded_and_named() {
        let vocabulary_ref = VocabularyRef::new("/data/en.food.xlsx".to_string());
        assert_eq!(vocabulary_ref.file_name, "en.food.xlsx");
        assert_eq!(vocabulary_ref.sessions.len(), SESSION_COUNT);
        assert!(!vocabulary_ref.has_errors());
    }

    #[test]
    fn test_session_display() {
        let mut summary = SessionSummary::default();
        assert_eq!(summary.display(), "-/-");

        summary.update(Some(Utc::now()), 5, 13, Some(2.5));
        assert_eq!(summary.display(), "5/13");
    }

    #[test]
    fn test_session_outdated() {
        let mut vocabulary_ref = VocabularyRef::new("/data/en.food.xlsx".to_string());
        let earlier = Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 1, 12, 8, 0, 0).unwrap();

        vocabulary_ref.sessions[0].last_updated = Some(later);
        vocabulary_ref.sessions[1].last_updated = Some(earlier);

        assert!(!vocabulary_ref.session_outdated(0));
        assert!(vocabulary_ref.session_outdated(1));
        // session 3 never ran, session 2 did
        assert!(vocabulary_ref.session_outdated(2));
        assert_eq!(vocabulary_ref.last_session_time(), Some(later));
    }
}
