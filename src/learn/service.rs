//! Learn service
//!
//! Owns the loaded vocabulary, its progress document and the running
//! session, and is the only writer of both JSON files while a session
//! runs. Everything here is synchronous; the GUI calls in through the
//! command layer one event at a time.

use std::collections::HashSet;

use crate::catalog::{CatalogError, CatalogStore, VocabularyRef};
use crate::progress::{ProgressStore, ProgressStoreError, VocabularyProgress, SESSION_COUNT};
use crate::settings::LearnSettings;
use crate::vocabulary::{Vocabulary, VocabularySource};

use super::models::{EntryView, LearnSession, SessionSnapshot};

#[derive(Debug, thiserror::Error)]
pub enum LearnError {
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    #[error("Invalid session index: {0}")]
    InvalidSession(usize),

    #[error("No active session")]
    NoActiveSession,

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Progress error: {0}")]
    Progress(#[from] ProgressStoreError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

type Result<T> = std::result::Result<T, LearnError>;

pub struct LearnService<R: VocabularySource> {
    settings: LearnSettings,
    reader: R,
    progress_store: ProgressStore,
    catalog: CatalogStore,

    vocabulary: Option<Vocabulary>,
    progress: VocabularyProgress,
    session: Option<LearnSession>,
}

impl<R: VocabularySource> LearnService<R> {
    pub fn new(settings: LearnSettings, reader: R, catalog: CatalogStore) -> Self {
        Self {
            settings,
            reader,
            progress_store: ProgressStore,
            catalog,
            vocabulary: None,
            progress: VocabularyProgress::default(),
            session: None,
        }
    }

    // ===== Vocabulary list =====

    /// Load the catalog and re-validate every registered file, so stale
    /// error messages clear and new problems surface
    pub fn load_vocabulary_list(&mut self) -> Result<Vec<VocabularyRef>> {
        let paths: Vec<String> = self
            .catalog
            .load()?
            .iter()
            .map(|v| v.file_path.clone())
            .collect();

        for path in paths {
            let (_, error_message) = self.load_and_check(&path);
            self.catalog.set_error_message(&path, error_message);
        }

        Ok(self.catalog.list().to_vec())
    }

    /// The cached catalog, as of the last load
    pub fn vocabulary_list(&self) -> Vec<VocabularyRef> {
        self.catalog.list().to_vec()
    }

    /// Register a vocabulary file. Validation failures still register
    /// the file; the error shows up on its catalog row.
    pub fn add_vocabulary_file(&mut self, file_path: &str) -> Result<VocabularyRef> {
        let (_, error_message) = self.load_and_check(file_path);

        let mut vocabulary_ref = VocabularyRef::new(file_path.to_string());
        vocabulary_ref.error_message = error_message;

        self.catalog.add_and_save(vocabulary_ref.clone())?;
        Ok(vocabulary_ref)
    }

    pub fn remove_vocabulary_file(&mut self, file_path: &str) -> Result<()> {
        self.catalog.remove_and_save(file_path)?;
        Ok(())
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Load a vocabulary and run the registration checks; the second
    /// part of the pair is the validation message, empty when usable
    fn load_and_check(&self, file_path: &str) -> (Vocabulary, String) {
        let vocabulary = self.reader.load(file_path);

        if vocabulary.has_errors() {
            let message = vocabulary.error_message.clone();
            return (vocabulary, message);
        }

        if vocabulary.entries.is_empty() {
            return (vocabulary, "Contains no entries.".to_string());
        }

        let has_valid_entries = vocabulary
            .entries
            .iter()
            .any(|e| !e.term.trim().is_empty() && !e.translation.trim().is_empty());
        if !has_valid_entries {
            return (vocabulary, "Contains no valid entries.".to_string());
        }

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &vocabulary.entries {
            if !seen.insert(entry.term.clone()) && !duplicates.contains(&entry.term) {
                duplicates.push(entry.term.clone());
            }
        }
        if !duplicates.is_empty() {
            return (vocabulary, format!("Duplicates: {}", duplicates.join(", ")));
        }

        (vocabulary, String::new())
    }

    // ===== Session lifecycle =====

    /// Start (or continue) one of the three sessions of a vocabulary
    /// file; returns the loaded vocabulary on success
    pub fn start_session(
        &mut self,
        file_path: &str,
        session_index: usize,
        continue_session: bool,
    ) -> Result<Vocabulary> {
        let (vocabulary, error_message) = self.load_and_check(file_path);
        if !error_message.is_empty() {
            return Err(LearnError::Vocabulary(error_message));
        }

        let mut progress = self.progress_store.load(file_path)?;
        progress.synchronize(&vocabulary);
        self.progress_store.save(file_path, &progress)?;

        self.vocabulary = Some(vocabulary.clone());
        self.progress = progress;

        self.load_session(session_index, continue_session)?;

        log::info!(
            "Started session {} of {} (continue: {})",
            session_index + 1,
            vocabulary.file_name,
            continue_session
        );
        Ok(vocabulary)
    }

    /// Build the in-memory session over the loaded progress document
    pub(crate) fn load_session(
        &mut self,
        session_index: usize,
        continue_session: bool,
    ) -> Result<()> {
        if session_index >= SESSION_COUNT {
            return Err(LearnError::InvalidSession(session_index));
        }

        let file_path = self
            .vocabulary
            .as_ref()
            .map(|v| v.file_path.clone())
            .ok_or(LearnError::NoActiveSession)?;

        if !continue_session {
            for record in &mut self.progress.entries {
                record.sessions[session_index].skipped = false;
                record.sessions[session_index].learned = false;
            }

            if session_index > 0 {
                self.carry_over_difficult_entries(session_index);
            }
        }

        // The active set: entries the session still has to serve
        let active: Vec<String> = self
            .progress
            .entries
            .iter()
            .filter(|r| {
                let slot = &r.sessions[session_index];
                if continue_session {
                    !slot.skipped && !slot.learned
                } else {
                    !slot.skipped
                }
            })
            .map(|r| r.term.clone())
            .collect();

        let total_entries = self.progress.entries.len();
        self.session = Some(LearnSession {
            session_index,
            queue: active
                .iter()
                .take(self.settings.exercise_size)
                .cloned()
                .collect(),
            queue_index: 0,
            last_learned: false,
            learned_entries: total_entries - active.len(),
            total_entries,
            entries: active.into_iter().collect(),
        });

        if !continue_session {
            self.progress_store.save(&file_path, &self.progress)?;
            self.update_catalog_session(&file_path, session_index)?;
        }

        Ok(())
    }

    /// The carry-over cut: entries skipped in the previous session stay
    /// skipped; of the rest, only the most-attempted ones (the
    /// configured percentage) stay in, everything else is marked
    /// skipped for this session
    fn carry_over_difficult_entries(&mut self, session_index: usize) {
        let previous = session_index - 1;

        for record in &mut self.progress.entries {
            if record.sessions[previous].skipped {
                record.sessions[session_index].skipped = true;
            }
        }

        let mut candidates: Vec<(String, u32)> = self
            .progress
            .entries
            .iter()
            .filter(|r| !r.sessions[previous].skipped)
            .map(|r| (r.term.clone(), r.sessions[previous].total_attempts))
            .collect();
        // Stable sort: vocabulary order breaks attempt-count ties
        candidates.sort_by(|a, b| b.1.cmp(&a.1));

        let percent = if session_index == 1 {
            self.settings.difficult_entries_session2_percent
        } else {
            self.settings.difficult_entries_session3_percent
        };
        let keep_count = candidates.len() * percent as usize / 100;

        for (position, (term, _)) in candidates.iter().enumerate() {
            if let Some(record) = self.progress.record_mut(term) {
                record.sessions[session_index].skipped = position >= keep_count;
            }
        }
    }

    pub fn current_session(&self) -> Option<&LearnSession> {
        self.session.as_ref()
    }

    // ===== Serving entries =====

    /// The entry at the current queue position
    pub fn current_entry(&self) -> Option<EntryView> {
        let session = self.session.as_ref()?;
        let term = session.queue.get(session.queue_index)?;
        self.entry_view(term, false)
    }

    /// Advance the queue: move one ahead (or hold position right after
    /// an entry was learned), wrap while the queue is still worth
    /// cycling, refill it from the active set otherwise. `None` means
    /// the session is complete.
    pub fn next_entry(&mut self) -> Result<Option<EntryView>> {
        let session = self.session.as_mut().ok_or(LearnError::NoActiveSession)?;

        let expected_index = session.queue_index + usize::from(!session.last_learned);
        session.last_learned = false;

        if expected_index < session.queue.len() {
            session.queue_index = expected_index;
            return Ok(self.current_entry());
        }

        if session.queue.len() > 2 {
            session.queue_index = 0;
            return Ok(self.current_entry());
        }

        // Refill with the next batch of unlearned entries of the active
        // set, in vocabulary order
        let session_index = session.session_index;
        let replacement: Vec<String> = self
            .progress
            .entries
            .iter()
            .filter(|r| {
                session.entries.contains(&r.term) && !r.sessions[session_index].learned
            })
            .map(|r| r.term.clone())
            .take(self.settings.exercise_size)
            .collect();

        if replacement.is_empty() {
            return Ok(None);
        }

        session.queue = replacement;
        session.queue_index = 0;
        Ok(self.current_entry())
    }

    /// Record one answer for the current session. A correct answer that
    /// reaches the configured count marks the entry learned and drops
    /// it from the queue. The progress sidecar is rewritten either way.
    pub fn record_answer(&mut self, term: &str, correct: bool) -> Result<EntryView> {
        let file_path = self
            .vocabulary
            .as_ref()
            .filter(|v| v.entry(term).is_some())
            .map(|v| v.file_path.clone())
            .ok_or_else(|| LearnError::EntryNotFound(term.to_string()))?;

        let session = self.session.as_mut().ok_or(LearnError::NoActiveSession)?;
        let session_index = session.session_index;

        let slot = self
            .progress
            .record_mut(term)
            .map(|r| &mut r.sessions[session_index])
            .ok_or_else(|| LearnError::EntryNotFound(term.to_string()))?;

        slot.total_attempts += 1;

        let mut just_learned = false;
        if correct {
            slot.correct_answers += 1;

            if slot.correct_answers >= self.settings.correct_answers_to_learn && !slot.learned {
                slot.learned = true;
                just_learned = true;

                session.learned_entries += 1;
                session.last_learned = true;
                session.queue.retain(|t| t != term);
            }
        }

        self.progress_store.save(&file_path, &self.progress)?;

        if just_learned {
            self.update_catalog_session(&file_path, session_index)?;
        }

        self.entry_view(term, correct)
            .ok_or_else(|| LearnError::EntryNotFound(term.to_string()))
    }

    fn update_catalog_session(&mut self, file_path: &str, session_index: usize) -> Result<()> {
        let (learned, total) = self.progress.session_progress(session_index);
        let average = self.progress.average_attempts(session_index);
        self.catalog
            .update_session_and_save(file_path, session_index, learned, total, average)?;
        Ok(())
    }

    fn entry_view(&self, term: &str, last_attempt_correct: bool) -> Option<EntryView> {
        let session = self.session.as_ref()?;
        let vocabulary = self.vocabulary.as_ref()?;

        let entry = vocabulary.entry(term)?.clone();
        let slot = &self.progress.record(term)?.sessions[session.session_index];

        Some(EntryView {
            entry,
            learned: slot.learned,
            last_attempt_correct,
            correct_answers: slot.correct_answers,
            total_attempts: slot.total_attempts,
            session: SessionSnapshot {
                queue_index: session.queue_index,
                queue_count: session.queue.len(),
                learned_entries: session.learned_entries,
                total_entries: session.total_entries,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{EntryRecord, SessionSlot};
    use crate::vocabulary::VocabularyEntry;
    use std::path::Path;

    /// Serves a fixed vocabulary regardless of the requested path
    struct StubReader {
        vocabulary: Vocabulary,
    }

    impl VocabularySource for StubReader {
        fn load(&self, file_path: &str) -> Vocabulary {
            let mut vocabulary = self.vocabulary.clone();
            vocabulary.file_path = file_path.to_string();
            vocabulary.file_name = Path::new(file_path)
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            vocabulary
        }
    }

    fn vocabulary(terms: &[&str]) -> Vocabulary {
        Vocabulary {
            file_name: String::new(),
            file_path: String::new(),
            entries: terms
                .iter()
                .map(|t| VocabularyEntry {
                    term: t.to_string(),
                    translation: format!("{} translation", t),
                    ..Default::default()
                })
                .collect(),
            error_message: String::new(),
        }
    }

    fn settings(exercise_size: usize) -> LearnSettings {
        LearnSettings {
            exercise_size,
            ..Default::default()
        }
    }

    /// Service over a tempdir: stub vocabulary, seeded progress sidecar
    fn service_with_progress(
        dir: &Path,
        terms: &[&str],
        exercise_size: usize,
        records: Vec<EntryRecord>,
    ) -> (LearnService<StubReader>, String) {
        let file_path = dir.join("en.test.xlsx").to_string_lossy().to_string();

        ProgressStore
            .save(&file_path, &VocabularyProgress { entries: records })
            .unwrap();

        let reader = StubReader {
            vocabulary: vocabulary(terms),
        };
        let mut service = LearnService::new(
            settings(exercise_size),
            reader,
            CatalogStore::new(dir.to_path_buf()),
        );
        service.add_vocabulary_file(&file_path).unwrap();

        (service, file_path)
    }

    fn record(term: &str, slots: &[(bool, bool, u32)]) -> EntryRecord {
        EntryRecord {
            term: term.to_string(),
            sessions: slots
                .iter()
                .map(|&(skipped, learned, total_attempts)| SessionSlot {
                    skipped,
                    learned,
                    total_attempts,
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[test]
    fn test_continue_session_filters_skipped_and_learned() {
        let dir = tempfile::tempdir().unwrap();
        let terms = ["word1", "word2", "word3", "word4", "word5", "word6"];
        let (mut service, path) = service_with_progress(
            dir.path(),
            &terms,
            5,
            vec![
                record("word1", &[(false, false, 0)]),
                record("word2", &[(false, false, 0)]),
                record("word3", &[(false, false, 0)]),
                record("word4", &[(false, false, 0)]),
                record("word5", &[(true, false, 0)]),
                record("word6", &[(false, true, 0)]),
            ],
        );

        service.start_session(&path, 0, true).unwrap();

        let session = service.current_session().unwrap();
        assert_eq!(session.entries.len(), 4);
        for term in ["word1", "word2", "word3", "word4"] {
            assert!(session.entries.contains(term));
        }
        assert!(!session.entries.contains("word5")); // skipped
        assert!(!session.entries.contains("word6")); // already learned
        assert_eq!(session.learned_entries, 2);
        assert_eq!(session.total_entries, 6);
        assert_eq!(session.queue.len(), 4);
    }

    #[test]
    fn test_restart_session2_keeps_most_attempted_30_percent() {
        let dir = tempfile::tempdir().unwrap();
        let terms = ["word1", "word2", "word3", "word4", "word5", "word6", "word7"];
        // Session 0 attempts rank the difficulty: word1 (5) > word2 (4) > ...
        let (mut service, path) = service_with_progress(
            dir.path(),
            &terms,
            5,
            vec![
                record("word1", &[(false, false, 5), (true, false, 0)]),
                record("word2", &[(false, false, 4), (false, true, 0)]),
                record("word3", &[(false, false, 3), (true, true, 0)]),
                record("word4", &[(false, false, 2), (false, false, 0)]),
                record("word5", &[(false, false, 1), (false, false, 0)]),
                record("word6", &[(false, false, 1), (true, false, 0)]),
                record("word7", &[(false, false, 1), (false, true, 0)]),
            ],
        );

        service.start_session(&path, 1, false).unwrap();

        // 30% of 7 = 2: only the two most-attempted survive the cut
        let session = service.current_session().unwrap();
        assert_eq!(session.entries.len(), 2);
        assert!(session.entries.contains("word1"));
        assert!(session.entries.contains("word2"));
    }

    #[test]
    fn test_restart_session3_ignores_skipped_when_ranking() {
        let dir = tempfile::tempdir().unwrap();
        let terms = ["word1", "word2", "word3", "word4", "word5", "word6"];
        // word1/word2 had the most session-1 attempts but were skipped
        // there; the cut must rank only the entries session 1 covered
        let (mut service, path) = service_with_progress(
            dir.path(),
            &terms,
            5,
            vec![
                record("word1", &[(false, false, 0), (true, false, 10), (false, false, 0)]),
                record("word2", &[(false, false, 0), (true, false, 9), (false, false, 0)]),
                record("word3", &[(false, false, 0), (false, false, 8), (false, false, 0)]),
                record("word4", &[(false, false, 0), (false, false, 7), (false, false, 0)]),
                record("word5", &[(false, false, 0), (false, false, 6), (false, false, 0)]),
                record("word6", &[(false, false, 0), (false, false, 5), (false, false, 0)]),
            ],
        );

        service.start_session(&path, 2, false).unwrap();

        // 50% of the 4 non-skipped = 2
        let session = service.current_session().unwrap();
        assert_eq!(session.entries.len(), 2);
        assert!(session.entries.contains("word3"));
        assert!(session.entries.contains("word4"));
    }

    #[test]
    fn test_restart_clears_flags_but_keeps_counters() {
        let dir = tempfile::tempdir().unwrap();
        let (mut service, path) = service_with_progress(
            dir.path(),
            &["word1", "word2"],
            5,
            vec![
                record("word1", &[(false, true, 3)]),
                record("word2", &[(true, false, 1)]),
            ],
        );

        service.start_session(&path, 0, false).unwrap();

        let session = service.current_session().unwrap();
        assert_eq!(session.entries.len(), 2);

        // Attempt counters survive the restart; they feed the next cut
        let reloaded = ProgressStore.load(&path).unwrap();
        assert_eq!(reloaded.record("word1").unwrap().sessions[0].total_attempts, 3);
        assert!(!reloaded.record("word1").unwrap().sessions[0].learned);
        assert!(!reloaded.record("word2").unwrap().sessions[0].skipped);
    }

    #[test]
    fn test_invalid_session_index() {
        let dir = tempfile::tempdir().unwrap();
        let (mut service, path) =
            service_with_progress(dir.path(), &["word1"], 5, Vec::new());

        let result = service.start_session(&path, 3, true);
        assert!(matches!(result, Err(LearnError::InvalidSession(3))));
    }

    #[test]
    fn test_record_answer_learns_at_threshold_and_holds_position() {
        let dir = tempfile::tempdir().unwrap();
        let (mut service, path) = service_with_progress(
            dir.path(),
            &["word1", "word2", "word3", "word4"],
            4,
            Vec::new(),
        );

        service.start_session(&path, 0, true).unwrap();
        let first = service.current_entry().unwrap();
        assert_eq!(first.entry.term, "word1");

        let after_one = service.record_answer("word1", true).unwrap();
        assert!(!after_one.learned);
        assert_eq!(after_one.correct_answers, 1);
        assert_eq!(after_one.total_attempts, 1);

        let next = service.next_entry().unwrap().unwrap();
        assert_eq!(next.entry.term, "word2");
        service.record_answer("word2", false).unwrap();

        // Back on word1 after a full cycle: second correct answer
        // reaches the threshold
        service.next_entry().unwrap();
        service.next_entry().unwrap();
        let back = service.next_entry().unwrap().unwrap();
        assert_eq!(back.entry.term, "word1");

        let learned = service.record_answer("word1", true).unwrap();
        assert!(learned.learned);
        assert!(learned.last_attempt_correct);
        assert_eq!(learned.session.learned_entries, 1);
        assert_eq!(learned.session.queue_count, 3);

        // The queue dropped word1 and the latch holds the position, so
        // the next entry is the one that slid into its slot
        let following = service.next_entry().unwrap().unwrap();
        assert_eq!(following.entry.term, "word2");

        // Everything was persisted along the way
        let reloaded = ProgressStore.load(&path).unwrap();
        assert!(reloaded.record("word1").unwrap().sessions[0].learned);
        assert_eq!(reloaded.record("word2").unwrap().sessions[0].total_attempts, 1);
    }

    #[test]
    fn test_queue_refills_from_active_set_only() {
        let dir = tempfile::tempdir().unwrap();
        // word4/word5 were cut out of session 1 by the carry-over;
        // the refill must never resurrect them
        let (mut service, path) = service_with_progress(
            dir.path(),
            &["word1", "word2", "word3", "word4", "word5"],
            2,
            vec![
                record("word1", &[(false, false, 0), (false, false, 0)]),
                record("word2", &[(false, false, 0), (false, false, 0)]),
                record("word3", &[(false, false, 0), (false, false, 0)]),
                record("word4", &[(false, false, 0), (true, false, 0)]),
                record("word5", &[(false, false, 0), (true, false, 0)]),
            ],
        );

        service.start_session(&path, 1, true).unwrap();
        assert_eq!(service.current_session().unwrap().queue, vec!["word1", "word2"]);

        // Learn both queued entries
        service.record_answer("word1", true).unwrap();
        service.record_answer("word1", true).unwrap();
        service.next_entry().unwrap();
        service.record_answer("word2", true).unwrap();
        service.record_answer("word2", true).unwrap();

        // Queue is empty; the refill serves word3 and nothing skipped
        let refilled = service.next_entry().unwrap().unwrap();
        assert_eq!(refilled.entry.term, "word3");
        assert_eq!(service.current_session().unwrap().queue, vec!["word3"]);

        service.record_answer("word3", true).unwrap();
        service.record_answer("word3", true).unwrap();

        // Nothing unlearned remains in the active set: session complete
        assert!(service.next_entry().unwrap().is_none());
    }

    #[test]
    fn test_queue_wraps_while_longer_than_two() {
        let dir = tempfile::tempdir().unwrap();
        let (mut service, path) = service_with_progress(
            dir.path(),
            &["word1", "word2", "word3"],
            3,
            Vec::new(),
        );

        service.start_session(&path, 0, true).unwrap();
        service.next_entry().unwrap();
        service.next_entry().unwrap();

        let wrapped = service.next_entry().unwrap().unwrap();
        assert_eq!(wrapped.entry.term, "word1");
        assert_eq!(wrapped.session.queue_index, 0);
    }

    #[test]
    fn test_start_session_rejects_invalid_vocabulary() {
        let dir = tempfile::tempdir().unwrap();
        let (mut service, path) = service_with_progress(
            dir.path(),
            &["word1", "word2", "word1"],
            5,
            Vec::new(),
        );

        let result = service.start_session(&path, 0, true);
        match result {
            Err(LearnError::Vocabulary(message)) => {
                assert_eq!(message, "Duplicates: word1");
            }
            other => panic!("expected vocabulary error, got {:?}", other.map(|v| v.file_name)),
        }
    }

    #[test]
    fn test_add_vocabulary_file_records_validation_errors() {
        let dir = tempfile::tempdir().unwrap();
        let reader = StubReader {
            vocabulary: vocabulary(&[]),
        };
        let mut service = LearnService::new(
            settings(5),
            reader,
            CatalogStore::new(dir.path().to_path_buf()),
        );

        let added = service
            .add_vocabulary_file(&dir.path().join("en.empty.xlsx").to_string_lossy())
            .unwrap();
        assert_eq!(added.error_message, "Contains no entries.");
        assert_eq!(service.vocabulary_list().len(), 1);
    }

    #[test]
    fn test_session_start_updates_catalog_summary() {
        let dir = tempfile::tempdir().unwrap();
        let (mut service, path) = service_with_progress(
            dir.path(),
            &["word1", "word2", "word3"],
            3,
            Vec::new(),
        );

        service.start_session(&path, 0, false).unwrap();
        service.record_answer("word1", true).unwrap();
        service.record_answer("word1", true).unwrap();

        let list = service.load_vocabulary_list().unwrap();
        let summary = &list[0].sessions[0];
        assert_eq!(summary.learned_entries, 1);
        assert_eq!(summary.total_entries, 3);
        assert!(summary.last_updated.is_some());
    }

    #[test]
    fn test_synchronize_on_start_drops_stale_records() {
        let dir = tempfile::tempdir().unwrap();
        let (mut service, path) = service_with_progress(
            dir.path(),
            &["word1", "word2"],
            5,
            vec![
                record("removed", &[(false, true, 9)]),
                record("word2", &[(false, false, 2)]),
            ],
        );

        service.start_session(&path, 0, true).unwrap();

        let reloaded = ProgressStore.load(&path).unwrap();
        let terms: Vec<&str> = reloaded.entries.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["word1", "word2"]);
        assert_eq!(reloaded.record("word2").unwrap().sessions[0].total_attempts, 2);
    }
}
