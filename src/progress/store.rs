//! Progress sidecar storage
//!
//! The progress document lives next to the vocabulary file it belongs
//! to, with the spreadsheet extension swapped for `.progress.json`.

use std::fs;
use std::path::{Path, PathBuf};

use super::models::VocabularyProgress;

#[derive(Debug, thiserror::Error)]
pub enum ProgressStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads and saves progress sidecar files
#[derive(Debug, Clone, Default)]
pub struct ProgressStore;

impl ProgressStore {
    /// Sidecar path for a vocabulary file (`en.food.xlsx` →
    /// `en.food.progress.json`)
    pub fn progress_path(vocabulary_path: &str) -> PathBuf {
        Path::new(vocabulary_path).with_extension("progress.json")
    }

    /// Load the progress document, or a blank one when the sidecar does
    /// not exist yet or the path is empty
    pub fn load(&self, vocabulary_path: &str) -> Result<VocabularyProgress, ProgressStoreError> {
        if vocabulary_path.trim().is_empty() {
            return Ok(VocabularyProgress::default());
        }

        let path = Self::progress_path(vocabulary_path);
        if !path.exists() {
            return Ok(VocabularyProgress::default());
        }

        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Rewrite the whole sidecar
    pub fn save(
        &self,
        vocabulary_path: &str,
        progress: &VocabularyProgress,
    ) -> Result<(), ProgressStoreError> {
        if vocabulary_path.trim().is_empty() {
            return Ok(());
        }

        if let Some(folder) = Path::new(vocabulary_path).parent() {
            fs::create_dir_all(folder)?;
        }

        let path = Self::progress_path(vocabulary_path);
        let content = serde_json::to_string_pretty(progress)?;
        fs::write(&path, content)?;
        Ok(())
    }
}
