//! Catalog storage
//!
//! The registered vocabulary list lives in `vocabulary-list.json` in the
//! app data directory and is cached in memory between saves.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use uuid::Uuid;

use super::models::VocabularyRef;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Vocabulary not found: {0}")]
    NotFound(String),
}

/// Storage for the registered vocabulary list
pub struct CatalogStore {
    base_path: PathBuf,
    vocabularies: Vec<VocabularyRef>,
}

impl CatalogStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            vocabularies: Vec::new(),
        }
    }

    fn catalog_file(&self) -> PathBuf {
        self.base_path.join("vocabulary-list.json")
    }

    /// Load the catalog from disk into the cache
    pub fn load(&mut self) -> Result<&[VocabularyRef], CatalogError> {
        let file = self.catalog_file();
        if file.exists() {
            let content = fs::read_to_string(&file)?;
            self.vocabularies = serde_json::from_str(&content)?;
        }

        for vocabulary_ref in &mut self.vocabularies {
            vocabulary_ref.ensure_valid();
        }

        Ok(&self.vocabularies)
    }

    /// The cached list, as of the last load/save
    pub fn list(&self) -> &[VocabularyRef] {
        &self.vocabularies
    }

    pub fn get(&self, id: Uuid) -> Result<&VocabularyRef, CatalogError> {
        self.vocabularies
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn find_by_path(&self, file_path: &str) -> Option<&VocabularyRef> {
        self.vocabularies.iter().find(|v| v.file_path == file_path)
    }

    pub fn add_and_save(&mut self, vocabulary_ref: VocabularyRef) -> Result<(), CatalogError> {
        log::info!("Registered vocabulary {}", vocabulary_ref.file_path);
        self.vocabularies.push(vocabulary_ref);
        self.save()
    }

    /// Remove by file path; unknown paths are ignored
    pub fn remove_and_save(&mut self, file_path: &str) -> Result<(), CatalogError> {
        let before = self.vocabularies.len();
        self.vocabularies.retain(|v| v.file_path != file_path);

        if self.vocabularies.len() == before {
            return Ok(());
        }

        log::info!("Removed vocabulary {}", file_path);
        self.save()
    }

    /// Refresh one session summary of one file and persist the list
    pub fn update_session_and_save(
        &mut self,
        file_path: &str,
        session_index: usize,
        learned_entries: usize,
        total_entries: usize,
        average_attempts: Option<f64>,
    ) -> Result<(), CatalogError> {
        let vocabulary_ref = match self
            .vocabularies
            .iter_mut()
            .find(|v| v.file_path == file_path)
        {
            Some(vocabulary_ref) => vocabulary_ref,
            None => return Ok(()),
        };

        vocabulary_ref.ensure_valid();
        vocabulary_ref.sessions[session_index].update(
            Some(Utc::now()),
            learned_entries,
            total_entries,
            average_attempts,
        );

        self.save()
    }

    /// Set the cached error message of one file (refreshed validation)
    pub fn set_error_message(&mut self, file_path: &str, error_message: String) {
        if let Some(vocabulary_ref) = self
            .vocabularies
            .iter_mut()
            .find(|v| v.file_path == file_path)
        {
            vocabulary_ref.error_message = error_message;
        }
    }

    pub fn save(&self) -> Result<(), CatalogError> {
        fs::create_dir_all(&self.base_path)?;
        let content = serde_json::to_string_pretty(&self.vocabularies)?;
        fs::write(self.catalog_file(), content)?;
        Ok(())
    }
}
