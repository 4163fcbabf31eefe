//! Tauri commands for the vocabulary list

use tauri::State;
use uuid::Uuid;

use crate::catalog::{CatalogError, VocabularyRef};
use crate::learn::LearnError;
use crate::settings::SettingsStoreError;
use crate::AppState;

#[derive(Debug, serde::Serialize)]
pub struct CommandError {
    pub message: String,
}

impl From<LearnError> for CommandError {
    fn from(err: LearnError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<CatalogError> for CommandError {
    fn from(err: CatalogError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<SettingsStoreError> for CommandError {
    fn from(err: SettingsStoreError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

pub(super) fn parse_vocabulary_id(vocabulary_id: &str) -> Result<Uuid, CommandError> {
    Uuid::parse_str(vocabulary_id).map_err(|e| CommandError {
        message: format!("Invalid vocabulary ID: {}", e),
    })
}

type CommandResult<T> = Result<T, CommandError>;

/// The cached vocabulary list
#[tauri::command]
pub fn list_vocabularies(state: State<AppState>) -> CommandResult<Vec<VocabularyRef>> {
    let learn = state.learn.lock().unwrap();
    Ok(learn.vocabulary_list())
}

/// Reload the vocabulary list from disk, re-validating every file
#[tauri::command]
pub fn reload_vocabularies(state: State<AppState>) -> CommandResult<Vec<VocabularyRef>> {
    let mut learn = state.learn.lock().unwrap();
    learn.load_vocabulary_list().map_err(Into::into)
}

/// Register a vocabulary file; validation problems land on the
/// returned record's error message
#[tauri::command]
pub fn add_vocabulary(state: State<AppState>, file_path: String) -> CommandResult<VocabularyRef> {
    let mut learn = state.learn.lock().unwrap();
    learn.add_vocabulary_file(&file_path).map_err(Into::into)
}

/// Remove a vocabulary file from the list (its files stay on disk)
#[tauri::command]
pub fn remove_vocabulary(state: State<AppState>, vocabulary_id: String) -> CommandResult<()> {
    let mut learn = state.learn.lock().unwrap();
    let id = parse_vocabulary_id(&vocabulary_id)?;
    let file_path = learn.catalog().get(id)?.file_path.clone();
    learn.remove_vocabulary_file(&file_path).map_err(Into::into)
}
