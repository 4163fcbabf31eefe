//! Tauri commands for the learning session

use serde::Serialize;
use tauri::State;

use crate::answer::{check_answer, AnswerCheck};
use crate::learn::EntryView;
use crate::AppState;

use super::vocabulary::{parse_vocabulary_id, CommandError};

type CommandResult<T> = Result<T, CommandError>;

/// What the frontend needs to open the drill tab
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStart {
    pub file_name: String,
    pub lang: String,
    pub entry: Option<EntryView>,
}

/// Start (or continue) a session of a registered vocabulary file
#[tauri::command]
pub fn start_session(
    state: State<AppState>,
    vocabulary_id: String,
    session_index: usize,
    continue_session: bool,
) -> CommandResult<SessionStart> {
    let mut learn = state.learn.lock().unwrap();

    let id = parse_vocabulary_id(&vocabulary_id)?;
    let file_path = learn.catalog().get(id)?.file_path.clone();

    let vocabulary = learn.start_session(&file_path, session_index, continue_session)?;

    // Remember the last opened file
    {
        let mut settings_store = state.settings.lock().unwrap();
        let mut settings = settings_store.get()?.clone();
        settings.file_path = file_path;
        settings_store.save(settings)?;
    }

    Ok(SessionStart {
        lang: vocabulary.lang().to_string(),
        file_name: vocabulary.file_name,
        entry: learn.current_entry(),
    })
}

/// The entry at the current queue position
#[tauri::command]
pub fn current_entry(state: State<AppState>) -> CommandResult<Option<EntryView>> {
    let learn = state.learn.lock().unwrap();
    Ok(learn.current_entry())
}

/// Advance the queue; `None` means the session is complete
#[tauri::command]
pub fn next_entry(state: State<AppState>) -> CommandResult<Option<EntryView>> {
    let mut learn = state.learn.lock().unwrap();
    learn.next_entry().map_err(Into::into)
}

/// Token-check a typed answer against the expected translation. Pure;
/// the frontend debounces and calls this as the user types.
#[tauri::command]
pub fn check_entry_answer(input: String, expected: String) -> AnswerCheck {
    check_answer(&input, &expected)
}

/// Record an answer for an entry of the running session. An answer
/// given after the tips were shown counts as incorrect.
#[tauri::command]
pub fn record_answer(
    state: State<AppState>,
    term: String,
    used_tips: bool,
) -> CommandResult<EntryView> {
    let mut learn = state.learn.lock().unwrap();
    learn.record_answer(&term, !used_tips).map_err(Into::into)
}
