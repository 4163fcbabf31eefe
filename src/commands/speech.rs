//! Tauri commands for speech cue preparation

use tauri::State;

use crate::speech::{entry_cues, SpeechCue};
use crate::vocabulary::VocabularyEntry;
use crate::AppState;

use super::vocabulary::CommandError;

type CommandResult<T> = Result<T, CommandError>;

/// Cues to speak after an entry was answered; empty when speech is not
/// configured for the vocabulary's language
#[tauri::command]
pub fn entry_speech_cues(
    state: State<AppState>,
    lang: String,
    entry: VocabularyEntry,
) -> CommandResult<Vec<SpeechCue>> {
    let mut settings_store = state.settings.lock().unwrap();
    let settings = settings_store.get()?;
    Ok(entry_cues(&settings.speech, &lang, &entry))
}
