//! Tauri commands for settings

use tauri::State;

use crate::settings::Settings;
use crate::AppState;

use super::vocabulary::CommandError;

type CommandResult<T> = Result<T, CommandError>;

#[tauri::command]
pub fn get_settings(state: State<AppState>) -> CommandResult<Settings> {
    let mut settings_store = state.settings.lock().unwrap();
    Ok(settings_store.get()?.clone())
}

#[tauri::command]
pub fn save_settings(state: State<AppState>, settings: Settings) -> CommandResult<()> {
    let mut settings_store = state.settings.lock().unwrap();
    settings_store.save(settings).map_err(Into::into)
}

/// Persist the window geometry; the frontend calls this when the window
/// is about to close
#[tauri::command]
pub fn save_window_bounds(
    state: State<AppState>,
    top: f64,
    left: f64,
    height: f64,
    width: f64,
) -> CommandResult<()> {
    let mut settings_store = state.settings.lock().unwrap();
    let mut settings = settings_store.get()?.clone();
    settings.window.top = top;
    settings.window.left = left;
    settings.window.height = height;
    settings.window.width = width;
    settings_store.save(settings).map_err(Into::into)
}
