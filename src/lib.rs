use std::sync::Mutex;

use tauri::menu::{Menu, MenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::Manager;

pub mod answer;
pub mod catalog;
pub mod commands;
pub mod excel;
pub mod learn;
pub mod progress;
pub mod settings;
pub mod speech;
pub mod vocabulary;

use catalog::CatalogStore;
use learn::LearnService;
use settings::SettingsStore;
use vocabulary::ExcelVocabularyReader;

pub struct AppState {
    pub learn: Mutex<LearnService<ExcelVocabularyReader>>,
    pub settings: Mutex<SettingsStore>,
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize stores in the app data directory
    let data_dir = SettingsStore::default_base_dir().expect("Failed to get data directory");
    let mut settings_store = SettingsStore::new(data_dir.clone());
    let learn_settings = settings_store
        .get()
        .expect("Failed to load settings")
        .learn
        .clone();

    let mut learn = LearnService::new(
        learn_settings,
        ExcelVocabularyReader,
        CatalogStore::new(data_dir),
    );
    match learn.load_vocabulary_list() {
        Ok(vocabularies) => log::info!("Loaded {} vocabularies", vocabularies.len()),
        Err(err) => log::warn!("Failed to load vocabulary list: {}", err),
    }

    let state = AppState {
        learn: Mutex::new(learn),
        settings: Mutex::new(settings_store),
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            // A second launch just brings the existing window up
            if let Some(window) = app.get_webview_window("main") {
                let _ = window.show();
                let _ = window.unminimize();
                let _ = window.set_focus();
            }
        }))
        .manage(state)
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            let state: tauri::State<AppState> = app.handle().state();

            // First run: seed the speech table
            {
                let mut settings_store = state.settings.lock().unwrap();
                let mut settings = settings_store.get()?.clone();
                if settings.seed_default_speech() {
                    settings_store.save(settings.clone())?;
                }

                // Restore the saved window geometry
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_position(tauri::LogicalPosition::new(
                        settings.window.left,
                        settings.window.top,
                    ));
                    let _ = window.set_size(tauri::LogicalSize::new(
                        settings.window.width,
                        settings.window.height,
                    ));
                }
            }

            // System tray with a Show/Exit menu
            let show = MenuItem::with_id(app, "show", "Show Glossa", true, None::<&str>)?;
            let quit = MenuItem::with_id(app, "quit", "Exit", true, None::<&str>)?;
            let menu = Menu::with_items(app, &[&show, &quit])?;

            let mut tray = TrayIconBuilder::new()
                .menu(&menu)
                .tooltip("Glossa")
                .on_menu_event(|app, event| match event.id.as_ref() {
                    "show" => {
                        if let Some(window) = app.get_webview_window("main") {
                            let _ = window.show();
                            let _ = window.unminimize();
                            let _ = window.set_focus();
                        }
                    }
                    "quit" => {
                        app.exit(0);
                    }
                    _ => {}
                });
            if let Some(icon) = app.default_window_icon() {
                tray = tray.icon(icon.clone());
            }
            let _tray = tray.build(app)?;

            Ok(())
        })
        .on_window_event(|window, event| match event {
            tauri::WindowEvent::Resized(_) => {
                if !window.is_minimized().unwrap_or(false) {
                    return;
                }

                let state: tauri::State<AppState> = window.state();
                let minimize_to_tray = {
                    let mut settings_store = state.settings.lock().unwrap();
                    settings_store
                        .get()
                        .map(|s| s.behavior.minimize_to_tray)
                        .unwrap_or(false)
                };
                if minimize_to_tray {
                    let _ = window.hide();
                }
            }
            tauri::WindowEvent::CloseRequested { .. } => {
                // Persist the window geometry for the next start
                let (position, size) = match (window.outer_position(), window.inner_size()) {
                    (Ok(position), Ok(size)) => (position, size),
                    _ => return,
                };

                let state: tauri::State<AppState> = window.state();
                let mut settings_store = state.settings.lock().unwrap();
                if let Ok(settings) = settings_store.get() {
                    let mut settings = settings.clone();
                    settings.window.top = position.y as f64;
                    settings.window.left = position.x as f64;
                    settings.window.height = size.height as f64;
                    settings.window.width = size.width as f64;
                    if let Err(err) = settings_store.save(settings) {
                        log::warn!("Failed to save window geometry: {}", err);
                    }
                }
            }
            _ => {}
        })
        .invoke_handler(tauri::generate_handler![
            // Vocabulary list commands
            commands::list_vocabularies,
            commands::reload_vocabularies,
            commands::add_vocabulary,
            commands::remove_vocabulary,
            // Session commands
            commands::start_session,
            commands::current_entry,
            commands::next_entry,
            commands::check_entry_answer,
            commands::record_answer,
            // Settings commands
            commands::get_settings,
            commands::save_settings,
            commands::save_window_bounds,
            // Speech commands
            commands::entry_speech_cues,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
