//! Application settings
//!
//! One `settings.json` in the app data directory: window geometry, learn
//! parameters, per-language speech configuration and app behavior.

pub mod models;
pub mod store;

pub use models::{BehaviorSettings, LearnSettings, Settings, SpeechLangSettings, WindowSettings};
pub use store::{SettingsStore, SettingsStoreError};
