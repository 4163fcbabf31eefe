//! Settings storage
//!
//! Load-once-then-cache around `settings.json`; the whole file is
//! rewritten on save.

use std::fs;
use std::path::PathBuf;

use super::models::Settings;

#[derive(Debug, thiserror::Error)]
pub enum SettingsStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub struct SettingsStore {
    base_path: PathBuf,
    settings: Option<Settings>,
}

impl SettingsStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            settings: None,
        }
    }

    /// Default app data directory (`glossa` under the local data dir)
    pub fn default_base_dir() -> Result<PathBuf, SettingsStoreError> {
        dirs::data_local_dir()
            .map(|p| p.join("glossa"))
            .ok_or(SettingsStoreError::DataDirNotFound)
    }

    fn settings_file(&self) -> PathBuf {
        self.base_path.join("settings.json")
    }

    /// Current settings, loading from disk on first access
    pub fn get(&mut self) -> Result<&Settings, SettingsStoreError> {
        if self.settings.is_none() {
            let file = self.settings_file();
            let settings = if file.exists() {
                let content = fs::read_to_string(&file)?;
                serde_json::from_str(&content)?
            } else {
                Settings::default()
            };
            self.settings = Some(settings);
        }

        Ok(self.settings.as_ref().expect("settings loaded above"))
    }

    pub fn save(&mut self, settings: Settings) -> Result<(), SettingsStoreError> {
        fs::create_dir_all(&self.base_path)?;
        let content = serde_json::to_string_pretty(&settings)?;
        fs::write(self.settings_file(), content)?;
        self.settings = Some(settings);
        Ok(())
    }
}
