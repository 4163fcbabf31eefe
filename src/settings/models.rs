//! Settings data models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Saved window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowSettings {
    pub top: f64,
    pub left: f64,
    pub height: f64,
    pub width: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            top: 16.0,
            left: 16.0,
            height: 240.0,
            width: 600.0,
        }
    }
}

/// Parameters of the learning loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearnSettings {
    /// Number of entries per exercise queue
    pub exercise_size: usize,

    /// Correct answers required to learn an entry within a session
    pub correct_answers_to_learn: u32,

    /// Percentage of difficult entries carried into the second session
    pub difficult_entries_session2_percent: u32,

    /// Percentage of difficult entries carried into the third session
    pub difficult_entries_session3_percent: u32,
}

impl Default for LearnSettings {
    fn default() -> Self {
        Self {
            exercise_size: 13,
            correct_answers_to_learn: 2,
            difficult_entries_session2_percent: 30,
            difficult_entries_session3_percent: 50,
        }
    }
}

/// Speech configuration for one language tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechLangSettings {
    pub active: bool,
    pub voice: String,
    pub rate: i32,
}

/// App behavior toggles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BehaviorSettings {
    pub minimize_to_tray: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub window: WindowSettings,
    pub learn: LearnSettings,

    /// Speech configuration per language tag (the vocabulary file-name
    /// prefix selects the entry)
    pub speech: BTreeMap<String, SpeechLangSettings>,

    pub behavior: BehaviorSettings,

    /// Path of the last opened vocabulary file
    pub file_path: String,
}

impl Settings {
    /// Seed the speech table on first run; mirrors what a fresh install
    /// gets before the user touches anything
    pub fn seed_default_speech(&mut self) -> bool {
        if !self.speech.is_empty() {
            return false;
        }

        self.speech.insert(
            "en".to_string(),
            SpeechLangSettings {
                active: true,
                voice: "default".to_string(),
                rate: -2,
            },
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 600.0);
        assert_eq!(settings.window.top, 16.0);
        assert_eq!(settings.learn.exercise_size, 13);
        assert_eq!(settings.learn.correct_answers_to_learn, 2);
        assert_eq!(settings.learn.difficult_entries_session2_percent, 30);
        assert_eq!(settings.learn.difficult_entries_session3_percent, 50);
        assert!(settings.speech.is_empty());
    }

    #[test]
    fn test_seed_default_speech_only_once() {
        let mut settings = Settings::default();
        assert!(settings.seed_default_speech());
        assert!(settings.speech.contains_key("en"));
        assert!(!settings.seed_default_speech());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"learn":{"exerciseSize":5}}"#).unwrap();
        assert_eq!(settings.learn.exercise_size, 5);
        assert_eq!(settings.learn.correct_answers_to_learn, 2);
        assert_eq!(settings.window.height, 240.0);
    }
}
