//! Speech cue preparation
//!
//! The library never plays audio; it prepares *cues* (text plus the
//! configured voice/rate and a lead-in delay) and the frontend feeds
//! them to the platform speech engine after each answered entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::answer::strip_tips;
use crate::settings::SpeechLangSettings;
use crate::vocabulary::VocabularyEntry;

/// Pause before the first cue, while the answer overlay appears
const ENTRY_LEAD_IN_MS: u64 = 100;

/// Pause between the translation and its example sentence
const EXAMPLE_LEAD_IN_MS: u64 = 300;

/// One utterance for the platform speech engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechCue {
    pub lang: String,
    pub voice: String,
    pub rate: i32,
    pub text: String,

    /// Milliseconds to wait before speaking this cue
    pub delay_before_ms: u64,
}

/// Cues for one answered entry: the translation with tips stripped,
/// then the example sentence when it adds anything. Languages without
/// an active speech configuration produce no cues.
pub fn entry_cues(
    speech: &BTreeMap<String, SpeechLangSettings>,
    lang: &str,
    entry: &VocabularyEntry,
) -> Vec<SpeechCue> {
    if lang.trim().is_empty() {
        return Vec::new();
    }

    let config = match speech.get(lang) {
        Some(config) if config.active => config,
        _ => return Vec::new(),
    };

    let cue = |text: String, delay_before_ms: u64| SpeechCue {
        lang: lang.to_string(),
        voice: config.voice.clone(),
        rate: config.rate,
        text,
        delay_before_ms,
    };

    let translation = strip_tips(&entry.translation);
    let mut cues = vec![cue(translation.clone(), ENTRY_LEAD_IN_MS)];

    let example = strip_tips(&entry.translation_example);
    if !example.trim().is_empty() && example.to_lowercase() != translation.to_lowercase() {
        cues.push(cue(entry.translation_example.clone(), EXAMPLE_LEAD_IN_MS));
    }

    cues
}
