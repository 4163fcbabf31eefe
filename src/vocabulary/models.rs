//! Vocabulary data models

use serde::{Deserialize, Serialize};

/// One vocabulary entry: a term in the learner's language and its
/// translation, plus the supporting texts shown as tips
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    /// Source text the learner is prompted with
    pub term: String,

    /// Short hint shown next to the term
    pub term_tip: String,

    /// Pronunciation of the translation
    pub transcription: String,

    /// Expected answer
    pub translation: String,

    /// Example sentence in the term language
    pub term_example: String,

    /// Example sentence in the translation language
    pub translation_example: String,
}

impl VocabularyEntry {
    /// An entry is blank when it has neither term nor translation;
    /// blank spreadsheet rows are dropped at load time
    pub fn is_blank(&self) -> bool {
        self.term.trim().is_empty() && self.translation.trim().is_empty()
    }
}

/// A loaded vocabulary file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vocabulary {
    pub file_name: String,
    pub file_path: String,
    pub entries: Vec<VocabularyEntry>,

    /// Empty when the file loaded cleanly
    pub error_message: String,
}

impl Vocabulary {
    pub fn has_errors(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Language tag of the translation side, taken from the file-name
    /// prefix before the first dot (`en.food.xlsx` → `en`)
    pub fn lang(&self) -> &str {
        match self.file_name.find('.') {
            Some(dot) if dot > 0 => &self.file_name[..dot],
            _ => "",
        }
    }

    /// Find an entry by its term
    pub fn entry(&self, term: &str) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|e| e.term == term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_from_file_name() {
        let vocabulary = Vocabulary {
            file_name: "en.food.xlsx".to_string(),
            ..Default::default()
        };
        assert_eq!(vocabulary.lang(), "en");

        let no_prefix = Vocabulary {
            file_name: ".hidden".to_string(),
            ..Default::default()
        };
        assert_eq!(no_prefix.lang(), "");

        let no_dot = Vocabulary {
            file_name: "words".to_string(),
            ..Default::default()
        };
        assert_eq!(no_dot.lang(), "");
    }

    #[test]
    fn test_blank_entry() {
        let mut entry = VocabularyEntry::default();
        assert!(entry.is_blank());

        entry.term_tip = "tip only".to_string();
        assert!(entry.is_blank());

        entry.translation = "word".to_string();
        assert!(!entry.is_blank());
    }
}
