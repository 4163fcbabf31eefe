//! Vocabulary files
//!
//! A vocabulary is one `.xlsx` file of word/phrase pairs: term, tip,
//! transcription, translation and a pair of example sentences per row.

pub mod models;
pub mod reader;

pub use models::{Vocabulary, VocabularyEntry};
pub use reader::{ExcelVocabularyReader, VocabularySource};
