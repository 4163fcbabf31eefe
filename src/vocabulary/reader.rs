//! Loading vocabularies from spreadsheet files
//!
//! Load failures never escape as errors here; they land in the
//! vocabulary's `error_message` so the catalog can show them next to the
//! file, which is all the error handling this app has.

use std::path::Path;

use crate::excel::Workbook;

use super::models::{Vocabulary, VocabularyEntry};

/// Column layout of a vocabulary worksheet
const COL_TERM: usize = 0;
const COL_TERM_TIP: usize = 1;
const COL_TRANSCRIPTION: usize = 2;
const COL_TRANSLATION: usize = 3;
const COL_TERM_EXAMPLE: usize = 4;
const COL_TRANSLATION_EXAMPLE: usize = 5;

/// Source of vocabulary data, the seam the learn service loads through
pub trait VocabularySource {
    fn load(&self, file_path: &str) -> Vocabulary;
}

/// Reads vocabularies from `.xlsx` files through the minimal OOXML reader
#[derive(Debug, Clone, Default)]
pub struct ExcelVocabularyReader;

impl VocabularySource for ExcelVocabularyReader {
    fn load(&self, file_path: &str) -> Vocabulary {
        let path = Path::new(file_path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let failed = |message: &str| Vocabulary {
            file_name: file_name.clone(),
            file_path: file_path.to_string(),
            entries: Vec::new(),
            error_message: message.to_string(),
        };

        if !path.exists() {
            return failed("File not found");
        }

        let workbook = match Workbook::load(path) {
            Ok(workbook) => workbook,
            Err(err) => {
                log::warn!("Failed to read {}: {}", file_path, err);
                return failed(&format!("Failed to read file: {}", err));
            }
        };

        let worksheet = match workbook.first_worksheet() {
            Some(worksheet) => worksheet,
            None => return failed("No worksheets found in the file"),
        };

        let entries: Vec<VocabularyEntry> = worksheet
            .rows
            .iter()
            .map(|row| VocabularyEntry {
                term: row.text(COL_TERM).to_string(),
                term_tip: row.text(COL_TERM_TIP).to_string(),
                transcription: row.text(COL_TRANSCRIPTION).to_string(),
                translation: row.text(COL_TRANSLATION).to_string(),
                term_example: row.text(COL_TERM_EXAMPLE).to_string(),
                translation_example: row.text(COL_TRANSLATION_EXAMPLE).to_string(),
            })
            .filter(|entry| !entry.is_blank())
            .collect();

        Vocabulary {
            file_name,
            file_path: file_path.to_string(),
            entries,
            error_message: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_vocabulary_xlsx(dir: &Path, rows: &[[&str; 6]]) -> String {
        let path = dir.join("en.test.xlsx");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default();

        let mut sheet = String::from("<worksheet><sheetData>");
        for (r, row) in rows.iter().enumerate() {
            sheet.push_str(&format!("<row r=\"{}\">", r + 1));
            for (c, text) in row.iter().enumerate() {
                let column = (b'A' + c as u8) as char;
                sheet.push_str(&format!(
                    "<c r=\"{}{}\" t=\"str\"><v>{}</v></c>",
                    column,
                    r + 1,
                    text
                ));
            }
            sheet.push_str("</row>");
        }
        sheet.push_str("</sheetData></worksheet>");

        writer.start_file("xl/worksheets/sheet1.xml", options).unwrap();
        writer.write_all(sheet.as_bytes()).unwrap();
        writer.finish().unwrap();

        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_load_maps_columns_and_skips_blank_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_vocabulary_xlsx(
            dir.path(),
            &[
                ["dom", "building", "hous", "house", "dom primer", "house example"],
                ["", "", "", "", "", ""],
                ["kot", "", "kat", "cat", "", ""],
            ],
        );

        let vocabulary = ExcelVocabularyReader.load(&path);

        assert!(!vocabulary.has_errors());
        assert_eq!(vocabulary.file_name, "en.test.xlsx");
        assert_eq!(vocabulary.lang(), "en");
        assert_eq!(vocabulary.entries.len(), 2);
        assert_eq!(vocabulary.entries[0].term, "dom");
        assert_eq!(vocabulary.entries[0].term_tip, "building");
        assert_eq!(vocabulary.entries[0].transcription, "hous");
        assert_eq!(vocabulary.entries[0].translation, "house");
        assert_eq!(vocabulary.entries[0].term_example, "dom primer");
        assert_eq!(vocabulary.entries[0].translation_example, "house example");
        assert_eq!(vocabulary.entries[1].term, "kot");
    }

    #[test]
    fn test_load_missing_file() {
        let vocabulary = ExcelVocabularyReader.load("/nonexistent/en.test.xlsx");
        assert_eq!(vocabulary.error_message, "File not found");
        assert!(vocabulary.entries.is_empty());
    }

    #[test]
    fn test_load_file_without_worksheets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en.empty.xlsx");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        writer
            .start_file("xl/workbook.xml", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<workbook/>").unwrap();
        writer.finish().unwrap();

        let vocabulary = ExcelVocabularyReader.load(&path.to_string_lossy());
        assert_eq!(vocabulary.error_message, "No worksheets found in the file");
    }
}
