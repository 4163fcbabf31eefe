//! xlsx workbook parsing
//!
//! An `.xlsx` file is a zip archive; the strings live in
//! `xl/sharedStrings.xml` and each sheet's cell grid in
//! `xl/worksheets/sheetN.xml`. Cells carry their position as an `A1`
//! style reference, so rows come back sparse and are expanded to a dense
//! per-column layout before anyone reads them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use thiserror::Error;
use zip::ZipArchive;

#[derive(Error, Debug)]
pub enum ExcelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

type Result<T> = std::result::Result<T, ExcelError>;

/// One worksheet row, expanded to a dense cell array
#[derive(Debug, Clone, Default)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    /// Text of the cell in the given column, empty when the cell is
    /// missing or the index is out of range
    pub fn text(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

/// One worksheet: its rows in document order
#[derive(Debug, Clone, Default)]
pub struct Worksheet {
    pub rows: Vec<Row>,
}

/// A parsed workbook: the worksheets in sheet order
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Load a workbook from an `.xlsx` file
    pub fn load(path: &Path) -> Result<Workbook> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;

        let shared_strings = match read_archive_file(&mut archive, "xl/sharedStrings.xml")? {
            Some(content) => parse_shared_strings(&content)?,
            None => Vec::new(),
        };

        // Worksheet part names, ordered by sheet number
        let mut sheet_names: Vec<String> = archive
            .file_names()
            .filter(|name| name.starts_with("xl/worksheets/sheet") && name.ends_with(".xml"))
            .map(|name| name.to_string())
            .collect();
        sheet_names.sort_by_key(|name| sheet_number(name));

        let mut worksheets = Vec::new();
        for name in sheet_names {
            if let Some(content) = read_archive_file(&mut archive, &name)? {
                worksheets.push(parse_worksheet(&content, &shared_strings)?);
            }
        }

        Ok(Workbook { worksheets })
    }

    /// The first worksheet, if the workbook has any
    pub fn first_worksheet(&self) -> Option<&Worksheet> {
        self.worksheets.first()
    }
}

fn read_archive_file(archive: &mut ZipArchive<File>, name: &str) -> Result<Option<String>> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let mut content = String::new();
    entry.read_to_string(&mut content)?;
    Ok(Some(content))
}

fn sheet_number(part_name: &str) -> u32 {
    let digits: String = part_name.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Parse `xl/sharedStrings.xml` into the string table. Rich-text runs
/// inside one `<si>` are concatenated.
fn parse_shared_strings(content: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut strings = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"si" => current.clear(),
                b"t" => in_text = true,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_text {
                    current.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"t" => in_text = false,
                b"si" => strings.push(current.clone()),
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(strings)
}

/// Parse one worksheet's `sheetData` grid, resolving shared-string cells
fn parse_worksheet(content: &str, shared_strings: &[String]) -> Result<Worksheet> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut rows: Vec<Vec<(usize, String)>> = Vec::new();
    let mut current_row: Vec<(usize, String)> = Vec::new();
    let mut max_column = 0usize;

    let mut cell_column = 0usize;
    let mut cell_type = String::new();
    let mut cell_value = String::new();
    let mut in_value = false;
    let mut in_row = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"row" => {
                    in_row = true;
                    current_row.clear();
                }
                b"c" => {
                    cell_column = 0;
                    cell_type.clear();
                    cell_value.clear();
                    for attr in e.attributes().filter_map(|a| a.ok()) {
                        let value = String::from_utf8_lossy(&attr.value).to_string();
                        match attr.key.as_ref() {
                            b"r" => cell_column = column_index(&value),
                            b"t" => cell_type = value,
                            _ => {}
                        }
                    }
                }
                b"v" | b"t" => in_value = true,
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if in_value {
                    cell_value.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"v" | b"t" => in_value = false,
                b"c" => {
                    let text = resolve_cell(&cell_type, &cell_value, shared_strings);
                    if in_row {
                        max_column = max_column.max(cell_column);
                        current_row.push((cell_column, text));
                    }
                }
                b"row" => {
                    in_row = false;
                    rows.push(std::mem::take(&mut current_row));
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {}
        }
        buf.clear();
    }

    // Expand sparse cells to a dense per-column layout
    let column_count = max_column + 1;
    let rows = rows
        .into_iter()
        .map(|sparse| {
            let mut cells = vec![String::new(); column_count];
            for (column, text) in sparse {
                cells[column] = text;
            }
            Row { cells }
        })
        .collect();

    Ok(Worksheet { rows })
}

/// Resolve a cell's stored value to its display text. Shared-string
/// cells (`t="s"`) index into the string table; everything else is
/// carried as the raw value text.
fn resolve_cell(cell_type: &str, value: &str, shared_strings: &[String]) -> String {
    if cell_type == "s" {
        return value
            .parse::<usize>()
            .ok()
            .and_then(|i| shared_strings.get(i))
            .cloned()
            .unwrap_or_default();
    }

    value.to_string()
}

/// Column letters of an `A1` style cell reference to a zero-based index
fn column_index(cell_reference: &str) -> usize {
    let letters_re = Regex::new("[A-Za-z]+").unwrap();
    let letters = letters_re
        .find(cell_reference)
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_default();

    let mut index = 0usize;
    for c in letters.chars() {
        index = index * 26 + (c as usize - 'A' as usize + 1);
    }
    index.saturating_sub(1)
}
