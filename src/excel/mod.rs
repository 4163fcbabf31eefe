//! Minimal xlsx reader
//!
//! Reads just enough of the OOXML spreadsheet format to pull vocabulary
//! rows out of an `.xlsx` file: the zip container, the shared-string
//! table, and the cell grid of the contained worksheets. Styles,
//! formulas and everything else are ignored.

pub mod workbook;

pub use workbook::{ExcelError, Row, Workbook, Worksheet};
