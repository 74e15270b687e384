//! # Registro Export
//!
//! Spreadsheet export of participant records.
//!
//! An `.xlsx` file is a ZIP container of SpreadsheetML parts; this crate
//! assembles a minimal valid workbook directly, without a spreadsheet
//! library. Cell styling is out of scope.

mod xlsx;

pub use xlsx::write_xlsx;
