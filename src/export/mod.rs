//! Export module for the expense tracker
//!
//! Writes an expense list in one of two formats:
//! - CSV: spreadsheet-compatible, one row per expense
//! - JSON: machine-readable, with a schema version and summary metadata

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
