//! JSON export of expenses with schema versioning

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::money::major_units;
use crate::models::{Expense, Money};
use crate::reports::all_time_total;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A self-describing export of an expense list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub expenses: Vec<Expense>,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    #[serde(with = "major_units")]
    pub total: Money,

    pub earliest_date: Option<NaiveDate>,

    pub latest_date: Option<NaiveDate>,
}

impl ExpenseExport {
    pub fn new(expenses: Vec<Expense>) -> Self {
        let metadata = ExportMetadata {
            expense_count: expenses.len(),
            total: all_time_total(&expenses),
            earliest_date: expenses.iter().map(|e| e.date).min(),
            latest_date: expenses.iter().map(|e| e.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses,
            metadata,
        }
    }
}

/// Write expenses as a pretty-printed JSON document
pub fn export_expenses_json<W: Write>(expenses: &[Expense], mut writer: W) -> ExpenseResult<usize> {
    let export = ExpenseExport::new(expenses.to_vec());

    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| ExpenseError::Export(format!("Failed to serialize export: {}", e)))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(export.metadata.expense_count)
}
