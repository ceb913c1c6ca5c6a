//! CSV export of expenses

use std::io::Write;

use serde::Serialize;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Payment Mode")]
    payment_mode: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Notes")]
    notes: &'a str,
    #[serde(rename = "Created At")]
    created_at: String,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.as_str(),
            payment_mode: expense.payment_mode.as_str(),
            amount: format!("{:.2}", expense.amount.to_major()),
            notes: expense.notes.as_deref().unwrap_or_default(),
            created_at: expense.created_at.to_rfc3339(),
        }
    }
}

/// Write expenses as CSV with a header row, in the order given
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<usize> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    for expense in expenses {
        csv_writer
            .serialize(CsvRow::from(expense))
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    if expenses.is_empty() {
        csv_writer
            .write_record(["ID", "Date", "Category", "Payment Mode", "Amount", "Notes", "Created At"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(expenses.len())
}
