//! Local expense store
//!
//! Keeps every expense in a single JSON array at `data/expenses.json`. Used
//! when no backend or no session is available.

use std::path::PathBuf;

use chrono::Utc;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseDraft, ExpenseId};

use super::file_io::{read_json, read_json_lenient, write_json_atomic};
use super::ExpenseStore;

pub struct LocalExpenseStore {
    path: PathBuf,
}

impl LocalExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load for writing; an unreadable slot is moved aside rather than
    /// overwritten
    fn load_for_update(&self) -> ExpenseResult<Vec<Expense>> {
        match read_json::<Vec<Expense>, _>(&self.path) {
            Ok(expenses) => Ok(expenses),
            Err(err) => {
                let aside = self.path.with_extension("json.corrupt");
                tracing::warn!(
                    "local expense file unreadable ({}); moving it to {}",
                    err,
                    aside.display()
                );
                std::fs::rename(&self.path, &aside)?;
                Ok(Vec::new())
            }
        }
    }
}

impl ExpenseStore for LocalExpenseStore {
    fn create(&self, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
        let mut expenses = self.load_for_update()?;

        let expense = Expense::from_draft(draft, ExpenseId::new(), Utc::now());
        expenses.insert(0, expense.clone());
        write_json_atomic(&self.path, &expenses)?;

        tracing::debug!(id = %expense.id, "expense saved locally");
        Ok(expense)
    }

    fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        let mut expenses: Vec<Expense> = read_json_lenient(&self.path);
        expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(expenses)
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
