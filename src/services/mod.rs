//! Service layer for the expense tracker
//!
//! The service layer sits between the presentation layer and the stores,
//! handling form validation, auditing and the dashboard's in-memory state.

pub mod dashboard;
pub mod expense;

pub use dashboard::{Dashboard, Notification, NotificationKind, Tab};
pub use expense::ExpenseService;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::{Cell, RefCell};

    use chrono::Utc;

    use crate::error::{ExpenseError, ExpenseResult};
    use crate::models::{Expense, ExpenseDraft, ExpenseForm, ExpenseId};
    use crate::storage::ExpenseStore;

    /// In-memory store that counts create calls
    #[derive(Default)]
    pub struct MemoryStore {
        expenses: RefCell<Vec<Expense>>,
        creates: Cell<usize>,
    }

    impl MemoryStore {
        pub fn create_calls(&self) -> usize {
            self.creates.get()
        }
    }

    impl ExpenseStore for MemoryStore {
        fn create(&self, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
            self.creates.set(self.creates.get() + 1);
            let expense = Expense::from_draft(draft, ExpenseId::new(), Utc::now());
            self.expenses.borrow_mut().insert(0, expense.clone());
            Ok(expense)
        }

        fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
            Ok(self.expenses.borrow().clone())
        }

        fn name(&self) -> &'static str {
            "memory"
        }
    }

    /// Store whose every call fails as an unreachable backend would
    pub struct FailingStore;

    impl ExpenseStore for FailingStore {
        fn create(&self, _draft: &ExpenseDraft) -> ExpenseResult<Expense> {
            Err(ExpenseError::store_status(503, "service unavailable"))
        }

        fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
            Err(ExpenseError::store("connection refused"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    pub fn form(amount: &str, category: &str, date: &str, mode: &str) -> ExpenseForm {
        let field = |v: &str| Some(v.to_string());
        ExpenseForm {
            amount: field(amount),
            category: field(category),
            notes: None,
            date: field(date),
            payment_mode: field(mode),
        }
    }
}
