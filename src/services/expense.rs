//! Expense service
//!
//! Validates entry-form input, hands drafts to the configured store and
//! records successful creations in the audit log.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseForm};
use crate::storage::ExpenseStore;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a dyn ExpenseStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store, audit: None }
    }

    /// Record created expenses in the given audit log
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn store_name(&self) -> &'static str {
        self.store.name()
    }

    /// Validate the form and persist the expense
    ///
    /// Invalid input fails with a validation error before the store is
    /// touched. The returned expense is the record the store confirmed.
    pub fn add(&self, form: &ExpenseForm) -> ExpenseResult<Expense> {
        let draft = form
            .validate()
            .map_err(|err| ExpenseError::Validation(err.to_string()))?;

        let expense = self.store.create(&draft)?;
        tracing::info!(
            id = %expense.id,
            category = %expense.category,
            store = self.store.name(),
            "expense added"
        );

        if let Some(audit) = self.audit {
            audit.record(&AuditEntry::create(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.category.to_string()),
                &expense,
            ));
        }

        Ok(expense)
    }

    /// Load every expense from the store
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        let expenses = self.store.list_all()?;
        tracing::debug!(count = expenses.len(), store = self.store.name(), "expenses loaded");
        Ok(expenses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::services::test_support::{form, FailingStore, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_add_expense() {
        let store = MemoryStore::default();
        let service = ExpenseService::new(&store);

        let expense = service.add(&form("500", "Travel", "2024-01-15", "UPI")).unwrap();
        assert_eq!(expense.amount.cents(), 50000);

        let all = service.list().unwrap();
        assert_eq!(all, vec![expense]);
    }

    #[test]
    fn test_validation_never_reaches_store() {
        let store = MemoryStore::default();
        let service = ExpenseService::new(&store);

        let err = service.add(&form("", "Travel", "2024-01-15", "UPI")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.create_calls(), 0);

        let err = service.add(&form("10", "Food", "2024-01-15", "UPI")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(store.create_calls(), 0);
    }

    #[test]
    fn test_store_failure_propagates() {
        let store = FailingStore;
        let service = ExpenseService::new(&store);

        let err = service.add(&form("10", "Rental", "2024-01-15", "Cash")).unwrap_err();
        assert!(err.is_store());
        assert!(service.list().unwrap_err().is_store());
    }

    #[test]
    fn test_add_is_audited() {
        let temp_dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = MemoryStore::default();
        let service = ExpenseService::new(&store).with_audit(&audit);

        let expense = service.add(&form("75.5", "Groceries", "2024-02-01", "Net Banking")).unwrap();

        let entries = audit.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_id, expense.id.to_string());
        assert_eq!(entries[0].entity_name.as_deref(), Some("Groceries"));
    }

    #[test]
    fn test_failed_add_is_not_audited() {
        let temp_dir = TempDir::new().unwrap();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let store = FailingStore;
        let service = ExpenseService::new(&store).with_audit(&audit);

        assert!(service.add(&form("10", "Rental", "2024-01-15", "Cash")).is_err());
        assert!(audit.read_all().unwrap().is_empty());
    }
}
