//! Backend row shape for the `expenses` table
//!
//! The table uses snake_case columns and a separate `expense_date` column;
//! this is the only place those names are known. Everything above the
//! remote store works with [`Expense`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::{Category, Classified, Expense, ExpenseDraft, ExpenseId, Money, PaymentMode, UserId};

/// A row as returned by `select=*`
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(deserialize_with = "decimal_amount")]
    pub amount: Money,
    pub category: Classified<Category>,
    #[serde(default)]
    pub notes: Option<String>,
    pub expense_date: NaiveDate,
    pub payment_mode: Classified<PaymentMode>,
    pub created_at: DateTime<Utc>,
}

impl From<ExpenseRow> for Expense {
    fn from(row: ExpenseRow) -> Self {
        Expense {
            id: row.id,
            amount: row.amount,
            category: row.category,
            notes: row.notes.filter(|n| !n.trim().is_empty()),
            date: row.expense_date,
            payment_mode: row.payment_mode,
            created_at: row.created_at,
        }
    }
}

/// Body of an insert; the backend assigns `id` and `created_at`
#[derive(Debug, Clone, Serialize)]
pub struct NewExpenseRow<'a> {
    pub user_id: UserId,
    pub amount: f64,
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
    pub expense_date: NaiveDate,
    pub payment_mode: &'static str,
}

impl<'a> NewExpenseRow<'a> {
    pub fn from_draft(draft: &'a ExpenseDraft, user_id: UserId) -> Self {
        use crate::models::ClosedSet;

        Self {
            user_id,
            amount: draft.amount.to_major(),
            category: draft.category.label(),
            notes: draft.notes.as_deref(),
            expense_date: draft.date,
            payment_mode: draft.payment_mode.label(),
        }
    }
}

/// `numeric` columns arrive as JSON numbers, or as strings when the
/// backend is configured to preserve precision
fn decimal_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Decimal {
        Number(f64),
        Text(String),
    }

    match Decimal::deserialize(deserializer)? {
        Decimal::Number(value) => Ok(Money::from_major(value)),
        Decimal::Text(text) => Money::parse(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: &str = r#"{
        "id": "6f1c2a9e-0d5b-4c1e-9a43-3d2f1b7c8e90",
        "user_id": "0b7e8f1a-2c3d-4e5f-8a9b-1c2d3e4f5a6b",
        "amount": 1234.5,
        "category": "Travel",
        "notes": "cab to airport",
        "expense_date": "2024-03-09",
        "payment_mode": "Credit Card",
        "created_at": "2024-03-09T18:22:41.123456+00:00"
    }"#;

    #[test]
    fn test_row_maps_to_expense() {
        let row: ExpenseRow = serde_json::from_str(ROW).unwrap();
        let expense = Expense::from(row);

        assert_eq!(expense.amount, Money::from_cents(123450));
        assert_eq!(expense.category, Classified::Known(Category::Travel));
        assert_eq!(expense.payment_mode, Classified::Known(PaymentMode::CreditCard));
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(expense.notes.as_deref(), Some("cab to airport"));
    }

    #[test]
    fn test_row_keeps_unrecognized_values() {
        let json = ROW
            .replace("\"Travel\"", "\"Medical\"")
            .replace("\"Credit Card\"", "\"Wallet\"")
            .replace("1234.5", "\"99.999\"");
        let expense = Expense::from(serde_json::from_str::<ExpenseRow>(&json).unwrap());

        assert_eq!(expense.category, Classified::Unrecognized("Medical".into()));
        assert_eq!(expense.payment_mode.as_str(), "Wallet");
        assert_eq!(expense.amount, Money::from_cents(10000));
    }

    #[test]
    fn test_null_notes() {
        let json = ROW.replace("\"cab to airport\"", "null");
        let expense = Expense::from(serde_json::from_str::<ExpenseRow>(&json).unwrap());
        assert!(expense.notes.is_none());
    }

    #[test]
    fn test_insert_body() {
        let draft = ExpenseDraft::new(
            Money::from_cents(50025),
            Category::Rental,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            PaymentMode::NetBanking,
        );
        let user = UserId::new();
        let body = serde_json::to_value(NewExpenseRow::from_draft(&draft, user)).unwrap();

        assert_eq!(body["amount"], 500.25);
        assert_eq!(body["category"], "Rental");
        assert_eq!(body["payment_mode"], "Net Banking");
        assert_eq!(body["expense_date"], "2024-01-01");
        assert!(body.get("notes").is_none());
        assert!(body.get("id").is_none());
    }
}
