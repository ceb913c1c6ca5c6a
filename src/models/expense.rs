//! Expense model
//!
//! An expense is immutable once the store has accepted it. New entries start
//! life as raw [`ExpenseForm`] input, are validated into an [`ExpenseDraft`]
//! and become an [`Expense`] when the store assigns an id and timestamp.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, PaymentMode};
use super::classified::Classified;
use super::ids::ExpenseId;
use super::money::{major_units, Money};

/// A recorded spending event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,

    /// Non-negative amount; persisted as a decimal number
    #[serde(with = "major_units")]
    pub amount: Money,

    pub category: Classified<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// When the expense happened
    pub date: NaiveDate,

    pub payment_mode: Classified<PaymentMode>,

    /// When the store accepted the record
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Materialize a draft with a store-assigned id and timestamp
    pub fn from_draft(draft: &ExpenseDraft, id: ExpenseId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category.into(),
            notes: draft.notes.clone(),
            date: draft.date,
            payment_mode: draft.payment_mode.into(),
            created_at,
        }
    }
}

/// A validated expense that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: Money,
    pub category: Category,
    pub notes: Option<String>,
    pub date: NaiveDate,
    pub payment_mode: PaymentMode,
}

impl ExpenseDraft {
    pub fn new(amount: Money, category: Category, date: NaiveDate, payment_mode: PaymentMode) -> Self {
        Self {
            amount,
            category,
            notes: None,
            date,
            payment_mode,
        }
    }

    /// Attach notes; blank notes are dropped
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = clean_notes(Some(notes.into()));
        self
    }
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}

/// Raw entry-form input, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub date: Option<String>,
    pub payment_mode: Option<String>,
}

impl ExpenseForm {
    /// Check every required field and build a draft
    ///
    /// Amount, category, date and payment mode are required; the date uses
    /// `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<ExpenseDraft, FormError> {
        let amount = required(&self.amount, "amount")?;
        let category = required(&self.category, "category")?;
        let date = required(&self.date, "date")?;
        let payment_mode = required(&self.payment_mode, "payment mode")?;

        let amount = Money::parse(amount).map_err(|_| FormError::InvalidAmount(amount.to_string()))?;
        if amount.is_negative() {
            return Err(FormError::NegativeAmount);
        }
        if amount > Money::MAX_AMOUNT {
            return Err(FormError::AmountTooLarge);
        }

        let category = category
            .parse::<Category>()
            .map_err(|_| FormError::UnknownCategory(category.to_string()))?;
        let payment_mode = payment_mode
            .parse::<PaymentMode>()
            .map_err(|_| FormError::UnknownPaymentMode(payment_mode.to_string()))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(date.to_string()))?;

        Ok(ExpenseDraft {
            amount,
            category,
            notes: clean_notes(self.notes.clone()),
            date,
            payment_mode,
        })
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, FormError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(FormError::MissingField(field))
}

/// Why an entry form was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
    InvalidAmount(String),
    NegativeAmount,
    AmountTooLarge,
    UnknownCategory(String),
    UnknownPaymentMode(String),
    InvalidDate(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "Please fill all required fields ({} is missing)", field)
            }
            Self::InvalidAmount(raw) => write!(f, "Invalid amount: {}", raw),
            Self::NegativeAmount => write!(f, "Amount cannot be negative"),
            Self::AmountTooLarge => write!(
                f,
                "Amount cannot exceed {}",
                Money::MAX_AMOUNT.format_with_symbol("")
            ),
            Self::UnknownCategory(raw) => write!(f, "Unknown category: {}", raw),
            Self::UnknownPaymentMode(raw) => write!(f, "Unknown payment mode: {}", raw),
            Self::InvalidDate(raw) => write!(f, "Invalid date '{}'. Use YYYY-MM-DD", raw),
        }
    }
}

impl std::error::Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> ExpenseForm {
        ExpenseForm {
            amount: Some("1000".into()),
            category: Some("Groceries".into()),
            notes: Some("  weekly shop ".into()),
            date: Some("2024-01-15".into()),
            payment_mode: Some("cash".into()),
        }
    }

    #[test]
    fn test_validate_full_form() {
        let draft = full_form().validate().unwrap();
        assert_eq!(draft.amount, Money::from_units(1000));
        assert_eq!(draft.category, Category::Groceries);
        assert_eq!(draft.payment_mode, PaymentMode::Cash);
        assert_eq!(draft.notes.as_deref(), Some("weekly shop"));
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = full_form();
        form.amount = None;
        assert_eq!(form.validate(), Err(FormError::MissingField("amount")));

        let mut form = full_form();
        form.payment_mode = Some("   ".into());
        assert_eq!(form.validate(), Err(FormError::MissingField("payment mode")));

        let mut form = full_form();
        form.notes = None;
        assert!(form.validate().unwrap().notes.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let mut form = full_form();
        form.amount = Some("-5".into());
        assert_eq!(form.validate(), Err(FormError::NegativeAmount));

        let mut form = full_form();
        form.amount = Some("₹-250".into());
        assert_eq!(form.validate(), Err(FormError::NegativeAmount));

        let mut form = full_form();
        form.amount = Some("abc12".into());
        assert!(matches!(form.validate(), Err(FormError::InvalidAmount(_))));

        let mut form = full_form();
        form.category = Some("Food".into());
        assert!(matches!(form.validate(), Err(FormError::UnknownCategory(_))));

        let mut form = full_form();
        form.date = Some("15/01/2024".into());
        assert!(matches!(form.validate(), Err(FormError::InvalidDate(_))));
    }

    #[test]
    fn test_amount_ceiling() {
        let mut form = full_form();
        form.amount = Some("1,000,000,000,000".into());
        assert_eq!(form.validate().unwrap().amount, Money::MAX_AMOUNT);

        form.amount = Some("1000000000000.01".into());
        assert_eq!(form.validate(), Err(FormError::AmountTooLarge));

        form.amount = Some("90000000000000000".into());
        assert_eq!(form.validate(), Err(FormError::AmountTooLarge));
    }

    #[test]
    fn test_expense_json_shape() {
        let draft = full_form().validate().unwrap();
        let created_at = DateTime::parse_from_rfc3339("2024-01-15T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let expense = Expense::from_draft(&draft, ExpenseId::new(), created_at);

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["amount"], 1000.0);
        assert_eq!(json["paymentMode"], "Cash");
        assert_eq!(json["date"], "2024-01-15");
        assert!(json.get("createdAt").is_some());

        let back: Expense = serde_json::from_value(json).unwrap();
        assert_eq!(back, expense);
    }

    #[test]
    fn test_unrecognized_values_survive_load() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "amount": 12.5,
            "category": "Medical",
            "date": "2024-02-01",
            "paymentMode": "Cheque",
            "createdAt": "2024-02-01T08:00:00Z"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.category, Classified::Unrecognized("Medical".into()));
        assert_eq!(expense.payment_mode.as_str(), "Cheque");
        assert_eq!(expense.amount.cents(), 1250);
    }
}
