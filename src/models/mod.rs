//! Core data models for the expense tracker
//!
//! This module contains the expense record, its closed enumerations, money
//! and month periods.

pub mod category;
pub mod classified;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::{Category, PaymentMode};
pub use classified::{Classified, ClosedSet};
pub use expense::{Expense, ExpenseDraft, ExpenseForm, FormError};
pub use ids::{ExpenseId, UserId};
pub use money::Money;
pub use period::MonthPeriod;
