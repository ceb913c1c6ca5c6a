//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and analytics for terminal
//! display. Amounts are always shown with the configured currency symbol.

pub mod analytics;
pub mod expense;
pub mod report;

pub use analytics::{format_category_breakdown, format_monthly_chart, format_summary_cards};
pub use expense::{format_expense_table, format_list_summary};
