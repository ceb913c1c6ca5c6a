//! Aggregation engine
//!
//! Pure functions that turn a fully loaded expense list into the derived
//! views shown to the user: the filtered list, the monthly category
//! breakdown, category shares and period totals. None of them perform I/O
//! or read the clock; "today" is always passed in.

pub mod category_totals;
pub mod expense_filter;
pub mod monthly_breakdown;
pub mod totals;

pub use category_totals::{category_totals, CategoryBreakdown, CategoryTotal};
pub use expense_filter::{filter_and_sort, DateRange, ExpenseFilter};
pub use monthly_breakdown::{monthly_breakdown, MonthBucket, MAX_MONTHS};
pub use totals::{all_time_total, current_month_total, period_total};
