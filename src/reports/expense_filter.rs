//! Filtered and sorted expense list
//!
//! Backs the list view: a date-range window relative to an injected `today`,
//! optional category and payment-mode restrictions, newest first.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::models::{Category, Classified, ClosedSet, Expense, MonthPeriod, PaymentMode};

/// Date window for the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateRange {
    #[default]
    AllTime,
    ThisMonth,
    Last30Days,
    Last90Days,
}

impl DateRange {
    pub const ALL: [DateRange; 4] = [
        DateRange::AllTime,
        DateRange::ThisMonth,
        DateRange::Last30Days,
        DateRange::Last90Days,
    ];

    /// Check whether `date` falls inside this window as seen from `today`
    ///
    /// `Last30Days`/`Last90Days` only bound the start (inclusive); entries
    /// dated after `today` are kept.
    pub fn includes(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::AllTime => true,
            Self::ThisMonth => MonthPeriod::containing(today).contains(date),
            Self::Last30Days => date >= today - Duration::days(30),
            Self::Last90Days => date >= today - Duration::days(90),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AllTime => "All time",
            Self::ThisMonth => "This month",
            Self::Last30Days => "Last 30 days",
            Self::Last90Days => "Last 90 days",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "all" | "alltime" => Ok(Self::AllTime),
            "month" | "thismonth" => Ok(Self::ThisMonth),
            "30" | "30d" | "last30" | "last30days" => Ok(Self::Last30Days),
            "90" | "90d" | "last90" | "last90days" => Ok(Self::Last90Days),
            _ => Err(format!(
                "unknown date range '{}' (expected all, this-month, last-30-days or last-90-days)",
                s
            )),
        }
    }
}

/// Filter state for the list view
///
/// Empty category or payment-mode sets mean "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub date_range: DateRange,
    pub categories: BTreeSet<Category>,
    pub payment_modes: BTreeSet<PaymentMode>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = range;
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn payment_mode(mut self, mode: PaymentMode) -> Self {
        self.payment_modes.insert(mode);
        self
    }

    /// Toggle a category on or off, as a checkbox would
    pub fn toggle_category(&mut self, category: Category, checked: bool) {
        if checked {
            self.categories.insert(category);
        } else {
            self.categories.remove(&category);
        }
    }

    /// Toggle a payment mode on or off
    pub fn toggle_payment_mode(&mut self, mode: PaymentMode, checked: bool) {
        if checked {
            self.payment_modes.insert(mode);
        } else {
            self.payment_modes.remove(&mode);
        }
    }

    /// Reset to all time, no restrictions
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }

    /// Check a single expense against every predicate
    pub fn matches(&self, expense: &Expense, today: NaiveDate) -> bool {
        self.date_range.includes(expense.date, today)
            && member_allowed(&self.categories, &expense.category)
            && member_allowed(&self.payment_modes, &expense.payment_mode)
    }
}

fn member_allowed<T: ClosedSet + Ord>(selected: &BTreeSet<T>, value: &Classified<T>) -> bool {
    selected.is_empty() || value.known().is_some_and(|member| selected.contains(&member))
}

/// Filter `expenses` and sort the survivors by date, newest first
///
/// The sort is stable: expenses on the same date keep their input order.
pub fn filter_and_sort(expenses: &[Expense], filter: &ExpenseFilter, today: NaiveDate) -> Vec<Expense> {
    let mut filtered: Vec<Expense> = expenses
        .iter()
        .filter(|e| filter.matches(e, today))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| b.date.cmp(&a.date));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::{expense, expense_raw};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_no_filter_sorts_newest_first() {
        let list = vec![
            expense(100, Category::Rental, "2024-01-01", PaymentMode::Cash),
            expense(200, Category::Travel, "2024-03-01", PaymentMode::Upi),
            expense(300, Category::Others, "2024-02-01", PaymentMode::Cash),
        ];
        let result = filter_and_sort(&list, &ExpenseFilter::new(), today());
        let dates: Vec<_> = result.iter().map(|e| e.date.to_string()).collect();
        assert_eq!(dates, ["2024-03-01", "2024-02-01", "2024-01-01"]);
        // input untouched
        assert_eq!(list[0].date.to_string(), "2024-01-01");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let list = vec![
            expense(1, Category::Rental, "2024-01-01", PaymentMode::Cash),
            expense(2, Category::Travel, "2024-02-01", PaymentMode::Upi),
            expense(3, Category::Others, "2024-01-01", PaymentMode::Cash),
            expense(4, Category::Others, "2024-02-01", PaymentMode::Cash),
        ];
        let result = filter_and_sort(&list, &ExpenseFilter::new(), today());
        let amounts: Vec<_> = result.iter().map(|e| e.amount.cents()).collect();
        assert_eq!(amounts, [200, 400, 100, 300]);
    }

    #[test]
    fn test_this_month_is_calendar_bounded() {
        let list = vec![
            expense(1, Category::Rental, "2024-02-29", PaymentMode::Cash),
            expense(2, Category::Rental, "2024-03-01", PaymentMode::Cash),
            expense(3, Category::Rental, "2024-03-31", PaymentMode::Cash),
            expense(4, Category::Rental, "2024-04-01", PaymentMode::Cash),
        ];
        let filter = ExpenseFilter::new().date_range(DateRange::ThisMonth);
        let amounts: Vec<_> = filter_and_sort(&list, &filter, today())
            .iter()
            .map(|e| e.amount.cents())
            .collect();
        assert_eq!(amounts, [300, 200]);
    }

    #[test]
    fn test_rolling_windows_are_inclusive() {
        // 2024-03-15 minus 30 days is 2024-02-14
        let list = vec![
            expense(1, Category::Rental, "2024-02-13", PaymentMode::Cash),
            expense(2, Category::Rental, "2024-02-14", PaymentMode::Cash),
            expense(3, Category::Rental, "2023-12-16", PaymentMode::Cash),
            expense(4, Category::Rental, "2023-12-15", PaymentMode::Cash),
        ];
        let last30 = ExpenseFilter::new().date_range(DateRange::Last30Days);
        assert_eq!(filter_and_sort(&list, &last30, today()).len(), 1);

        // minus 90 days is 2023-12-16
        let last90 = ExpenseFilter::new().date_range(DateRange::Last90Days);
        let amounts: Vec<_> = filter_and_sort(&list, &last90, today())
            .iter()
            .map(|e| e.amount.cents())
            .collect();
        assert_eq!(amounts, [200, 100, 300]);
    }

    #[test]
    fn test_category_and_mode_combine_with_and() {
        let list = vec![
            expense(1, Category::Travel, "2024-01-01", PaymentMode::Upi),
            expense(2, Category::Travel, "2024-01-02", PaymentMode::Cash),
            expense(3, Category::Groceries, "2024-01-03", PaymentMode::Upi),
        ];
        let filter = ExpenseFilter::new()
            .category(Category::Travel)
            .payment_mode(PaymentMode::Upi);
        let result = filter_and_sort(&list, &filter, today());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount.cents(), 100);
    }

    #[test]
    fn test_unrecognized_values_only_pass_unrestricted_filters() {
        let list = vec![expense_raw(5, "Medical", "2024-01-01", "Cheque")];
        assert_eq!(filter_and_sort(&list, &ExpenseFilter::new(), today()).len(), 1);

        let by_category = ExpenseFilter::new().category(Category::Others);
        assert!(filter_and_sort(&list, &by_category, today()).is_empty());

        let by_mode = ExpenseFilter::new().payment_mode(PaymentMode::Cash);
        assert!(filter_and_sort(&list, &by_mode, today()).is_empty());
    }

    #[test]
    fn test_toggle_and_clear() {
        let mut filter = ExpenseFilter::new();
        filter.toggle_category(Category::Rental, true);
        filter.toggle_payment_mode(PaymentMode::Cash, true);
        filter.toggle_category(Category::Rental, false);
        assert!(filter.categories.is_empty());
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_date_range_parse() {
        assert_eq!("this-month".parse::<DateRange>().unwrap(), DateRange::ThisMonth);
        assert_eq!("last_90_days".parse::<DateRange>().unwrap(), DateRange::Last90Days);
        assert_eq!("30d".parse::<DateRange>().unwrap(), DateRange::Last30Days);
        assert!("yesterday".parse::<DateRange>().is_err());
    }
}
