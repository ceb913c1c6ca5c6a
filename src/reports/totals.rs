//! Period totals for the summary cards

use chrono::NaiveDate;

use crate::models::{Expense, Money, MonthPeriod};

/// Sum every expense dated within `[from, to]`
///
/// `None` leaves that side unbounded. Category is not considered, so
/// unrecognized categories are included.
pub fn period_total(expenses: &[Expense], from: Option<NaiveDate>, to: Option<NaiveDate>) -> Money {
    expenses
        .iter()
        .filter(|e| from.map_or(true, |from| e.date >= from))
        .filter(|e| to.map_or(true, |to| e.date <= to))
        .map(|e| e.amount)
        .sum()
}

/// Sum of every expense ever recorded
pub fn all_time_total(expenses: &[Expense]) -> Money {
    period_total(expenses, None, None)
}

/// Sum of the calendar month containing `today`
pub fn current_month_total(expenses: &[Expense], today: NaiveDate) -> Money {
    let month = MonthPeriod::containing(today);
    period_total(expenses, Some(month.start_date()), Some(month.end_date()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PaymentMode};
    use crate::reports::test_support::{date, expense, expense_raw};

    fn sample() -> Vec<Expense> {
        vec![
            expense(100, Category::Rental, "2024-01-01", PaymentMode::Cash),
            expense(200, Category::Travel, "2024-01-31", PaymentMode::Upi),
            expense(400, Category::Others, "2024-02-01", PaymentMode::Cash),
            expense_raw(800, "Medical", "2024-02-15", "Cheque"),
        ]
    }

    #[test]
    fn test_inclusive_bounds() {
        let total = period_total(&sample(), Some(date("2024-01-01")), Some(date("2024-01-31")));
        assert_eq!(total, Money::from_units(300));
    }

    #[test]
    fn test_unbounded_sides() {
        assert_eq!(period_total(&sample(), Some(date("2024-02-01")), None), Money::from_units(1200));
        assert_eq!(period_total(&sample(), None, Some(date("2024-01-01"))), Money::from_units(100));
    }

    #[test]
    fn test_unrecognized_category_included() {
        assert_eq!(all_time_total(&sample()), Money::from_units(1500));
    }

    #[test]
    fn test_current_month() {
        assert_eq!(current_month_total(&sample(), date("2024-02-20")), Money::from_units(1200));
        assert_eq!(current_month_total(&sample(), date("2024-03-20")), Money::zero());
    }

    #[test]
    fn test_empty() {
        assert!(all_time_total(&[]).is_zero());
    }
}
