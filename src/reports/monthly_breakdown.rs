//! Monthly category breakdown
//!
//! Produces the data behind the stacked monthly bar chart: one bucket per
//! calendar month, each with a column per category.

use chrono::NaiveDate;

use crate::models::{Category, ClosedSet, Expense, Money, MonthPeriod};

/// Spending for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub period: MonthPeriod,
    /// One entry per category, in the fixed category order
    pub amounts: Vec<(Category, Money)>,
    /// Sum of the category columns
    pub total: Money,
    /// Recognized-category expenses that fell into this month
    pub expense_count: usize,
}

impl MonthBucket {
    fn empty(period: MonthPeriod) -> Self {
        Self {
            period,
            amounts: Category::ALL.iter().map(|c| (*c, Money::zero())).collect(),
            total: Money::zero(),
            expense_count: 0,
        }
    }

    /// Amount for a single category column
    pub fn amount(&self, category: Category) -> Money {
        self.amounts
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, amount)| *amount)
            .unwrap_or_default()
    }

    /// Chart label, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        self.period.label()
    }
}

/// Longest window `monthly_breakdown` will build (one hundred years)
pub const MAX_MONTHS: usize = 1200;

/// Bucket spending into `month_count` months ending with the month of `anchor`
///
/// Buckets are returned oldest first. Expenses with an unrecognized category
/// land in no column and add nothing to any total. Counts above
/// [`MAX_MONTHS`] are clamped to it.
pub fn monthly_breakdown(expenses: &[Expense], month_count: usize, anchor: NaiveDate) -> Vec<MonthBucket> {
    let month_count = month_count.min(MAX_MONTHS);
    let mut periods = Vec::with_capacity(month_count);
    let mut period = MonthPeriod::containing(anchor);
    for _ in 0..month_count {
        periods.push(period);
        period = period.previous();
    }
    periods.reverse();

    let mut buckets: Vec<MonthBucket> = periods.into_iter().map(MonthBucket::empty).collect();

    for expense in expenses {
        let Some(category) = expense.category.known() else {
            continue;
        };
        let Some(bucket) = buckets.iter_mut().find(|b| b.period.contains(expense.date)) else {
            continue;
        };
        if let Some((_, amount)) = bucket.amounts.iter_mut().find(|(c, _)| *c == category) {
            *amount += expense.amount;
        }
        bucket.total += expense.amount;
        bucket.expense_count += 1;
    }

    buckets
}
