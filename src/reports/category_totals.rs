//! Category breakdown
//!
//! All-time spending per category with each category's share of the grand
//! total.

use crate::models::{Category, ClosedSet, Expense, Money};

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    pub expense_count: usize,
    /// Share of the grand total, 0.0..=100.0
    pub percentage: f64,
}

/// Per-category totals plus the grand total they are measured against
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    /// One row per category, in the fixed category order
    pub rows: Vec<CategoryTotal>,
    /// Sum of every expense, including ones with an unrecognized category
    pub grand_total: Money,
}

impl CategoryBreakdown {
    pub fn get(&self, category: Category) -> Option<&CategoryTotal> {
        self.rows.iter().find(|row| row.category == category)
    }

    /// Sum of the per-category rows (excludes unrecognized categories)
    pub fn categorized_total(&self) -> Money {
        self.rows.iter().map(|row| row.total).sum()
    }

    /// Amount that belongs to no known category
    pub fn unrecognized_total(&self) -> Money {
        self.grand_total - self.categorized_total()
    }
}

/// Total each category over the whole list
///
/// The percentage denominator is the sum of every amount, so expenses with
/// an unrecognized category shrink the known categories' shares. A zero
/// grand total yields 0% everywhere.
pub fn category_totals(expenses: &[Expense]) -> CategoryBreakdown {
    let grand_total: Money = expenses.iter().map(|e| e.amount).sum();

    let rows = Category::ALL
        .iter()
        .map(|&category| {
            let (total, expense_count) = expenses
                .iter()
                .filter(|e| e.category.is(category))
                .fold((Money::zero(), 0), |(sum, count), e| (sum + e.amount, count + 1));

            let percentage = if grand_total.is_zero() {
                0.0
            } else {
                (total.cents() as f64 / grand_total.cents() as f64) * 100.0
            };

            CategoryTotal {
                category,
                total,
                expense_count,
                percentage,
            }
        })
        .collect();

    CategoryBreakdown { rows, grand_total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymentMode;
    use crate::reports::test_support::{expense, expense_raw};

    #[test]
    fn test_groceries_and_travel_split() {
        let list = vec![
            expense(1000, Category::Groceries, "2024-01-15", PaymentMode::Cash),
            expense(500, Category::Travel, "2024-01-20", PaymentMode::Upi),
        ];
        let breakdown = category_totals(&list);

        let groceries = breakdown.get(Category::Groceries).unwrap();
        assert_eq!(groceries.total, Money::from_units(1000));
        assert_eq!(format!("{:.1}", groceries.percentage), "66.7");

        let travel = breakdown.get(Category::Travel).unwrap();
        assert_eq!(travel.total, Money::from_units(500));
        assert_eq!(format!("{:.1}", travel.percentage), "33.3");

        for category in [Category::Rental, Category::Entertainment, Category::Others] {
            let row = breakdown.get(category).unwrap();
            assert!(row.total.is_zero());
            assert_eq!(row.percentage, 0.0);
        }

        let sum: f64 = breakdown.rows.iter().map(|r| r.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_list_has_no_nan() {
        let breakdown = category_totals(&[]);
        assert_eq!(breakdown.rows.len(), 5);
        assert!(breakdown.grand_total.is_zero());
        assert!(breakdown.rows.iter().all(|r| r.percentage == 0.0));
    }

    #[test]
    fn test_all_zero_amounts() {
        let list = vec![expense(0, Category::Rental, "2024-01-15", PaymentMode::Cash)];
        let breakdown = category_totals(&list);
        let rental = breakdown.get(Category::Rental).unwrap();
        assert_eq!(rental.expense_count, 1);
        assert_eq!(rental.percentage, 0.0);
    }

    #[test]
    fn test_unrecognized_category_counts_in_denominator_only() {
        let list = vec![
            expense(300, Category::Rental, "2024-01-15", PaymentMode::Cash),
            expense_raw(100, "Medical", "2024-01-16", "Cash"),
        ];
        let breakdown = category_totals(&list);
        assert_eq!(breakdown.grand_total, Money::from_units(400));
        assert_eq!(breakdown.categorized_total(), Money::from_units(300));
        assert_eq!(breakdown.unrecognized_total(), Money::from_units(100));
        assert_eq!(breakdown.get(Category::Rental).unwrap().percentage, 75.0);

        let sum: f64 = breakdown.rows.iter().map(|r| r.percentage).sum();
        assert!(sum < 100.0);
    }
}
