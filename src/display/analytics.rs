//! Analytics view formatting
//!
//! Summary cards, the stacked monthly chart and the category breakdown.

use chrono::NaiveDate;

use super::report::{format_bar, format_header, format_percentage, format_stacked_bar};
use crate::models::{Category, ClosedSet, Money, MonthPeriod};
use crate::reports::{CategoryBreakdown, MonthBucket};

const CHART_WIDTH: usize = 40;
const BREAKDOWN_BAR_WIDTH: usize = 20;

/// Glyph that stands for a category in the stacked chart
pub fn category_glyph(category: Category) -> char {
    match category {
        Category::Rental => '█',
        Category::Groceries => '▓',
        Category::Entertainment => '▒',
        Category::Travel => '░',
        Category::Others => '•',
    }
}

/// All-time and current-month totals
pub fn format_summary_cards(all_time: Money, this_month: Money, today: NaiveDate, symbol: &str) -> String {
    let month = MonthPeriod::containing(today).long_label();
    let all_time = all_time.format_with_symbol(symbol);
    let this_month = this_month.format_with_symbol(symbol);
    let width = all_time.chars().count().max(this_month.chars().count());

    format!(
        "Total Expenses  {:>width$}\n  All time expenses\nThis Month      {:>width$}\n  {} expenses\n",
        all_time,
        this_month,
        month,
        width = width
    )
}

/// One stacked bar per month, scaled to the largest month
pub fn format_monthly_chart(buckets: &[MonthBucket], symbol: &str) -> String {
    let mut output = format_header("Monthly Expense Breakdown");

    if buckets.is_empty() {
        output.push_str("No months to show.\n");
        return output;
    }

    let max_total = buckets
        .iter()
        .map(|b| b.total.to_major())
        .fold(0.0, f64::max);

    for bucket in buckets {
        let segments: Vec<(char, f64)> = bucket
            .amounts
            .iter()
            .map(|(category, amount)| (category_glyph(*category), amount.to_major()))
            .collect();

        output.push_str(&format!(
            "{:<8}  {}  {}\n",
            bucket.label(),
            format_stacked_bar(&segments, max_total, CHART_WIDTH),
            bucket.total.format_with_symbol(symbol)
        ));
    }

    let legend: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{} {}", category_glyph(*c), c))
        .collect();
    output.push_str(&format!("\n{}\n", legend.join("  ")));

    output
}

/// Per-category totals with their share of all spending
pub fn format_category_breakdown(breakdown: &CategoryBreakdown, symbol: &str) -> String {
    let mut output = format_header("Category Breakdown");

    let amounts: Vec<String> = breakdown
        .rows
        .iter()
        .map(|row| row.total.format_with_symbol(symbol))
        .collect();
    let amount_width = amounts.iter().map(|a| a.chars().count()).max().unwrap_or(0);

    for (row, amount) in breakdown.rows.iter().zip(&amounts) {
        output.push_str(&format!(
            "{} {:<13} {:>width$}  {:>6}  {}\n",
            category_glyph(row.category),
            row.category.to_string(),
            amount,
            format_percentage(row.percentage),
            format_bar(row.percentage, 100.0, BREAKDOWN_BAR_WIDTH),
            width = amount_width
        ));
    }

    let unrecognized = breakdown.unrecognized_total();
    if !unrecognized.is_zero() {
        output.push_str(&format!(
            "  Uncategorized {} (not in any category above)\n",
            unrecognized.format_with_symbol(symbol)
        ));
    }

    output
}
