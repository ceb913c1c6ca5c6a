//! Expense list formatting
//!
//! Formats the filtered expense list as a table with a short summary line.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{Expense, Money};
use crate::reports::ExpenseFilter;

const NOTES_WIDTH: usize = 40;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Payment Mode")]
    payment_mode: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, symbol: &str) -> Self {
        Self {
            date: format_expense_date(expense),
            category: expense.category.to_string(),
            payment_mode: expense.payment_mode.to_string(),
            amount: expense.amount.format_with_symbol(symbol),
            notes: expense
                .notes
                .as_deref()
                .map(|n| truncate(n, NOTES_WIDTH))
                .unwrap_or_default(),
        }
    }
}

/// Format the date the way the list shows it ("Jan 15, 2024")
pub fn format_expense_date(expense: &Expense) -> String {
    expense.date.format("%b %d, %Y").to_string()
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut table = Table::new(expenses.iter().map(|e| ExpenseRow::new(e, symbol)));
    table.with(Style::psql());
    table.modify(Columns::single(3), Alignment::right());
    table.to_string()
}

/// Count and total of the listed expenses, noting when filters apply
pub fn format_list_summary(expenses: &[Expense], filter: &ExpenseFilter, symbol: &str) -> String {
    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let noun = if expenses.len() == 1 { "expense" } else { "expenses" };

    let mut output = format!(
        "{} {}, total {}",
        expenses.len(),
        noun,
        total.format_with_symbol(symbol)
    );

    if filter.is_active() {
        let mut parts = vec![filter.date_range.label().to_string()];
        if !filter.categories.is_empty() {
            let names: Vec<String> = filter.categories.iter().map(|c| c.to_string()).collect();
            parts.push(names.join(", "));
        }
        if !filter.payment_modes.is_empty() {
            let names: Vec<String> = filter.payment_modes.iter().map(|m| m.to_string()).collect();
            parts.push(names.join(", "));
        }
        output.push_str(&format!(" (filtered: {})", parts.join("; ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PaymentMode};
    use crate::reports::test_support::{expense, expense_raw};
    use crate::reports::DateRange;

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "₹"), "No expenses found.");
    }

    #[test]
    fn test_table_rows() {
        let mut e = expense(1500, Category::Groceries, "2024-01-15", PaymentMode::CreditCard);
        e.notes = Some("monthly stock-up".into());
        let unknown = expense_raw(20, "Medical", "2024-01-03", "Cheque");

        let table = format_expense_table(&[e, unknown], "₹");
        assert!(table.contains("Jan 15, 2024"));
        assert!(table.contains("Credit Card"));
        assert!(table.contains("₹1,500.00"));
        assert!(table.contains("monthly stock-up"));
        assert!(table.contains("Medical"));
        assert!(table.contains("Payment Mode"));
    }

    #[test]
    fn test_summary() {
        let list = vec![
            expense(100, Category::Travel, "2024-01-15", PaymentMode::Cash),
            expense(50, Category::Travel, "2024-01-14", PaymentMode::Upi),
        ];
        let summary = format_list_summary(&list, &ExpenseFilter::new(), "₹");
        assert_eq!(summary, "2 expenses, total ₹150.00");

        let filter = ExpenseFilter::new()
            .date_range(DateRange::Last30Days)
            .category(Category::Travel);
        let summary = format_list_summary(&list[..1], &filter, "$");
        assert!(summary.starts_with("1 expense, total $100.00 (filtered: "));
        assert!(summary.contains("Travel"));
    }
}
