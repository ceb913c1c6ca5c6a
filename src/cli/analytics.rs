//! Analytics command: summary cards, monthly chart and category shares

use clap::Args;

use super::AppContext;
use crate::display::{format_category_breakdown, format_monthly_chart, format_summary_cards};
use crate::error::ExpenseResult;
use crate::reports::{all_time_total, category_totals, current_month_total, monthly_breakdown};
use crate::services::{Dashboard, ExpenseService};

/// Longest chart the command will draw
pub const MAX_CHART_MONTHS: u64 = 120;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyticsArgs {
    /// Number of months in the chart, ending with the current month (1-120)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=MAX_CHART_MONTHS))]
    pub months: Option<u64>,
}

impl AnalyticsArgs {
    /// Requested months, else the configured default, kept within 1-120
    pub fn chart_months(&self, configured: usize) -> usize {
        let months = self.months.unwrap_or(configured as u64);
        months.clamp(1, MAX_CHART_MONTHS) as usize
    }
}

pub fn handle_analytics_command(ctx: &AppContext, args: AnalyticsArgs) -> ExpenseResult<()> {
    let months = args.chart_months(ctx.settings.analytics_months);

    let store = ctx.open_store()?;
    let dashboard = Dashboard::try_load(ExpenseService::new(store.as_ref()))?;
    let expenses = dashboard.expenses();
    let today = ctx.today();
    let symbol = ctx.currency_symbol();

    print!(
        "{}",
        format_summary_cards(
            all_time_total(expenses),
            current_month_total(expenses, today),
            today,
            symbol
        )
    );
    println!();
    print!(
        "{}",
        format_monthly_chart(&monthly_breakdown(expenses, months, today), symbol)
    );
    println!();
    print!("{}", format_category_breakdown(&category_totals(expenses), symbol));

    Ok(())
}
