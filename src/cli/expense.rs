//! Expense CLI commands: add, list and export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use super::{AppContext, FilterArgs};
use crate::display::{format_expense_table, format_list_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_expenses_json};
use crate::models::{Expense, ExpenseForm};
use crate::services::{Dashboard, ExpenseService, Notification, NotificationKind};

/// Entry form fields; every field but notes is required
#[derive(Args, Debug, Clone, Default)]
pub struct AddArgs {
    /// Amount, e.g. 499.50
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Rental, Groceries, Entertainment, Travel or Others
    #[arg(short, long)]
    pub category: Option<String>,

    /// Date of the expense (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// UPI, Credit Card, Net Banking or Cash
    #[arg(short, long = "payment-mode")]
    pub payment_mode: Option<String>,

    /// Free-text notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddArgs> for ExpenseForm {
    fn from(args: AddArgs) -> Self {
        ExpenseForm {
            amount: args.amount,
            category: args.category,
            notes: args.notes,
            date: args.date,
            payment_mode: args.payment_mode,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Export format options
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ExportFormat {
    /// One row per expense
    #[default]
    Csv,
    /// Expenses plus summary metadata
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Validate the form, save it and confirm what the store accepted
pub fn handle_add_command(ctx: &AppContext, args: AddArgs) -> ExpenseResult<()> {
    let form = ExpenseForm::from(args);
    // Nothing is opened or sent until the form is complete
    form.validate()
        .map_err(|err| ExpenseError::Validation(err.to_string()))?;

    let store = ctx.open_store()?;
    let audit = ctx.audit();
    let service = ExpenseService::new(store.as_ref()).with_audit(&audit);
    let mut dashboard = Dashboard::load(service).with_currency_symbol(ctx.currency_symbol());

    let added = dashboard.add_expense(&form).map(|expense| expense.date);
    print_notifications(dashboard.take_notifications());
    let date = added?;
    println!("On {}", date.format("%b %d, %Y"));
    Ok(())
}

/// Success and info go to stdout; warnings and errors to stderr
fn print_notifications(notifications: Vec<Notification>) {
    for note in notifications {
        match note.kind {
            NotificationKind::Success | NotificationKind::Info => {
                println!("{}", note.message);
                if let Some(detail) = &note.detail {
                    println!("{}", detail);
                }
            }
            NotificationKind::Warning | NotificationKind::Error => {
                eprintln!("{} {}", note.kind.icon(), note.message);
                if let Some(detail) = &note.detail {
                    eprintln!("  {}", detail);
                }
            }
        }
    }
}

pub fn handle_list_command(ctx: &AppContext, args: ListArgs) -> ExpenseResult<()> {
    let store = ctx.open_store()?;
    let mut dashboard = Dashboard::try_load(ExpenseService::new(store.as_ref()))?;
    dashboard.set_filter(args.filter.to_filter());

    let visible = dashboard.visible_expenses(ctx.today());
    let symbol = ctx.currency_symbol();

    if visible.is_empty() {
        if dashboard.expenses().is_empty() {
            println!("No expenses yet. Add one with 'expenses add'.");
        } else {
            println!("No expenses match the current filters.");
        }
        return Ok(());
    }

    println!("{}", format_list_summary(&visible, dashboard.filter(), symbol));
    println!();
    println!("{}", format_expense_table(&visible, symbol));
    Ok(())
}

pub fn handle_export_command(ctx: &AppContext, args: ExportArgs) -> ExpenseResult<()> {
    let store = ctx.open_store()?;
    let mut dashboard = Dashboard::try_load(ExpenseService::new(store.as_ref()))?;
    dashboard.set_filter(args.filter.to_filter());
    let visible = dashboard.visible_expenses(ctx.today());

    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let count = write_export(&visible, args.format, BufWriter::new(file))?;
            println!("Exported {} expenses to: {}", count, path.display());
        }
        None => {
            write_export(&visible, args.format, io::stdout().lock())?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    expenses: &[Expense],
    format: ExportFormat,
    mut writer: W,
) -> ExpenseResult<usize> {
    let count = match format {
        ExportFormat::Csv => export_expenses_csv(expenses, &mut writer)?,
        ExportFormat::Json => export_expenses_json(expenses, &mut writer)?,
    };
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(count)
}
