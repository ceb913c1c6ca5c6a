//! History command: recent entries from the audit log

use clap::Args;

use super::AppContext;
use crate::error::ExpenseResult;

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// Number of entries to show, most recent last
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: usize,
}

pub fn handle_history_command(ctx: &AppContext, args: HistoryArgs) -> ExpenseResult<()> {
    let audit = ctx.audit();
    let entries = audit.read_recent(args.limit)?;

    if entries.is_empty() {
        println!("No history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
