use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use expense_tracker::cli::{
    handle_add_command, handle_analytics_command, handle_config_command, handle_export_command,
    handle_history_command, handle_list_command, handle_login_command, handle_logout_command,
    handle_whoami_command, AddArgs, AnalyticsArgs, AppContext, ConfigCommands, ExportArgs,
    HistoryArgs, ListArgs, LoginArgs,
};
use expense_tracker::config::{AppPaths, Settings, StoreMode};
use expense_tracker::logging::{init_tracing, set_level, STARTUP_LEVEL};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Record expenses, browse and filter them, and see where the money \
                  goes month by month. Expenses are kept in a local file or, once \
                  signed in, in a hosted backend."
)]
struct Cli {
    /// Which store to use: auto, local or remote
    #[arg(long, global = true, env = "EXPENSE_TRACKER_STORE")]
    store: Option<StoreMode>,

    /// Backend project URL
    #[arg(long, global = true, env = "EXPENSE_TRACKER_API_URL")]
    api_url: Option<String>,

    /// Backend public API key
    #[arg(long, global = true, env = "EXPENSE_TRACKER_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// More diagnostic output (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Totals, monthly chart and category breakdown
    Analytics(AnalyticsArgs),

    /// Export expenses to CSV or JSON
    Export(ExportArgs),

    /// Sign in to the hosted backend
    Login(LoginArgs),

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show recent entries from the audit log
    History(HistoryArgs),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose_level = match cli.verbose {
        0 => None,
        1 => Some("info"),
        _ => Some("debug"),
    };
    // Installed before settings load so its diagnostics are reported
    init_tracing(verbose_level.unwrap_or(STARTUP_LEVEL));

    let paths = AppPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if verbose_level.is_none() {
        set_level(&settings.log_level);
    }

    settings.apply_backend_overrides(cli.api_url, cli.api_key);
    if let Some(mode) = cli.store {
        settings.store_mode = mode;
    }

    let ctx = AppContext::new(paths, settings);

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&ctx, args)?,
        Some(Commands::List(args)) => handle_list_command(&ctx, args)?,
        Some(Commands::Analytics(args)) => handle_analytics_command(&ctx, args)?,
        Some(Commands::Export(args)) => handle_export_command(&ctx, args)?,
        Some(Commands::Login(args)) => handle_login_command(&ctx, args)?,
        Some(Commands::Logout) => handle_logout_command(&ctx)?,
        Some(Commands::Whoami) => handle_whoami_command(&ctx)?,
        Some(Commands::History(args)) => handle_history_command(&ctx, args)?,
        Some(Commands::Config { command }) => handle_config_command(&ctx, command)?,
        None => {
            println!("Expense Tracker - personal expense tracking");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add --help' to record your first expense.");
        }
    }

    Ok(())
}
