//! Configuration commands

use clap::Subcommand;

use super::AppContext;
use crate::config::{BackendSettings, Settings, StoreMode};
use crate::error::{ExpenseError, ExpenseResult};

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Show paths and effective settings
    Show,

    /// Choose which store commands use
    Store {
        /// auto, local or remote
        mode: StoreMode,
    },

    /// Configure the hosted backend
    Backend {
        /// Project URL, e.g. https://xyz.supabase.co
        #[arg(long)]
        url: String,

        /// Public API key
        #[arg(long)]
        key: String,

        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Set the currency symbol used when displaying amounts
    Currency {
        symbol: String,
    },
}

pub fn handle_config_command(ctx: &AppContext, cmd: Option<ConfigCommands>) -> ExpenseResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => show(ctx),
        ConfigCommands::Store { mode } => {
            update(ctx, |settings| {
                settings.store_mode = mode;
                Ok(())
            })?;
            println!("Store mode set to {}", mode);
        }
        ConfigCommands::Backend { url, key, timeout } => {
            let mut backend = BackendSettings::new(url.trim(), key.trim());
            if let Some(secs) = timeout {
                backend.timeout_secs = secs;
            }
            backend.validate()?;
            let url = backend.api_url.clone();

            update(ctx, |settings| {
                settings.backend = Some(backend);
                Ok(())
            })?;
            println!("Backend set to {}", url);
        }
        ConfigCommands::Currency { symbol } => {
            let symbol = symbol.trim().to_string();
            update(ctx, |settings| {
                if symbol.is_empty() {
                    return Err(ExpenseError::Validation(
                        "Currency symbol cannot be empty".into(),
                    ));
                }
                settings.currency_symbol = symbol.clone();
                Ok(())
            })?;
            println!("Currency symbol set to {}", symbol);
        }
    }

    Ok(())
}

fn show(ctx: &AppContext) {
    let paths = &ctx.paths;
    let settings = &ctx.settings;

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Expenses file:  {}", paths.expenses_file().display());
    println!("Session file:   {}", paths.session_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Store mode:      {}", settings.store_mode);
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Analytics range: {} months", settings.analytics_months);
    println!("  Log level:       {}", settings.log_level);
    match &settings.backend {
        Some(backend) => {
            println!("  Backend URL:     {}", backend.api_url);
            println!("  Backend timeout: {}s", backend.timeout_secs);
        }
        None => println!("  Backend:         not configured"),
    }
}

/// Apply a change to the persisted settings file
///
/// Starts from what is on disk so command-line overrides are not saved.
fn update<F>(ctx: &AppContext, change: F) -> ExpenseResult<()>
where
    F: FnOnce(&mut Settings) -> ExpenseResult<()>,
{
    let mut settings = Settings::load_or_create(&ctx.paths)?;
    change(&mut settings)?;
    settings.save(&ctx.paths)?;
    tracing::info!("settings updated");
    Ok(())
}
