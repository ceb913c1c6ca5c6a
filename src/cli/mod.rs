//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod analytics;
pub mod auth;
pub mod config;
pub mod expense;
pub mod history;

pub use analytics::{handle_analytics_command, AnalyticsArgs};
pub use auth::{handle_login_command, handle_logout_command, handle_whoami_command, LoginArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use expense::{
    handle_add_command, handle_export_command, handle_list_command, AddArgs, ExportArgs, ListArgs,
};
pub use history::{handle_history_command, HistoryArgs};

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::audit::AuditLogger;
use crate::auth::SessionManager;
use crate::config::{AppPaths, Settings};
use crate::error::ExpenseResult;
use crate::models::{Category, PaymentMode};
use crate::reports::{DateRange, ExpenseFilter};
use crate::storage::{open_store, ExpenseStore};

/// Everything a command needs: resolved paths and effective settings
pub struct AppContext {
    pub paths: AppPaths,
    pub settings: Settings,
}

impl AppContext {
    pub fn new(paths: AppPaths, settings: Settings) -> Self {
        Self { paths, settings }
    }

    pub fn sessions(&self) -> SessionManager {
        SessionManager::new(&self.paths, self.settings.backend.clone())
    }

    /// Open the store for the current settings and session
    pub fn open_store(&self) -> ExpenseResult<Box<dyn ExpenseStore>> {
        let session = self.sessions().current();
        let store = open_store(&self.settings, &self.paths, session)?;
        tracing::debug!(store = store.name(), "store opened");
        Ok(store)
    }

    pub fn audit(&self) -> AuditLogger {
        AuditLogger::new(self.paths.audit_log())
    }

    pub fn currency_symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// The local calendar date
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// List filter flags shared by `list` and `export`
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Date window: all, this-month, last-30-days or last-90-days
    #[arg(short, long, default_value = "all")]
    pub range: DateRange,

    /// Only these categories (repeatable)
    #[arg(short, long = "category", value_name = "CATEGORY")]
    pub categories: Vec<Category>,

    /// Only these payment modes (repeatable)
    #[arg(short, long = "payment-mode", value_name = "MODE")]
    pub payment_modes: Vec<PaymentMode>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> ExpenseFilter {
        let mut filter = ExpenseFilter::new().date_range(self.range);
        for category in &self.categories {
            filter.toggle_category(*category, true);
        }
        for mode in &self.payment_modes {
            filter.toggle_payment_mode(*mode, true);
        }
        filter
    }
}
