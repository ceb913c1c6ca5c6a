//! Expense Tracker - personal expense tracking with category analytics
//!
//! This library provides the core functionality for the `expenses` command.
//! Expenses are recorded against a fixed set of categories and payment
//! modes, kept either in a local JSON file or in a hosted backend, and
//! summarized into monthly and per-category views.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense record, categories, payment modes and money
//! - `reports`: Pure aggregation over a loaded expense list
//! - `storage`: The `ExpenseStore` trait with local and remote implementations
//! - `backend`: Shared HTTP plumbing for the hosted backend
//! - `auth`: Sign-in, sessions and secret handling
//! - `services`: Business logic and dashboard state
//! - `audit`: Append-only audit log
//! - `display` / `export`: Terminal formatting and CSV/JSON export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{AppPaths, Settings};
//! use expense_tracker::storage::open_store;
//!
//! let paths = AppPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = open_store(&settings, &paths, None)?;
//! let expenses = store.list_all()?;
//! ```

pub mod audit;
pub mod auth;
pub mod backend;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
