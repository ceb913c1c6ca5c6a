//! Configuration module
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence
//! - Backend connection settings

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{BackendSettings, Settings, StoreMode};
