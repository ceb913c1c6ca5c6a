//! Diagnostic logging
//!
//! Installs a `tracing` fmt subscriber writing to stderr. `RUST_LOG` takes
//! precedence over the configured level. The filter sits behind a reload
//! layer so the level can be changed once settings are known.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// `None` when another subscriber was already installed
static FILTER_HANDLE: OnceLock<Option<reload::Handle<EnvFilter, Registry>>> = OnceLock::new();

/// Level used before settings are loaded
pub const STARTUP_LEVEL: &str = "warn";

/// Initialize the global tracing subscriber once per process
pub fn init_tracing(default_level: &str) {
    FILTER_HANDLE.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(default_level));
        let (filter, handle) = reload::Layer::new(filter);

        // Another subscriber may already be installed (e.g. by a test harness)
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()
            .is_ok()
            .then_some(handle)
    });
}

/// Change the level of an installed subscriber
///
/// Returns false when nothing was changed: `RUST_LOG` is set, tracing was
/// never initialized here, or the reload failed.
pub fn set_level(level: &str) -> bool {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        return false;
    }
    match FILTER_HANDLE.get() {
        Some(Some(handle)) => handle.reload(level_filter(level)).is_ok(),
        _ => false,
    }
}

/// Filter for this crate and its binary at `level`, falling back to warn
fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("expense_tracker={level},expenses={level}"))
        .unwrap_or_else(|_| EnvFilter::new("expense_tracker=warn,expenses=warn"))
}
