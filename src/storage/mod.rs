//! Storage layer for the expense tracker
//!
//! An [`ExpenseStore`] persists new expenses and returns the full list. Two
//! implementations exist: a local JSON file and the hosted backend.
//! [`open_store`] picks one from the settings and the current session.

pub mod file_io;
pub mod local;
pub mod remote;

pub use file_io::{read_json, write_json_atomic};
pub use local::LocalExpenseStore;
pub use remote::RemoteExpenseStore;

use crate::auth::Session;
use crate::config::{AppPaths, Settings, StoreMode};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft};

/// Persistence for expenses
pub trait ExpenseStore {
    /// Persist a validated draft, returning the stored record with its
    /// assigned id and creation timestamp
    fn create(&self, draft: &ExpenseDraft) -> ExpenseResult<Expense>;

    /// Every expense visible to the current user, newest first by creation
    fn list_all(&self) -> ExpenseResult<Vec<Expense>>;

    /// Short label for messages ("local", "remote")
    fn name(&self) -> &'static str;
}

/// Open the store selected by the settings
///
/// In auto mode the remote store is used only when a backend is configured
/// and someone is signed in.
pub fn open_store(
    settings: &Settings,
    paths: &AppPaths,
    session: Option<Session>,
) -> ExpenseResult<Box<dyn ExpenseStore>> {
    let local = || -> Box<dyn ExpenseStore> { Box::new(LocalExpenseStore::new(paths.expenses_file())) };

    match (settings.store_mode, settings.backend.as_ref()) {
        (StoreMode::Local, _) => Ok(local()),
        (StoreMode::Remote, Some(backend)) => {
            Ok(Box::new(RemoteExpenseStore::new(backend, session)?))
        }
        (StoreMode::Remote, None) => Err(ExpenseError::Config(
            "Remote store selected but no backend is configured".into(),
        )),
        (StoreMode::Auto, Some(backend)) if session.is_some() => {
            Ok(Box::new(RemoteExpenseStore::new(backend, session)?))
        }
        (StoreMode::Auto, _) => {
            tracing::debug!("using local store");
            Ok(local())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SecretString;
    use crate::config::BackendSettings;
    use crate::models::UserId;
    use tempfile::TempDir;

    fn session() -> Session {
        Session {
            user_id: UserId::new(),
            email: "a@example.com".into(),
            username: None,
            access_token: SecretString::from("t"),
            expires_at: None,
        }
    }

    fn setup(mode: StoreMode, backend: bool) -> (Settings, AppPaths, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        settings.store_mode = mode;
        if backend {
            settings.backend = Some(BackendSettings::new("https://demo.supabase.co", "anon"));
        }
        (settings, paths, temp_dir)
    }

    #[test]
    fn test_auto_without_session_is_local() {
        let (settings, paths, _temp) = setup(StoreMode::Auto, true);
        let store = open_store(&settings, &paths, None).unwrap();
        assert_eq!(store.name(), "local");
    }

    #[test]
    fn test_auto_with_session_is_remote() {
        let (settings, paths, _temp) = setup(StoreMode::Auto, true);
        let store = open_store(&settings, &paths, Some(session())).unwrap();
        assert_eq!(store.name(), "remote");

        let (settings, paths, _temp) = setup(StoreMode::Auto, false);
        let store = open_store(&settings, &paths, Some(session())).unwrap();
        assert_eq!(store.name(), "local");
    }

    #[test]
    fn test_forced_modes() {
        let (settings, paths, _temp) = setup(StoreMode::Local, true);
        assert_eq!(open_store(&settings, &paths, Some(session())).unwrap().name(), "local");

        let (settings, paths, _temp) = setup(StoreMode::Remote, true);
        assert_eq!(open_store(&settings, &paths, None).unwrap().name(), "remote");

        let (settings, paths, _temp) = setup(StoreMode::Remote, false);
        assert!(open_store(&settings, &paths, None).is_err());
    }
}
