//! Remote expense store backed by the hosted REST API
//!
//! Rows live in the `expenses` table and are scoped to the signed-in user.

pub mod row;

use reqwest::Method;

use crate::auth::Session;
use crate::backend::BackendClient;
use crate::config::BackendSettings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseDraft};

use self::row::{ExpenseRow, NewExpenseRow};
use super::ExpenseStore;

const EXPENSES_PATH: &str = "rest/v1/expenses";

pub struct RemoteExpenseStore {
    backend: BackendClient,
    session: Option<Session>,
}

impl RemoteExpenseStore {
    pub fn new(settings: &BackendSettings, session: Option<Session>) -> ExpenseResult<Self> {
        Ok(Self {
            backend: BackendClient::new(settings)?,
            session,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl ExpenseStore for RemoteExpenseStore {
    fn create(&self, draft: &ExpenseDraft) -> ExpenseResult<Expense> {
        let session = self.session.as_ref().ok_or_else(ExpenseError::not_signed_in)?;
        let endpoint = self.backend.endpoint(EXPENSES_PATH)?;
        let body = NewExpenseRow::from_draft(draft, session.user_id);

        let request = self
            .backend
            .authed(Method::POST, endpoint, session.access_token.expose())
            .header("Prefer", "return=representation")
            .json(&body);

        let rows: Vec<ExpenseRow> = self
            .backend
            .send(request)?
            .json()
            .map_err(|err| ExpenseError::store(format!("unexpected insert response: {err}")))?;

        let expense = rows
            .into_iter()
            .next()
            .map(Expense::from)
            .ok_or_else(|| ExpenseError::store("backend returned no row for the new expense"))?;

        tracing::debug!(id = %expense.id, "expense saved remotely");
        Ok(expense)
    }

    fn list_all(&self) -> ExpenseResult<Vec<Expense>> {
        let Some(session) = self.session.as_ref() else {
            tracing::debug!("no session; remote list is empty");
            return Ok(Vec::new());
        };

        let endpoint = self.backend.endpoint(EXPENSES_PATH)?;
        let user_filter = format!("eq.{}", session.user_id.as_uuid());
        let request = self
            .backend
            .authed(Method::GET, endpoint, session.access_token.expose())
            .query(&[
                ("select", "*"),
                ("user_id", user_filter.as_str()),
                ("order", "created_at.desc"),
            ]);

        let rows: Vec<ExpenseRow> = self
            .backend
            .send(request)?
            .json()
            .map_err(|err| ExpenseError::store(format!("unexpected list response: {err}")))?;

        tracing::debug!(count = rows.len(), "loaded remote expenses");
        Ok(rows.into_iter().map(Expense::from).collect())
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
