//! Dashboard state
//!
//! Holds the loaded expense list, the active view, the list filter and the
//! queue of user-facing notifications. Every mutation goes through the
//! store first; the in-memory list only changes once the store confirms.

use chrono::NaiveDate;

use super::expense::ExpenseService;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::money::DEFAULT_CURRENCY_SYMBOL;
use crate::models::{Expense, ExpenseForm, Money};
use crate::reports::{all_time_total, filter_and_sort, ExpenseFilter};

/// Views of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// The entry form
    #[default]
    Add,
    List,
    Analytics,
}

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Prefix shown before the message
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A user-facing message about the outcome of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    /// Secondary line, e.g. the amount that was added
    pub detail: Option<String>,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            detail: None,
            kind,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }
}

pub struct Dashboard<'a> {
    service: ExpenseService<'a>,
    expenses: Vec<Expense>,
    filter: ExpenseFilter,
    active_tab: Tab,
    notifications: Vec<Notification>,
    currency_symbol: String,
}

impl<'a> Dashboard<'a> {
    /// Load the expense list from the service's store
    ///
    /// A failed load leaves the list empty and queues an error
    /// notification.
    pub fn load(service: ExpenseService<'a>) -> Self {
        let mut dashboard = Self::empty(service);
        dashboard.reload();
        dashboard
    }

    /// Load the expense list, failing instead of queueing a notification
    pub fn try_load(service: ExpenseService<'a>) -> ExpenseResult<Self> {
        let mut dashboard = Self::empty(service);
        dashboard.expenses = dashboard.service.list()?;
        Ok(dashboard)
    }

    fn empty(service: ExpenseService<'a>) -> Self {
        Self {
            service,
            expenses: Vec::new(),
            filter: ExpenseFilter::default(),
            active_tab: Tab::default(),
            notifications: Vec::new(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Replace the list with the store's current contents
    pub fn reload(&mut self) {
        match self.service.list() {
            Ok(expenses) => self.expenses = expenses,
            Err(err) => {
                tracing::error!("failed to load expenses: {}", err);
                self.expenses.clear();
                self.notify(
                    Notification::error("Error loading expenses")
                        .with_detail("Please try again."),
                );
            }
        }
    }

    /// Submit the entry form
    ///
    /// On success the confirmed record is prepended, the list view becomes
    /// active and a success notification is queued. On failure nothing in
    /// the list changes; the error is queued as a notification and also
    /// returned.
    pub fn add_expense(&mut self, form: &ExpenseForm) -> ExpenseResult<&Expense> {
        match self.service.add(form) {
            Ok(expense) => {
                let detail = format!(
                    "{} for {}",
                    expense.amount.format_with_symbol(&self.currency_symbol),
                    expense.category
                );
                self.expenses.insert(0, expense);
                self.active_tab = Tab::List;
                self.notify(Notification::success("Expense added successfully!").with_detail(detail));
                Ok(&self.expenses[0])
            }
            Err(ExpenseError::Validation(reason)) => {
                self.notify(Notification::error(reason.clone()));
                Err(ExpenseError::Validation(reason))
            }
            Err(err) => {
                tracing::error!("failed to add expense: {}", err);
                self.notify(
                    Notification::error("Error adding expense").with_detail(err.to_string()),
                );
                Err(err)
            }
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn filter(&self) -> &ExpenseFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ExpenseFilter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    /// The list view: filtered and sorted newest date first
    pub fn visible_expenses(&self, today: NaiveDate) -> Vec<Expense> {
        filter_and_sort(&self.expenses, &self.filter, today)
    }

    /// Total of every loaded expense, shown in the header
    pub fn header_total(&self) -> Money {
        all_time_total(&self.expenses)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drain queued notifications, oldest first
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
