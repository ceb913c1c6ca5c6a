//! Expense categories and payment modes
//!
//! Both are closed sets. Declaration order is the fixed display order used
//! by every report.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::classified::ClosedSet;

/// What an expense was for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Rental,
    Groceries,
    Entertainment,
    Travel,
    Others,
}

impl ClosedSet for Category {
    const ALL: &'static [Self] = &[
        Self::Rental,
        Self::Groceries,
        Self::Entertainment,
        Self::Travel,
        Self::Others,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::Rental => "Rental",
            Self::Groceries => "Groceries",
            Self::Entertainment => "Entertainment",
            Self::Travel => "Travel",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_loose(s).ok_or_else(|| {
            format!(
                "unknown category '{}' (expected one of: {})",
                s,
                labels(Self::ALL)
            )
        })
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMode {
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Net Banking")]
    NetBanking,
    Cash,
}

impl ClosedSet for PaymentMode {
    const ALL: &'static [Self] = &[Self::Upi, Self::CreditCard, Self::NetBanking, Self::Cash];

    fn label(&self) -> &'static str {
        match self {
            Self::Upi => "UPI",
            Self::CreditCard => "Credit Card",
            Self::NetBanking => "Net Banking",
            Self::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_loose(s).ok_or_else(|| {
            format!(
                "unknown payment mode '{}' (expected one of: {})",
                s,
                labels(Self::ALL)
            )
        })
    }
}

fn labels<T: ClosedSet>(members: &[T]) -> String {
    members
        .iter()
        .map(|m| m.label())
        .collect::<Vec<_>>()
        .join(", ")
}
