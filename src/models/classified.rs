//! Closed enumerations and the classification of persisted values
//!
//! Categories and payment modes are fixed sets. Records written by other
//! clients may carry values outside those sets; they are kept verbatim as
//! [`Classified::Unrecognized`] instead of being coerced into a member.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A fixed, finite set of labelled values
pub trait ClosedSet: Copy + Eq + 'static {
    /// Every member, in display order
    const ALL: &'static [Self];

    /// The canonical persisted label
    fn label(&self) -> &'static str;

    /// Exact match against the canonical labels
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.label() == label)
    }

    /// Forgiving match for user input: case, spaces, dashes and
    /// underscores are ignored ("credit-card" matches "Credit Card")
    fn parse_loose(input: &str) -> Option<Self> {
        let wanted = normalize(input);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .copied()
            .find(|member| normalize(member.label()) == wanted)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A persisted value that is either a member of its closed set or not
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Classified<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: ClosedSet> Classified<T> {
    /// Classify a raw persisted label without coercion
    pub fn classify(raw: &str) -> Self {
        match T::from_label(raw) {
            Some(member) => Self::Known(member),
            None => Self::Unrecognized(raw.to_string()),
        }
    }

    /// The member, if recognized
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(member) => Some(*member),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// True when this is exactly `member`
    pub fn is(&self, member: T) -> bool {
        self.known() == Some(member)
    }

    /// The label as persisted
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(member) => member.label(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl<T> From<T> for Classified<T> {
    fn from(member: T) -> Self {
        Self::Known(member)
    }
}

impl<T: ClosedSet> fmt::Display for Classified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: ClosedSet> Serialize for Classified<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: ClosedSet> Deserialize<'de> for Classified<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::classify(&raw))
    }
}
