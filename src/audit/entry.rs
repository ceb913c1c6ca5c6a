//! Audit entry data structures
//!
//! Defines the structure of audit log entries including operation types,
//! entity types, and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Entity was created
    Create,
    /// A user signed in
    SignIn,
    /// A user signed out
    SignOut,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::SignIn => write!(f, "SIGN_IN"),
            Operation::SignOut => write!(f, "SIGN_OUT"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Expense,
    Session,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Expense => write!(f, "Expense"),
            EntityType::Session => write!(f, "Session"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// ID of the affected entity (expense id or user id)
    pub entity_id: String,

    /// Human-readable description (category for expenses, email for sessions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON representation of the entity after a create
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new audit entry for a create operation
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            after: serde_json::to_value(entity).ok(),
        }
    }

    pub fn sign_in(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self::session_event(Operation::SignIn, user_id.into(), email.into())
    }

    pub fn sign_out(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self::session_event(Operation::SignOut, user_id.into(), email.into())
    }

    fn session_event(operation: Operation, user_id: String, email: String) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type: EntityType::Session,
            entity_id: user_id,
            entity_name: Some(email),
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::SignIn.to_string(), "SIGN_IN");
        assert_eq!(Operation::SignOut.to_string(), "SIGN_OUT");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"amount": 500.0, "category": "Travel"});
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-12345678",
            Some("Travel".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::Expense);
        assert_eq!(entry.entity_id, "exp-12345678");
        assert_eq!(entry.after, Some(data));
    }

    #[test]
    fn test_session_entries() {
        let entry = AuditEntry::sign_in("usr-1", "a@example.com");
        assert_eq!(entry.entity_type, EntityType::Session);
        assert_eq!(entry.entity_name.as_deref(), Some("a@example.com"));
        assert!(entry.after.is_none());

        let entry = AuditEntry::sign_out("usr-1", "a@example.com");
        assert_eq!(entry.operation, Operation::SignOut);
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::sign_in("usr-1", "a@example.com");

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"sign_in\""));
        assert!(!json.contains("after"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::SignIn);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::create(
            EntityType::Expense,
            "exp-12345678",
            Some("Groceries".to_string()),
            &json!({}),
        );

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("CREATE Expense exp-12345678 (Groceries)"));
    }
}
