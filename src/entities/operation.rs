// 🧾 Operation Entity - a single credit or debit on a customer's statement
//
// Operations are immutable once appended. Each one carries its own UUID
// and the UTC instant it was recorded.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// OPERATION TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Money coming in (deposit)
    Credit,

    /// Money going out (withdrawal)
    Debit,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Credit => "credit",
            OperationType::Debit => "debit",
        }
    }
}

// ============================================================================
// OPERATION ENTITY
// ============================================================================

/// One statement entry.
///
/// Serialized as `{ id, type, amount, description?, created_at }`; the
/// description is only ever present on credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Stable identity (UUID v4), unique per operation
    pub id: String,

    #[serde(rename = "type")]
    pub operation_type: OperationType,

    pub amount: Decimal,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Credit recorded now
    pub fn credit(amount: Decimal, description: Option<String>) -> Self {
        Self::credit_at(amount, description, Utc::now())
    }

    /// Debit recorded now
    pub fn debit(amount: Decimal) -> Self {
        Self::debit_at(amount, Utc::now())
    }

    pub fn credit_at(amount: Decimal, description: Option<String>, created_at: DateTime<Utc>) -> Self {
        Operation {
            id: uuid::Uuid::new_v4().to_string(),
            operation_type: OperationType::Credit,
            amount,
            description,
            created_at,
        }
    }

    pub fn debit_at(amount: Decimal, created_at: DateTime<Utc>) -> Self {
        Operation {
            id: uuid::Uuid::new_v4().to_string(),
            operation_type: OperationType::Debit,
            amount,
            description: None,
            created_at,
        }
    }

    /// Amount with the sign it contributes to a balance
    pub fn signed_amount(&self) -> Decimal {
        match self.operation_type {
            OperationType::Credit => self.amount,
            OperationType::Debit => -self.amount,
        }
    }

    pub fn is_credit(&self) -> bool {
        self.operation_type == OperationType::Credit
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_credit_creation() {
        let op = Operation::credit(dec!(100), Some("salary".to_string()));

        assert!(!op.id.is_empty());
        assert!(op.is_credit());
        assert_eq!(op.amount, dec!(100));
        assert_eq!(op.description.as_deref(), Some("salary"));
        assert_eq!(op.signed_amount(), dec!(100));
    }

    #[test]
    fn test_debit_has_no_description() {
        let op = Operation::debit(dec!(40));

        assert_eq!(op.operation_type, OperationType::Debit);
        assert!(op.description.is_none());
        assert_eq!(op.signed_amount(), dec!(-40));
    }

    #[test]
    fn test_operation_ids_are_unique() {
        let a = Operation::credit(dec!(1), None);
        let b = Operation::credit(dec!(1), None);
        let c = Operation::debit(dec!(1));

        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
    }

    #[test]
    fn test_operation_json_shape() {
        let credit = Operation::credit(dec!(100), Some("gift".to_string()));
        let json = serde_json::to_value(&credit).unwrap();

        assert_eq!(json["type"], "credit");
        assert_eq!(json["amount"].as_f64(), Some(100.0));
        assert_eq!(json["description"], "gift");
        assert!(json["created_at"].is_string());

        let debit = Operation::debit(dec!(40));
        let json = serde_json::to_value(&debit).unwrap();

        assert_eq!(json["type"], "debit");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_operation_type_as_str() {
        assert_eq!(OperationType::Credit.as_str(), "credit");
        assert_eq!(OperationType::Debit.as_str(), "debit");
    }
}
