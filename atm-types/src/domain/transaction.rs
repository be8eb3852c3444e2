//! Transaction record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MissingRecord, Record, RecordId};

/// Where a transaction originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    /// Card payment at a point of sale.
    Retail,
    /// Cash withdrawal or deposit at a machine.
    #[serde(rename = "ATM")]
    Atm,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Retail => write!(f, "Retail"),
            TransactionType::Atm => write!(f, "ATM"),
        }
    }
}

/// A recorded account movement.
///
/// The timestamp is assigned by the caller, not by the service; records are
/// carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub transaction_id: RecordId,
    /// Amount in minor currency units (pence).
    pub amount: i64,
    #[serde(default)]
    pub customer_id: RecordId,
    pub transaction_type: TransactionType,
    pub transaction_date: DateTime<Utc>,
}

impl Record for Transaction {
    const ON_MISSING: MissingRecord = MissingRecord::NoContent;

    fn record_id(&self) -> RecordId {
        self.transaction_id
    }

    fn is_blank(&self) -> bool {
        self.transaction_id.is_unset() && self.customer_id.is_unset() && self.amount == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(amount: i64) -> Transaction {
        Transaction {
            transaction_id: RecordId::UNSET,
            amount,
            customer_id: RecordId::UNSET,
            transaction_type: TransactionType::Retail,
            transaction_date: "2025-03-01T09:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_zeroed_transaction_is_blank() {
        assert!(sample(0).is_blank());
    }

    #[test]
    fn test_transaction_with_amount_is_not_blank() {
        assert!(!sample(250).is_blank());
    }

    #[test]
    fn test_transaction_type_tags() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Retail).unwrap(),
            r#""Retail""#
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Atm).unwrap(),
            r#""ATM""#
        );
        assert_eq!(TransactionType::Atm.to_string(), "ATM");
    }
}
