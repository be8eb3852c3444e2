//! Customer record.

use serde::{Deserialize, Serialize};

use super::{MissingRecord, Record, RecordId};

/// A bank customer.
///
/// No uniqueness or format validation is applied to any field here; the
/// record is a plain carrier between the transport and the repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub customer_id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub address_line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub postcode: String,
    pub phone: String,
}

impl Record for Customer {
    const ON_MISSING: MissingRecord = MissingRecord::NoContent;

    fn record_id(&self) -> RecordId {
        self.customer_id
    }

    fn is_blank(&self) -> bool {
        self.customer_id.is_unset() && self.first_name.is_empty() && self.last_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_customer_is_blank() {
        assert!(Customer::default().is_blank());
    }

    #[test]
    fn test_customer_with_name_is_not_blank() {
        let customer = Customer {
            first_name: "Ada".to_string(),
            ..Customer::default()
        };
        assert!(!customer.is_blank());
    }

    #[test]
    fn test_missing_second_address_line_round_trips() {
        let customer = Customer {
            customer_id: RecordId::new(1),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address_line1: "12 Mill Lane".to_string(),
            address_line2: None,
            city: "Belfast".to_string(),
            postcode: "BT1 1AA".to_string(),
            phone: "02890123456".to_string(),
        };

        let json = serde_json::to_string(&customer).unwrap();
        assert!(!json.contains("address_line2"));

        let back: Customer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, customer);
    }
}
