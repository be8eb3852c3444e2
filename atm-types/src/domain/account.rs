//! Account record.

use serde::{Deserialize, Serialize};

use super::{MissingRecord, Record, RecordId};

/// A card-accessible bank account.
///
/// `customer_id` references the owning [`Customer`](super::Customer) by
/// value; no referential integrity is enforced at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub account_id: RecordId,
    pub account_name: String,
    pub customer_id: RecordId,
    /// Balance in minor currency units (pence).
    pub balance: i64,
    pub card_number: String,
    pub pin: String,
}

impl Record for Account {
    // Accounts answer a missed lookup with a bad request; customers and
    // transactions answer no-content.
    const ON_MISSING: MissingRecord = MissingRecord::BadRequest;

    fn record_id(&self) -> RecordId {
        self.account_id
    }

    fn is_blank(&self) -> bool {
        self.account_id.is_unset()
            && self.account_name.is_empty()
            && self.card_number.is_empty()
            && self.pin.is_empty()
    }
}
