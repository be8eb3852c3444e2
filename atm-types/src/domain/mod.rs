//! Domain records for the ATM banking service.

pub mod account;
pub mod customer;
pub mod transaction;

use serde::{Serialize, de::DeserializeOwned};

pub use account::Account;
pub use customer::Customer;
pub use transaction::{Transaction, TransactionType};

/// Row identifier shared by all stored records.
///
/// The value 0 is reserved: it means "invalid/unspecified identifier" and is
/// never a real key. Backends assign real identifiers starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    /// The reserved "invalid/unspecified" sentinel.
    pub const UNSET: RecordId = RecordId(0);

    /// Creates an identifier from a raw row id.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns true if this is the reserved sentinel value.
    pub fn is_unset(&self) -> bool {
        self.0 == 0
    }

    /// Returns the raw row id.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a by-id lookup that matches no row is answered.
///
/// The accounts endpoint answers a miss with `BadRequest`; customers and
/// transactions answer with `NoContent`. The difference is observed
/// behavior and is kept distinct per record type rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingRecord {
    NoContent,
    BadRequest,
}

/// Behavior shared by all stored records.
///
/// The dispatch layer is generic over this trait: it needs to know a
/// record's identifier, whether the record is blank (all identifying
/// fields default), and how a missed lookup for its type is answered.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// Outcome used when a by-id lookup finds nothing.
    const ON_MISSING: MissingRecord;

    /// The record's row identifier.
    fn record_id(&self) -> RecordId;

    /// True when every identifying field holds its default value.
    fn is_blank(&self) -> bool;
}
