//! Database row structs and conversions to domain records.

use sqlx::FromRow;

use atm_types::{Account, Customer, RecordId, RepoError, Transaction, TransactionType};

// ─────────────────────────────────────────────────────────────────────────────
// Database row structs (derive FromRow for automatic mapping)
// ─────────────────────────────────────────────────────────────────────────────

/// Account row from database.
#[derive(FromRow)]
pub struct DbAccount {
    pub account_id: i64,
    pub account_name: String,
    pub customer_id: i64,
    pub balance: i64,
    pub card_number: String,
    pub pin: String,
}

/// Customer row from database.
#[derive(FromRow)]
pub struct DbCustomer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub postcode: String,
    pub phone: String,
}

/// Transaction row from database. Timestamps are stored as RFC 3339 text.
#[derive(FromRow)]
pub struct DbTransaction {
    pub transaction_id: i64,
    pub amount: i64,
    pub customer_id: i64,
    pub transaction_type: String,
    pub transaction_date: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Parsing helpers
// ─────────────────────────────────────────────────────────────────────────────

pub fn parse_transaction_type(s: &str) -> Result<TransactionType, RepoError> {
    match s {
        "Retail" => Ok(TransactionType::Retail),
        "ATM" => Ok(TransactionType::Atm),
        _ => Err(RepoError::Database(format!(
            "Unknown transaction type: {}",
            s
        ))),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain conversion
// ─────────────────────────────────────────────────────────────────────────────

impl DbAccount {
    /// Convert database row to domain Account.
    pub fn into_domain(self) -> Account {
        Account {
            account_id: RecordId::new(self.account_id),
            account_name: self.account_name,
            customer_id: RecordId::new(self.customer_id),
            balance: self.balance,
            card_number: self.card_number,
            pin: self.pin,
        }
    }
}

impl DbCustomer {
    /// Convert database row to domain Customer.
    pub fn into_domain(self) -> Customer {
        Customer {
            customer_id: RecordId::new(self.customer_id),
            first_name: self.first_name,
            last_name: self.last_name,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
            city: self.city,
            postcode: self.postcode,
            phone: self.phone,
        }
    }
}

impl DbTransaction {
    /// Convert database row to domain Transaction.
    pub fn into_domain(self) -> Result<Transaction, RepoError> {
        let transaction_type = parse_transaction_type(&self.transaction_type)?;

        let transaction_date = chrono::DateTime::parse_from_rfc3339(&self.transaction_date)
            .map_err(|e| RepoError::Database(e.to_string()))?
            .with_timezone(&chrono::Utc);

        Ok(Transaction {
            transaction_id: RecordId::new(self.transaction_id),
            amount: self.amount,
            customer_id: RecordId::new(self.customer_id),
            transaction_type,
            transaction_date,
        })
    }
}
