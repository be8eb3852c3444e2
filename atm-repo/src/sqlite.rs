//! SQLite repository adapters.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use atm_types::{Account, CrudRepository, Customer, RecordId, RepoError, Transaction};

use crate::types::{DbAccount, DbCustomer, DbTransaction};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite store
// ─────────────────────────────────────────────────────────────────────────────

/// Owns the connection pool and hands out one adapter per record type.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Creates a new SQLite store with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            // Remove query parameters
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        // Run migration from migration file
        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::query(ddl).execute(&pool).await?;

        tracing::debug!("sqlite store ready: {}", database_url);

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Adapter over the `accounts` table.
    pub fn accounts(&self) -> SqliteAccounts {
        SqliteAccounts {
            pool: self.pool.clone(),
        }
    }

    /// Adapter over the `customers` table.
    pub fn customers(&self) -> SqliteCustomers {
        SqliteCustomers {
            pool: self.pool.clone(),
        }
    }

    /// Adapter over the `transactions` table.
    pub fn transactions(&self) -> SqliteTransactions {
        SqliteTransactions {
            pool: self.pool.clone(),
        }
    }
}

fn db_err(e: sqlx::Error) -> RepoError {
    RepoError::Database(e.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Accounts
// ─────────────────────────────────────────────────────────────────────────────

/// `CrudRepository<Entity = Account>` backed by the `accounts` table.
pub struct SqliteAccounts {
    pool: SqlitePool,
}

#[async_trait]
impl CrudRepository for SqliteAccounts {
    type Entity = Account;

    async fn get_all(&self) -> Result<Option<Vec<Account>>, RepoError> {
        let rows: Vec<DbAccount> = sqlx::query_as(
            r#"SELECT account_id, account_name, customer_id, balance, card_number, pin
               FROM accounts ORDER BY account_id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        // The live table always has a collection to report; `None` never
        // originates here.
        Ok(Some(rows.into_iter().map(DbAccount::into_domain).collect()))
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<Account>, RepoError> {
        let row: Option<DbAccount> = sqlx::query_as(
            r#"SELECT account_id, account_name, customer_id, balance, card_number, pin
               FROM accounts WHERE account_id = ?"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(DbAccount::into_domain))
    }

    async fn add(&self, record: Account) -> Result<RecordId, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO accounts (account_name, customer_id, balance, card_number, pin)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(&record.account_name)
        .bind(record.customer_id.as_i64())
        .bind(record.balance)
        .bind(&record.card_number)
        .bind(&record.pin)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(RecordId::new(result.last_insert_rowid()))
    }

    async fn update(&self, id: RecordId, record: Account) -> Result<(), RepoError> {
        sqlx::query(
            r#"UPDATE accounts
               SET account_name = ?, customer_id = ?, balance = ?, card_number = ?, pin = ?
               WHERE account_id = ?"#,
        )
        .bind(&record.account_name)
        .bind(record.customer_id.as_i64())
        .bind(record.balance)
        .bind(&record.card_number)
        .bind(&record.pin)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM accounts WHERE account_id = ?"#)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Customers
// ─────────────────────────────────────────────────────────────────────────────

/// `CrudRepository<Entity = Customer>` backed by the `customers` table.
pub struct SqliteCustomers {
    pool: SqlitePool,
}

#[async_trait]
impl CrudRepository for SqliteCustomers {
    type Entity = Customer;

    async fn get_all(&self) -> Result<Option<Vec<Customer>>, RepoError> {
        let rows: Vec<DbCustomer> = sqlx::query_as(
            r#"SELECT customer_id, first_name, last_name, address_line1, address_line2,
                      city, postcode, phone
               FROM customers ORDER BY customer_id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(Some(
            rows.into_iter().map(DbCustomer::into_domain).collect(),
        ))
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<Customer>, RepoError> {
        let row: Option<DbCustomer> = sqlx::query_as(
            r#"SELECT customer_id, first_name, last_name, address_line1, address_line2,
                      city, postcode, phone
               FROM customers WHERE customer_id = ?"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(row.map(DbCustomer::into_domain))
    }

    async fn add(&self, record: Customer) -> Result<RecordId, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO customers
               (first_name, last_name, address_line1, address_line2, city, postcode, phone)
               VALUES (?, ?, ?, ?, ?, ?, ?)"#,
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.address_line1)
        .bind(&record.address_line2)
        .bind(&record.city)
        .bind(&record.postcode)
        .bind(&record.phone)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(RecordId::new(result.last_insert_rowid()))
    }

    async fn update(&self, id: RecordId, record: Customer) -> Result<(), RepoError> {
        sqlx::query(
            r#"UPDATE customers
               SET first_name = ?, last_name = ?, address_line1 = ?, address_line2 = ?,
                   city = ?, postcode = ?, phone = ?
               WHERE customer_id = ?"#,
        )
        .bind(&record.first_name)
        .bind(&record.last_name)
        .bind(&record.address_line1)
        .bind(&record.address_line2)
        .bind(&record.city)
        .bind(&record.postcode)
        .bind(&record.phone)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM customers WHERE customer_id = ?"#)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// `CrudRepository<Entity = Transaction>` backed by the `transactions` table.
pub struct SqliteTransactions {
    pool: SqlitePool,
}

#[async_trait]
impl CrudRepository for SqliteTransactions {
    type Entity = Transaction;

    async fn get_all(&self) -> Result<Option<Vec<Transaction>>, RepoError> {
        let rows: Vec<DbTransaction> = sqlx::query_as(
            r#"SELECT transaction_id, amount, customer_id, transaction_type, transaction_date
               FROM transactions ORDER BY transaction_id"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        let records = rows
            .into_iter()
            .map(DbTransaction::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(records))
    }

    async fn get_by_id(&self, id: RecordId) -> Result<Option<Transaction>, RepoError> {
        let row: Option<DbTransaction> = sqlx::query_as(
            r#"SELECT transaction_id, amount, customer_id, transaction_type, transaction_date
               FROM transactions WHERE transaction_id = ?"#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;

        row.map(DbTransaction::into_domain).transpose()
    }

    async fn add(&self, record: Transaction) -> Result<RecordId, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO transactions (amount, customer_id, transaction_type, transaction_date)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(record.amount)
        .bind(record.customer_id.as_i64())
        .bind(record.transaction_type.to_string())
        .bind(record.transaction_date.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(RecordId::new(result.last_insert_rowid()))
    }

    async fn update(&self, id: RecordId, record: Transaction) -> Result<(), RepoError> {
        sqlx::query(
            r#"UPDATE transactions
               SET amount = ?, customer_id = ?, transaction_type = ?, transaction_date = ?
               WHERE transaction_id = ?"#,
        )
        .bind(record.amount)
        .bind(record.customer_id.as_i64())
        .bind(record.transaction_type.to_string())
        .bind(record.transaction_date.to_rfc3339())
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn delete(&self, id: RecordId) -> Result<(), RepoError> {
        sqlx::query(r#"DELETE FROM transactions WHERE transaction_id = ?"#)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(())
    }
}
