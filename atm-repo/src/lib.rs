//! # ATM Repository
//!
//! Concrete repository implementations (adapters) for the ATM banking
//! service. This crate provides the SQLite adapters that implement the
//! `CrudRepository` port, one adapter per record type over a shared pool.

pub mod sqlite;

mod types;


pub use sqlite::{SqliteAccounts, SqliteCustomers, SqliteStore, SqliteTransactions};

/// Build and initialize a store from a database URL.
///
/// This function:
/// 1. Connects to the database
/// 2. Runs migrations to create tables
/// 3. Returns a ready-to-use [`SqliteStore`]
///
/// # Examples
///
/// ```ignore
/// let store = build_store("sqlite://atm.db?mode=rwc").await?;
/// let accounts = store.accounts();
/// ```
pub async fn build_store(database_url: &str) -> anyhow::Result<SqliteStore> {
    SqliteStore::new(database_url).await
}
