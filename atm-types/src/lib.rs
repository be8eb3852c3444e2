//! # ATM Types
//!
//! Domain records and port traits for the ATM banking service.
//! This crate has ZERO external IO dependencies - only data structures,
//! the response-outcome shapes, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure record types (Account, Customer, Transaction)
//! - `ports/` - Trait definitions that adapters must implement
//! - `outcome/` - The response shapes a dispatch operation can produce
//! - `error/` - Repository and application error types

pub mod domain;
pub mod error;
pub mod outcome;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Account, Customer, MissingRecord, Record, RecordId, Transaction, TransactionType,
};
pub use error::{AppError, RepoError};
pub use outcome::Outcome;
pub use ports::{AccountRepository, CrudRepository, CustomerRepository, TransactionRepository};
