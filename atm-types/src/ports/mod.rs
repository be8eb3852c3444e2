//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The dispatch layer depends on these traits, not concrete implementations.

mod repository;

pub use repository::{
    AccountRepository, CrudRepository, CustomerRepository, TransactionRepository,
};
