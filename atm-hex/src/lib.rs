//! # ATM Hex
//!
//! Dispatch service layer and HTTP adapter for the ATM banking service.
//!
//! ## Architecture
//!
//! - `service/` - The CRUD dispatch service (maps store results to outcomes)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: CrudRepository`, so one dispatch
//! implementation serves the account, customer, and transaction endpoints,
//! and any repository implementation can be injected.

pub mod inbound;
pub mod service;


pub use service::CrudService;
