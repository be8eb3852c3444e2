//! Repository port traits.
//!
//! This is the primary port in our hexagonal architecture.
//! Adapters (SQLite, test doubles) implement [`CrudRepository`] once per
//! record type; the named per-record traits below are blanket-derived
//! aliases so call sites can ask for "an account repository" directly.

use crate::domain::{Account, Customer, Record, RecordId, Transaction};
use crate::error::RepoError;

/// The capability set a record store exposes, one verb per CRUD operation.
#[async_trait::async_trait]
pub trait CrudRepository: Send + Sync + 'static {
    type Entity: Record;

    /// Fetches every record.
    ///
    /// `None` means the store had no collection to report at all, which is
    /// distinct from `Some(vec![])`, an existing-but-empty collection.
    async fn get_all(&self) -> Result<Option<Vec<Self::Entity>>, RepoError>;

    /// Fetches the record with the given identifier.
    async fn get_by_id(&self, id: RecordId) -> Result<Option<Self::Entity>, RepoError>;

    /// Stores a new record and returns the identifier the store assigned.
    async fn add(&self, record: Self::Entity) -> Result<RecordId, RepoError>;

    /// Overwrites the record at `id`. The logical result of the write is
    /// not reported.
    async fn update(&self, id: RecordId, record: Self::Entity) -> Result<(), RepoError>;

    /// Removes the record at `id`. The logical result of the removal is
    /// not reported.
    async fn delete(&self, id: RecordId) -> Result<(), RepoError>;
}

/// Store of [`Account`] records.
pub trait AccountRepository: CrudRepository<Entity = Account> {}
impl<R: CrudRepository<Entity = Account>> AccountRepository for R {}

/// Store of [`Customer`] records.
pub trait CustomerRepository: CrudRepository<Entity = Customer> {}
impl<R: CrudRepository<Entity = Customer>> CustomerRepository for R {}

/// Store of [`Transaction`] records.
pub trait TransactionRepository: CrudRepository<Entity = Transaction> {}
impl<R: CrudRepository<Entity = Transaction>> TransactionRepository for R {}
