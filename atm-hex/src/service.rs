//! CRUD dispatch service.
//!
//! One generic translation layer shared by the account, customer, and
//! transaction endpoints. Each operation forwards to the repository port
//! and maps the shape of the answer (present, absent, blank input,
//! sentinel id) onto a response [`Outcome`]. The service holds no state of
//! its own and never branches on repository faults; those propagate as
//! [`AppError`].

use atm_types::{AppError, CrudRepository, MissingRecord, Outcome, Record, RecordId};

/// Dispatch service for one record type.
///
/// Generic over `R: CrudRepository` - the adapter is injected at compile
/// time. This enables:
/// - Swapping repositories without code changes
/// - Testing with a mock store
/// - One shared mapper instead of three copied services
pub struct CrudService<R: CrudRepository> {
    repo: R,
}

impl<R: CrudRepository> CrudService<R> {
    /// Creates a new dispatch service over the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a reference to the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Fetches every record.
    ///
    /// An existing-but-empty collection is still a payload; only an absent
    /// collection maps to no-content.
    pub async fn list(&self) -> Result<Outcome<Vec<R::Entity>>, AppError> {
        match self.repo.get_all().await? {
            Some(records) => Ok(Outcome::Ok(records)),
            None => Ok(Outcome::NoContent),
        }
    }

    /// Fetches one record by identifier.
    ///
    /// The reserved sentinel 0 is rejected before the store is consulted.
    /// A miss is answered per the record type's declared missing-row
    /// outcome; see [`Record::ON_MISSING`].
    pub async fn get(&self, id: RecordId) -> Result<Outcome<R::Entity>, AppError> {
        if id.is_unset() {
            return Ok(Outcome::BadRequest);
        }

        match self.repo.get_by_id(id).await? {
            Some(record) => Ok(Outcome::Ok(record)),
            None => Ok(match R::Entity::ON_MISSING {
                MissingRecord::NoContent => Outcome::NoContent,
                MissingRecord::BadRequest => Outcome::BadRequest,
            }),
        }
    }

    /// Stores a new record and reports the identifier the store assigned.
    ///
    /// A blank record (all identifying fields default) is answered with
    /// no-content and the store is never invoked.
    pub async fn create(&self, record: R::Entity) -> Result<Outcome<RecordId>, AppError> {
        if record.is_blank() {
            return Ok(Outcome::NoContent);
        }

        let id = self.repo.add(record).await?;
        Ok(Outcome::Ok(id))
    }

    /// Overwrites the record at `id` and acknowledges unconditionally.
    ///
    /// There is no check that the target exists, nor that `id` matches the
    /// record's own identifier.
    pub async fn update(&self, id: RecordId, record: R::Entity) -> Result<(), AppError> {
        self.repo.update(id, record).await?;
        Ok(())
    }

    /// Removes the record at `id` and acknowledges unconditionally.
    pub async fn delete(&self, id: RecordId) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        Ok(())
    }
}
