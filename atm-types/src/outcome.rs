//! Response shapes produced by the dispatch layer.

/// The result shape of a dispatch operation.
///
/// Every read and create operation maps the repository's answer onto one of
/// these three shapes; update and delete acknowledge with a plain `Ok(())`
/// at the service boundary instead. None of the variants is an error: a
/// repository fault travels separately as
/// [`AppError`](crate::error::AppError).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation produced a payload.
    Ok(T),
    /// The repository had nothing to report.
    NoContent,
    /// The request carried the reserved invalid identifier or an otherwise
    /// unusable input.
    BadRequest,
}

impl<T> Outcome<T> {
    /// Returns the payload, discarding the outcome shape.
    pub fn into_payload(self) -> Option<T> {
        match self {
            Outcome::Ok(payload) => Some(payload),
            _ => None,
        }
    }

    /// Maps the payload, keeping the shape.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Ok(payload) => Outcome::Ok(f(payload)),
            Outcome::NoContent => Outcome::NoContent,
            Outcome::BadRequest => Outcome::BadRequest,
        }
    }
}
