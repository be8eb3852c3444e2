//! HTTP request handlers.
//!
//! One generic handler set serves all three record types; the router wires
//! it up once per entity prefix. Outcome-to-status mapping lives here:
//! `Ok(payload)` is 200 with a JSON body, `NoContent` is 204, `BadRequest`
//! is 400, and the write acknowledgements are a bare 200.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use atm_types::{AppError, CrudRepository, Outcome, RecordId};

use crate::CrudService;

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Wrapper to implement IntoResponse for Outcome (orphan rule workaround).
pub struct ApiOutcome<T>(pub Outcome<T>);

impl<T: serde::Serialize> IntoResponse for ApiOutcome<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Outcome::Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
            Outcome::NoContent => StatusCode::NO_CONTENT.into_response(),
            Outcome::BadRequest => StatusCode::BAD_REQUEST.into_response(),
        }
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Builds the five CRUD routes for one record type under `prefix`.
pub fn crud_routes<R: CrudRepository>(prefix: &str, service: Arc<CrudService<R>>) -> Router {
    let by_id = format!("{prefix}/{{id}}");

    Router::new()
        .route(prefix, get(list::<R>).post(create::<R>))
        .route(&by_id, get(fetch::<R>).put(update::<R>).delete(remove::<R>))
        .with_state(service)
}

/// List all records.
#[tracing::instrument(skip(service))]
async fn list<R: CrudRepository>(
    State(service): State<Arc<CrudService<R>>>,
) -> Result<ApiOutcome<Vec<R::Entity>>, ApiError> {
    Ok(ApiOutcome(service.list().await?))
}

/// Get one record by id.
#[tracing::instrument(skip(service), fields(id = id))]
async fn fetch<R: CrudRepository>(
    State(service): State<Arc<CrudService<R>>>,
    Path(id): Path<i64>,
) -> Result<ApiOutcome<R::Entity>, ApiError> {
    Ok(ApiOutcome(service.get(RecordId::new(id)).await?))
}

/// Store a new record; answers with the assigned id.
#[tracing::instrument(skip(service, record))]
async fn create<R: CrudRepository>(
    State(service): State<Arc<CrudService<R>>>,
    Json(record): Json<R::Entity>,
) -> Result<ApiOutcome<RecordId>, ApiError> {
    Ok(ApiOutcome(service.create(record).await?))
}

/// Overwrite the record at `id`; acknowledged unconditionally.
#[tracing::instrument(skip(service, record), fields(id = id))]
async fn update<R: CrudRepository>(
    State(service): State<Arc<CrudService<R>>>,
    Path(id): Path<i64>,
    Json(record): Json<R::Entity>,
) -> Result<StatusCode, ApiError> {
    service.update(RecordId::new(id), record).await?;
    Ok(StatusCode::OK)
}

/// Remove the record at `id`; acknowledged unconditionally.
#[tracing::instrument(skip(service), fields(id = id))]
async fn remove<R: CrudRepository>(
    State(service): State<Arc<CrudService<R>>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete(RecordId::new(id)).await?;
    Ok(StatusCode::OK)
}
