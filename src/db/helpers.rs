//! Helpers that turn raw query results into `LeagueError`s and
//! `LeagueError`s into HTTP responses.
//!
//! # Usage
//!
//! ```ignore
//! let league = require_record(query.fetch_optional(&pool).await, "League", league_id)?;
//! ```

use actix_web::HttpResponse;
use uuid::Uuid;

use crate::error::LeagueError;
use crate::models::common::ApiResponse;

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(
    result: Result<Option<T>, sqlx::Error>,
    entity: &'static str,
    id: Uuid,
) -> Result<T, LeagueError> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(LeagueError::not_found(entity, id)),
        Err(e) => Err(LeagueError::Database(e)),
    }
}

/// Map a failed league operation onto the JSON error envelope.
pub fn error_response(error: &LeagueError) -> HttpResponse {
    match error {
        LeagueError::NotFound { .. } => {
            tracing::warn!("{}", error);
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string()))
        }
        LeagueError::Validation(message) => {
            tracing::warn!("Rejected request: {}", message);
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message.clone()))
        }
        LeagueError::Database(e) => {
            tracing::error!("Database error: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
        }
    }
}
