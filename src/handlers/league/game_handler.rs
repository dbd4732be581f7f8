use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::error_response;
use crate::league::games::MatchService;
use crate::league::league::LeagueService;
use crate::league::validation::LeagueValidator;
use crate::models::common::ApiResponse;
use crate::models::matches::*;

/// Live and upcoming matches for the dashboard
#[tracing::instrument(name = "Get match feed", skip(pool))]
pub async fn get_match_feed(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_dashboard(Utc::now()).await {
        // The feed is served bare so dashboards can poll it directly
        Ok(feed) => Ok(HttpResponse::Ok().json(feed)),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Every match, statuses refreshed first
#[tracing::instrument(name = "List matches", skip(pool))]
pub async fn get_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_matches(Utc::now()).await {
        Ok(matches) => {
            tracing::info!("Retrieved {} matches", matches.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(matches)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Get match detail",
    skip(pool),
    fields(match_id = %match_id)
)]
pub async fn get_match_detail(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.get_match_detail(match_id, Utc::now()).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Postpone a match until it is explicitly resumed
#[tracing::instrument(
    name = "Postpone match",
    skip(pool),
    fields(match_id = %match_id)
)]
pub async fn postpone_match(
    match_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.postpone_match(match_id).await {
        Ok(game) => Ok(HttpResponse::Ok().json(
            ApiResponse::success_with_message("Match postponed", game)
        )),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Put a match back on the schedule, optionally at a new start time
#[tracing::instrument(
    name = "Resume match",
    skip(body, pool),
    fields(match_id = %match_id)
)]
pub async fn resume_match(
    match_id: Uuid,
    body: web::Bytes,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    // An empty body resumes at the current start time; a malformed one is rejected
    let resume_request = match LeagueValidator::new().parse_resume_request(&body) {
        Ok(request) => request,
        Err(e) => return Ok(error_response(&e)),
    };
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.resume_match(match_id, resume_request.new_start_time).await {
        Ok(game) => Ok(HttpResponse::Ok().json(
            ApiResponse::success_with_message("Match resumed", game)
        )),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Record the score of a match
#[tracing::instrument(
    name = "Record match score",
    skip(score_request, pool),
    fields(
        match_id = %match_id,
        home_score = %score_request.home_score,
        away_score = %score_request.away_score
    )
)]
pub async fn record_match_score(
    match_id: Uuid,
    score_request: web::Json<MatchScoreRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_service = MatchService::new(pool.get_ref().clone());

    match match_service.record_score(match_id, &score_request).await {
        Ok(game) => Ok(HttpResponse::Ok().json(
            ApiResponse::success_with_message("Match score recorded", game)
        )),
        Err(e) => Ok(error_response(&e)),
    }
}
