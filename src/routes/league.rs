// src/routes/league.rs
use actix_web::{get, post, put, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league::{game_handler, league_handler};
use crate::models::matches::MatchScoreRequest;

/// Site-wide counters
#[get("/summary")]
async fn get_summary(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::get_summary(pool).await
}

/// List sports
#[get("/sports")]
async fn get_sports(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::get_sports(pool).await
}

/// List leagues
#[get("/leagues")]
async fn get_leagues(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::get_leagues(pool).await
}

/// Get league standings table
#[get("/leagues/{league_id}/table")]
async fn get_league_table(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    league_handler::get_league_table(league_id, pool).await
}

/// List teams
#[get("/teams")]
async fn get_teams(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::get_teams(pool).await
}

/// Get team with its players
#[get("/teams/{team_id}")]
async fn get_team(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();
    league_handler::get_team_detail(team_id, pool).await
}

/// List players
#[get("/players")]
async fn get_players(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::get_players(pool).await
}

/// Get a player
#[get("/players/{player_id}")]
async fn get_player(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let player_id = path.into_inner();
    league_handler::get_player(player_id, pool).await
}

/// List matches
#[get("/matches")]
async fn get_matches(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    game_handler::get_matches(pool).await
}

/// Live and upcoming matches
#[get("/matches/feed")]
async fn get_match_feed(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    game_handler::get_match_feed(pool).await
}

/// Get match detail with events
#[get("/matches/{match_id}")]
async fn get_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    game_handler::get_match_detail(match_id, pool).await
}

/// Postpone a match
#[post("/matches/{match_id}/postpone")]
async fn postpone_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    game_handler::postpone_match(match_id, pool).await
}

/// Resume a postponed match
#[post("/matches/{match_id}/resume")]
async fn resume_match(
    path: web::Path<Uuid>,
    body: web::Bytes,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    game_handler::resume_match(match_id, body, pool).await
}

/// Record match score
#[put("/matches/{match_id}/score")]
async fn record_match_score(
    path: web::Path<Uuid>,
    score_request: web::Json<MatchScoreRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    game_handler::record_match_score(match_id, score_request, pool).await
}
