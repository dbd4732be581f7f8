use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::error_response;
use crate::league::league::LeagueService;
use crate::models::common::ApiResponse;

/// List sports
pub async fn get_sports(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_sports().await {
        Ok(sports) => Ok(HttpResponse::Ok().json(ApiResponse::success(sports))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// List leagues
pub async fn get_leagues(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_leagues().await {
        Ok(leagues) => {
            tracing::info!("Retrieved {} leagues", leagues.len());
            Ok(HttpResponse::Ok().json(ApiResponse::success(leagues)))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// List teams
pub async fn get_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_teams().await {
        Ok(teams) => Ok(HttpResponse::Ok().json(ApiResponse::success(teams))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// List players
pub async fn get_players(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.list_players().await {
        Ok(players) => Ok(HttpResponse::Ok().json(ApiResponse::success(players))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Get player",
    skip(pool),
    fields(player_id = %player_id)
)]
pub async fn get_player(
    player_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_player(player_id).await {
        Ok(player) => Ok(HttpResponse::Ok().json(ApiResponse::success(player))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Get the standings table of a league
#[tracing::instrument(
    name = "Get league table",
    skip(pool),
    fields(league_id = %league_id)
)]
pub async fn get_league_table(
    league_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_league_table(league_id).await {
        Ok(table) => Ok(HttpResponse::Ok().json(ApiResponse::success(table))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[tracing::instrument(
    name = "Get team detail",
    skip(pool),
    fields(team_id = %team_id)
)]
pub async fn get_team_detail(
    team_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_team_detail(team_id).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Home page counters
#[tracing::instrument(name = "Get site summary", skip(pool))]
pub async fn get_summary(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_service = LeagueService::new(pool.get_ref().clone());

    match league_service.get_summary(Utc::now()).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(summary))),
        Err(e) => Ok(error_response(&e)),
    }
}
