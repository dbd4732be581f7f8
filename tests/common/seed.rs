//! Direct inserts for database-backed tests. The service has no write
//! endpoints for these records, so tests create them through the pool.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

pub async fn insert_sport(pool: &PgPool, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO sports (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .expect("Failed to insert sport");
    id
}

pub async fn insert_league(pool: &PgPool, sport_id: Uuid, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO leagues (id, name, sport_id, university) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind(sport_id)
        .bind("State University")
        .execute(pool)
        .await
        .expect("Failed to insert league");
    id
}

/// Insert a team and make it a member of `league_id`
pub async fn insert_team(pool: &PgPool, sport_id: Uuid, league_id: Uuid, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO teams (id, name, sport_id) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(sport_id)
        .execute(pool)
        .await
        .expect("Failed to insert team");
    sqlx::query("INSERT INTO league_teams (league_id, team_id) VALUES ($1, $2)")
        .bind(league_id)
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to add team to league");
    id
}

pub async fn insert_player(pool: &PgPool, team_id: Uuid, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO players (id, name, dept, team_id) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(name)
        .bind("Engineering")
        .bind(team_id)
        .execute(pool)
        .await
        .expect("Failed to insert player");
    id
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_match(
    pool: &PgPool,
    league_id: Uuid,
    home_team_id: Uuid,
    away_team_id: Uuid,
    start_time: DateTime<Utc>,
    status: &str,
    home_score: Option<i32>,
    away_score: Option<i32>,
) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"
        INSERT INTO matches (id, league_id, home_team_id, away_team_id, start_time, status, home_score, away_score)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(id)
    .bind(league_id)
    .bind(home_team_id)
    .bind(away_team_id)
    .bind(start_time)
    .bind(status)
    .bind(home_score)
    .bind(away_score)
    .execute(pool)
    .await
    .expect("Failed to insert match");
    id
}

pub async fn insert_event(pool: &PgPool, match_id: Uuid, team_id: Uuid, event_type: &str, event_time: DateTime<Utc>) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO match_events (id, match_id, team_id, event_type, event_time) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(match_id)
    .bind(team_id)
    .bind(event_type)
    .bind(event_time)
    .execute(pool)
    .await
    .expect("Failed to insert event");
    id
}

/// Stored status and start time of a match
pub async fn stored_match(pool: &PgPool, match_id: Uuid) -> (String, DateTime<Utc>) {
    sqlx::query_as::<_, (String, DateTime<Utc>)>("SELECT status, start_time FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_one(pool)
        .await
        .expect("Failed to fetch match")
}

/// A league with two member teams, used by most scenarios
pub struct SeededLeague {
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
}

pub async fn seed_league(pool: &PgPool) -> SeededLeague {
    let sport_id = insert_sport(pool, "Football").await;
    let league_id = insert_league(pool, sport_id, "Campus Cup").await;
    let home_team_id = insert_team(pool, sport_id, league_id, "Alpha").await;
    let away_team_id = insert_team(pool, sport_id, league_id, "Bravo").await;
    SeededLeague { league_id, home_team_id, away_team_id }
}
