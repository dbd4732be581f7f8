use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;
use tracing::{debug, info};

use crate::db::helpers::require_record;
use crate::error::LeagueError;
use crate::models::matches::{Match, MatchEvent, MatchStatus, MatchWithTeams};

const MATCH_WITH_TEAMS_SELECT: &str = r#"
    SELECT
        m.id, m.league_id, m.home_team_id, m.away_team_id, m.start_time,
        m.status, m.home_score, m.away_score,
        l.name AS league_name,
        ht.name AS home_team_name,
        awt.name AS away_team_name
    FROM matches m
    JOIN leagues l ON m.league_id = l.id
    JOIN teams ht ON m.home_team_id = ht.id
    JOIN teams awt ON m.away_team_id = awt.id
"#;

#[derive(Debug, Clone)]
pub struct MatchQueries {
    pool: PgPool,
}

impl MatchQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_match(&self, match_id: Uuid) -> Result<Match, LeagueError> {
        let result = sqlx::query_as::<_, Match>(
            r#"
            SELECT id, league_id, home_team_id, away_team_id, start_time, status, home_score, away_score
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await;

        require_record(result, "Match", match_id)
    }

    pub async fn get_match_with_teams(&self, match_id: Uuid) -> Result<MatchWithTeams, LeagueError> {
        let query = format!("{} WHERE m.id = $1", MATCH_WITH_TEAMS_SELECT);
        let result = sqlx::query_as::<_, MatchWithTeams>(&query)
            .bind(match_id)
            .fetch_optional(&self.pool)
            .await;

        require_record(result, "Match", match_id)
    }

    /// Matches that may appear on the dashboard once their status is refreshed:
    /// everything not finished, plus anything starting after `live_since`.
    /// `live_since` is `now` minus the match duration, so a row marked finished
    /// while the clock still says live is picked up again.
    pub async fn dashboard_candidates(&self, live_since: DateTime<Utc>) -> Result<Vec<MatchWithTeams>, LeagueError> {
        let query = format!(
            "{} WHERE m.status <> 'finished' OR m.start_time > $1 ORDER BY m.start_time ASC",
            MATCH_WITH_TEAMS_SELECT
        );
        let matches = sqlx::query_as::<_, MatchWithTeams>(&query)
            .bind(live_since)
            .fetch_all(&self.pool)
            .await?;

        debug!("Loaded {} dashboard candidates", matches.len());
        Ok(matches)
    }

    /// Every match with its names, most recent first
    pub async fn list_matches(&self) -> Result<Vec<MatchWithTeams>, LeagueError> {
        let query = format!("{} ORDER BY m.start_time DESC", MATCH_WITH_TEAMS_SELECT);
        let matches = sqlx::query_as::<_, MatchWithTeams>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(matches)
    }

    /// Matches whose status the clock may still move
    pub async fn open_matches(&self) -> Result<Vec<Match>, LeagueError> {
        let matches = sqlx::query_as::<_, Match>(
            r#"
            SELECT id, league_id, home_team_id, away_team_id, start_time, status, home_score, away_score
            FROM matches
            WHERE status IN ('scheduled', 'live')
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn match_events(&self, match_id: Uuid) -> Result<Vec<MatchEvent>, LeagueError> {
        let events = sqlx::query_as::<_, MatchEvent>(
            r#"
            SELECT id, match_id, team_id, player_id, event_type, event_time, description
            FROM match_events
            WHERE match_id = $1
            ORDER BY event_time ASC
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Commit a status-only transition
    pub async fn update_status(&self, match_id: Uuid, status: MatchStatus) -> Result<(), LeagueError> {
        let result = sqlx::query("UPDATE matches SET status = $1 WHERE id = $2")
            .bind(status)
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LeagueError::not_found("Match", match_id));
        }

        info!("Match {} status set to {}", match_id, status);
        Ok(())
    }

    /// Commit a transition that may also move the start time
    pub async fn update_schedule(
        &self,
        match_id: Uuid,
        status: MatchStatus,
        start_time: DateTime<Utc>,
    ) -> Result<(), LeagueError> {
        let result = sqlx::query("UPDATE matches SET status = $1, start_time = $2 WHERE id = $3")
            .bind(status)
            .bind(start_time)
            .bind(match_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(LeagueError::not_found("Match", match_id));
        }

        info!("Match {} status set to {}, starting {}", match_id, status, start_time);
        Ok(())
    }

    pub async fn update_scores(
        &self,
        match_id: Uuid,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, LeagueError> {
        let result = sqlx::query_as::<_, Match>(
            r#"
            UPDATE matches
            SET home_score = $1, away_score = $2
            WHERE id = $3
            RETURNING id, league_id, home_team_id, away_team_id, start_time, status, home_score, away_score
            "#,
        )
        .bind(home_score)
        .bind(away_score)
        .bind(match_id)
        .fetch_optional(&self.pool)
        .await;

        let updated = require_record(result, "Match", match_id)?;
        info!("Match {} score recorded: {} - {}", match_id, home_score, away_score);
        Ok(updated)
    }
}
