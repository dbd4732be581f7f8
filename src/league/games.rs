use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::match_queries::MatchQueries;
use crate::error::LeagueError;
use crate::league::lifecycle::MatchLifecycle;
use crate::league::validation::LeagueValidator;
use crate::models::matches::*;

/// Service responsible for individual match operations
pub struct MatchService {
    queries: MatchQueries,
    lifecycle: MatchLifecycle,
    validator: LeagueValidator,
}

impl MatchService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            queries: MatchQueries::new(pool),
            lifecycle: MatchLifecycle::new(),
            validator: LeagueValidator::new(),
        }
    }

    /// Match with team names and events, status refreshed first
    pub async fn get_match_detail(&self, match_id: Uuid, now: DateTime<Utc>) -> Result<MatchDetail, LeagueError> {
        let mut game = self.queries.get_match_with_teams(match_id).await?;
        game.game = self.apply_clock(game.game, now).await?;
        let events = self.queries.match_events(match_id).await?;

        Ok(MatchDetail { game, events })
    }

    pub async fn postpone_match(&self, match_id: Uuid) -> Result<Match, LeagueError> {
        let game = self.queries.get_match(match_id).await?;
        let postponed = self.lifecycle.postpone(&game);

        if postponed.status != game.status {
            self.queries.update_status(postponed.id, postponed.status).await?;
        }

        tracing::info!("Match {} postponed (was {})", match_id, game.status);
        Ok(postponed)
    }

    pub async fn resume_match(
        &self,
        match_id: Uuid,
        new_start_time: Option<DateTime<Utc>>,
    ) -> Result<Match, LeagueError> {
        let game = self.queries.get_match(match_id).await?;
        let resumed = self.lifecycle.resume(&game, new_start_time);

        self.queries
            .update_schedule(resumed.id, resumed.status, resumed.start_time)
            .await?;

        tracing::info!("Match {} resumed, starting {}", match_id, resumed.start_time);
        Ok(resumed)
    }

    pub async fn record_score(&self, match_id: Uuid, request: &MatchScoreRequest) -> Result<Match, LeagueError> {
        self.validator.validate_score_request(request)?;
        self.queries
            .update_scores(match_id, request.home_score, request.away_score)
            .await
    }

    /// Refresh every match the clock can still move. Returns how many changed.
    pub async fn refresh_open_matches(&self, now: DateTime<Utc>) -> Result<usize, LeagueError> {
        let mut changed = 0;
        for game in self.queries.open_matches().await? {
            if let Some(updated) = self.lifecycle.auto_update(&game, now) {
                self.queries.update_status(updated.id, updated.status).await?;
                changed += 1;
            }
        }

        if changed > 0 {
            tracing::info!("Refreshed status of {} matches", changed);
        }
        Ok(changed)
    }

    /// Apply `auto_update` to an already loaded match and commit any change
    pub async fn apply_clock(&self, game: Match, now: DateTime<Utc>) -> Result<Match, LeagueError> {
        match self.lifecycle.auto_update(&game, now) {
            Some(updated) => {
                self.queries.update_status(updated.id, updated.status).await?;
                Ok(updated)
            }
            None => Ok(game),
        }
    }
}
