// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::common::MatchResult;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Match {
    pub id: Uuid,
    pub league_id: Uuid,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Live,
    Finished,
    Postponed,
}

impl MatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::Live => "live",
            MatchStatus::Finished => "finished",
            MatchStatus::Postponed => "postponed",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Match {
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    /// Result for `team_id`. `None` when the team did not play or a score is unset.
    pub fn result_for(&self, team_id: Uuid) -> Option<MatchResult> {
        let (home, away) = (self.home_score?, self.away_score?);
        if self.home_team_id == team_id {
            Some(MatchResult::from_scores(home, away))
        } else if self.away_team_id == team_id {
            Some(MatchResult::from_scores(away, home))
        } else {
            None
        }
    }

    /// Goals (for, against) from `team_id`'s side, unset scores counting as 0
    pub fn goals_for_team(&self, team_id: Uuid) -> (i32, i32) {
        let home = self.home_score.unwrap_or(0);
        let away = self.away_score.unwrap_or(0);
        if self.home_team_id == team_id {
            (home, away)
        } else if self.away_team_id == team_id {
            (away, home)
        } else {
            (0, 0)
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!((self.home_score, self.away_score), (Some(home), Some(away)) if home == away)
    }
}

/// A match joined with the names needed for display
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchWithTeams {
    #[sqlx(flatten)]
    pub game: Match,
    pub league_name: String,
    pub home_team_name: String,
    pub away_team_name: String,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct MatchEvent {
    pub id: Uuid,
    pub match_id: Uuid,
    pub team_id: Option<Uuid>,
    pub player_id: Option<Uuid>,
    pub event_type: String,
    pub event_time: DateTime<Utc>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub game: MatchWithTeams,
    pub events: Vec<MatchEvent>,
}

/// Flat projection of a match for the live/upcoming dashboard
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MatchFeedItem {
    pub id: Uuid,
    pub league: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub status: MatchStatus,
    pub start_time: String, // HH:MM
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DashboardFeed {
    pub live_matches: Vec<MatchFeedItem>,
    pub upcoming_matches: Vec<MatchFeedItem>,
}

// Request DTOs
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ResumeMatchRequest {
    pub new_start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchScoreRequest {
    pub home_score: i32,
    pub away_score: i32,
}
