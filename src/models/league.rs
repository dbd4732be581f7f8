// src/models/league.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Sport {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub sport_id: Uuid,
    pub university: Option<String>, // Organizer of the league, if any
    pub abbreviation: Option<String>,
    pub logo: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub sport_id: Uuid,
    pub logo: Option<String>,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub dept: String,
    pub team_id: Uuid,
    pub date_of_birth: Option<NaiveDate>,
    pub position: Option<String>,
}

/// One computed line of a league table. Never persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub team_id: Uuid,
    pub team_name: String,
    pub played: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: i32,
    pub position: i32,
}

impl StandingsRow {
    /// Ranking key, compared descending
    pub fn rank_key(&self) -> (i32, i32, i32) {
        (self.points, self.goal_difference, self.goals_for)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueTableResponse {
    pub league: League,
    pub table: Vec<StandingsRow>,
}

/// Home page counters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    pub num_matches: i64,
    pub num_teams: i64,
    pub num_live_matches: i64,
    pub num_players: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamDetail {
    pub team: Team,
    pub players: Vec<Player>,
}
