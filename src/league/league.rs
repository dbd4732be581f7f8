use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::league_queries::LeagueQueries;
use crate::db::match_queries::MatchQueries;
use crate::error::LeagueError;
use crate::league::dashboard;
use crate::league::games::MatchService;
use crate::league::lifecycle::MatchLifecycle;
use crate::league::standings::StandingsCalculator;
use crate::models::league::*;
use crate::models::matches::{DashboardFeed, MatchWithTeams};

/// Main league service that orchestrates storage and the pure calculators
pub struct LeagueService {
    leagues: LeagueQueries,
    matches: MatchQueries,
    games: MatchService,
    lifecycle: MatchLifecycle,
    standings: StandingsCalculator,
}

impl LeagueService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            leagues: LeagueQueries::new(pool.clone()),
            matches: MatchQueries::new(pool.clone()),
            games: MatchService::new(pool),
            lifecycle: MatchLifecycle::new(),
            standings: StandingsCalculator::new(),
        }
    }

    pub async fn list_sports(&self) -> Result<Vec<Sport>, LeagueError> {
        self.leagues.list_sports().await
    }

    pub async fn list_leagues(&self) -> Result<Vec<League>, LeagueError> {
        self.leagues.list_leagues().await
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>, LeagueError> {
        self.leagues.list_teams().await
    }

    pub async fn list_players(&self) -> Result<Vec<Player>, LeagueError> {
        self.leagues.list_players().await
    }

    pub async fn get_player(&self, player_id: Uuid) -> Result<Player, LeagueError> {
        self.leagues.get_player(player_id).await
    }

    /// All matches, each refreshed against `now`
    pub async fn list_matches(&self, now: DateTime<Utc>) -> Result<Vec<MatchWithTeams>, LeagueError> {
        let mut matches = self.matches.list_matches().await?;
        for listed in matches.iter_mut() {
            listed.game = self.games.apply_clock(listed.game.clone(), now).await?;
        }

        Ok(matches)
    }

    /// Compute the standings table of a league from its current matches
    pub async fn get_league_table(&self, league_id: Uuid) -> Result<LeagueTableResponse, LeagueError> {
        let league = self.leagues.get_league(league_id).await?;
        let teams = self.leagues.league_teams(league_id).await?;
        let matches = self.leagues.league_matches(league_id).await?;

        let table = self.standings.compute_table(&league, &teams, &matches);
        tracing::info!(
            "Built table for league {} ({} teams, {} matches)",
            league.name, teams.len(), matches.len()
        );

        Ok(LeagueTableResponse { league, table })
    }

    pub async fn get_team_detail(&self, team_id: Uuid) -> Result<TeamDetail, LeagueError> {
        let team = self.leagues.get_team(team_id).await?;
        let players = self.leagues.team_players(team_id).await?;
        Ok(TeamDetail { team, players })
    }

    /// Live and upcoming matches, each refreshed against `now` before projection
    pub async fn get_dashboard(&self, now: DateTime<Utc>) -> Result<DashboardFeed, LeagueError> {
        let live_since = now - self.lifecycle.duration();
        let mut candidates = self.matches.dashboard_candidates(live_since).await?;
        for candidate in candidates.iter_mut() {
            candidate.game = self.games.apply_clock(candidate.game.clone(), now).await?;
        }

        let feed = dashboard::build_feed(&candidates, now);
        tracing::info!(
            "Dashboard: {} live, {} upcoming",
            feed.live_matches.len(), feed.upcoming_matches.len()
        );
        Ok(feed)
    }

    /// Site-wide counters, with open match statuses refreshed first
    pub async fn get_summary(&self, now: DateTime<Utc>) -> Result<SiteSummary, LeagueError> {
        self.games.refresh_open_matches(now).await?;
        self.leagues.site_summary().await
    }
}
