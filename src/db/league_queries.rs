use sqlx::PgPool;
use uuid::Uuid;

use crate::db::helpers::require_record;
use crate::error::LeagueError;
use crate::models::league::{League, Player, SiteSummary, Sport, Team};
use crate::models::matches::Match;

#[derive(Debug, Clone)]
pub struct LeagueQueries {
    pool: PgPool,
}

impl LeagueQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_sports(&self) -> Result<Vec<Sport>, LeagueError> {
        let sports = sqlx::query_as::<_, Sport>(
            "SELECT id, name FROM sports ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(sports)
    }

    pub async fn list_leagues(&self) -> Result<Vec<League>, LeagueError> {
        let leagues = sqlx::query_as::<_, League>(
            r#"
            SELECT id, name, sport_id, university, abbreviation, logo
            FROM leagues
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(leagues)
    }

    pub async fn get_league(&self, league_id: Uuid) -> Result<League, LeagueError> {
        let result = sqlx::query_as::<_, League>(
            r#"
            SELECT id, name, sport_id, university, abbreviation, logo
            FROM leagues
            WHERE id = $1
            "#,
        )
        .bind(league_id)
        .fetch_optional(&self.pool)
        .await;

        require_record(result, "League", league_id)
    }

    /// Member teams, alphabetical
    pub async fn league_teams(&self, league_id: Uuid) -> Result<Vec<Team>, LeagueError> {
        let teams = sqlx::query_as::<_, Team>(
            r#"
            SELECT t.id, t.name, t.sport_id, t.logo
            FROM teams t
            JOIN league_teams lt ON lt.team_id = t.id
            WHERE lt.league_id = $1
            ORDER BY t.name ASC
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn league_matches(&self, league_id: Uuid) -> Result<Vec<Match>, LeagueError> {
        let matches = sqlx::query_as::<_, Match>(
            r#"
            SELECT id, league_id, home_team_id, away_team_id, start_time, status, home_score, away_score
            FROM matches
            WHERE league_id = $1
            ORDER BY start_time ASC
            "#,
        )
        .bind(league_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>, LeagueError> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT id, name, sport_id, logo FROM teams ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn get_team(&self, team_id: Uuid) -> Result<Team, LeagueError> {
        let result = sqlx::query_as::<_, Team>(
            "SELECT id, name, sport_id, logo FROM teams WHERE id = $1",
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await;

        require_record(result, "Team", team_id)
    }

    pub async fn team_players(&self, team_id: Uuid) -> Result<Vec<Player>, LeagueError> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, dept, team_id, date_of_birth, position
            FROM players
            WHERE team_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }

    /// All players, by name then team
    pub async fn list_players(&self) -> Result<Vec<Player>, LeagueError> {
        let players = sqlx::query_as::<_, Player>(
            r#"
            SELECT p.id, p.name, p.dept, p.team_id, p.date_of_birth, p.position
            FROM players p
            JOIN teams t ON p.team_id = t.id
            ORDER BY p.name ASC, t.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(players)
    }

    pub async fn get_player(&self, player_id: Uuid) -> Result<Player, LeagueError> {
        let result = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, name, dept, team_id, date_of_birth, position
            FROM players
            WHERE id = $1
            "#,
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await;

        require_record(result, "Player", player_id)
    }

    pub async fn site_summary(&self) -> Result<SiteSummary, LeagueError> {
        let (num_matches, num_teams, num_live_matches, num_players) =
            sqlx::query_as::<_, (i64, i64, i64, i64)>(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM matches),
                    (SELECT COUNT(*) FROM teams),
                    (SELECT COUNT(*) FROM matches WHERE status = 'live'),
                    (SELECT COUNT(*) FROM players)
                "#,
            )
            .fetch_one(&self.pool)
            .await?;

        Ok(SiteSummary {
            num_matches,
            num_teams,
            num_live_matches,
            num_players,
        })
    }
}
