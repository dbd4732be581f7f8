use uuid::Uuid;

use crate::models::common::MatchResult;
use crate::models::league::{League, StandingsRow, Team};
use crate::models::matches::Match;

/// Builds league tables from match records already loaded from storage
#[derive(Debug, Default)]
pub struct StandingsCalculator;

impl StandingsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate every team's matches in `league` and rank the result.
    ///
    /// Matches of other leagues are ignored. Teams tied on
    /// (points, goal difference, goals for) keep their order from `teams`.
    pub fn compute_table(&self, league: &League, teams: &[Team], matches: &[Match]) -> Vec<StandingsRow> {
        let league_matches: Vec<&Match> = matches
            .iter()
            .filter(|m| m.league_id == league.id)
            .collect();

        let mut table: Vec<StandingsRow> = teams
            .iter()
            .map(|team| self.team_row(team, &league_matches))
            .collect();

        table.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));

        for (index, row) in table.iter_mut().enumerate() {
            row.position = (index + 1) as i32;
        }

        tracing::debug!("Computed table for league {} with {} teams", league.id, table.len());
        table
    }

    fn team_row(&self, team: &Team, league_matches: &[&Match]) -> StandingsRow {
        let played_matches: Vec<&Match> = league_matches
            .iter()
            .copied()
            .filter(|m| m.involves(team.id))
            .collect();

        let played = played_matches.len() as i32;
        let wins = count_results(&played_matches, team.id, MatchResult::Win);
        // A level score is a draw for either side
        let draws = played_matches.iter().filter(|m| m.is_draw()).count() as i32;
        let losses = played - wins - draws;

        let (goals_for, goals_against) = played_matches
            .iter()
            .map(|m| m.goals_for_team(team.id))
            .fold((0, 0), |(gf, ga), (f, a)| (gf + f, ga + a));

        StandingsRow {
            team_id: team.id,
            team_name: team.name.clone(),
            played,
            wins,
            draws,
            losses,
            goals_for,
            goals_against,
            goal_difference: goals_for - goals_against,
            points: wins * 3 + draws,
            position: 0,
        }
    }
}

fn count_results(matches: &[&Match], team_id: Uuid, result: MatchResult) -> i32 {
    matches
        .iter()
        .filter(|m| m.result_for(team_id) == Some(result))
        .count() as i32
}
