use chrono::{DateTime, Utc};

use crate::models::matches::{DashboardFeed, MatchFeedItem, MatchStatus, MatchWithTeams};

/// Split refreshed matches into the live and upcoming lists shown on the dashboard.
/// A live match whose start lies in the future (clock skew, manual edit) shows up in both.
pub fn build_feed(matches: &[MatchWithTeams], now: DateTime<Utc>) -> DashboardFeed {
    let mut ordered: Vec<&MatchWithTeams> = matches.iter().collect();
    ordered.sort_by_key(|m| m.game.start_time);

    let live_matches = ordered
        .iter()
        .filter(|m| m.game.status == MatchStatus::Live)
        .map(|m| feed_item(m))
        .collect();

    let upcoming_matches = ordered
        .iter()
        .filter(|m| m.game.start_time > now)
        .map(|m| feed_item(m))
        .collect();

    DashboardFeed {
        live_matches,
        upcoming_matches,
    }
}

pub fn feed_item(m: &MatchWithTeams) -> MatchFeedItem {
    MatchFeedItem {
        id: m.game.id,
        league: m.league_name.clone(),
        home_team: m.home_team_name.clone(),
        away_team: m.away_team_name.clone(),
        home_score: m.game.home_score.unwrap_or(0),
        away_score: m.game.away_score.unwrap_or(0),
        status: m.game.status,
        start_time: m.game.start_time.format("%H:%M").to_string(),
    }
}
