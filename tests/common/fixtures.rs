use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use pitch_backend::models::league::{League, Team};
use pitch_backend::models::matches::{Match, MatchStatus, MatchWithTeams};

pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 14, 15, 0, 0).unwrap()
}

pub fn league(name: &str) -> League {
    League {
        id: Uuid::new_v4(),
        name: name.to_string(),
        sport_id: Uuid::new_v4(),
        university: Some("State University".to_string()),
        abbreviation: None,
        logo: None,
    }
}

pub fn team(name: &str) -> Team {
    Team {
        id: Uuid::new_v4(),
        name: name.to_string(),
        sport_id: Uuid::new_v4(),
        logo: None,
    }
}

pub fn scheduled_match(league: &League, home: &Team, away: &Team, start_time: DateTime<Utc>) -> Match {
    Match {
        id: Uuid::new_v4(),
        league_id: league.id,
        home_team_id: home.id,
        away_team_id: away.id,
        start_time,
        status: MatchStatus::Scheduled,
        home_score: None,
        away_score: None,
    }
}

pub fn finished_match(league: &League, home: &Team, home_score: i32, away: &Team, away_score: i32) -> Match {
    Match {
        status: MatchStatus::Finished,
        home_score: Some(home_score),
        away_score: Some(away_score),
        ..scheduled_match(league, home, away, kickoff() - Duration::days(7))
    }
}

pub fn with_names(game: Match, league: &str, home: &str, away: &str) -> MatchWithTeams {
    MatchWithTeams {
        game,
        league_name: league.to_string(),
        home_team_name: home.to_string(),
        away_team_name: away.to_string(),
    }
}
