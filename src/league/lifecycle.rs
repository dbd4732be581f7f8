use chrono::{DateTime, Duration, Utc};

use crate::models::matches::{Match, MatchStatus};

/// Regulation length of a match, after which it is considered finished
pub const MATCH_DURATION_MINUTES: i64 = 90;

/// Derives and forces match status. Every transition returns a new value;
/// committing it is up to the caller.
#[derive(Debug, Clone)]
pub struct MatchLifecycle {
    duration: Duration,
}

impl Default for MatchLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchLifecycle {
    pub fn new() -> Self {
        Self {
            duration: Duration::minutes(MATCH_DURATION_MINUTES),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Status implied by the clock alone
    pub fn target_status(&self, start_time: DateTime<Utc>, now: DateTime<Utc>) -> MatchStatus {
        if now < start_time {
            MatchStatus::Scheduled
        } else if now < start_time + self.duration {
            MatchStatus::Live
        } else {
            MatchStatus::Finished
        }
    }

    /// Bring a match's status in line with `now`.
    ///
    /// Returns `None` when nothing changes, including for postponed matches,
    /// which keep their status until resumed.
    pub fn auto_update(&self, game: &Match, now: DateTime<Utc>) -> Option<Match> {
        if game.status == MatchStatus::Postponed {
            return None;
        }

        let target = self.target_status(game.start_time, now);
        if target == game.status {
            return None;
        }

        tracing::debug!(
            "Match {} moves from {} to {} (start {}, now {})",
            game.id, game.status, target, game.start_time, now
        );

        Some(Match {
            status: target,
            ..game.clone()
        })
    }

    /// Like `auto_update`, but always hands back the current view of the match
    pub fn refresh(&self, game: Match, now: DateTime<Utc>) -> Match {
        match self.auto_update(&game, now) {
            Some(updated) => updated,
            None => game,
        }
    }

    pub fn postpone(&self, game: &Match) -> Match {
        Match {
            status: MatchStatus::Postponed,
            ..game.clone()
        }
    }

    /// Put a match back on the schedule, optionally at a new start time.
    /// Matches that are not postponed are forced to `scheduled` as well.
    pub fn resume(&self, game: &Match, new_start_time: Option<DateTime<Utc>>) -> Match {
        if game.status != MatchStatus::Postponed {
            tracing::warn!(
                "Resuming match {} which is {} rather than postponed",
                game.id, game.status
            );
        }

        Match {
            status: MatchStatus::Scheduled,
            start_time: new_start_time.unwrap_or(game.start_time),
            ..game.clone()
        }
    }
}
