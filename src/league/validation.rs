use crate::error::LeagueError;
use crate::models::matches::{MatchScoreRequest, ResumeMatchRequest};

/// Highest score accepted from a form before it is treated as a typo
pub const MAX_REASONABLE_SCORE: i32 = 50;

/// Input checks for league operations, run before touching storage
pub struct LeagueValidator;

impl LeagueValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_score_request(&self, request: &MatchScoreRequest) -> Result<(), LeagueError> {
        self.validate_match_scores(request.home_score, request.away_score)
    }

    /// Validate match scores
    pub fn validate_match_scores(&self, home_score: i32, away_score: i32) -> Result<(), LeagueError> {
        for (side, score) in [("Home", home_score), ("Away", away_score)] {
            if score < 0 {
                return Err(LeagueError::Validation(
                    format!("{} score cannot be negative: {}", side, score)
                ));
            }

            if score > MAX_REASONABLE_SCORE {
                return Err(LeagueError::Validation(
                    format!("{} score too high: {} (max {})", side, score, MAX_REASONABLE_SCORE)
                ));
            }
        }

        Ok(())
    }

    /// Parse an optional resume body. Only an empty body means "keep the
    /// current start time"; anything else must be a valid request.
    pub fn parse_resume_request(&self, body: &[u8]) -> Result<ResumeMatchRequest, LeagueError> {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(ResumeMatchRequest::default());
        }

        serde_json::from_slice(body)
            .map_err(|e| LeagueError::Validation(format!("Invalid resume request: {}", e)))
    }
}

impl Default for LeagueValidator {
    fn default() -> Self {
        Self::new()
    }
}
