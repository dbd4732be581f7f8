use serde::{Deserialize, Serialize};

/// Generic API response wrapper used across all handlers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Create a successful response with data and a message
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Outcome of a finished (or scored) match from one team's point of view
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// Compare two scores from the first score's side
    pub fn from_scores(own: i32, opponent: i32) -> Self {
        match own.cmp(&opponent) {
            std::cmp::Ordering::Greater => MatchResult::Win,
            std::cmp::Ordering::Less => MatchResult::Loss,
            std::cmp::Ordering::Equal => MatchResult::Draw,
        }
    }
}
