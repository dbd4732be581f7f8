use uuid::Uuid;

/// Errors surfaced by league and match operations
#[derive(Debug, thiserror::Error)]
pub enum LeagueError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl LeagueError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        LeagueError::NotFound { entity, id }
    }
}
