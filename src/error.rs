use thiserror::Error;

/// Failure taxonomy shared by the core, the store and the transport.
///
/// The core signals failure through these values and performs no recovery;
/// storage errors pass through opaque and are never shown to clients.
#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("storage failure")]
    Storage(#[from] rusqlite::Error),
}

impl LeagueError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
