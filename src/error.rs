use thiserror::Error;

use crate::rank::RankError;
use crate::valorant::types::ApiError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Valorant API error: {0}")]
    Api(#[from] ApiError),

    #[error("Player not found: {name}#{tag}")]
    PlayerNotFound { name: String, tag: String },

    #[error(transparent)]
    Rank(#[from] RankError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
