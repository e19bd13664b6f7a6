use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited by the Riot API (HTTP 429)")]
    RateLimited,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Account {account_id} did not play in game {game_id}")]
    ParticipantNotFound { game_id: i64, account_id: String },

    #[error("Champion id {0} is missing from the champion table")]
    UnknownChampion(i64),

    #[error("Match list did not end after {0} pages")]
    PaginationLimit(usize),

    #[error("Invalid rate limit rule: {0}")]
    InvalidRateLimitRule(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("CSV error: {0}")]
    CsvError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
