use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request to {url} failed with status {status}")]
    Http { status: u16, url: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cache error: {0}")]
    Cache(String),

    #[error("Daily OpenDota request budget exhausted, try again tomorrow")]
    BudgetExhausted,

    #[error("No recent matches found for account {0}")]
    EmptyHistory(u64),
}
