use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("History fetch failed: {0}")]
    HistoryFetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
