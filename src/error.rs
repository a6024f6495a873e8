use thiserror::Error;

#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("word source: {0}")]
    WordSource(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HangmanError>;
