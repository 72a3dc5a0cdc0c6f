use thiserror::Error;

#[derive(Debug, Error)]
pub enum FigTextError {
    #[error("invalid window width {0}: num_words must be zero or greater")]
    InvalidWindowWidth(i64),
    #[error("invalid paragraph boundary: boundary must not be empty")]
    EmptyBoundary,
    #[error("unknown fig text mode: {0} (expected legends, paragraphs or words)")]
    UnknownMode(String),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}
