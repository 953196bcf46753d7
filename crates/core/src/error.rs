use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadescopeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid version pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Alias file error: {0}")]
    Alias(String),
}

pub type Result<T> = std::result::Result<T, ShadescopeError>;
