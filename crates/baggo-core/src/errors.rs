use thiserror::Error;

/// Core error types.
///
/// Scoring itself cannot fail; these cover reading requests and configuration.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Request or config body is not valid JSON for the expected shape.
    #[error("invalid input: {0}")]
    Input(#[from] serde_json::Error),
    /// Reading a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Configuration values are out of range or inconsistent.
    #[error("invalid config: {0}")]
    Config(String),
    /// An identifier failed strict validation.
    #[error("validation failed: {0}")]
    Validation(#[from] baggo_rules::ValidationError),
}
