/// Error types for the SLA engine
use thiserror::Error;

/// Main error type for SLA engine operations
#[derive(Error, Debug)]
pub enum SlaError {
    /// Profile document is invalid or incomplete
    #[error("Profile error: {0}")]
    Profile(String),

    /// YAML parsing failed
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Order record failed boundary validation
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Configuration is invalid or incomplete
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

/// Result type alias for SLA engine operations
pub type Result<T> = std::result::Result<T, SlaError>;
