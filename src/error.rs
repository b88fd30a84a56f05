use crate::config::SeederConfigBuilderError;
use thiserror::Error;

/// Error definition for possible errors in this crate
#[derive(Debug, Error)]
pub enum SeederError {
    /// Returned when picking from a sequence with no elements
    #[error("Cannot pick from an empty sequence")]
    EmptyInput,
    /// Returned when a sample asks for more elements than the sequence holds
    #[error("Sample count {count} larger than sequence size {len}")]
    CountExceedsSize { count: usize, len: usize },
    /// Returned when the config builder rejects its fields
    #[error("Invalid config: {0}")]
    Config(#[from] SeederConfigBuilderError),
    /// Returned when a deserialized config fails validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    /// Represents malformed JSON handed to the registry or config loader
    #[error("Serde error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for Result<T, seeder::SeederError>
pub type Result<T> = std::result::Result<T, SeederError>;
