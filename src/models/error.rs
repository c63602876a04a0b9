use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpactEngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid tier table '{table}': {message}")]
    TierTableError { table: String, message: String },

    #[error("Invalid scoring parameters: {0}")]
    ScoringParamsError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ImpactEngineError>;
