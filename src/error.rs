use crate::mapping::MappingConflict;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CribForgeError {
    #[error("Empty Input: {0} must not be blank")]
    EmptyInput(&'static str),

    #[error("No Alignment: crib '{crib}' cannot be placed consistently in the ciphertext")]
    NoAlignment { crib: String },

    #[error("Interrupted after {evaluated} candidate(s)")]
    Interrupted { evaluated: usize },

    #[error("Mapping Conflict: {0}")]
    Conflict(#[from] MappingConflict),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CfResult<T> = Result<T, CribForgeError>;
