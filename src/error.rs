//! Error handling for shot map operations.
//!
//! Missing data is never an error here: lookups return `None`. These
//! variants cover dataset I/O, JSON decoding and user-supplied values.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShotMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset not found at path: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Invalid dataset file: {path} - {reason}")]
    InvalidDataset { path: PathBuf, reason: String },

    #[error("Invalid record key '{key}': expected <teamId>_<seasonKey>_<gameType>")]
    InvalidRecordKey { key: String },

    #[error("Invalid season '{value}': {reason}")]
    InvalidSeason { value: String, reason: String },

    #[error("Invalid game type '{value}': expected 2/regular or 3/playoffs")]
    InvalidGameType { value: String },

    #[error("Unknown team: {query}")]
    UnknownTeam { query: String },

    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ShotMapError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid season error
    pub fn invalid_season(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeason {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShotMapError>;
