//! Unified error types for the store map
//!
//! This module defines error types for each layer:
//! - `DatasetError`: Invalid dataset identifiers
//! - `RecordError`: A single malformed store record (skipped, never fatal)
//! - `FeedError`: Fetching or decoding a whole store feed
//! - `AppError`: Application layer errors (wraps the above for callers)

use thiserror::Error;

/// Dataset identifier validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Dataset identifier is empty")]
    Empty,

    #[error("Dataset identifier contains invalid characters: {0}")]
    InvalidCharacters(String),
}

/// A store record that cannot be placed on the map
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record does not match the store shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Location must hold exactly two numbers, got {0}")]
    Coordinates(usize),

    #[error("Location is not finite or out of range: [{lat}, {lng}]")]
    OutOfRange { lat: f64, lng: f64 },

    #[error("Record has an empty name")]
    EmptyName,
}

/// Store feed errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Fetch failed for {dataset}: {source}")]
    FetchFailed {
        dataset: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Feed {dataset} returned HTTP {status}")]
    Status { dataset: String, status: u16 },

    #[error("Feed {dataset} could not be read: {source}")]
    Io {
        dataset: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Feed {dataset} is not valid JSON: {source}")]
    ParseFailed {
        dataset: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Feed {dataset} is not a JSON array")]
    NotAnArray { dataset: String },
}

impl FeedError {
    /// Whether the failure happened before a body was received
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            FeedError::FetchFailed { .. } | FeedError::Status { .. } | FeedError::Io { .. }
        )
    }
}

/// Application layer errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Dataset(#[from] DatasetError),

    #[error("{0}")]
    Feed(#[from] FeedError),
}

impl AppError {
    /// Short text shown to the viewer in place of the "last updated" label
    pub fn user_message(&self, dataset: &str) -> String {
        match self {
            AppError::Feed(e) if e.is_fetch_failure() => {
                format!("Database unavailable ({dataset})")
            }
            AppError::Feed(_) => format!("Database unavailable ({dataset}): invalid data"),
            AppError::Dataset(_) => "Database unavailable: unknown dataset".to_string(),
        }
    }
}
