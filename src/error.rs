//! Error types for the Dota fantasy scoring CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid match ID: {input:?}")]
    InvalidMatchId { input: String },

    #[error("Match {match_id} unavailable (status {})", status_label(.status))]
    MatchUnavailable { match_id: u64, status: Option<u16> },

    #[error("Invalid scoring rubric: {message}")]
    InvalidRubric { message: String },

    #[error("Unknown rubric variant: {variant}")]
    InvalidVariant { variant: String },

    #[error("No match IDs provided")]
    NoMatches,
}

fn status_label(status: &Option<u16>) -> String {
    status.map_or_else(|| "n/a".to_string(), |s| s.to_string())
}

impl FantasyError {
    /// HTTP-like status code attached to this error, if the provider gave one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FantasyError::MatchUnavailable { status, .. } => *status,
            FantasyError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
