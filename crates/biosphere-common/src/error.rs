use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A live indicator that could not supply a reading for a scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailableIndicator {
    /// System the indicator feeds (e.g. "Oceans")
    pub system: String,
    /// Human-readable indicator label (e.g. "Sea-surface temperature")
    pub indicator: String,
    /// Why the source gave up
    pub reason: String,
}

impl fmt::Display for UnavailableIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.indicator, self.system, self.reason)
    }
}

#[derive(Debug, Error)]
pub enum BiosphereError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Threat level {0} is outside [0, 1]")]
    InvalidThreatLevel(f64),

    #[error("Data unavailable: {}", join_unavailable(.0))]
    DataUnavailable(Vec<UnavailableIndicator>),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Security error: {0}")]
    SecurityError(String),
}

fn join_unavailable(items: &[UnavailableIndicator]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, BiosphereError>;
