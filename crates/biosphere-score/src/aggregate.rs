//! Weighted biosphere score.
//!
//! subscore_i = 100 − threat_i × 100
//! weighted_i = subscore_i × weight_i
//! total      = round(Σ weighted_i, 1)

use serde::{Deserialize, Serialize};
use biosphere_common::{BiosphereError, Result};
use crate::threat::ThreatLevel;

/// One system going into the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemRow {
    pub system: String,
    pub threat_level: ThreatLevel,
    pub weight: f64,
}

impl SystemRow {
    pub fn new(system: impl Into<String>, threat_level: ThreatLevel, weight: f64) -> Self {
        Self {
            system: system.into(),
            threat_level,
            weight,
        }
    }
}

/// A system row with its computed scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    pub system: String,
    pub threat_level: ThreatLevel,
    pub weight: f64,
    /// Health in [0, 100]
    pub subscore: f64,
    pub weighted_score: f64,
}

/// Aggregator output: rows in input order plus the total, rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub rows: Vec<ScoredRow>,
    pub total_score: f64,
}

/// Compute per-row and total scores.
///
/// Weights are trusted here; they are checked once when configuration loads.
pub fn aggregate(rows: &[SystemRow]) -> Result<ScoreReport> {
    if rows.is_empty() {
        return Err(BiosphereError::InvalidConfiguration(
            "cannot aggregate an empty system set".to_string(),
        ));
    }

    let scored: Vec<ScoredRow> = rows
        .iter()
        .map(|row| {
            let subscore = 100.0 - row.threat_level.value() * 100.0;
            ScoredRow {
                system: row.system.clone(),
                threat_level: row.threat_level,
                weight: row.weight,
                subscore,
                weighted_score: subscore * row.weight,
            }
        })
        .collect();

    // Summed in input order so repeated runs are bit-identical.
    let sum: f64 = scored.iter().map(|r| r.weighted_score).sum();

    Ok(ScoreReport {
        rows: scored,
        total_score: round_to_tenth(sum),
    })
}

/// Nearest tenth of the value as stored; no intermediate `x * 10` rounding.
fn round_to_tenth(x: f64) -> f64 {
    format!("{x:.1}").parse().unwrap_or(x)
}
