//! Live scoring run: configured systems + collected readings → report.
//!
//! Any live indicator without a reading abandons the run. The error lists
//! every missing indicator so the caller can show one message per failure.

use tracing::{debug, info, warn};
use biosphere_common::{BiosphereError, Result, UnavailableIndicator};
use biosphere_config::{SystemConfig, ThreatSource};

use crate::aggregate::{aggregate, ScoreReport, SystemRow};
use crate::normalise::normalize;
use crate::readings::{Reading, Readings};
use crate::threat::ThreatLevel;

/// Score the configured systems against one run's readings.
pub fn score_live(systems: &[SystemConfig], readings: &Readings) -> Result<ScoreReport> {
    let mut rows = Vec::with_capacity(systems.len());
    let mut unavailable = Vec::new();

    for system in systems {
        match &system.threat {
            ThreatSource::Fixed { level } => {
                rows.push(SystemRow::new(&system.name, ThreatLevel::new(*level)?, system.weight));
            }
            ThreatSource::Live { indicator, low, high } => match readings.get(*indicator) {
                Some(Reading::Available(raw)) => {
                    let threat = normalize(*raw, *low, *high)?;
                    debug!(
                        system = %system.name,
                        indicator = indicator.label(),
                        raw = *raw,
                        threat = threat.value(),
                        "Normalised live indicator"
                    );
                    rows.push(SystemRow::new(&system.name, threat, system.weight));
                }
                Some(Reading::Unavailable(reason)) => {
                    unavailable.push(UnavailableIndicator {
                        system: system.name.clone(),
                        indicator: indicator.label().to_string(),
                        reason: reason.clone(),
                    });
                }
                None => {
                    unavailable.push(UnavailableIndicator {
                        system: system.name.clone(),
                        indicator: indicator.label().to_string(),
                        reason: "no reading collected".to_string(),
                    });
                }
            },
        }
    }

    if !unavailable.is_empty() {
        warn!(count = unavailable.len(), "Abandoning scoring run, live indicators unavailable");
        return Err(BiosphereError::DataUnavailable(unavailable));
    }

    let report = aggregate(&rows)?;
    info!(total_score = report.total_score, "Biosphere score computed");
    Ok(report)
}
