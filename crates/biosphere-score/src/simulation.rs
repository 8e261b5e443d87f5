//! Simulation mode: manually chosen threat levels through the same aggregator.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use biosphere_common::{BiosphereError, Result};
use biosphere_config::SystemConfig;

use crate::aggregate::{aggregate, ScoreReport, SystemRow};
use crate::threat::ThreatLevel;

/// Threat levels keyed by system slug (e.g. `forests_biodiversity`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimulationOverrides(pub HashMap<String, f64>);

impl SimulationOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, slug: &str, level: f64) -> Self {
        self.0.insert(slug.to_string(), level);
        self
    }
}

/// Score the configured systems using overrides where given and each
/// system's simulation default otherwise.
pub fn simulate(systems: &[SystemConfig], overrides: &SimulationOverrides) -> Result<ScoreReport> {
    let slugs: Vec<String> = systems.iter().map(SystemConfig::slug).collect();

    if let Some(unknown) = overrides.0.keys().find(|k| !slugs.contains(k)) {
        return Err(BiosphereError::InvalidConfiguration(format!(
            "unknown system '{}' in simulation input",
            unknown
        )));
    }

    let rows = systems
        .iter()
        .zip(&slugs)
        .map(|(system, slug)| {
            let level = overrides
                .0
                .get(slug)
                .copied()
                .unwrap_or_else(|| system.simulation_start());
            Ok(SystemRow::new(&system.name, ThreatLevel::new(level)?, system.weight))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(overridden = overrides.0.len(), "Running simulation");
    aggregate(&rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosphere_config::default_systems;

    #[test]
    fn test_defaults_only() {
        // 0.72, 0.60, 0.70, 0.55, 0.58, 0.66
        // subscores 28, 40, 30, 45, 42, 34; the f64 sum lands at 36.050000000000004
        let report = simulate(&default_systems(), &SimulationOverrides::new()).unwrap();
        assert_eq!(report.rows.len(), 6);
        assert_eq!(report.total_score, 36.1);
        assert!((report.rows[0].threat_level.value() - 0.72).abs() < 1e-12);
    }

    #[test]
    fn test_override_changes_one_row() {
        let overrides = SimulationOverrides::new().set("atmosphere", 0.0);
        let report = simulate(&default_systems(), &overrides).unwrap();
        assert_eq!(report.rows[0].subscore, 100.0);
        assert_eq!(report.rows[0].weighted_score, 20.0);
        assert!((report.rows[1].threat_level.value() - 0.60).abs() < 1e-12);
    }

    #[test]
    fn test_all_zero_is_perfect_score() {
        let overrides = default_systems()
            .iter()
            .fold(SimulationOverrides::new(), |o, s| o.set(&s.slug(), 0.0));
        let report = simulate(&default_systems(), &overrides).unwrap();
        assert_eq!(report.total_score, 100.0);
    }

    #[test]
    fn test_unknown_system_rejected() {
        let overrides = SimulationOverrides::new().set("cryosphere", 0.3);
        let err = simulate(&default_systems(), &overrides).unwrap_err();
        assert!(err.to_string().contains("cryosphere"));
    }

    #[test]
    fn test_out_of_range_override_rejected() {
        let overrides = SimulationOverrides::new().set("oceans", 1.2);
        assert!(matches!(
            simulate(&default_systems(), &overrides),
            Err(BiosphereError::InvalidThreatLevel(_))
        ));
    }
}
