//! Scored Earth systems and where each one's threat level comes from.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use biosphere_common::{BiosphereError, Result};

/// Allowed drift when checking that system weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Physical indicators with a live measurement source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Atmospheric CO₂ concentration, ppm
    Co2,
    /// Global mean sea-surface temperature, °C
    SeaSurfaceTemperature,
    /// Annual tree-cover loss, hectares
    ForestLoss,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 3] = [
        IndicatorKind::Co2,
        IndicatorKind::SeaSurfaceTemperature,
        IndicatorKind::ForestLoss,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IndicatorKind::Co2 => "Atmospheric CO₂",
            IndicatorKind::SeaSurfaceTemperature => "Sea-surface temperature",
            IndicatorKind::ForestLoss => "Forest loss",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            IndicatorKind::Co2 => "ppm",
            IndicatorKind::SeaSurfaceTemperature => "°C",
            IndicatorKind::ForestLoss => "ha/year",
        }
    }
}

/// Where a system's threat level comes from on a live run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThreatSource {
    /// Normalised from a live indicator reading against the (low, high) reference band.
    Live {
        indicator: IndicatorKind,
        low: f64,
        high: f64,
    },
    /// Supplied directly, bypassing normalisation.
    Fixed { level: f64 },
}

/// One weighted Earth system in the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Display name, also the row label in the breakdown table
    pub name: String,

    /// Share of the final score; all weights sum to 1.0
    pub weight: f64,

    pub threat: ThreatSource,

    /// Starting threat level in simulation mode
    #[serde(default)]
    pub simulation_default: Option<f64>,
}

impl SystemConfig {
    pub fn live(name: &str, weight: f64, indicator: IndicatorKind, low: f64, high: f64) -> Self {
        Self {
            name: name.to_string(),
            weight,
            threat: ThreatSource::Live { indicator, low, high },
            simulation_default: None,
        }
    }

    pub fn fixed(name: &str, weight: f64, level: f64) -> Self {
        Self {
            name: name.to_string(),
            weight,
            threat: ThreatSource::Fixed { level },
            simulation_default: None,
        }
    }

    pub fn with_simulation_default(mut self, level: f64) -> Self {
        self.simulation_default = Some(level);
        self
    }

    /// Lower-case identifier used for query parameters and form fields.
    /// "Forests & Biodiversity" → "forests_biodiversity"
    pub fn slug(&self) -> String {
        self.name
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|part| !part.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("_")
    }

    /// The live indicator this system reads, if any.
    pub fn indicator(&self) -> Option<IndicatorKind> {
        match self.threat {
            ThreatSource::Live { indicator, .. } => Some(indicator),
            ThreatSource::Fixed { .. } => None,
        }
    }

    /// Threat level used when simulation mode has no override for this system.
    pub fn simulation_start(&self) -> f64 {
        match (self.simulation_default, &self.threat) {
            (Some(level), _) => level,
            (None, ThreatSource::Fixed { level }) => *level,
            (None, ThreatSource::Live { .. }) => 0.5,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(BiosphereError::InvalidConfiguration(
                "system name must not be empty".to_string(),
            ));
        }
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(BiosphereError::InvalidConfiguration(format!(
                "weight for '{}' must be a non-negative number, got {}",
                self.name, self.weight
            )));
        }
        match self.threat {
            ThreatSource::Live { low, high, .. } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(BiosphereError::InvalidConfiguration(format!(
                        "reference band for '{}' must be finite",
                        self.name
                    )));
                }
                if low >= high {
                    return Err(BiosphereError::InvalidConfiguration(format!(
                        "reference band for '{}' needs low < high, got [{}, {}]",
                        self.name, low, high
                    )));
                }
            }
            ThreatSource::Fixed { level } => {
                if !(0.0..=1.0).contains(&level) {
                    return Err(BiosphereError::InvalidConfiguration(format!(
                        "fixed threat level for '{}' must be within [0, 1], got {}",
                        self.name, level
                    )));
                }
            }
        }
        if let Some(level) = self.simulation_default {
            if !(0.0..=1.0).contains(&level) {
                return Err(BiosphereError::InvalidConfiguration(format!(
                    "simulation default for '{}' must be within [0, 1], got {}",
                    self.name, level
                )));
            }
        }
        Ok(())
    }
}

/// The six-system set and weights the dashboard has always scored.
/// Soil, water and feedback risk have no live source yet and use fixed levels.
pub fn default_systems() -> Vec<SystemConfig> {
    vec![
        SystemConfig::live("Atmosphere", 0.20, IndicatorKind::Co2, 350.0, 450.0)
            .with_simulation_default(0.72),
        SystemConfig::live("Oceans", 0.20, IndicatorKind::SeaSurfaceTemperature, 26.0, 30.0)
            .with_simulation_default(0.60),
        SystemConfig::live("Forests & Biodiversity", 0.20, IndicatorKind::ForestLoss, 0.0, 1_000_000.0)
            .with_simulation_default(0.70),
        SystemConfig::fixed("Soil & Agriculture", 0.15, 0.41).with_simulation_default(0.55),
        SystemConfig::fixed("Water Systems", 0.15, 0.49).with_simulation_default(0.58),
        SystemConfig::fixed("Feedback Risk", 0.10, 0.65).with_simulation_default(0.66),
    ]
}

/// Check the whole system set: non-empty, unique names, sane bands, weights summing to 1.
pub fn validate_systems(systems: &[SystemConfig]) -> Result<()> {
    if systems.is_empty() {
        return Err(BiosphereError::InvalidConfiguration(
            "at least one system must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for system in systems {
        system.validate()?;
        if !seen.insert(system.slug()) {
            return Err(BiosphereError::InvalidConfiguration(format!(
                "duplicate system '{}'",
                system.name
            )));
        }
    }

    let sum: f64 = systems.iter().map(|s| s.weight).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(BiosphereError::InvalidConfiguration(format!(
            "system weights must sum to 1.0, got {:.6}",
            sum
        )));
    }

    Ok(())
}
