use serde::{Deserialize, Serialize};
use biosphere_common::{BiosphereError, Result};

/// Unitless severity in [0, 1]: 0 = no threat, 1 = collapse-level threat.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ThreatLevel(f64);

impl ThreatLevel {
    pub const NONE: ThreatLevel = ThreatLevel(0.0);
    pub const MAX: ThreatLevel = ThreatLevel(1.0);

    /// Accepts a directly supplied level; anything outside [0, 1] (or NaN) is rejected.
    pub fn new(level: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(BiosphereError::InvalidThreatLevel(level))
        }
    }

    /// Clamp into [0, 1]. Callers must have ruled out NaN.
    pub(crate) fn clamped(t: f64) -> Self {
        Self(t.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ThreatLevel {
    type Error = BiosphereError;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ThreatLevel> for f64 {
    fn from(level: ThreatLevel) -> f64 {
        level.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(ThreatLevel::new(0.0).unwrap(), ThreatLevel::NONE);
        assert_eq!(ThreatLevel::new(1.0).unwrap(), ThreatLevel::MAX);
        assert_eq!(ThreatLevel::new(0.41).unwrap().value(), 0.41);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(ThreatLevel::new(-0.01), Err(BiosphereError::InvalidThreatLevel(_))));
        assert!(matches!(ThreatLevel::new(1.5), Err(BiosphereError::InvalidThreatLevel(_))));
        assert!(ThreatLevel::new(f64::NAN).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let ok: ThreatLevel = serde_json::from_str("0.25").unwrap();
        assert_eq!(ok.value(), 0.25);
        assert!(serde_json::from_str::<ThreatLevel>("2.0").is_err());
        assert_eq!(serde_json::to_string(&ThreatLevel::MAX).unwrap(), "1.0");
    }
}
