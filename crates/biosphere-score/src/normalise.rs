//! Indicator normalisation.
//! Linear clamp-and-scale of a raw measurement against its reference band.

use biosphere_common::{BiosphereError, Result};
use crate::threat::ThreatLevel;

/// Min-max normalisation of `raw` within [low, high], clamped to [0, 1].
///
/// Higher raw values always mean higher threat. `low == high` is a
/// configuration error rather than a division by zero.
pub fn normalize(raw: f64, low: f64, high: f64) -> Result<ThreatLevel> {
    if low == high {
        return Err(BiosphereError::InvalidConfiguration(format!(
            "reference band has low == high ({})",
            low
        )));
    }
    if raw.is_nan() || !low.is_finite() || !high.is_finite() {
        return Err(BiosphereError::InvalidConfiguration(format!(
            "cannot normalise {} against [{}, {}]",
            raw, low, high
        )));
    }

    let t = (raw - low) / (high - low);
    Ok(ThreatLevel::clamped(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_co2_band() {
        assert_eq!(normalize(400.0, 350.0, 450.0).unwrap().value(), 0.5);
        assert_eq!(normalize(300.0, 350.0, 450.0).unwrap().value(), 0.0);
        assert_eq!(normalize(500.0, 350.0, 450.0).unwrap().value(), 1.0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(normalize(26.0, 26.0, 30.0).unwrap().value(), 0.0);
        assert_eq!(normalize(30.0, 26.0, 30.0).unwrap().value(), 1.0);
        assert_eq!(normalize(800_000.0, 0.0, 1_000_000.0).unwrap().value(), 0.8);
    }

    #[test]
    fn test_degenerate_band() {
        for x in [-5.0, 0.0, 10.0, 1e9] {
            assert!(matches!(
                normalize(x, 10.0, 10.0),
                Err(BiosphereError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_infinite_raw_clamps() {
        assert_eq!(normalize(f64::INFINITY, 0.0, 1.0).unwrap(), ThreatLevel::MAX);
        assert_eq!(normalize(f64::NEG_INFINITY, 0.0, 1.0).unwrap(), ThreatLevel::NONE);
    }

    #[test]
    fn test_nan_raw_rejected() {
        assert!(normalize(f64::NAN, 0.0, 1.0).is_err());
    }
}
