//! Measurement source clients.

pub mod co2;
pub mod sst;
pub mod forest;

use async_trait::async_trait;
use biosphere_config::IndicatorKind;

pub use co2::NoaaCo2Source;
pub use forest::GfwForestLossSource;
pub use sst::OisstSource;

/// Common interface for every live indicator source.
#[async_trait]
pub trait MeasurementSource: Send + Sync {
    /// Which indicator this source measures.
    fn indicator(&self) -> IndicatorKind;

    /// Fetch the latest raw value in the indicator's natural unit.
    /// Any retrying happens inside; an error means unavailable for this run.
    async fn fetch(&self) -> anyhow::Result<f64>;
}

// ── Mock Implementation for Testing ────────────────────────────────────────

/// Source returning a canned value or failure.
pub struct MockMeasurementSource {
    indicator: IndicatorKind,
    outcome: Result<f64, String>,
}

impl MockMeasurementSource {
    pub fn value(indicator: IndicatorKind, value: f64) -> Self {
        Self { indicator, outcome: Ok(value) }
    }

    pub fn failing(indicator: IndicatorKind, reason: &str) -> Self {
        Self { indicator, outcome: Err(reason.to_string()) }
    }
}

#[async_trait]
impl MeasurementSource for MockMeasurementSource {
    fn indicator(&self) -> IndicatorKind {
        self.indicator
    }

    async fn fetch(&self) -> anyhow::Result<f64> {
        self.outcome.clone().map_err(|reason| anyhow::anyhow!(reason))
    }
}
