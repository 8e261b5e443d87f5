//! Concurrent collection of the readings a live run needs.

use std::sync::Arc;
use std::time::Duration;

use biosphere_common::SandboxClient;
use biosphere_config::{IndicatorKind, SourcesConfig, SystemConfig};
use biosphere_score::{Reading, Readings};
use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::sources::{GfwForestLossSource, MeasurementSource, NoaaCo2Source, OisstSource};

/// The three live sources, sharing one HTTP client.
pub fn build_sources(config: &SourcesConfig) -> biosphere_common::Result<Vec<Arc<dyn MeasurementSource>>> {
    let client = SandboxClient::with_timeout(Duration::from_secs(config.request_timeout_secs))?;

    Ok(vec![
        Arc::new(NoaaCo2Source::new(client.clone(), config.co2_url.clone())),
        Arc::new(OisstSource::new(client.clone(), config)),
        Arc::new(GfwForestLossSource::new(client, config)),
    ])
}

/// Fetch every indicator referenced by a live system, concurrently.
///
/// Never fails: a source error becomes `Reading::Unavailable` carrying the
/// error chain, and an indicator with no registered source is unavailable too.
pub async fn collect_readings(
    sources: &[Arc<dyn MeasurementSource>],
    systems: &[SystemConfig],
) -> Readings {
    let wanted: Vec<IndicatorKind> = IndicatorKind::ALL
        .into_iter()
        .filter(|kind| systems.iter().any(|s| s.indicator() == Some(*kind)))
        .collect();

    let fetches = wanted.into_iter().map(|kind| async move {
        let Some(source) = sources.iter().find(|s| s.indicator() == kind) else {
            warn!(indicator = kind.label(), "No measurement source registered");
            return (kind, Reading::Unavailable("no source registered".to_string()));
        };

        let reading = match source.fetch().await {
            Ok(value) if value.is_finite() => {
                debug!(indicator = kind.label(), value, unit = kind.unit(), "Reading collected");
                Reading::Available(value)
            }
            Ok(value) => Reading::Unavailable(format!("source returned non-finite value {value}")),
            Err(e) => {
                warn!(indicator = kind.label(), error = %format!("{e:#}"), "Indicator unavailable");
                Reading::Unavailable(format!("{e:#}"))
            }
        };
        (kind, reading)
    });

    let readings: Readings = join_all(fetches).await.into_iter().collect();
    info!(indicators = readings.len(), "Collected live readings");
    readings
}
