//! NOAA GML Mauna Loa monthly mean CO₂.
//!
//! The CSV starts with a `#` comment block, then a header row, then one row per
//! month: year, month, decimal date, average, deseasonalized, ndays, sdev, unc.
//! Unfilled months carry -99.99 in the average column.

use anyhow::{bail, Context};
use async_trait::async_trait;
use biosphere_common::SandboxClient;
use biosphere_config::IndicatorKind;
use tracing::{debug, instrument};

use super::MeasurementSource;

const AVERAGE_COLUMN: usize = 3;

pub struct NoaaCo2Source {
    client: SandboxClient,
    url: String,
}

impl NoaaCo2Source {
    pub fn new(client: SandboxClient, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }
}

#[async_trait]
impl MeasurementSource for NoaaCo2Source {
    fn indicator(&self) -> IndicatorKind {
        IndicatorKind::Co2
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> anyhow::Result<f64> {
        let resp = self.client.get(&self.url)?.send().await?;

        let status = resp.status();
        if !status.is_success() {
            bail!("NOAA CO₂ feed returned HTTP {}", status);
        }

        let body = resp.text().await.context("Failed to read NOAA CO₂ response")?;
        let ppm = parse_latest_co2(&body)?;
        debug!(ppm, url = %self.url, "Latest monthly CO₂");
        Ok(ppm)
    }
}

/// Latest usable monthly average (ppm) from the NOAA CSV.
pub fn parse_latest_co2(body: &str) -> anyhow::Result<f64> {
    let data: String = body
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let mut latest = None;
    for record in reader.records() {
        let record = record.context("Malformed row in NOAA CO₂ CSV")?;
        // Header row and -99.99 placeholders fall through here.
        if let Some(avg) = record
            .get(AVERAGE_COLUMN)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| *v > 0.0)
        {
            latest = Some(avg);
        }
    }

    latest.context("NOAA CO₂ CSV contained no monthly average")
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosphere_test_utils::fixtures::{CO2_CSV, CO2_CSV_TRAILING_MISSING};

    #[test]
    fn test_parse_latest() {
        assert_eq!(parse_latest_co2(CO2_CSV).unwrap(), 426.57);
    }

    #[test]
    fn test_skips_missing_marker() {
        assert_eq!(parse_latest_co2(CO2_CSV_TRAILING_MISSING).unwrap(), 425.38);
    }

    #[test]
    fn test_comment_only_body_fails() {
        assert!(parse_latest_co2("# nothing\n# here\n").is_err());
        assert!(parse_latest_co2("").is_err());
    }
}
