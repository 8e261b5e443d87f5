//! NOAA OISST v2.1 daily sea-surface temperature via ERDDAP griddap CSV.
//!
//! New daily grids land a couple of days late and occasionally skip a day, so
//! the source walks back from `today − lag_days` one day at a time for up to
//! `max_attempts` dates. The reading is the mean over ocean cells (land is NaN).

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use biosphere_common::SandboxClient;
use biosphere_config::{IndicatorKind, SourcesConfig};
use chrono::{Days, NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

use super::MeasurementSource;

pub struct OisstSource {
    client: SandboxClient,
    base_url: String,
    dataset: String,
    stride: u32,
    lag_days: u32,
    max_attempts: u32,
}

impl OisstSource {
    pub fn new(client: SandboxClient, config: &SourcesConfig) -> Self {
        Self {
            client,
            base_url: config.sst_base_url.trim_end_matches('/').to_string(),
            dataset: config.sst_dataset.clone(),
            stride: config.sst_stride.max(1),
            lag_days: config.sst_lag_days,
            max_attempts: config.sst_max_attempts.max(1),
        }
    }

    /// Griddap CSV request for one day's field on a strided global grid.
    pub fn grid_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/griddap/{}.csv?sst[({}T12:00:00Z)][(0.0)][(-89.875):{stride}:(89.875)][(-179.875):{stride}:(179.875)]",
            self.base_url,
            self.dataset,
            date.format("%Y-%m-%d"),
            stride = self.stride,
        )
    }

    /// Walk back from `today − lag_days` until a date yields a usable grid.
    pub async fn fetch_latest(&self, today: NaiveDate) -> anyhow::Result<f64> {
        let mut last_error = None;

        for days_ago in 0..self.max_attempts {
            let date = self
                .lag_days
                .checked_add(days_ago)
                .and_then(|back| today.checked_sub_days(Days::new(u64::from(back))))
                .with_context(|| format!("SST date {} days before {today} is out of range", self.lag_days))?;
            match self.fetch_day(date).await {
                Ok(mean) => {
                    info!(%date, sst_celsius = mean, "Fetched sea-surface temperature");
                    return Ok(mean);
                }
                Err(e) => {
                    debug!(%date, error = %e, "No usable SST grid, trying previous day");
                    last_error = Some(e);
                }
            }
        }

        let last = last_error.unwrap_or_else(|| anyhow!("no dates attempted"));
        warn!(attempts = self.max_attempts, error = %last, "No recent SST grid available");
        Err(last.context(format!(
            "no SST grid in the last {} days",
            self.max_attempts
        )))
    }

    #[instrument(skip(self))]
    async fn fetch_day(&self, date: NaiveDate) -> anyhow::Result<f64> {
        let url = self.grid_url(date);
        let resp = self.client.get(&url)?.send().await?;

        let status = resp.status();
        if !status.is_success() {
            bail!("ERDDAP returned HTTP {} for {}", status, date);
        }

        let body = resp.text().await.context("Failed to read ERDDAP response")?;
        parse_sst_mean(&body)
    }
}

#[async_trait]
impl MeasurementSource for OisstSource {
    fn indicator(&self) -> IndicatorKind {
        IndicatorKind::SeaSurfaceTemperature
    }

    async fn fetch(&self) -> anyhow::Result<f64> {
        self.fetch_latest(Utc::now().date_naive()).await
    }
}

/// Mean of the finite `sst` cells in an ERDDAP CSV, °C, rounded to 2 decimals.
pub fn parse_sst_mean(body: &str) -> anyhow::Result<f64> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let column = reader
        .headers()
        .context("ERDDAP CSV has no header row")?
        .iter()
        .position(|h| h == "sst")
        .context("ERDDAP CSV has no sst column")?;

    let mut sum = 0.0;
    let mut cells = 0usize;
    for record in reader.records() {
        let record = record.context("Malformed row in ERDDAP CSV")?;
        // The units row ("degree_C") and land cells ("NaN") are skipped.
        if let Some(v) = record
            .get(column)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
        {
            sum += v;
            cells += 1;
        }
    }

    if cells == 0 {
        bail!("ERDDAP grid contained no ocean cells");
    }

    let mean = sum / cells as f64;
    Ok(format!("{mean:.2}").parse().unwrap_or(mean))
}
