//! Global Forest Watch data API: annual tree-cover loss in hectares.

use anyhow::{bail, Context};
use async_trait::async_trait;
use biosphere_common::SandboxClient;
use biosphere_config::{IndicatorKind, SourcesConfig};
use chrono::{Datelike, Utc};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, instrument};

use super::MeasurementSource;

pub struct GfwForestLossSource {
    client: SandboxClient,
    base_url: String,
    dataset: String,
    api_key: Option<SecretString>,
    year: Option<i32>,
}

impl GfwForestLossSource {
    pub fn new(client: SandboxClient, config: &SourcesConfig) -> Self {
        Self {
            client,
            base_url: config.gfw_base_url.trim_end_matches('/').to_string(),
            dataset: config.gfw_dataset.clone(),
            api_key: config.gfw_api_key.clone().map(SecretString::from),
            year: config.forest_loss_year,
        }
    }

    /// Configured loss year, or the previous calendar year.
    pub fn loss_year(&self) -> i32 {
        self.year.unwrap_or_else(|| Utc::now().year() - 1)
    }

    pub fn query_url(&self) -> String {
        format!("{}/dataset/{}/latest/query/json", self.base_url, self.dataset)
    }

    pub fn query_sql(&self) -> String {
        format!(
            "SELECT SUM(area__ha) FROM data WHERE umd_tree_cover_loss__year = {}",
            self.loss_year()
        )
    }
}

#[async_trait]
impl MeasurementSource for GfwForestLossSource {
    fn indicator(&self) -> IndicatorKind {
        IndicatorKind::ForestLoss
    }

    #[instrument(skip(self))]
    async fn fetch(&self) -> anyhow::Result<f64> {
        let Some(api_key) = &self.api_key else {
            bail!("no GFW API key configured (set sources.gfw_api_key or BIOSPHERE_GFW_API_KEY)");
        };

        let resp = self
            .client
            .get(&self.query_url())?
            .header("x-api-key", api_key.expose_secret())
            .query(&[("sql", self.query_sql())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("GFW returned HTTP {}: {}", status, body.trim());
        }

        let body: serde_json::Value = resp.json().await.context("GFW response was not JSON")?;
        let hectares = parse_gfw_loss(&body)?;
        debug!(hectares, year = self.loss_year(), "Annual tree-cover loss");
        Ok(hectares)
    }
}

/// First numeric field of the first row in a GFW query response.
pub fn parse_gfw_loss(body: &serde_json::Value) -> anyhow::Result<f64> {
    let row = body["data"]
        .as_array()
        .and_then(|rows| rows.first())
        .and_then(|row| row.as_object())
        .context("GFW response has no data rows")?;

    row.values()
        .find_map(serde_json::Value::as_f64)
        .context("GFW response row has no numeric value")
}
