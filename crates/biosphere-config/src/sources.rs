//! Web server and upstream data source settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16    { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Endpoints and retrieval knobs for the live indicator sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Per-request HTTP timeout
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,

    /// NOAA GML Mauna Loa monthly mean CO₂ CSV
    #[serde(default = "default_co2_url")]
    pub co2_url: String,

    /// ERDDAP server hosting the OISST v2.1 daily grid
    #[serde(default = "default_sst_base_url")]
    pub sst_base_url: String,
    #[serde(default = "default_sst_dataset")]
    pub sst_dataset: String,
    /// Grid stride; the native grid is 0.25°
    #[serde(default = "default_sst_stride")]
    pub sst_stride: u32,
    /// Days behind today the newest grid is expected
    #[serde(default = "default_sst_lag_days")]
    pub sst_lag_days: u32,
    /// How many consecutive earlier dates to try
    #[serde(default = "default_sst_max_attempts")]
    pub sst_max_attempts: u32,

    /// Global Forest Watch data API
    #[serde(default = "default_gfw_base_url")]
    pub gfw_base_url: String,
    #[serde(default = "default_gfw_dataset")]
    pub gfw_dataset: String,
    /// Falls back to `BIOSPHERE_GFW_API_KEY`; never written back out
    #[serde(default, skip_serializing)]
    pub gfw_api_key: Option<String>,
    /// Loss year to query; defaults to the previous calendar year
    #[serde(default)]
    pub forest_loss_year: Option<i32>,
}

/// Upper bound for both the SST lag and the number of dates walked back.
pub const MAX_SST_LOOKBACK_DAYS: u32 = 30;

fn default_timeout()          -> u64    { 30 }
fn default_co2_url()          -> String { "https://gml.noaa.gov/webdata/ccgg/trends/co2/co2_mm_mlo.csv".to_string() }
fn default_sst_base_url()     -> String { "https://coastwatch.pfeg.noaa.gov/erddap".to_string() }
fn default_sst_dataset()      -> String { "ncdcOisst21Agg_LonPM180".to_string() }
fn default_sst_stride()       -> u32    { 20 }
fn default_sst_lag_days()     -> u32    { 2 }
fn default_sst_max_attempts() -> u32    { 5 }
fn default_gfw_base_url()     -> String { "https://data-api.globalforestwatch.org".to_string() }
fn default_gfw_dataset()      -> String { "umd_tree_cover_loss".to_string() }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout(),
            co2_url: default_co2_url(),
            sst_base_url: default_sst_base_url(),
            sst_dataset: default_sst_dataset(),
            sst_stride: default_sst_stride(),
            sst_lag_days: default_sst_lag_days(),
            sst_max_attempts: default_sst_max_attempts(),
            gfw_base_url: default_gfw_base_url(),
            gfw_dataset: default_gfw_dataset(),
            gfw_api_key: None,
            forest_loss_year: None,
        }
    }
}
