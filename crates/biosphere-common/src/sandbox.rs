use reqwest::{Client, ClientBuilder};
use std::collections::HashSet;
use std::time::Duration;
use tracing::warn;
use url::Url;
use crate::error::BiosphereError;

/// Upstream hosts the indicator sources are allowed to reach.
pub const DEFAULT_ALLOWLIST: &[&str] = &[
    "gml.noaa.gov",                    // NOAA GML CO₂ trends
    "coastwatch.pfeg.noaa.gov",        // NOAA CoastWatch ERDDAP (OISST)
    "data-api.globalforestwatch.org",  // Global Forest Watch data API
    "localhost",
    "127.0.0.1",
];

/// An HTTP client that only allows requests to approved domains.
#[derive(Debug, Clone)]
pub struct SandboxClient {
    client: Client,
    allowlist: HashSet<String>,
}

impl SandboxClient {
    /// Creates a client with the default allowlist and a 30 s timeout.
    pub fn new() -> Result<Self, BiosphereError> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, BiosphereError> {
        let allowlist = DEFAULT_ALLOWLIST.iter().map(|d| d.to_string()).collect();

        let client = ClientBuilder::new()
            .timeout(timeout)
            .user_agent(concat!("biosphere/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, allowlist })
    }

    /// Validates if a URL is permitted under the current allowlist.
    pub fn is_allowed(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        self.allowlist
            .iter()
            .any(|allowed| host == allowed || host.ends_with(&format!(".{}", allowed)))
    }

    /// GET builder for an allowlisted URL.
    pub fn get(&self, url: &str) -> Result<reqwest::RequestBuilder, BiosphereError> {
        if !self.is_allowed(url) {
            warn!(%url, "Blocked request to host outside the allowlist");
            return Err(BiosphereError::SecurityError(format!(
                "domain not in allowlist for URL {}",
                url
            )));
        }

        Ok(self.client.get(url))
    }
}
