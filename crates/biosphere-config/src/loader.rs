//! Configuration loading for Biosphere.
//! Reads biosphere.toml from the current directory or the path in BIOSPHERE_CONFIG.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::sources::{ServerConfig, SourcesConfig, MAX_SST_LOOKBACK_DAYS};
use crate::systems::{default_systems, validate_systems, SystemConfig};

const CONFIG_ENV: &str = "BIOSPHERE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "biosphere.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiosphereConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default = "default_systems")]
    pub systems: Vec<SystemConfig>,
}

impl Default for BiosphereConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            sources: SourcesConfig::default(),
            systems: default_systems(),
        }
    }
}

impl BiosphereConfig {
    /// Load, apply environment overrides and validate.
    ///
    /// An explicit `BIOSPHERE_CONFIG` path must exist; a missing `biosphere.toml`
    /// in the working directory just means defaults.
    pub fn load() -> anyhow::Result<Self> {
        // Best-effort .env load; ignore if missing
        let _ = dotenvy::dotenv();

        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                if !Path::new(&path).exists() {
                    bail!("Config file not found: {} (from {})", path, CONFIG_ENV);
                }
                Self::from_path(&path)?
            }
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_path(DEFAULT_CONFIG_FILE)?,
            Err(_) => {
                info!("No {} found, using the default system set", DEFAULT_CONFIG_FILE);
                Self::default()
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a config file, choosing the format by extension (TOML unless .yaml/.yml/.json).
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");
        let config: Self = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Invalid YAML in {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {}", path.display()))?,
            _ => toml::from_str(&content)
                .with_context(|| format!("Invalid TOML in {}", path.display()))?,
        };

        debug!(path = %path.display(), systems = config.systems.len(), "Loaded config file");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `BIOSPHERE_HOST`, `BIOSPHERE_PORT` and `BIOSPHERE_GFW_API_KEY`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(host) = lookup("BIOSPHERE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("BIOSPHERE_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("invalid BIOSPHERE_PORT: {port}"))?;
        }
        if let Some(key) = lookup("BIOSPHERE_GFW_API_KEY").filter(|k| !k.is_empty()) {
            self.sources.gfw_api_key = Some(key);
        }
        Ok(())
    }

    /// Enforce every configuration invariant. Called once at load time; the
    /// scoring core does not re-check weights on each run.
    pub fn validate(&self) -> biosphere_common::Result<()> {
        validate_systems(&self.systems)?;

        if self.sources.sst_max_attempts == 0 {
            return Err(biosphere_common::BiosphereError::InvalidConfiguration(
                "sources.sst_max_attempts must be at least 1".to_string(),
            ));
        }
        if self.sources.sst_lag_days > MAX_SST_LOOKBACK_DAYS
            || self.sources.sst_max_attempts > MAX_SST_LOOKBACK_DAYS
        {
            return Err(biosphere_common::BiosphereError::InvalidConfiguration(format!(
                "sources.sst_lag_days and sources.sst_max_attempts must each be at most {}",
                MAX_SST_LOOKBACK_DAYS
            )));
        }
        if self.sources.request_timeout_secs == 0 {
            return Err(biosphere_common::BiosphereError::InvalidConfiguration(
                "sources.request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::{IndicatorKind, ThreatSource};
    use biosphere_test_utils::fixtures::SAMPLE_CONFIG_TOML;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = BiosphereConfig::from_toml_str("").unwrap();
        assert_eq!(config.systems, default_systems());
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.sources.sst_max_attempts, 5);
        config.validate().unwrap();
    }

    #[test]
    fn test_sample_config_parses() {
        let config = BiosphereConfig::from_toml_str(SAMPLE_CONFIG_TOML).unwrap();
        config.validate().unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.systems.len(), 6);

        // Oceans toggled to its fixed placeholder
        assert_eq!(config.systems[1].name, "Oceans");
        assert_eq!(config.systems[1].threat, ThreatSource::Fixed { level: 0.62 });

        assert_eq!(
            config.systems[0].threat,
            ThreatSource::Live { indicator: IndicatorKind::Co2, low: 350.0, high: 450.0 }
        );
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("BIOSPHERE_HOST", "0.0.0.0"),
            ("BIOSPHERE_PORT", "9000"),
            ("BIOSPHERE_GFW_API_KEY", "abc123"),
        ]
        .into_iter()
        .collect();

        let mut config = BiosphereConfig::default();
        config
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.sources.gfw_api_key.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_bad_port_override_fails() {
        let mut config = BiosphereConfig::default();
        let result = config.apply_overrides(|k| (k == "BIOSPHERE_PORT").then(|| "eighty".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_sst_attempts_rejected() {
        let mut config = BiosphereConfig::default();
        config.sources.sst_max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_huge_sst_lookback_rejected() {
        let mut config = BiosphereConfig::default();
        config.sources.sst_lag_days = u32::MAX;
        assert!(matches!(
            config.validate(),
            Err(biosphere_common::BiosphereError::InvalidConfiguration(_))
        ));

        let mut config = BiosphereConfig::default();
        config.sources.sst_max_attempts = MAX_SST_LOOKBACK_DAYS + 1;
        assert!(config.validate().is_err());

        let mut config = BiosphereConfig::default();
        config.sources.sst_lag_days = MAX_SST_LOOKBACK_DAYS;
        config.sources.sst_max_attempts = MAX_SST_LOOKBACK_DAYS;
        config.validate().unwrap();
    }

    #[test]
    fn test_yaml_and_json_files() {
        let dir = std::env::temp_dir().join(format!("biosphere-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let config = BiosphereConfig::default();
        let yaml_path = dir.join("biosphere.yaml");
        std::fs::write(&yaml_path, serde_yaml::to_string(&config).unwrap()).unwrap();
        let json_path = dir.join("biosphere.json");
        std::fs::write(&json_path, serde_json::to_string(&config).unwrap()).unwrap();

        let from_yaml = BiosphereConfig::from_path(&yaml_path).unwrap();
        let from_json = BiosphereConfig::from_path(&json_path).unwrap();
        assert_eq!(from_yaml.systems, config.systems);
        assert_eq!(from_json.systems, config.systems);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = BiosphereConfig::from_path("/definitely/not/here/biosphere.toml");
        assert!(result.is_err());
    }
}
