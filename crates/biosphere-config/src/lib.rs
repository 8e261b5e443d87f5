//! biosphere-config: Configuration for the biosphere score.
//!
//! Reads `biosphere.toml` (or the path in `BIOSPHERE_CONFIG`) and validates the
//! system set once at load time. Every field has a default, so a missing file
//! yields the standard six-system configuration.

pub mod systems;
pub mod sources;
pub mod loader;

pub use loader::BiosphereConfig;
pub use sources::{ServerConfig, SourcesConfig, MAX_SST_LOOKBACK_DAYS};
pub use systems::{default_systems, IndicatorKind, SystemConfig, ThreatSource, WEIGHT_SUM_TOLERANCE};
