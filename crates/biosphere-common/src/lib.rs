//! biosphere-common: Shared error types and the allowlisted HTTP client used across all Biosphere crates.

pub mod error;
pub mod sandbox;

pub use error::{BiosphereError, Result, UnavailableIndicator};
pub use sandbox::SandboxClient;
