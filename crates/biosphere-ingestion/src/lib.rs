//! biosphere-ingestion: Live indicator retrieval.
//!
//! One `MeasurementSource` per physical indicator, all going through the
//! allowlisted `SandboxClient`. `collect_readings` fans the fetches out
//! concurrently and turns every failure into an explicit unavailable reading.

pub mod sources;
pub mod collect;

pub use collect::{build_sources, collect_readings};
pub use sources::MeasurementSource;
