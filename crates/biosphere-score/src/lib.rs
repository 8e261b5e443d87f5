//! biosphere-score: Indicator normalisation and weighted biosphere scoring.
//!
//! `normalise` turns raw measurements into threat levels, `aggregate` folds
//! weighted system rows into a 0–100 report. `run` and `simulation` build the
//! rows from configuration for live and manual scoring respectively.

pub mod threat;
pub mod normalise;
pub mod aggregate;
pub mod readings;
pub mod run;
pub mod simulation;

pub use aggregate::{aggregate, ScoreReport, ScoredRow, SystemRow};
pub use normalise::normalize;
pub use readings::{Reading, Readings};
pub use run::score_live;
pub use simulation::{simulate, SimulationOverrides};
pub use threat::ThreatLevel;
