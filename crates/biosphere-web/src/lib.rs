//! biosphere-web: Dashboard and JSON API for the biosphere score.
//!   - Live dashboard scored from the NOAA and GFW feeds
//!   - Simulation mode with manually chosen threat levels
//!   - JSON endpoints for both, plus the active system configuration

pub mod router;
pub mod handlers;
pub mod state;
pub mod error;
