//! Dashboard handler: Live biosphere score.

use axum::{extract::State, http::StatusCode, response::Html};
use biosphere_common::BiosphereError;
use biosphere_ingestion::collect_readings;
use biosphere_score::score_live;
use tracing::error;

use crate::handlers::page::{breakdown_table, error_alert, layout, score_metric, unavailable_alerts};
use crate::state::SharedState;

/// GET /: Fetch every live indicator, score, render.
///
/// If any live indicator is unavailable no score is shown; each failing
/// indicator gets its own message instead.
pub async fn dashboard(State(state): State<SharedState>) -> (StatusCode, Html<String>) {
    let systems = &state.config.systems;
    let readings = collect_readings(&state.sources, systems).await;

    let (status, content) = match score_live(systems, &readings) {
        Ok(report) => (
            StatusCode::OK,
            format!("{}\n{}", score_metric("Global Biosphere Score", &report), breakdown_table(&report)),
        ),
        Err(BiosphereError::DataUnavailable(missing)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            format!(
                "<p>No score this run: live data is missing.</p>\n{}",
                unavailable_alerts(&missing)
            ),
        ),
        Err(e) => {
            error!(error = %e, "Live scoring failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error_alert(&e.to_string()))
        }
    };

    let body = format!(
        r#"<h1>Biosphere Score</h1>
<p><strong>Planetary health index based on key environmental systems.</strong></p>
{}"#,
        content
    );

    (status, Html(layout("Live score", &body)))
}
