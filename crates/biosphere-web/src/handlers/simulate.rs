//! Simulation mode: Manually adjusted threat levels, same formula.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use biosphere_config::SystemConfig;
use biosphere_score::{simulate, ScoreReport, SimulationOverrides};

use crate::handlers::page::{breakdown_table, error_alert, escape, layout, score_metric};
use crate::state::SharedState;

/// GET /simulate?atmosphere=0.72&oceans=0.6&…
pub async fn simulate_page(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, f64>>,
) -> (StatusCode, Html<String>) {
    let systems = &state.config.systems;
    let overrides = SimulationOverrides(params);

    let (status, content) = match simulate(systems, &overrides) {
        Ok(report) => (
            StatusCode::OK,
            format!(
                "{}\n{}\n{}",
                score_metric("Biosphere Score", &report),
                controls(systems, &report),
                breakdown_table(&report)
            ),
        ),
        Err(e) => (StatusCode::BAD_REQUEST, error_alert(&e.to_string())),
    };

    let body = format!(
        r#"<h1>Simulation Mode</h1>
<p><strong>Manually adjust planetary system conditions to forecast biosphere stability.</strong>
0 = no threat, 1 = collapse-level threat.</p>
{}"#,
        content
    );

    (status, Html(layout("Simulation", &body)))
}

/// One range input per system, prefilled with the level just scored.
fn controls(systems: &[SystemConfig], report: &ScoreReport) -> String {
    let inputs: String = systems
        .iter()
        .zip(&report.rows)
        .map(|(system, row)| {
            let slug = system.slug();
            let level = row.threat_level.value();
            format!(
                r#"
    <label class="slider" for="{slug}">
        <span>{}</span>
        <input type="range" id="{slug}" name="{slug}" min="0" max="1" step="0.01" value="{level:.2}"
               oninput="this.nextElementSibling.value = Number(this.value).toFixed(2)">
        <output>{level:.2}</output>
    </label>"#,
                escape(&system.name),
            )
        })
        .collect();

    format!(
        r#"<h3>Adjust Simulation Parameters</h3>
<form method="get" action="/simulate">{}
    <button type="submit">Recalculate</button>
</form>"#,
        inputs
    )
}
