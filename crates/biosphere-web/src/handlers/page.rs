//! Shared page chrome and report widgets.

use biosphere_common::UnavailableIndicator;
use biosphere_score::ScoreReport;

/// Navigation bar shared across all pages
pub const NAV_HTML: &str = r#"<nav class="nav">
    <a class="brand" href="/">🌍 Biosphere Control Panel</a>
    <a href="/">Live score</a>
    <a href="/simulate">Simulation</a>
    <a href="/api/config">Config</a>
</nav>"#;

const STYLE: &str = r#"
    body { font-family: system-ui, sans-serif; margin: 0; background: #0f172a; color: #e2e8f0; }
    .nav { display: flex; gap: 1.5rem; padding: 1rem 2rem; background: #111827; border-bottom: 1px solid #1f2937; }
    .nav a { color: #94a3b8; text-decoration: none; }
    .nav .brand { color: #e2e8f0; font-weight: 700; }
    main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
    .metric { font-size: 3rem; font-weight: 800; }
    .metric small { font-size: 1.25rem; color: #94a3b8; }
    .progress-track { background: #1f2937; border-radius: 6px; height: 10px; margin: 1rem 0 2rem; }
    .progress-bar { height: 10px; border-radius: 6px; }
    .bg-success { background: #22c55e; } .bg-warning { background: #eab308; } .bg-danger { background: #ef4444; }
    table { width: 100%; border-collapse: collapse; }
    th, td { text-align: left; padding: .5rem .75rem; border-bottom: 1px solid #1f2937; }
    td.num { text-align: right; font-variant-numeric: tabular-nums; }
    .alert { padding: .75rem 1rem; border-radius: 8px; margin-bottom: .75rem; }
    .alert-danger { background: #450a0a; border: 1px solid #7f1d1d; }
    .slider { display: grid; grid-template-columns: 14rem 1fr 4rem; gap: 1rem; align-items: center; margin-bottom: .5rem; }
"#;

/// Full HTML document around `body`.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{} — Biosphere</title>
    <style>{}</style>
</head>
<body>
{}
<main>
{}
</main>
</body>
</html>"#,
        escape(title),
        STYLE,
        NAV_HTML,
        body
    )
}

/// Headline score with a progress bar.
pub fn score_metric(label: &str, report: &ScoreReport) -> String {
    let score = report.total_score;
    let bar_class = if score >= 70.0 {
        "bg-success"
    } else if score >= 40.0 {
        "bg-warning"
    } else {
        "bg-danger"
    };
    format!(
        r#"<div class="metric-label">🌐 {}</div>
<div class="metric" id="score">{:.1} <small>/ 100</small></div>
<div class="progress-track"><div class="progress-bar {}" style="width:{:.1}%"></div></div>"#,
        escape(label),
        score,
        bar_class,
        score.clamp(0.0, 100.0)
    )
}

/// System breakdown table: System, Threat Level, Subscore, Weighted Score.
pub fn breakdown_table(report: &ScoreReport) -> String {
    let rows: String = report
        .rows
        .iter()
        .map(|row| {
            format!(
                r#"
    <tr><td>{}</td><td class="num">{:.2}</td><td class="num">{:.1}</td><td class="num">{:.2}</td></tr>"#,
                escape(&row.system),
                row.threat_level.value(),
                row.subscore,
                row.weighted_score
            )
        })
        .collect();

    format!(
        r#"<h3>🔍 System Breakdown</h3>
<table>
    <thead><tr><th>System</th><th>Threat Level</th><th>Subscore</th><th>Weighted Score</th></tr></thead>
    <tbody>{}
    </tbody>
</table>"#,
        rows
    )
}

/// One alert per indicator that kept the run from scoring.
pub fn unavailable_alerts(missing: &[UnavailableIndicator]) -> String {
    missing
        .iter()
        .map(|m| {
            format!(
                r#"<div class="alert alert-danger">⚠️ Failed to fetch {} for {}: {}</div>
"#,
                escape(&m.indicator),
                escape(&m.system),
                escape(&m.reason)
            )
        })
        .collect()
}

pub fn error_alert(message: &str) -> String {
    format!(r#"<div class="alert alert-danger">⚠️ {}</div>"#, escape(message))
}

pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use biosphere_score::{aggregate, SystemRow, ThreatLevel};

    #[test]
    fn test_escape() {
        assert_eq!(escape("Forests & Biodiversity"), "Forests &amp; Biodiversity");
        assert_eq!(escape("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
    }

    #[test]
    fn test_breakdown_table_lists_rows_in_order() {
        let report = aggregate(&[
            SystemRow::new("Oceans", ThreatLevel::new(0.62).unwrap(), 0.5),
            SystemRow::new("Atmosphere", ThreatLevel::new(0.53).unwrap(), 0.5),
        ])
        .unwrap();
        let html = breakdown_table(&report);
        let oceans = html.find("Oceans").unwrap();
        let atmosphere = html.find("Atmosphere").unwrap();
        assert!(oceans < atmosphere);
        assert!(html.contains("0.62"));
        assert!(html.contains("38.0"));
    }

    #[test]
    fn test_unavailable_alerts_one_per_indicator() {
        let html = unavailable_alerts(&[
            UnavailableIndicator {
                system: "Atmosphere".to_string(),
                indicator: "Atmospheric CO₂".to_string(),
                reason: "NOAA CO₂ feed returned HTTP 503".to_string(),
            },
            UnavailableIndicator {
                system: "Forests & Biodiversity".to_string(),
                indicator: "Forest loss".to_string(),
                reason: "no GFW API key configured".to_string(),
            },
        ]);
        assert_eq!(html.matches("alert-danger").count(), 2);
        assert!(html.contains("Failed to fetch Forest loss for Forests &amp; Biodiversity"));
    }
}
