//! Sources exercised against a local stand-in for each upstream service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::RawQuery;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use biosphere_common::SandboxClient;
use biosphere_config::SourcesConfig;
use biosphere_ingestion::sources::{GfwForestLossSource, NoaaCo2Source, OisstSource};
use biosphere_ingestion::MeasurementSource;
use biosphere_test_utils::fixtures::{CO2_CSV, GFW_JSON, SST_CSV, SST_CSV_MEAN};
use chrono::NaiveDate;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// ERDDAP stand-in that only has a grid for `available_date`.
async fn spawn_erddap(available_date: &'static str) -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/erddap/griddap/{file}",
        get(move |RawQuery(query): RawQuery| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                match query {
                    Some(q) if q.contains(available_date) => (StatusCode::OK, SST_CSV).into_response(),
                    _ => (
                        StatusCode::NOT_FOUND,
                        "Error { code=404; message=\"Not Found: Your query produced no matching results.\"; }",
                    )
                        .into_response(),
                }
            }
        }),
    );
    let base = serve(app).await;
    (format!("{base}/erddap"), hits)
}

fn sst_config(base_url: String, max_attempts: u32) -> SourcesConfig {
    SourcesConfig {
        sst_base_url: base_url,
        sst_lag_days: 2,
        sst_max_attempts: max_attempts,
        ..SourcesConfig::default()
    }
}

fn may_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

#[tokio::test]
async fn sst_walks_back_to_latest_available_day() {
    let (base, hits) = spawn_erddap("2024-04-27").await;
    let source = OisstSource::new(SandboxClient::new().unwrap(), &sst_config(base, 5));

    let mean = source.fetch_latest(may_first()).await.unwrap();

    assert_eq!(mean, SST_CSV_MEAN);
    // 04-29, 04-28, 04-27
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn sst_gives_up_after_max_attempts() {
    let (base, hits) = spawn_erddap("2024-04-01").await;
    let source = OisstSource::new(SandboxClient::new().unwrap(), &sst_config(base, 4));

    let err = source.fetch_latest(may_first()).await.unwrap_err();

    assert_eq!(hits.load(Ordering::SeqCst), 4);
    let msg = format!("{err:#}");
    assert!(msg.contains("no SST grid in the last 4 days"), "{msg}");
    assert!(msg.contains("404"), "{msg}");
}

#[tokio::test]
async fn co2_reads_latest_month() {
    let app = Router::new().route("/co2_mm_mlo.csv", get(|| async { CO2_CSV }));
    let base = serve(app).await;

    let source = NoaaCo2Source::new(SandboxClient::new().unwrap(), format!("{base}/co2_mm_mlo.csv"));
    assert_eq!(source.fetch().await.unwrap(), 426.57);
}

#[tokio::test]
async fn co2_server_error_is_reported() {
    let app = Router::new().route(
        "/co2_mm_mlo.csv",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base = serve(app).await;

    let source = NoaaCo2Source::new(SandboxClient::new().unwrap(), format!("{base}/co2_mm_mlo.csv"));
    let err = source.fetch().await.unwrap_err();
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn gfw_sends_key_and_sql() {
    let app = Router::new().route(
        "/dataset/umd_tree_cover_loss/latest/query/json",
        get(|headers: HeaderMap, RawQuery(query): RawQuery| async move {
            let key_ok = headers.get("x-api-key").and_then(|v| v.to_str().ok()) == Some("test-key");
            let sql_ok = query.is_some_and(|q| q.contains("umd_tree_cover_loss__year") && q.contains("2022"));
            if key_ok && sql_ok {
                (StatusCode::OK, GFW_JSON).into_response()
            } else {
                (StatusCode::FORBIDDEN, r#"{"status":"failed","message":"Unauthorized"}"#).into_response()
            }
        }),
    );
    let base = serve(app).await;

    let config = SourcesConfig {
        gfw_base_url: base.clone(),
        gfw_api_key: Some("test-key".to_string()),
        forest_loss_year: Some(2022),
        ..SourcesConfig::default()
    };
    let source = GfwForestLossSource::new(SandboxClient::new().unwrap(), &config);
    assert_eq!(source.fetch().await.unwrap(), 812345.6);

    let wrong_key = SourcesConfig {
        gfw_base_url: base,
        gfw_api_key: Some("other".to_string()),
        forest_loss_year: Some(2022),
        ..SourcesConfig::default()
    };
    let source = GfwForestLossSource::new(SandboxClient::new().unwrap(), &wrong_key);
    let err = source.fetch().await.unwrap_err();
    assert!(err.to_string().contains("403"));
    assert!(err.to_string().contains("Unauthorized"));
}
