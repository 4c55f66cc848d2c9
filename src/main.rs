//! review-analyzer binary
//! Reads a JSON review export, runs the full analysis and prints the report as JSON.
//!
//! Usage: `review-analyzer <reviews.json> [app_id]`

use anyhow::{bail, Context, Result};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

use review_analyzer::{load_reviews, telemetry, AnalysisConfig, JsonFileSource, ReviewAnalyzer};

const ENV_METRICS: &str = "REVIEW_ANALYZER_METRICS";

fn install_metrics() -> Option<PrometheusHandle> {
    let enabled = std::env::var(ENV_METRICS).ok().is_some_and(|v| v == "1");
    if !enabled {
        return None;
    }
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            telemetry::ensure_metrics_described();
            Some(handle)
        }
        Err(e) => {
            warn!(target: "report", error = %e, "metrics recorder not installed");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: review-analyzer <reviews.json> [app_id]");
    };
    let app_id = args.next().unwrap_or_default();

    let metrics = install_metrics();
    let cfg = AnalysisConfig::load().unwrap_or_else(|e| {
        warn!(target: "config", error = %e, "config not loaded; using built-in defaults");
        AnalysisConfig::default()
    });
    info!(
        target: "config",
        language = ?cfg.language,
        stem_budget_ms = cfg.stemming.timeout_ms,
        "config loaded"
    );

    let source = JsonFileSource::new(&path);
    let reviews = load_reviews(&source, &app_id)
        .await
        .with_context(|| format!("reading reviews from {path}"))?;

    let analyzer = ReviewAnalyzer::from_config(&cfg);
    let report = analyzer.analyze(&reviews, false).await;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(handle) = metrics {
        eprintln!("{}", handle.render());
    }
    Ok(())
}
