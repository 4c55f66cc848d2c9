// tests/metrics_exposition.rs
use metrics_exporter_prometheus::PrometheusBuilder;
use review_analyzer::{AnalysisConfig, Review, ReviewAnalyzer};

#[tokio::test]
async fn metrics_exposed_after_analysis() {
    // Process-wide recorder; keep this the only test in the file.
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("recorder");

    let analyzer = ReviewAnalyzer::from_config(&AnalysisConfig::default());
    let reviews = [
        Review::with_text("1", "Aplikasi lambat, iklan banyak"),
        Review::with_text("2", "Tampilan bagus, tapi lambat"),
    ];
    let _ = analyzer.analyze(&reviews, false).await;

    let out = handle.render();
    for needle in [
        "preprocess_reviews_total",
        "preprocess_batch_ms",
        "aspects_matched_total",
        "tfidf_runs_total",
    ] {
        assert!(out.contains(needle), "missing {needle} in:\n{out}");
    }
    assert!(out.contains(r#"status="success""#));
}
