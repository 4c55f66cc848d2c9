// tests/ingest_json.rs
use review_analyzer::{load_reviews, AnalysisConfig, JsonFileSource, ReviewAnalyzer};

#[tokio::test]
async fn fixture_loads_and_validates() {
    let source = JsonFileSource::new("tests/fixtures/reviews.json");
    let reviews = load_reviews(&source, "com.example.app").await.unwrap();

    assert_eq!(reviews.len(), 4);
    assert!(reviews.iter().all(|r| r.app_id == "com.example.app"));
    assert_eq!(reviews[0].id, "gp:001");
    assert_eq!(reviews[0].rating, Some(1));
    assert!(reviews[0].timestamp.is_some());
    assert!(reviews[1].timestamp.is_some());

    // nulls become empty values, out-of-range scores are dropped
    let blank = &reviews[2];
    assert_eq!(blank.author, "");
    assert_eq!(blank.raw_text, "");
    assert_eq!(blank.rating, None);
    assert!(blank.timestamp.is_some());
    assert_eq!(reviews[3].rating, None);
}

#[tokio::test]
async fn fixture_runs_through_full_report() {
    let source = JsonFileSource::new("tests/fixtures/reviews.json");
    let reviews = load_reviews(&source, "app").await.unwrap();
    let report = ReviewAnalyzer::from_config(&AnalysisConfig::default())
        .analyze(&reviews, false)
        .await;

    assert_eq!(report.reviews.len(), 4);
    assert_eq!(report.reviews[2].sentiment_score, 0.0);
    let perf = report.aspects.get("performance").unwrap();
    assert_eq!(perf.total, 2);
    assert!(report.tfidf.is_success());
    let analysis = report.tfidf.analysis().unwrap();
    assert_eq!(analysis.corpus_stats.num_documents, 3);
    assert!(analysis.term("lambat").is_some());
}

#[tokio::test]
async fn unreadable_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "not json").unwrap();
    assert!(load_reviews(&JsonFileSource::new(&bad), "x").await.is_err());
    assert!(load_reviews(&JsonFileSource::new(dir.path().join("missing.json")), "x")
        .await
        .is_err());
}
