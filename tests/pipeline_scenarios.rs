// tests/pipeline_scenarios.rs
use review_analyzer::config::Language;
use review_analyzer::{AnalysisConfig, Review, ReviewAnalyzer, SentimentCategory};

fn analyzer() -> ReviewAnalyzer {
    ReviewAnalyzer::from_config(&AnalysisConfig::default())
}

fn english() -> ReviewAnalyzer {
    ReviewAnalyzer::from_config(&AnalysisConfig {
        language: Language::English,
        ..AnalysisConfig::default()
    })
}

/// (processed text, polarity) per input text, in order.
async fn scores(analyzer: &ReviewAnalyzer, texts: &[&str]) -> Vec<(String, f64)> {
    let reviews: Vec<Review> = texts
        .iter()
        .enumerate()
        .map(|(i, t)| Review::with_text(format!("s{i}"), *t))
        .collect();
    analyzer
        .analyze(&reviews, false)
        .await
        .reviews
        .into_iter()
        .map(|r| (r.processed_text, r.sentiment_score))
        .collect()
}

#[tokio::test]
async fn slow_and_crashing_app_is_negative_performance() {
    let reviews = [Review::with_text(
        "r1",
        "Aplikasi ini sangat lambat dan sering crash",
    )];
    let report = analyzer().analyze(&reviews, true).await;
    let r = &report.reviews[0];

    assert_eq!(r.processed_text, "sangat lambat crash");
    assert_eq!(r.sentiment_label, SentimentCategory::Negative);
    // (-0.5 * 1.3 - 0.6) / 2
    assert!((r.sentiment_score - (-0.625)).abs() < 1e-9);

    let pre = r.preprocessing.as_ref().unwrap();
    for gone in ["aplikasi", "ini", "dan", "sering"] {
        assert!(pre.removed_stopwords.iter().any(|w| w == gone), "{gone} kept");
    }

    let tags = &report.aspects.review_aspects;
    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].review_id, "r1");
    let names: Vec<_> = tags[0].aspects.iter().map(|t| t.aspect.as_str()).collect();
    assert_eq!(names, vec!["performance"]);
    let mut kws = tags[0].aspects[0].keywords.clone();
    kws.sort();
    assert_eq!(kws, vec!["crash", "lambat"]);

    let perf = report.aspects.get("performance").unwrap();
    assert_eq!((perf.negative, perf.total), (1, 1));
    assert_eq!(
        report.aspect_summary.most_negative_aspect.as_deref(),
        Some("performance")
    );
}

#[tokio::test]
async fn empty_content_never_errors() {
    let reviews = [Review::with_text("blank", "")];
    let report = analyzer().analyze(&reviews, false).await;
    let r = &report.reviews[0];
    assert_eq!(r.sentiment_score, 0.0);
    assert_eq!(r.sentiment_label, SentimentCategory::Neutral);
    assert!(report.aspects.review_aspects.is_empty());
    assert_eq!(report.aspect_summary.most_mentioned_aspect, None);

    let v = serde_json::to_value(&report.tfidf).unwrap();
    assert_eq!(v["status"], "error");
    assert_eq!(v["message"], "No review texts found for analysis");
}

#[tokio::test]
async fn outputs_stay_index_aligned() {
    let reviews = [
        Review::with_text("a", "Tampilannya bagus sekali, mantap"),
        Review::with_text("b", ""),
        Review::with_text("c", "Iklan terus muncul, jelek"),
        Review::with_text("d", "!!! ??? 123"),
        Review::with_text("e", "Pengiriman cepat"),
    ];
    let report = analyzer().analyze(&reviews, true).await;
    assert_eq!(report.reviews.len(), reviews.len());
    for (out, input) in report.reviews.iter().zip(&reviews) {
        assert_eq!(out.review.id, input.id);
        assert_eq!(out.preprocessing.as_ref().unwrap().original.trim(), input.raw_text.trim());
    }
    assert_eq!(report.reviews[0].sentiment_label, SentimentCategory::Positive);
    assert_eq!(report.reviews[2].sentiment_label, SentimentCategory::Negative);
    assert_eq!(report.reviews[3].processed_text, "");

    let s = &report.sentiment_summary;
    assert_eq!(s.positive_count + s.neutral_count + s.negative_count, reviews.len());
}

#[tokio::test]
async fn aspect_matching_sees_raw_text_not_cleaned_text() {
    // "download" is dropped as domain noise before scoring, yet the raw
    // substring still contains the "ad" keyword of the ads aspect.
    let reviews = [Review::with_text("dl", "Gagal download terus")];
    let report = analyzer().analyze(&reviews, false).await;

    assert!(!report.reviews[0].processed_text.contains("download"));
    let tags = &report.aspects.review_aspects;
    assert_eq!(tags.len(), 1);
    assert!(tags[0].aspects.iter().any(|t| t.aspect == "ads"));
}

#[tokio::test]
async fn report_serializes_flat_review_fields() {
    let reviews = [Review::with_text("x", "Fitur lengkap dan mudah dipakai")];
    let report = analyzer().analyze(&reviews, false).await;
    let v = serde_json::to_value(&report).unwrap();
    let r = &v["reviews"][0];
    assert_eq!(r["id"], "x");
    assert!(r["raw_text"].is_string());
    assert!(r["sentiment_score"].is_number());
    assert!(r["processed_text"].is_string());
    assert_eq!(v["aspect_summary"]["aspect_count"], 9);
}

#[tokio::test]
async fn indonesian_modifiers_survive_preprocessing() {
    let out = scores(
        &analyzer(),
        &["bagus", "sangat bagus", "amat bagus", "bagus sekali", "tidak bagus"],
    )
    .await;
    let plain = out[0].1;
    assert!((plain - 0.7).abs() < 1e-9);

    assert_eq!(out[1].0, "sangat bagus");
    assert!(out[1].1 > plain);
    assert!(out[2].1 > plain);
    assert_eq!(out[3].0, "bagus sekali");
    assert!(out[3].1 > plain);

    assert_eq!(out[4].0, "tidak bagus");
    assert!((out[4].1 - (-0.35)).abs() < 1e-9);
}

#[tokio::test]
async fn english_modifiers_match_after_stemming() {
    let out = scores(
        &english(),
        &["good", "really good", "extremely good", "very good", "not good", "not really good"],
    )
    .await;
    let plain = out[0].1;
    assert!((plain - 0.7).abs() < 1e-9);

    // Snowball rewrites the intensifier; it still applies
    assert_eq!(out[1].0, "realli good");
    assert!((out[1].1 - 0.7 * 1.2).abs() < 1e-9);
    assert!(out[2].1 > plain);
    assert!(out[3].1 > plain);

    assert!(out[4].1 < -0.1);
    assert!((out[5].1 - 0.7 * 1.2 * -0.5).abs() < 1e-9);
}
