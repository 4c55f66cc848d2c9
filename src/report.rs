//! Full batch analysis: preprocessing, sentiment, aspects, aspect summary and
//! TF-IDF, combined into one serializable report.

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::aspects::{extract_aspects, generate_aspect_summary, AspectResults, AspectSummary, AspectTaxonomy};
use crate::config::AnalysisConfig;
use crate::ingest::Review;
use crate::preprocess::{stemmer_for, PreprocessedReview, Preprocessor};
use crate::sentiment::{summarize_sentiment, LexiconAnalyzer, SentimentCategory, SentimentScorer, SentimentSummary};
use crate::telemetry::truncate_vec;
use crate::tfidf::{compute_from_preprocessed, TfidfParams, TfidfReport};

/// A review augmented with its scores and cleaned text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentCategory,
    pub subjectivity: f64,
    pub processed_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preprocessing: Option<PreprocessedReview>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub reviews: Vec<AnalyzedReview>,
    pub sentiment_summary: SentimentSummary,
    pub aspects: AspectResults,
    pub aspect_summary: AspectSummary,
    pub tfidf: TfidfReport,
}

#[derive(Clone)]
pub struct ReviewAnalyzer {
    preprocessor: Preprocessor,
    scorer: SentimentScorer,
    taxonomy: AspectTaxonomy,
    tfidf: TfidfParams,
}

impl ReviewAnalyzer {
    pub fn new(
        preprocessor: Preprocessor,
        scorer: SentimentScorer,
        taxonomy: AspectTaxonomy,
        tfidf: TfidfParams,
    ) -> Self {
        Self {
            preprocessor,
            scorer,
            taxonomy,
            tfidf,
        }
    }

    pub fn from_config(cfg: &AnalysisConfig) -> Self {
        let lexicon = LexiconAnalyzer::with_stemmed_forms(stemmer_for(cfg.language).as_ref());
        Self::new(
            Preprocessor::from_config(cfg),
            SentimentScorer::new(Arc::new(lexicon)),
            AspectTaxonomy::from_config(&cfg.aspects),
            cfg.tfidf.into(),
        )
    }

    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    pub fn taxonomy(&self) -> &AspectTaxonomy {
        &self.taxonomy
    }

    /// Run every stage over one batch. `report.reviews[i]` belongs to `reviews[i]`.
    pub async fn analyze(&self, reviews: &[Review], include_preprocessing: bool) -> AnalysisReport {
        let started = Instant::now();

        let pre = self.preprocessor.preprocess(reviews).await;
        let scores = self
            .scorer
            .analyze_sentiment(&pre.iter().map(|p| p.cleaned_text.as_str()).collect::<Vec<_>>());

        let polarities: Vec<f64> = scores.iter().map(|s| s.polarity).collect();
        let sentiment_summary = summarize_sentiment(&polarities);

        // aspects match raw content, paired with the score of the cleaned text
        let aspects = extract_aspects(reviews.iter().zip(polarities.iter().copied()), &self.taxonomy);
        let aspect_summary = generate_aspect_summary(&aspects);

        let tfidf = compute_from_preprocessed(reviews, &pre, self.tfidf);

        let analyzed: Vec<AnalyzedReview> = reviews
            .iter()
            .zip(pre)
            .zip(scores)
            .map(|((review, p), s)| AnalyzedReview {
                review: review.clone(),
                sentiment_score: s.polarity,
                sentiment_label: s.category(),
                subjectivity: s.subjectivity,
                processed_text: p.cleaned_text.clone(),
                preprocessing: include_preprocessing.then_some(p),
            })
            .collect();

        let top_terms = tfidf
            .analysis()
            .map(|a| truncate_vec(&a.top_terms, 3))
            .unwrap_or_default();
        info!(
            target: "report",
            reviews = analyzed.len(),
            positive = sentiment_summary.positive_count,
            negative = sentiment_summary.negative_count,
            tfidf = tfidf.status(),
            top_terms = ?top_terms,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis complete"
        );

        AnalysisReport {
            reviews: analyzed,
            sentiment_summary,
            aspects,
            aspect_summary,
            tfidf,
        }
    }
}
