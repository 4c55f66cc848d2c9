//! Sentiment scoring: polarity/subjectivity per cleaned text, 3-way category
//! via fixed thresholds, and batch summaries.

mod lexicon;

pub use lexicon::LexiconAnalyzer;

use metrics::counter;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::telemetry::{anon_hash, ensure_metrics_described};

/// Polarity strictly above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.1;
/// Polarity strictly below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentResult {
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    pub fn category(&self) -> SentimentCategory {
        SentimentCategory::from_polarity(self.polarity)
    }
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
    Positive,
    Neutral,
    Negative,
}

impl SentimentCategory {
    /// `> 0.1` positive, `< -0.1` negative, otherwise (NaN included) neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            Self::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzerError {
    #[error("analyzer produced a non-finite score")]
    NonFinite,
    #[error("malformed input: {0}")]
    Malformed(String),
}

/// Rule/lexicon analyzer seam.
pub trait PolarityAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Result<SentimentResult, AnalyzerError>;
}

#[derive(Clone)]
pub struct SentimentScorer {
    analyzer: Arc<dyn PolarityAnalyzer>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new(Arc::new(LexiconAnalyzer::new()))
    }
}

impl SentimentScorer {
    pub fn new(analyzer: Arc<dyn PolarityAnalyzer>) -> Self {
        Self { analyzer }
    }

    /// Score one text. Empty text and analyzer failures yield `NEUTRAL`.
    pub fn score(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::NEUTRAL;
        }
        match self.analyzer.analyze(text) {
            Ok(r) => r,
            Err(e) => {
                ensure_metrics_described();
                counter!("sentiment_analyzer_errors_total").increment(1);
                warn!(target: "sentiment", id = %anon_hash(text), error = %e, "scored neutral after analyzer error");
                SentimentResult::NEUTRAL
            }
        }
    }

    /// Score a batch; output is index-aligned with `texts`.
    pub fn analyze_sentiment<S: AsRef<str>>(&self, texts: &[S]) -> Vec<SentimentResult> {
        texts.iter().map(|t| self.score(t.as_ref())).collect()
    }
}

/// Aggregate payload for a batch of already-scored reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SentimentSummary {
    pub positive_count: usize,
    pub neutral_count: usize,
    pub negative_count: usize,
    pub avg_sentiment: f64,
}

pub fn summarize_sentiment(polarities: &[f64]) -> SentimentSummary {
    let mut out = SentimentSummary::default();
    for &p in polarities {
        match SentimentCategory::from_polarity(p) {
            SentimentCategory::Positive => out.positive_count += 1,
            SentimentCategory::Neutral => out.neutral_count += 1,
            SentimentCategory::Negative => out.negative_count += 1,
        }
    }
    if !polarities.is_empty() {
        out.avg_sentiment = polarities.iter().sum::<f64>() / polarities.len() as f64;
    }
    out
}
