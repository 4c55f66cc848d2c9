//! Preprocessing pipeline: Normalizer → Tokenizer → Stopword Filter → Bounded Stemmer.
//!
//! Output is index-aligned with the input. Every stage is total: empty text
//! short-circuits to an empty record, and stemming failures degrade to the
//! original token with a recorded warning.

pub mod bounded;
pub mod normalize;
pub mod stem;
pub mod tokenize;

use metrics::{counter, histogram};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::ingest::Review;
use crate::lexicon::StopwordSet;
use crate::telemetry::{ensure_metrics_described, review_label};

pub use bounded::{BoundedStemmer, FallbackReason, StemOutcome};
pub use normalize::normalize;
pub use stem::{stemmer_for, EnglishStemmer, IndonesianStemmer, StemError, Stemmer};
pub use tokenize::tokenize;

/// A token kept unstemmed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemWarning {
    pub token: String,
    pub reason: FallbackReason,
}

/// Derived, per-run view of one review. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PreprocessedReview {
    pub original: String,
    pub normalized: String,
    pub tokens: Vec<String>,
    pub filtered_tokens: Vec<String>,
    pub stemmed_tokens: Vec<String>,
    pub cleaned_text: String,
    pub original_token_count: usize,
    pub processed_token_count: usize,
    pub removed_stopwords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<StemWarning>,
}

impl PreprocessedReview {
    pub fn is_empty(&self) -> bool {
        self.cleaned_text.is_empty()
    }
}

/// Result of the synchronous front half (normalize, tokenize, filter).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterStage {
    pub normalized: String,
    pub tokens: Vec<String>,
    pub kept: Vec<String>,
    pub removed: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Preprocessor {
    stopwords: Arc<StopwordSet>,
    stemmer: BoundedStemmer,
}

impl Preprocessor {
    pub fn new(stopwords: Arc<StopwordSet>, stemmer: BoundedStemmer) -> Self {
        Self { stopwords, stemmer }
    }

    /// Build stopwords and stemmer from configuration.
    pub fn from_config(cfg: &AnalysisConfig) -> Self {
        let stopwords = StopwordSet::for_language(cfg.language, &cfg.stopwords.extra);
        let stemmer = BoundedStemmer::new(stemmer_for(cfg.language), cfg.stemming.budget());
        Self::new(Arc::new(stopwords), stemmer)
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn stemmer(&self) -> &BoundedStemmer {
        &self.stemmer
    }

    /// Normalize, tokenize and partition tokens into kept/removed.
    pub fn filter_stage(&self, text: &str) -> FilterStage {
        let normalized = normalize(text);
        let tokens = tokenize(&normalized);
        let (removed, kept): (Vec<String>, Vec<String>) = tokens
            .iter()
            .cloned()
            .partition(|t| self.stopwords.contains(t));
        FilterStage {
            normalized,
            tokens,
            kept,
            removed,
        }
    }

    /// Preprocess a batch. `out.len() == reviews.len()` and `out[i]` belongs to `reviews[i]`.
    pub async fn preprocess(&self, reviews: &[Review]) -> Vec<PreprocessedReview> {
        ensure_metrics_described();
        let started = Instant::now();

        // Identical tokens are stemmed once per batch.
        let mut memo: HashMap<String, StemOutcome> = HashMap::new();
        let mut out = Vec::with_capacity(reviews.len());
        for review in reviews {
            let pre = self.preprocess_with_memo(&review.raw_text, &mut memo).await;
            for w in &pre.warnings {
                warn!(
                    target: "preprocess",
                    review = %review_label(&review.id, &review.raw_text),
                    reason = %w.reason,
                    "token kept unstemmed"
                );
            }
            out.push(pre);
        }

        counter!("preprocess_reviews_total").increment(reviews.len() as u64);
        histogram!("preprocess_batch_ms").record(started.elapsed().as_secs_f64() * 1_000.0);
        debug!(
            target: "preprocess",
            reviews = reviews.len(),
            distinct_tokens = memo.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "batch preprocessed"
        );
        out
    }

    /// Preprocess a single text (fresh memo).
    pub async fn preprocess_text(&self, text: &str) -> PreprocessedReview {
        let mut memo = HashMap::new();
        self.preprocess_with_memo(text, &mut memo).await
    }

    async fn preprocess_with_memo(
        &self,
        text: &str,
        memo: &mut HashMap<String, StemOutcome>,
    ) -> PreprocessedReview {
        if text.trim().is_empty() {
            return PreprocessedReview::default();
        }

        let FilterStage {
            normalized,
            tokens,
            kept,
            removed,
        } = self.filter_stage(text);

        let mut stemmed_tokens = Vec::with_capacity(kept.len());
        let mut warnings = Vec::new();
        for token in &kept {
            let outcome = match memo.get(token) {
                Some(o) => o.clone(),
                None => {
                    let o = self.stemmer.stem(token).await;
                    memo.insert(token.clone(), o.clone());
                    o
                }
            };
            if let StemOutcome::Fallback(reason) = &outcome {
                counter!("preprocess_stem_fallbacks_total", "reason" => reason.label()).increment(1);
                warnings.push(StemWarning {
                    token: token.clone(),
                    reason: reason.clone(),
                });
            }
            stemmed_tokens.push(outcome.resolve(token));
        }

        let cleaned_text = normalize::collapse_whitespace(&stemmed_tokens.join(" "));
        PreprocessedReview {
            original: text.to_string(),
            normalized,
            original_token_count: tokens.len(),
            processed_token_count: stemmed_tokens.len(),
            tokens,
            filtered_tokens: kept,
            stemmed_tokens,
            cleaned_text,
            removed_stopwords: removed,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;
    use std::time::Duration;

    fn indonesian() -> Preprocessor {
        Preprocessor::new(
            Arc::new(StopwordSet::for_language(Language::Indonesian, &[])),
            BoundedStemmer::new(Arc::new(IndonesianStemmer::new()), Duration::from_secs(1)),
        )
    }

    #[tokio::test]
    async fn empty_text_short_circuits() {
        let p = indonesian();
        let out = p.preprocess_text("   ").await;
        assert_eq!(out, PreprocessedReview::default());
        assert_eq!(out.original_token_count, 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn removes_stopwords_and_stems() {
        let p = indonesian();
        let out = p
            .preprocess_text("Aplikasi ini sangat lambat dan sering crash, mengecewakan!")
            .await;
        assert_eq!(
            out.tokens,
            vec!["aplikasi", "ini", "sangat", "lambat", "dan", "sering", "crash", "mengecewakan"]
        );
        // the intensifier stays for the sentiment rules
        assert_eq!(out.filtered_tokens, vec!["sangat", "lambat", "crash", "mengecewakan"]);
        assert_eq!(out.stemmed_tokens, vec!["sangat", "lambat", "crash", "kecewa"]);
        assert_eq!(out.cleaned_text, "sangat lambat crash kecewa");
        assert_eq!(out.original_token_count, 8);
        assert_eq!(out.processed_token_count, 4);
        assert_eq!(out.removed_stopwords, vec!["aplikasi", "ini", "dan", "sering"]);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn filter_stage_is_idempotent() {
        let p = indonesian();
        let first = p.filter_stage("Fiturnya BAGUS!!! tapi iklannya 100x ganggu... www.spam.id");
        let second = p.filter_stage(&first.normalized);
        assert_eq!(first.kept, second.kept);
        assert_eq!(first.normalized, second.normalized);
    }
}
