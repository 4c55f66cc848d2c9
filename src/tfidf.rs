//! # TF-IDF Engine
//! Term importance over preprocessed review texts, with per-term examples and a
//! worked numeric example that uses exactly the formulas applied to the corpus:
//!
//! - `tf(t, d)   = count(t, d) / len(d)` (len over analyzer tokens)
//! - `idf(t)     = ln((1 + N) / (1 + df(t))) + 1` (smoothed)
//! - `tfidf(t,d) = tf(t, d) * idf(t)`, `avg_tfidf(t)` = mean over all N documents
//!
//! Only an empty corpus or an empty vocabulary is reported as an error; the
//! result always carries a `status` field.

use metrics::counter;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::config::TfidfConfig;
use crate::ingest::Review;
use crate::lexicon::polarity::{INTENSIFIERS, NEGATORS};
use crate::lexicon::stopwords::ENGLISH_SET;
use crate::preprocess::{PreprocessedReview, Preprocessor};
use crate::telemetry::ensure_metrics_described;

pub const EMPTY_CORPUS_MESSAGE: &str = "No review texts found for analysis";

const EXAMPLES_PER_TERM: usize = 3;
const SNIPPET_CHARS: usize = 100;
const TOP_TERMS: usize = 10;

// Unigrams of two or more word characters.
static RE_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\b\w\w+\b").expect("term regex"));

// Kept through preprocessing for the sentiment rules, never weighted as terms.
static MODIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    NEGATORS
        .iter()
        .copied()
        .chain(INTENSIFIERS.iter().map(|(w, _)| *w))
        .collect()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TfidfParams {
    pub max_features: usize,
    pub min_df: usize,
}

impl Default for TfidfParams {
    fn default() -> Self {
        TfidfConfig::default().into()
    }
}

impl From<TfidfConfig> for TfidfParams {
    fn from(c: TfidfConfig) -> Self {
        Self {
            max_features: c.max_features,
            min_df: c.min_df,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TfidfError {
    #[error("No review texts found for analysis")]
    EmptyCorpus,
    #[error("empty vocabulary after filtering (min_df={min_df}); documents may contain only stop words")]
    EmptyVocabulary { min_df: usize },
    #[error("non-finite weight for term `{0}`")]
    NonFinite(String),
}

/// One document handed to the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfDocument {
    pub review_id: String,
    /// Shown in example snippets.
    pub raw_text: String,
    /// Weighted text (stemmed, stopword-filtered).
    pub cleaned_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExampleDocument {
    pub text_snippet: String,
    pub tfidf_score: f64,
    pub review_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkedExample {
    pub review_id: String,
    pub term_count: usize,
    pub document_length: usize,
    pub tf: f64,
    pub idf: f64,
    pub tfidf: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfidfTerm {
    pub term: String,
    pub avg_tfidf: f64,
    pub document_frequency: usize,
    pub idf: f64,
    pub example_documents: Vec<ExampleDocument>,
    pub worked_example: WorkedExample,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub num_documents: usize,
    pub avg_document_length: f64,
    pub vocabulary_size: usize,
    pub max_idf: f64,
    pub min_idf: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfidfAnalysis {
    /// Highest average TF-IDF first.
    pub term_details: Vec<TfidfTerm>,
    pub corpus_stats: CorpusStats,
    pub top_terms: Vec<String>,
}

impl TfidfAnalysis {
    pub fn term(&self, term: &str) -> Option<&TfidfTerm> {
        self.term_details.iter().find(|t| t.term == term)
    }
}

/// Payload handed to callers; check `status` before reading anything else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TfidfReport {
    Success(TfidfAnalysis),
    Error { message: String },
}

impl TfidfReport {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Error { .. } => "error",
        }
    }

    pub fn analysis(&self) -> Option<&TfidfAnalysis> {
        match self {
            Self::Success(a) => Some(a),
            Self::Error { .. } => None,
        }
    }
}

impl From<Result<TfidfAnalysis, TfidfError>> for TfidfReport {
    fn from(r: Result<TfidfAnalysis, TfidfError>) -> Self {
        match r {
            Ok(a) => Self::Success(a),
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Analyzer tokens: 2+ char unigrams, English stopwords and sentiment modifiers removed.
pub fn analyzer_tokens(text: &str) -> Vec<&str> {
    RE_TERM
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| !ENGLISH_SET.contains(t) && !MODIFIERS.contains(t))
        .collect()
}

/// Preprocess `reviews` and compute TF-IDF over their cleaned text.
pub async fn compute_tfidf(
    preprocessor: &Preprocessor,
    reviews: &[Review],
    params: TfidfParams,
) -> TfidfReport {
    if !reviews.iter().any(Review::has_text) {
        return finish(Err(TfidfError::EmptyCorpus));
    }
    let pre = preprocessor.preprocess(reviews).await;
    compute_from_preprocessed(reviews, &pre, params)
}

/// Same as [`compute_tfidf`] with preprocessing already done (`pre[i]` ↔ `reviews[i]`).
pub fn compute_from_preprocessed(
    reviews: &[Review],
    pre: &[PreprocessedReview],
    params: TfidfParams,
) -> TfidfReport {
    let docs: Vec<TfidfDocument> = reviews
        .iter()
        .zip(pre)
        .filter(|(r, _)| r.has_text())
        .map(|(r, p)| TfidfDocument {
            review_id: r.id.clone(),
            raw_text: r.raw_text.clone(),
            cleaned_text: p.cleaned_text.clone(),
        })
        .collect();
    finish(compute_documents(&docs, params))
}

fn finish(result: Result<TfidfAnalysis, TfidfError>) -> TfidfReport {
    ensure_metrics_described();
    match &result {
        Ok(a) => info!(
            target: "tfidf",
            documents = a.corpus_stats.num_documents,
            vocabulary = a.corpus_stats.vocabulary_size,
            "tf-idf computed"
        ),
        Err(e) => warn!(target: "tfidf", error = %e, "tf-idf not computed"),
    }
    let report = TfidfReport::from(result);
    counter!("tfidf_runs_total", "status" => report.status()).increment(1);
    report
}

/// Core computation over explicit documents.
pub fn compute_documents(
    docs: &[TfidfDocument],
    params: TfidfParams,
) -> Result<TfidfAnalysis, TfidfError> {
    if docs.is_empty() {
        return Err(TfidfError::EmptyCorpus);
    }
    let n = docs.len();

    let tokenized: Vec<Vec<&str>> = docs.iter().map(|d| analyzer_tokens(&d.cleaned_text)).collect();
    let doc_counts: Vec<HashMap<&str, usize>> = tokenized
        .iter()
        .map(|toks| {
            let mut m: HashMap<&str, usize> = HashMap::new();
            for t in toks {
                *m.entry(*t).or_insert(0) += 1;
            }
            m
        })
        .collect();

    let mut df: HashMap<&str, usize> = HashMap::new();
    let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
    for counts in &doc_counts {
        for (t, c) in counts {
            *df.entry(*t).or_insert(0) += 1;
            *corpus_freq.entry(*t).or_insert(0) += c;
        }
    }

    // min_df first, then the max_features most frequent terms
    let mut vocab: Vec<(&str, usize)> = corpus_freq
        .into_iter()
        .filter(|(t, _)| df.get(t).copied().unwrap_or(0) >= params.min_df)
        .collect();
    vocab.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    vocab.truncate(params.max_features);
    if vocab.is_empty() {
        return Err(TfidfError::EmptyVocabulary {
            min_df: params.min_df,
        });
    }

    let mut terms = Vec::with_capacity(vocab.len());
    for (term, _) in &vocab {
        let dfreq = df.get(term).copied().unwrap_or(0);
        let idf = smoothed_idf(n, dfreq);

        // (doc index, count, weight) for every document containing the term
        let mut hits: Vec<(usize, usize, f64)> = doc_counts
            .iter()
            .enumerate()
            .filter_map(|(i, counts)| {
                let c = *counts.get(term)?;
                let tf = c as f64 / tokenized[i].len() as f64;
                Some((i, c, tf * idf))
            })
            .collect();
        let avg_tfidf = hits.iter().map(|h| h.2).sum::<f64>() / n as f64;
        if !avg_tfidf.is_finite() || !idf.is_finite() {
            return Err(TfidfError::NonFinite(term.to_string()));
        }

        // strongest documents first; ties keep corpus order
        hits.sort_by(|a, b| b.2.total_cmp(&a.2));
        let (ref_idx, ref_count, _) = hits[0];
        let document_length = tokenized[ref_idx].len();
        let tf = ref_count as f64 / document_length as f64;
        let worked_example = WorkedExample {
            review_id: docs[ref_idx].review_id.clone(),
            term_count: ref_count,
            document_length,
            tf,
            idf,
            tfidf: tf * idf,
        };

        let example_documents = hits
            .iter()
            .take(EXAMPLES_PER_TERM)
            .map(|&(i, _, w)| ExampleDocument {
                text_snippet: snippet(&docs[i].raw_text),
                tfidf_score: w,
                review_id: docs[i].review_id.clone(),
            })
            .collect();

        terms.push(TfidfTerm {
            term: term.to_string(),
            avg_tfidf,
            document_frequency: dfreq,
            idf,
            example_documents,
            worked_example,
        });
    }

    terms.sort_by(|a, b| {
        b.avg_tfidf
            .total_cmp(&a.avg_tfidf)
            .then_with(|| a.term.cmp(&b.term))
    });
    let top_terms = terms.iter().take(TOP_TERMS).map(|t| t.term.clone()).collect();

    let total_tokens: usize = tokenized.iter().map(Vec::len).sum();
    let max_idf = terms.iter().map(|t| t.idf).fold(f64::MIN, f64::max);
    let min_idf = terms.iter().map(|t| t.idf).fold(f64::MAX, f64::min);
    let corpus_stats = CorpusStats {
        num_documents: n,
        avg_document_length: total_tokens as f64 / n as f64,
        vocabulary_size: terms.len(),
        max_idf,
        min_idf,
    };

    Ok(TfidfAnalysis {
        term_details: terms,
        corpus_stats,
        top_terms,
    })
}

/// `ln((1 + n) / (1 + df)) + 1`
pub fn smoothed_idf(n_docs: usize, df: usize) -> f64 {
    ((1 + n_docs) as f64 / (1 + df) as f64).ln() + 1.0
}

fn snippet(text: &str) -> String {
    if text.chars().count() > SNIPPET_CHARS {
        let head: String = text.chars().take(SNIPPET_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}
