// src/lib.rs
//! Review text analytics: preprocessing (normalize, tokenize, stopwords, bounded
//! stemming), lexicon sentiment, aspect extraction and TF-IDF term importance.

pub mod aspects;
pub mod config;
pub mod ingest;
pub mod lexicon;
pub mod preprocess;
pub mod report;
pub mod sentiment;
pub mod telemetry;
pub mod tfidf;

// ---- Re-exports for stable public API ----
pub use crate::aspects::{extract_aspects, generate_aspect_summary, AspectTaxonomy};
pub use crate::config::AnalysisConfig;
pub use crate::ingest::{load_reviews, JsonFileSource, RawReview, Review, ReviewSource};
pub use crate::preprocess::{PreprocessedReview, Preprocessor};
pub use crate::report::{AnalysisReport, AnalyzedReview, ReviewAnalyzer};
pub use crate::sentiment::{SentimentCategory, SentimentResult, SentimentScorer};
pub use crate::tfidf::{compute_tfidf, TfidfParams, TfidfReport};
