// src/telemetry.rs
//! Logging helpers and one-time metric descriptions shared by all stages.

use metrics::{describe_counter, describe_histogram};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_LOG_JSON: &str = "REVIEW_ANALYZER_LOG_JSON";
const DEFAULT_FILTER: &str = "config=info,ingest=info,preprocess=info,sentiment=info,aspects=info,tfidf=info,report=info,warn";

/// Short anonymized id for a piece of review text. Raw text is never logged.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Log label for a review: its id, or an anonymized hash when the id is blank.
pub fn review_label(id: &str, text: &str) -> String {
    if id.is_empty() {
        format!("anon:{}", anon_hash(text))
    } else {
        id.to_string()
    }
}

pub fn truncate_vec<T: ToString>(v: &[T], max: usize) -> Vec<String> {
    v.iter().take(max).map(|x| x.to_string()).collect()
}

/// One-time metrics registration (so series show up in the exposition).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("preprocess_reviews_total", "Reviews run through preprocessing.");
        describe_counter!(
            "preprocess_stem_fallbacks_total",
            "Tokens kept unstemmed after a timeout or stemmer failure."
        );
        describe_histogram!("preprocess_batch_ms", "Preprocessing time per batch in milliseconds.");
        describe_counter!(
            "sentiment_analyzer_errors_total",
            "Texts scored neutral after an analyzer failure."
        );
        describe_counter!("aspects_matched_total", "Aspect tags emitted across reviews.");
        describe_counter!("tfidf_runs_total", "TF-IDF invocations by status.");
    });
}

/// Install the global subscriber. `RUST_LOG` wins over the default filter;
/// `REVIEW_ANALYZER_LOG_JSON=1` switches to JSON lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json = std::env::var(ENV_LOG_JSON).ok().is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    // Err only when a subscriber is already installed (tests, embedding callers).
    let _ = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };
}
