//! Per-word stemming under a wall-clock budget.
//!
//! Each attempt runs on the blocking pool and is awaited with a deadline. An
//! attempt that misses the deadline is detached: it finishes in the background
//! and its result is dropped, while the caller keeps the original token.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::preprocess::stem::Stemmer;

/// Why a token was kept unstemmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    Timeout { budget_ms: u64 },
    Failed(String),
    Panicked,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout { budget_ms } => write!(f, "stemming exceeded {budget_ms}ms"),
            Self::Failed(msg) => write!(f, "stemming failed: {msg}"),
            Self::Panicked => f.write_str("stemmer panicked"),
        }
    }
}

impl FallbackReason {
    /// Metric label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => "timeout",
            Self::Failed(_) => "failed",
            Self::Panicked => "panicked",
        }
    }
}

/// Result of one bounded stemming call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StemOutcome {
    Stemmed(String),
    /// Too short (or short and non-alphabetic) to be worth stemming.
    Unchanged,
    Fallback(FallbackReason),
}

impl StemOutcome {
    /// Token to emit: the root on success, the original token otherwise.
    pub fn resolve(&self, token: &str) -> String {
        match self {
            Self::Stemmed(root) => root.clone(),
            Self::Unchanged | Self::Fallback(_) => token.to_string(),
        }
    }
}

/// Tokens of length ≤ 2, or ≤ 3 with a non-alphabetic char, skip stemming.
pub fn needs_stemming(token: &str) -> bool {
    let n = token.chars().count();
    if n <= 2 {
        return false;
    }
    !(n <= 3 && !token.chars().all(char::is_alphabetic))
}

#[derive(Clone)]
pub struct BoundedStemmer {
    inner: Arc<dyn Stemmer>,
    budget: Duration,
}

impl std::fmt::Debug for BoundedStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedStemmer")
            .field("stemmer", &self.inner.name())
            .field("budget", &self.budget)
            .finish()
    }
}

impl BoundedStemmer {
    pub fn new(inner: Arc<dyn Stemmer>, budget: Duration) -> Self {
        Self { inner, budget }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn stemmer_name(&self) -> &'static str {
        self.inner.name()
    }

    /// Stem one token. Never fails; must be called inside a Tokio runtime.
    pub async fn stem(&self, token: &str) -> StemOutcome {
        if !needs_stemming(token) {
            return StemOutcome::Unchanged;
        }

        let stemmer = Arc::clone(&self.inner);
        let word = token.to_string();
        let handle = tokio::task::spawn_blocking(move || stemmer.stem(&word));

        match tokio::time::timeout(self.budget, handle).await {
            Ok(Ok(Ok(root))) => StemOutcome::Stemmed(root),
            Ok(Ok(Err(e))) => StemOutcome::Fallback(FallbackReason::Failed(e.to_string())),
            Ok(Err(join)) if join.is_panic() => StemOutcome::Fallback(FallbackReason::Panicked),
            Ok(Err(join)) => StemOutcome::Fallback(FallbackReason::Failed(join.to_string())),
            // Dropping the JoinHandle detaches the worker.
            Err(_elapsed) => StemOutcome::Fallback(FallbackReason::Timeout {
                budget_ms: self.budget.as_millis() as u64,
            }),
        }
    }
}
