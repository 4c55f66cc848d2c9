// src/ingest/json_file.rs
use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::ingest::types::{RawReview, ReviewSource};

/// Reads a JSON array of raw reviews from disk.
/// Accepts either `[...]` or `{"reviews": [...]}`.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(s: &str) -> Result<Vec<RawReview>> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Shape {
            List(Vec<RawReview>),
            Wrapped { reviews: Vec<RawReview> },
        }
        let shape: Shape = serde_json::from_str(s).context("parsing reviews JSON")?;
        Ok(match shape {
            Shape::List(v) => v,
            Shape::Wrapped { reviews } => reviews,
        })
    }
}

#[async_trait::async_trait]
impl ReviewSource for JsonFileSource {
    async fn fetch_reviews(&self, _app_id: &str) -> Result<Vec<RawReview>> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading reviews from {}", self.path.display()))?;
        Self::parse(&data)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}
