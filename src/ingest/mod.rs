// src/ingest/mod.rs
//! Boundary with the review-fetching collaborator: wire shape, validation, sources.

pub mod json_file;
pub mod types;

pub use json_file::JsonFileSource;
pub use types::{RawReview, Review, ReviewSource};

use tracing::info;

/// Fetch from a source and validate every record into a `Review`.
pub async fn load_reviews(
    source: &(dyn ReviewSource + Send + Sync),
    app_id: &str,
) -> anyhow::Result<Vec<Review>> {
    let raw = source.fetch_reviews(app_id).await?;
    let reviews: Vec<Review> = raw
        .into_iter()
        .map(|r| Review::from_raw(app_id, r))
        .collect();
    let empty = reviews.iter().filter(|r| !r.has_text()).count();
    info!(
        target: "ingest",
        source = source.name(),
        total = reviews.len(),
        empty,
        "reviews loaded"
    );
    Ok(reviews)
}
