// src/ingest/types.rs
use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Review exactly as the fetching collaborator hands it over.
/// Every field may be missing or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawReview {
    #[serde(default)]
    pub review_id: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub score: Option<i64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub at: Option<DateTime<Utc>>,
}

/// Validated review used by the pipeline. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: String,
    pub app_id: String,
    pub author: String,
    /// 1..=5 when the source supplied an in-range score.
    pub rating: Option<u8>,
    pub raw_text: String,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Review {
    /// Boundary validation: never fails, substitutes empty/neutral values.
    pub fn from_raw(app_id: &str, raw: RawReview) -> Self {
        Self {
            id: raw.review_id.unwrap_or_default(),
            app_id: app_id.to_string(),
            author: raw.user_name.unwrap_or_default(),
            rating: raw
                .score
                .and_then(|s| u8::try_from(s).ok())
                .filter(|s| (1..=5).contains(s)),
            raw_text: raw.content.unwrap_or_default(),
            timestamp: raw.at,
        }
    }

    /// Convenience for tests and callers that only have text.
    pub fn with_text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            app_id: String::new(),
            author: String::new(),
            rating: None,
            raw_text: text.into(),
            timestamp: None,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.raw_text.trim().is_empty()
    }
}

#[async_trait::async_trait]
pub trait ReviewSource {
    async fn fetch_reviews(&self, app_id: &str) -> Result<Vec<RawReview>>;
    fn name(&self) -> &'static str;
}

/// Accept RFC 3339, `YYYY-MM-DD HH:MM:SS` (assumed UTC) or unix seconds;
/// anything else becomes `None` instead of failing the whole record.
fn lenient_timestamp<'de, D>(de: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<serde_json::Value>::deserialize(de)?;
    Ok(match v {
        Some(serde_json::Value::String(s)) => parse_timestamp(&s),
        Some(serde_json::Value::Number(n)) => n
            .as_i64()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)),
        _ => None,
    })
}

pub(crate) fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
}
