//! Aspect extraction: keyword tagging of raw review text against a fixed taxonomy,
//! with per-aspect sentiment tallies.
//!
//! Matching is case-insensitive substring containment on the *raw* content;
//! no stemming is applied here, unlike sentiment and TF-IDF which see the
//! cleaned text.

pub mod summary;

pub use summary::{generate_aspect_summary, AspectRanking, AspectSummary};

use metrics::counter;
use serde::Serialize;
use tracing::debug;

use crate::config::AspectEntry;
use crate::ingest::Review;
use crate::lexicon::aspects::APP_ASPECTS;
use crate::sentiment::SentimentCategory;
use crate::telemetry::ensure_metrics_described;

const TOP_KEYWORDS: usize = 5;

/// Ordered mapping aspect name → trigger keywords (lowercased). Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AspectTaxonomy {
    aspects: Vec<(String, Vec<String>)>,
}

impl Default for AspectTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AspectTaxonomy {
    pub fn builtin() -> Self {
        Self::from_pairs(
            APP_ASPECTS
                .iter()
                .map(|(name, kws)| (*name, kws.iter().copied())),
        )
    }

    pub fn from_pairs<N, I, K>(pairs: impl IntoIterator<Item = (N, I)>) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let aspects = pairs
            .into_iter()
            .map(|(name, kws)| {
                let kws = kws
                    .into_iter()
                    .map(|k| k.as_ref().trim().to_lowercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (name.into(), kws)
            })
            .collect();
        Self { aspects }
    }

    /// Configured override, or the built-in taxonomy when none is given.
    pub fn from_config(entries: &[AspectEntry]) -> Self {
        if entries.is_empty() {
            return Self::builtin();
        }
        Self::from_pairs(
            entries
                .iter()
                .map(|e| (e.name.clone(), e.keywords.iter())),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.aspects.iter().map(|(n, k)| (n.as_str(), k.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.aspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aspects.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Running per-aspect counters, mutated while scanning reviews.
#[derive(Debug, Clone, Default)]
pub struct AspectTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub total: usize,
    sentiment_sum: f64,
    /// Keyword → count, in first-seen order.
    keywords: Vec<(String, usize)>,
}

impl AspectTally {
    pub fn record(&mut self, category: SentimentCategory, score: f64, matched: &[String]) {
        match category {
            SentimentCategory::Positive => self.positive += 1,
            SentimentCategory::Neutral => self.neutral += 1,
            SentimentCategory::Negative => self.negative += 1,
        }
        self.total += 1;
        self.sentiment_sum += score;
        for kw in matched {
            match self.keywords.iter_mut().find(|(k, _)| k == kw) {
                Some((_, c)) => *c += 1,
                None => self.keywords.push((kw.clone(), 1)),
            }
        }
    }

    /// Average sentiment and top keywords (ties keep first-seen order).
    pub fn finalize(self, aspect: &str) -> AspectStats {
        let avg_sentiment = if self.total > 0 {
            self.sentiment_sum / self.total as f64
        } else {
            0.0
        };
        let mut keywords = self.keywords;
        // stable sort keeps first-seen order among equal counts
        keywords.sort_by(|a, b| b.1.cmp(&a.1));
        keywords.truncate(TOP_KEYWORDS);
        AspectStats {
            aspect: aspect.to_string(),
            positive: self.positive,
            neutral: self.neutral,
            negative: self.negative,
            total: self.total,
            avg_sentiment,
            keywords: keywords
                .into_iter()
                .map(|(keyword, count)| KeywordCount { keyword, count })
                .collect(),
        }
    }
}

/// Finalized tally for one aspect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectStats {
    pub aspect: String,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub total: usize,
    pub avg_sentiment: f64,
    pub keywords: Vec<KeywordCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectTag {
    pub aspect: String,
    pub sentiment: SentimentCategory,
    pub score: f64,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewAspectTags {
    pub review_id: String,
    pub aspects: Vec<AspectTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AspectResults {
    /// One entry per taxonomy aspect, in taxonomy order.
    pub aspects: Vec<AspectStats>,
    pub review_aspects: Vec<ReviewAspectTags>,
}

impl AspectResults {
    pub fn get(&self, aspect: &str) -> Option<&AspectStats> {
        self.aspects.iter().find(|a| a.aspect == aspect)
    }
}

/// Tag reviews (each paired with its polarity) and aggregate per-aspect sentiment.
pub fn extract_aspects<'a, I>(reviews: I, taxonomy: &AspectTaxonomy) -> AspectResults
where
    I: IntoIterator<Item = (&'a Review, f64)>,
{
    ensure_metrics_described();

    let mut tallies: Vec<AspectTally> = vec![AspectTally::default(); taxonomy.len()];
    let mut review_aspects = Vec::new();
    let mut scanned = 0usize;

    for (review, score) in reviews {
        let content = review.raw_text.to_lowercase();
        if content.trim().is_empty() {
            continue;
        }
        scanned += 1;
        let category = SentimentCategory::from_polarity(score);

        let mut tags = Vec::new();
        for ((aspect, keywords), tally) in taxonomy.iter().zip(tallies.iter_mut()) {
            let found: Vec<String> = keywords
                .iter()
                .filter(|k| content.contains(k.as_str()))
                .cloned()
                .collect();
            if found.is_empty() {
                continue;
            }
            tally.record(category, score, &found);
            tags.push(AspectTag {
                aspect: aspect.to_string(),
                sentiment: category,
                score,
                keywords: found,
            });
        }

        if !tags.is_empty() {
            counter!("aspects_matched_total").increment(tags.len() as u64);
            review_aspects.push(ReviewAspectTags {
                review_id: review.id.clone(),
                aspects: tags,
            });
        }
    }

    let aspects: Vec<AspectStats> = taxonomy
        .iter()
        .zip(tallies)
        .map(|((name, _), tally)| tally.finalize(name))
        .collect();

    debug!(
        target: "aspects",
        scanned,
        tagged = review_aspects.len(),
        "aspect extraction done"
    );

    AspectResults {
        aspects,
        review_aspects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> AspectTaxonomy {
        AspectTaxonomy::from_pairs([
            ("performance", vec!["lambat", "crash", "lag"]),
            ("ads", vec!["iklan"]),
        ])
    }

    #[test]
    fn tags_and_tallies() {
        let r1 = Review::with_text("r1", "Sangat LAMBAT dan sering crash");
        let r2 = Review::with_text("r2", "iklan terus, lambat");
        let r3 = Review::with_text("r3", "biasa saja");
        let r4 = Review::with_text("r4", "");
        let res = extract_aspects([(&r1, -0.55), (&r2, 0.05), (&r3, 0.9), (&r4, 0.0)], &tiny());

        let perf = res.get("performance").unwrap();
        assert_eq!(
            (perf.positive, perf.neutral, perf.negative, perf.total),
            (0, 1, 1, 2)
        );
        assert!((perf.avg_sentiment - (-0.25)).abs() < 1e-12);
        assert_eq!(
            perf.keywords,
            vec![
                KeywordCount { keyword: "lambat".into(), count: 2 },
                KeywordCount { keyword: "crash".into(), count: 1 },
            ]
        );

        let ads = res.get("ads").unwrap();
        assert_eq!(ads.total, 1);
        assert_eq!(ads.neutral, 1);

        assert_eq!(res.review_aspects.len(), 2);
        assert_eq!(res.review_aspects[0].review_id, "r1");
        assert_eq!(res.review_aspects[1].aspects.len(), 2);
    }

    #[test]
    fn unmatched_aspects_stay_zeroed() {
        let r = Review::with_text("r", "iklan");
        let res = extract_aspects([(&r, 0.5)], &tiny());
        let perf = res.get("performance").unwrap();
        assert_eq!(perf.total, 0);
        assert_eq!(perf.avg_sentiment, 0.0);
        assert!(perf.keywords.is_empty());
    }

    #[test]
    fn keyword_ties_keep_first_seen_order() {
        let mut t = AspectTally::default();
        let kws = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        t.record(SentimentCategory::Neutral, 0.0, &kws(&["f", "e", "d"]));
        t.record(SentimentCategory::Neutral, 0.0, &kws(&["c", "b", "a"]));
        let stats = t.finalize("x");
        let names: Vec<_> = stats.keywords.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(names, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn builtin_taxonomy_covers_indonesian_performance_terms() {
        let tax = AspectTaxonomy::builtin();
        assert_eq!(tax.len(), 9);
        let (_, perf) = tax.iter().find(|(n, _)| *n == "performance").unwrap();
        assert!(perf.iter().any(|k| k == "lambat"));
    }
}
