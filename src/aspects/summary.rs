//! Headline statistics over finalized aspect tallies.

use serde::Serialize;

use super::AspectResults;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AspectRanking {
    pub aspect: String,
    pub sentiment_score: f64,
    pub total_mentions: usize,
    pub positive_ratio: f64,
    pub negative_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AspectSummary {
    pub most_positive_aspect: Option<String>,
    pub most_negative_aspect: Option<String>,
    pub most_mentioned_aspect: Option<String>,
    /// Number of aspects in the taxonomy, mentioned or not.
    pub aspect_count: usize,
    /// Mentioned aspects, highest average sentiment first.
    pub aspects_by_sentiment: Vec<AspectRanking>,
}

/// Reduce aspect results to most-positive/negative/mentioned plus a ranked list.
/// Only aspects with mentions compete; ties keep the earlier aspect.
pub fn generate_aspect_summary(results: &AspectResults) -> AspectSummary {
    let mut summary = AspectSummary {
        aspect_count: results.aspects.len(),
        ..Default::default()
    };

    let mut max_positive = -1.0_f64;
    let mut max_negative = -1.0_f64;
    // totals are > 0 here, so the first mentioned aspect always beats 0
    let mut max_mentions = 0usize;

    for stats in results.aspects.iter().filter(|a| a.total > 0) {
        let total = stats.total as f64;
        let positive_ratio = stats.positive as f64 / total;
        let negative_ratio = stats.negative as f64 / total;

        if positive_ratio > max_positive {
            max_positive = positive_ratio;
            summary.most_positive_aspect = Some(stats.aspect.clone());
        }
        if negative_ratio > max_negative {
            max_negative = negative_ratio;
            summary.most_negative_aspect = Some(stats.aspect.clone());
        }
        if stats.total > max_mentions {
            max_mentions = stats.total;
            summary.most_mentioned_aspect = Some(stats.aspect.clone());
        }

        summary.aspects_by_sentiment.push(AspectRanking {
            aspect: stats.aspect.clone(),
            sentiment_score: stats.avg_sentiment,
            total_mentions: stats.total,
            positive_ratio,
            negative_ratio,
        });
    }

    // stable: equal scores keep taxonomy order
    summary
        .aspects_by_sentiment
        .sort_by(|a, b| b.sentiment_score.total_cmp(&a.sentiment_score));

    summary
}
