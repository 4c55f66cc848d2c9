// tests/aspect_tally.rs
//! Randomized consistency checks for aspect tallies and the summary reduction.

use rand::{rngs::StdRng, Rng, SeedableRng};
use review_analyzer::aspects::{extract_aspects, generate_aspect_summary, AspectTaxonomy};
use review_analyzer::sentiment::SentimentCategory;
use review_analyzer::Review;

const WORDS: &[&str] = &["qqalpha", "qqbeta", "qqgamma", "qqdelta", "filler", "kata"];

fn taxonomy() -> AspectTaxonomy {
    AspectTaxonomy::from_pairs([
        ("first", vec!["qqalpha", "qqbeta"]),
        ("second", vec!["qqgamma"]),
        ("third", vec!["qqdelta", "qqalpha"]),
        ("never", vec!["zzzunused"]),
    ])
}

fn random_batch(rng: &mut StdRng, n: usize) -> Vec<(Review, f64)> {
    (0..n)
        .map(|i| {
            let len = rng.random_range(0..6);
            let text: Vec<&str> = (0..len)
                .map(|_| WORDS[rng.random_range(0..WORDS.len())])
                .collect();
            let score = rng.random_range(-1.0..=1.0);
            (Review::with_text(format!("r{i}"), text.join(" ")), score)
        })
        .collect()
}

#[test]
fn tallies_agree_with_tags() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let tax = taxonomy();

    for _round in 0..20 {
        let batch = random_batch(&mut rng, 60);
        let res = extract_aspects(batch.iter().map(|(r, s)| (r, *s)), &tax);
        assert_eq!(res.aspects.len(), tax.len());

        for stats in &res.aspects {
            assert_eq!(stats.positive + stats.neutral + stats.negative, stats.total);
            assert!(stats.keywords.len() <= 5);

            let tagged: Vec<f64> = res
                .review_aspects
                .iter()
                .flat_map(|r| r.aspects.iter())
                .filter(|t| t.aspect == stats.aspect)
                .map(|t| t.score)
                .collect();
            assert_eq!(tagged.len(), stats.total);
            if stats.total == 0 {
                assert_eq!(stats.avg_sentiment, 0.0);
                assert!(stats.keywords.is_empty());
            } else {
                let mean = tagged.iter().sum::<f64>() / tagged.len() as f64;
                assert!((stats.avg_sentiment - mean).abs() < 1e-9);
            }
        }

        for tags in &res.review_aspects {
            assert!(!tags.aspects.is_empty());
            for t in &tags.aspects {
                assert_eq!(t.sentiment, SentimentCategory::from_polarity(t.score));
            }
        }
        assert_eq!(res.get("never").unwrap().total, 0);

        let summary = generate_aspect_summary(&res);
        assert_eq!(summary.aspect_count, tax.len());
        let mentioned = res.aspects.iter().filter(|a| a.total > 0).count();
        assert_eq!(summary.aspects_by_sentiment.len(), mentioned);
        assert!(summary
            .aspects_by_sentiment
            .windows(2)
            .all(|w| w[0].sentiment_score >= w[1].sentiment_score));
        if mentioned > 0 {
            let max_total = res.aspects.iter().map(|a| a.total).max().unwrap_or(0);
            let leader = summary.most_mentioned_aspect.as_deref().unwrap();
            assert_eq!(res.get(leader).unwrap().total, max_total);
        }
    }
}

#[test]
fn matching_is_case_insensitive_substring() {
    let tax = taxonomy();
    let r = Review::with_text("x", "SuperQQALPHAish");
    let res = extract_aspects([(&r, 0.5)], &tax);
    let names: Vec<_> = res.review_aspects[0]
        .aspects
        .iter()
        .map(|t| t.aspect.as_str())
        .collect();
    assert_eq!(names, vec!["first", "third"]);
}
