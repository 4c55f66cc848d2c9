use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use super::{AnalyzerError, PolarityAnalyzer, SentimentResult};
use crate::lexicon::polarity::{INTENSIFIERS, NEGATORS, POSTPOSITIVE, WORDS};
use crate::preprocess::Stemmer;

static SURFACE: Lazy<HashMap<String, (f64, f64)>> = Lazy::new(|| {
    WORDS
        .iter()
        .map(|(w, p, s)| (w.to_string(), (*p, *s)))
        .collect()
});

/// Negation flips and dampens a hit, as pattern-style analyzers do.
const NEGATION_FACTOR: f64 = -0.5;
/// How many preceding tokens a negator reaches.
const NEGATION_WINDOW: usize = 2;

/// Lexicon/rule polarity analyzer over whitespace-separated (cleaned) text.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    entries: HashMap<String, (f64, f64)>,
    intensifiers: HashMap<String, f64>,
    postpositive: HashSet<String>,
    negators: HashSet<String>,
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnalyzer {
    /// Surface forms only.
    pub fn new() -> Self {
        Self {
            entries: SURFACE.clone(),
            intensifiers: INTENSIFIERS.iter().map(|(w, m)| (w.to_string(), *m)).collect(),
            postpositive: POSTPOSITIVE.iter().map(|w| w.to_string()).collect(),
            negators: NEGATORS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Also index polarity words, intensifiers and negators under their stems,
    /// so stemmed text still hits. Surface forms win on collision.
    pub fn with_stemmed_forms(stemmer: &dyn Stemmer) -> Self {
        let mut a = Self::new();
        for (w, p, s) in WORDS {
            if let Ok(root) = stemmer.stem(w) {
                a.entries.entry(root).or_insert((*p, *s));
            }
        }
        for (w, m) in INTENSIFIERS {
            if let Ok(root) = stemmer.stem(w) {
                if POSTPOSITIVE.contains(w) {
                    a.postpositive.insert(root.clone());
                }
                a.intensifiers.entry(root).or_insert(*m);
            }
        }
        for w in NEGATORS {
            if let Ok(root) = stemmer.stem(w) {
                a.negators.insert(root);
            }
        }
        a
    }

    pub fn lookup(&self, word: &str) -> Option<(f64, f64)> {
        self.entries.get(word).copied()
    }

    fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Multiplier for the hit at `i`: a preceding intensifier, or a trailing
    /// one that modifies the word before it ("bagus sekali").
    fn multiplier(&self, tokens: &[&str], i: usize) -> Option<f64> {
        let before = i.checked_sub(1).and_then(|j| self.intensity(tokens[j]));
        before.or_else(|| {
            tokens
                .get(i + 1)
                .filter(|t| self.postpositive.contains(**t))
                .and_then(|t| self.intensity(t))
        })
    }

    fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Result<SentimentResult, AnalyzerError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();

        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        for (i, tok) in tokens.iter().enumerate() {
            let Some((mut p, mut s)) = self.lookup(tok) else {
                continue;
            };
            if let Some(m) = self.multiplier(&tokens, i) {
                p *= m;
                s *= m;
            }
            let negated = (1..=NEGATION_WINDOW).any(|k| i >= k && self.is_negator(tokens[i - k]));
            if negated {
                p *= NEGATION_FACTOR;
            }
            polarities.push(p);
            subjectivities.push(s);
        }

        if polarities.is_empty() {
            return Ok(SentimentResult::NEUTRAL);
        }
        let n = polarities.len() as f64;
        let polarity = polarities.iter().sum::<f64>() / n;
        let subjectivity = subjectivities.iter().sum::<f64>() / n;
        if !polarity.is_finite() || !subjectivity.is_finite() {
            return Err(AnalyzerError::NonFinite);
        }
        Ok(SentimentResult {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::EnglishStemmer;

    #[test]
    fn averages_hits() {
        let a = LexiconAnalyzer::new();
        let r = a.analyze("lambat crash").unwrap();
        assert!((r.polarity - (-0.55)).abs() < 1e-9);
        assert!((r.subjectivity - 0.65).abs() < 1e-9);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let a = LexiconAnalyzer::new();
        let r = a.analyze("tidak bagus").unwrap();
        assert!((r.polarity - (-0.35)).abs() < 1e-9);
        let r = a.analyze("not really good").unwrap();
        assert!((r.polarity - (0.7 * 1.2 * -0.5)).abs() < 1e-9);
    }

    #[test]
    fn intensifier_is_clamped() {
        let a = LexiconAnalyzer::new();
        let r = a.analyze("banget sempurna").unwrap();
        assert_eq!(r.polarity, 1.0);
        assert_eq!(r.subjectivity, 1.0);
    }

    #[test]
    fn trailing_intensifier_modifies_previous_hit() {
        let a = LexiconAnalyzer::new();
        let r = a.analyze("bagus sekali").unwrap();
        assert!((r.polarity - 0.7 * 1.2).abs() < 1e-9);
        // "sangat" only reaches forward
        let r = a.analyze("bagus sangat").unwrap();
        assert!((r.polarity - 0.7).abs() < 1e-9);
    }

    #[test]
    fn stemmed_modifiers_are_indexed() {
        let a = LexiconAnalyzer::with_stemmed_forms(&EnglishStemmer::new());
        // "really" → "realli", "extremely" → "extrem"
        let r = a.analyze("realli good").unwrap();
        assert!((r.polarity - 0.7 * 1.2).abs() < 1e-9);
        let r = a.analyze("extrem good").unwrap();
        assert!((r.polarity - (0.7_f64 * 1.5).min(1.0)).abs() < 1e-9);
        let r = a.analyze("not good").unwrap();
        assert!(r.polarity < 0.0);
    }

    #[test]
    fn no_hits_is_neutral() {
        let a = LexiconAnalyzer::new();
        assert_eq!(a.analyze("meja kursi").unwrap(), SentimentResult::NEUTRAL);
    }

    #[test]
    fn stemmed_forms_are_indexed() {
        let a = LexiconAnalyzer::with_stemmed_forms(&EnglishStemmer::new());
        // "amazing" → "amaz"
        assert!(a.lookup("amaz").is_some());
        assert!(a.lookup("amazing").is_some());
        assert!(LexiconAnalyzer::new().lookup("amaz").is_none());
    }
}
