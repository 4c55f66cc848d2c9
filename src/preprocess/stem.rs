//! Stemmers: an Indonesian affix stripper and Snowball English.
//!
//! The Indonesian stemmer follows the Nazief–Adriani order: inflectional
//! particles, possessive pronouns, derivational suffixes, then up to three
//! derivational prefixes with nasal recoding. Prefix removal is accepted only
//! when it lands on a known root; suffix removal falls back to the stripped
//! form when no root matches.

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::Language;
use crate::lexicon::roots::INDONESIAN_ROOTS;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StemError {
    #[error("empty token")]
    Empty,
    #[error("stemmer produced an empty root for `{0}`")]
    EmptyRoot(String),
    #[error("stemmer failed: {0}")]
    Failed(String),
}

/// A pure word → root function. Implementations must be cheap to share.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> Result<String, StemError>;
    fn name(&self) -> &'static str;
}

/// Stemmer matching the configured review language.
pub fn stemmer_for(language: Language) -> Arc<dyn Stemmer> {
    match language {
        Language::Indonesian => Arc::new(IndonesianStemmer::new()),
        Language::English => Arc::new(EnglishStemmer::new()),
    }
}

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
const DERIVATIONAL: &[&str] = &["kan", "an", "i"];
const MIN_ROOT_CHARS: usize = 3;
const MIN_FALLBACK_CHARS: usize = 4;
const MAX_PREFIXES: usize = 3;

#[derive(Debug, Clone)]
pub struct IndonesianStemmer {
    roots: &'static HashSet<&'static str>,
}

impl Default for IndonesianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl IndonesianStemmer {
    pub fn new() -> Self {
        Self {
            roots: &INDONESIAN_ROOTS,
        }
    }

    #[inline]
    fn is_root(&self, w: &str) -> bool {
        self.roots.contains(w)
    }

    fn stem_word(&self, word: &str) -> String {
        if self.is_root(word) || char_len(word) <= MIN_ROOT_CHARS {
            return word.to_string();
        }

        // 1) particles, 2) possessives
        let mut w = word;
        for group in [PARTICLES, POSSESSIVES] {
            if let Some(rest) = strip_suffix(w, group) {
                w = rest;
                if self.is_root(w) {
                    return w.to_string();
                }
            }
        }

        // 3) derivational suffix; try prefixes on both the stripped and unstripped form
        let mut bases: Vec<&str> = Vec::with_capacity(2);
        let derived = strip_suffix(w, DERIVATIONAL);
        if let Some(rest) = derived {
            if self.is_root(rest) {
                return rest.to_string();
            }
            bases.push(rest);
        }
        bases.push(w);

        for base in &bases {
            if let Some(root) = prefix_forms(base).into_iter().find(|f| self.is_root(f)) {
                return root;
            }
        }

        // No known root: keep suffix stripping, except a bare `-i`.
        match derived {
            Some(rest) if !w.ends_with('i') && char_len(rest) >= MIN_FALLBACK_CHARS => {
                rest.to_string()
            }
            _ => w.to_string(),
        }
    }
}

impl Stemmer for IndonesianStemmer {
    fn stem(&self, word: &str) -> Result<String, StemError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(StemError::Empty);
        }
        if !word.chars().all(char::is_alphabetic) {
            return Ok(word.to_string());
        }
        let root = self.stem_word(word);
        if root.is_empty() {
            return Err(StemError::EmptyRoot(word.to_string()));
        }
        Ok(root)
    }

    fn name(&self) -> &'static str {
        "indonesian"
    }
}

/// Snowball English via `rust-stemmers`.
pub struct EnglishStemmer {
    inner: rust_stemmers::Stemmer,
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnglishStemmer {
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(rust_stemmers::Algorithm::English),
        }
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, word: &str) -> Result<String, StemError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(StemError::Empty);
        }
        let root = self.inner.stem(word).into_owned();
        if root.is_empty() {
            return Err(StemError::EmptyRoot(word.to_string()));
        }
        Ok(root)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

// --- internals ---

#[inline]
fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn strip_suffix<'a>(w: &'a str, suffixes: &[&str]) -> Option<&'a str> {
    suffixes
        .iter()
        .filter_map(|s| w.strip_suffix(s))
        .find(|rest| char_len(rest) >= MIN_ROOT_CHARS)
}

fn starts_with_vowel(s: &str) -> bool {
    matches!(s.chars().next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

fn starts_with_any(s: &str, set: &[char]) -> bool {
    s.chars().next().is_some_and(|c| set.contains(&c))
}

/// Candidate forms after removing one derivational prefix (with recoding).
fn prefix_options(w: &str) -> Vec<String> {
    const LIQUIDS: &[char] = &['l', 'r', 'w', 'y', 'm', 'n'];

    let mut out = Vec::new();
    for nasal in ["me", "pe"] {
        let Some(rest) = w.strip_prefix(nasal) else {
            continue;
        };
        if let Some(r) = rest.strip_prefix("ng") {
            if starts_with_vowel(r) {
                out.push(r.to_string());
                out.push(format!("k{r}"));
            } else if starts_with_any(r, &['g', 'h', 'k']) {
                out.push(r.to_string());
            }
        } else if let Some(r) = rest.strip_prefix("ny") {
            if starts_with_vowel(r) {
                out.push(format!("s{r}"));
            }
        } else if let Some(r) = rest.strip_prefix('m') {
            if starts_with_vowel(r) {
                out.push(format!("p{r}"));
                out.push(format!("m{r}"));
            } else if starts_with_any(r, &['b', 'f', 'v', 'p']) {
                out.push(r.to_string());
            }
        } else if let Some(r) = rest.strip_prefix('n') {
            if starts_with_vowel(r) {
                out.push(format!("t{r}"));
                out.push(format!("n{r}"));
            } else if starts_with_any(r, &['c', 'd', 'j', 'z', 't', 's']) {
                out.push(r.to_string());
            }
        } else if nasal == "pe" && rest.starts_with('r') {
            out.push(rest[1..].to_string());
        } else if starts_with_any(rest, LIQUIDS) {
            out.push(rest.to_string());
        }
    }
    for plain in ["ber", "ter", "di", "ke", "se"] {
        if let Some(rest) = w.strip_prefix(plain) {
            out.push(rest.to_string());
        }
    }
    out.retain(|f| char_len(f) >= MIN_ROOT_CHARS);
    out
}

/// All forms reachable by stripping up to `MAX_PREFIXES` prefixes, breadth-first.
fn prefix_forms(base: &str) -> Vec<String> {
    let mut forms: Vec<String> = Vec::new();
    let mut frontier = vec![base.to_string()];
    for _ in 0..MAX_PREFIXES {
        let mut next = Vec::new();
        for f in &frontier {
            for opt in prefix_options(f) {
                if !forms.contains(&opt) {
                    forms.push(opt.clone());
                    next.push(opt);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    forms
}
