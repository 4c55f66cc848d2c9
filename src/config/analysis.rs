// src/config/analysis.rs
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, time::Duration};
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config/analysis.toml";
pub const ENV_CONFIG_PATH: &str = "REVIEW_ANALYZER_CONFIG_PATH";
pub const ENV_STEM_TIMEOUT_MS: &str = "REVIEW_ANALYZER_STEM_TIMEOUT_MS";

pub const DEFAULT_STEM_TIMEOUT_MS: u64 = 1_000;
const MAX_STEM_TIMEOUT_MS: u64 = 60_000;

fn default_stem_timeout_ms() -> u64 {
    DEFAULT_STEM_TIMEOUT_MS
}
fn default_max_features() -> usize {
    100
}
fn default_min_df() -> usize {
    2
}

/// Review language: picks the base stopword list and the stemmer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Indonesian,
    English,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StemmingConfig {
    #[serde(default = "default_stem_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for StemmingConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_STEM_TIMEOUT_MS,
        }
    }
}

impl StemmingConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopwordConfig {
    /// Extra domain noise words merged into the built-in list.
    #[serde(default)]
    pub extra: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TfidfConfig {
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    #[serde(default = "default_min_df")]
    pub min_df: usize,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            min_df: default_min_df(),
        }
    }
}

/// One aspect override entry; declared order is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AspectEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub stemming: StemmingConfig,
    #[serde(default)]
    pub stopwords: StopwordConfig,
    #[serde(default)]
    pub tfidf: TfidfConfig,
    /// Replaces the built-in taxonomy when non-empty.
    #[serde(default)]
    pub aspects: Vec<AspectEntry>,
}

impl AnalysisConfig {
    /// Parse from a TOML string and sanitize values.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let mut cfg: AnalysisConfig = toml::from_str(s)?;
        cfg.sanitize();
        Ok(cfg)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("reading analysis config from {}", path.display()))?;
        Self::from_toml_str(&data)
            .with_context(|| format!("parsing analysis config at {}", path.display()))
    }

    /// Resolve the config path from `$REVIEW_ANALYZER_CONFIG_PATH` or the default
    /// location. A missing default file yields built-in defaults; a missing file
    /// named explicitly by the env var is an error.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match env::var(ENV_CONFIG_PATH) {
            Ok(p) => {
                let pb = PathBuf::from(p);
                if !pb.exists() {
                    anyhow::bail!("{ENV_CONFIG_PATH} points to non-existent path");
                }
                Self::load_from_file(&pb)?
            }
            Err(_) => {
                let pb = PathBuf::from(DEFAULT_CONFIG_PATH);
                if pb.exists() {
                    Self::load_from_file(&pb)?
                } else {
                    info!(target: "config", "no {DEFAULT_CONFIG_PATH}; using built-in defaults");
                    Self::default()
                }
            }
        };

        if let Some(ms) = parse_timeout_env(env::var(ENV_STEM_TIMEOUT_MS).ok()) {
            cfg.stemming.timeout_ms = ms;
        }
        Ok(cfg)
    }

    fn sanitize(&mut self) {
        if self.stemming.timeout_ms == 0 || self.stemming.timeout_ms > MAX_STEM_TIMEOUT_MS {
            warn!(
                target: "config",
                timeout_ms = self.stemming.timeout_ms,
                "stemming timeout out of range; clamping"
            );
            self.stemming.timeout_ms = self.stemming.timeout_ms.clamp(1, MAX_STEM_TIMEOUT_MS);
        }
        if self.tfidf.max_features == 0 {
            self.tfidf.max_features = default_max_features();
        }
        if self.tfidf.min_df == 0 {
            self.tfidf.min_df = 1;
        }
        self.aspects.retain(|a| !a.name.trim().is_empty());
    }
}

// parse optional integer env and clamp to <1..=MAX_STEM_TIMEOUT_MS>
fn parse_timeout_env(raw: Option<String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .map(|v| v.clamp(1, MAX_STEM_TIMEOUT_MS))
}
