pub mod analysis;

pub use analysis::{AnalysisConfig, AspectEntry, Language, StemmingConfig, StopwordConfig, TfidfConfig};
