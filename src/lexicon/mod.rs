//! Static configuration data: stopwords, polarity lexicon, aspect taxonomy, root words.
//! Read-only after first access; components receive them through explicit objects.

pub mod aspects;
pub mod polarity;
pub mod roots;
pub mod stopwords;

pub use stopwords::StopwordSet;
