// file: src/extractor/mod.rs
// description: indicator extraction module exports
// reference: internal module structure

pub mod indicators;
pub mod patterns;
pub mod vocabulary;

pub use indicators::IndicatorExtractor;
pub use vocabulary::{DEFAULT_KEYWORDS, default_vocabulary};
