// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod extractor;
pub mod mcp;
pub mod models;
pub mod utils;

pub use config::{Config, ExtractionConfig};
pub use error::{ExtractorError, Result};
pub use extractor::{DEFAULT_KEYWORDS, IndicatorExtractor, default_vocabulary};
pub use models::{IndicatorCategory, IndicatorCounts, IndicatorSet};
pub use utils::Validator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let extractor = IndicatorExtractor::with_defaults();
        assert!(extractor.extract("").is_empty());
    }
}
