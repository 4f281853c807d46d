// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{ExtractorError, Result};
use crate::extractor::vocabulary::default_vocabulary;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractionConfig {
    /// Keyword vocabulary for the severity/outcome scan. Matching is
    /// case-insensitive; hits are reported in canonical lowercase.
    #[serde(default = "default_vocabulary")]
    pub keywords: Vec<String>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LOG_INDICATORS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| ExtractorError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ExtractorError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            extraction: ExtractionConfig {
                keywords: default_vocabulary(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.extraction.keywords.is_empty() {
            return Err(ExtractorError::Config(
                "extraction.keywords must not be empty".to_string(),
            ));
        }

        if self.extraction.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ExtractorError::Config(
                "extraction.keywords contains a blank entry".to_string(),
            ));
        }

        Ok(())
    }
}
