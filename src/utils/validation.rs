// file: src/utils/validation.rs
// description: input validation at the extraction boundary
// reference: input validation patterns

use crate::error::{ExtractorError, Result};
use std::fs;
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Decodes raw bytes as UTF-8 log text. Non-text input is rejected at
    /// the boundary rather than lossily coerced, so the extractor only ever
    /// sees what the caller actually supplied.
    pub fn decode_log_bytes(bytes: Vec<u8>) -> Result<String> {
        String::from_utf8(bytes).map_err(|e| {
            ExtractorError::Validation(format!("Input is not valid UTF-8 text: {}", e))
        })
    }

    /// Reads a log file, enforcing that it exists, is a regular file, and
    /// contains UTF-8 text.
    pub fn read_log_file(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ExtractorError::Validation(format!(
                "Log file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(ExtractorError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Self::decode_log_bytes(fs::read(path)?)
    }

    pub fn truncate_text(text: &str, max_length: usize) -> String {
        if text.len() <= max_length {
            text.to_string()
        } else {
            format!("{}...", &text[..max_length])
        }
    }
}
