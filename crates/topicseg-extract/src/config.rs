//! Extraction configuration.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use topicseg_core::SegmentConfig;

use crate::error::ExtractError;

/// Configuration for keyword-anchored extraction.
///
/// Keyword matching is a case-sensitive substring test against the raw
/// sentence text; no normalization is applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Keywords whose sentences anchor extraction; empty matches nothing
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Segmentation settings
    #[serde(default)]
    pub segment: SegmentConfig,
}

impl ExtractConfig {
    pub fn new(keywords: Vec<String>) -> Self {
        Self {
            keywords,
            segment: SegmentConfig::default(),
        }
    }

    /// Keyword set for mining reaction contexts from chemistry prose.
    pub fn reaction_default() -> Self {
        let keywords = [
            "yields", "yielded", "yield", "yielding", "afforded", "afford", "affording",
            "affords", "produce", "produces", "produced", "producing", "obtained",
        ];
        Self::new(keywords.iter().map(|k| k.to_string()).collect())
    }

    /// Load keywords from a newline-delimited reader, skipping blank lines.
    pub fn keywords_from_reader(reader: impl BufRead) -> Result<Vec<String>, ExtractError> {
        let mut keywords = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let keyword = line.trim();
            if !keyword.is_empty() {
                keywords.push(keyword.to_string());
            }
        }
        Ok(keywords)
    }
}
