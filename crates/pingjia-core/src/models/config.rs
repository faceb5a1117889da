//! Configuration structures for extraction and reporting.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{PingjiaError, Result};
use crate::listing::rules::classifier::{DEFAULT_GENERAL_KEYWORDS, DEFAULT_PARKING_KEYWORDS};

/// Main configuration for pingjia.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingjiaConfig {
    /// Shared-area classification tables.
    pub classifier: ClassifierConfig,

    /// Report output settings.
    pub output: OutputConfig,
}

/// Keyword tables for shared-area classification.
///
/// A description containing any general keyword is general, whatever else it
/// mentions. Otherwise a parking keyword makes it parking-related. Anything
/// else falls back to general.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Facility keywords that force the general category.
    pub general_keywords: Vec<String>,

    /// Keywords that mark a parking-related shared area.
    pub parking_keywords: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            general_keywords: DEFAULT_GENERAL_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            parking_keywords: DEFAULT_PARKING_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places for areas and prices in text reports.
    pub decimals: usize,

    /// Include computed areas, prices and ratios alongside parsed listings.
    pub include_results: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            decimals: 2,
            include_results: true,
        }
    }
}

impl PingjiaConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PingjiaError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
