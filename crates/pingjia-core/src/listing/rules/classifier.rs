//! Shared-area classification into parking-related and general.

use serde::{Deserialize, Serialize};

use crate::models::config::ClassifierConfig;
use crate::models::listing::CommonAreaEntry;

/// Facility keywords that always make a shared area general.
pub const DEFAULT_GENERAL_KEYWORDS: &[&str] = &[
    "電梯", "梯廳", "機房", "水箱", "管委會", "垃圾", "電信", "台電", "安全梯", "排煙", "消防",
    "公共服務",
];

/// Keywords of parking-related shared areas.
pub const DEFAULT_PARKING_KEYWORDS: &[&str] = &["停車空間", "車道", "停車場"];

/// Category of a shared area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaCategory {
    /// Counts toward `common_area1`.
    Parking,
    /// Counts toward `common_area2`.
    General,
}

/// Keyword-table classifier for shared-area descriptions.
#[derive(Debug, Clone)]
pub struct AreaClassifier {
    general_keywords: Vec<String>,
    parking_keywords: Vec<String>,
}

impl AreaClassifier {
    /// Create a classifier with the default keyword tables.
    pub fn new() -> Self {
        Self::from_config(&ClassifierConfig::default())
    }

    /// Create a classifier from configured keyword tables.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self {
            general_keywords: config.general_keywords.clone(),
            parking_keywords: config.parking_keywords.clone(),
        }
    }

    /// Classify a shared-area description.
    ///
    /// General keywords are checked first and win over parking keywords.
    pub fn classify(&self, description: &str) -> AreaCategory {
        let contains_any = |keywords: &[String]| {
            keywords
                .iter()
                .any(|k| !k.is_empty() && description.contains(k.as_str()))
        };

        if contains_any(&self.general_keywords) {
            AreaCategory::General
        } else if contains_any(&self.parking_keywords) {
            AreaCategory::Parking
        } else {
            AreaCategory::General
        }
    }

    /// Classify an entry; entries without a description are general.
    pub fn classify_entry(&self, entry: &CommonAreaEntry) -> AreaCategory {
        match &entry.description {
            Some(description) => self.classify(description),
            None => AreaCategory::General,
        }
    }
}

impl Default for AreaClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a description with the default keyword tables.
pub fn classify(description: &str) -> AreaCategory {
    AreaClassifier::new().classify(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parking_description() {
        assert_eq!(
            classify("防空避難室兼停車空間、車道、停車空間等３項"),
            AreaCategory::Parking
        );
    }

    #[test]
    fn test_general_keyword_wins_over_parking() {
        assert_eq!(classify("電梯、停車空間"), AreaCategory::General);
        assert_eq!(
            classify("行動不便者電梯、梯廳、停車空間、發電機房"),
            AreaCategory::General
        );
    }

    #[test]
    fn test_unknown_description_is_general() {
        assert_eq!(classify("無障礙通路"), AreaCategory::General);
        assert_eq!(classify(""), AreaCategory::General);
    }

    #[test]
    fn test_entry_without_description_is_general() {
        let classifier = AreaClassifier::new();
        let entry = CommonAreaEntry {
            area: 5.0,
            description: None,
        };
        assert_eq!(classifier.classify_entry(&entry), AreaCategory::General);
    }

    #[test]
    fn test_configured_tables() {
        let config = ClassifierConfig {
            general_keywords: vec!["電梯".to_string()],
            parking_keywords: vec!["機械車位".to_string()],
        };
        let classifier = AreaClassifier::from_config(&config);

        assert_eq!(classifier.classify("機械車位"), AreaCategory::Parking);
        assert_eq!(classifier.classify("停車空間"), AreaCategory::General);
    }
}
