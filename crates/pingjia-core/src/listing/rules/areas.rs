//! Building, shared and land area extraction.

use regex::Regex;
use tracing::debug;

use super::classifier::{AreaCategory, AreaClassifier};
use super::patterns::{
    BALCONY_AREA, CANOPY_AREA, COMMON_AREA, LAND_SECTION, LAND_SHARE_ENTRY, MAIN_BUILDING_AREA,
};
use super::{parse_number, round2, ExtractionMatch, FieldExtractor};
use crate::models::listing::CommonAreaEntry;

/// Labeled building areas of the form `<label><area>坪`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaLabel {
    /// `主建物`
    MainBuilding,
    /// `陽台`
    Balcony,
    /// `雨遮`
    Canopy,
}

impl AreaLabel {
    fn pattern(&self) -> &'static Regex {
        match self {
            AreaLabel::MainBuilding => &MAIN_BUILDING_AREA,
            AreaLabel::Balcony => &BALCONY_AREA,
            AreaLabel::Canopy => &CANOPY_AREA,
        }
    }
}

/// Extractor for a labeled building area.
pub struct AreaExtractor {
    label: AreaLabel,
}

impl AreaExtractor {
    pub fn new(label: AreaLabel) -> Self {
        Self { label }
    }
}

impl FieldExtractor for AreaExtractor {
    type Output = ExtractionMatch<f64>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.label
            .pattern()
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(parse_number(&caps[1]), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Sum every main building entry.
///
/// A listing reports one entry per partial-ownership transfer of the unit.
pub fn extract_main_building_area(text: &str) -> f64 {
    let matches = AreaExtractor::new(AreaLabel::MainBuilding).extract_all(text);
    debug!("Found {} main building entries", matches.len());
    round2(matches.iter().map(|m| m.value).sum())
}

/// First balcony entry.
pub fn extract_balcony_area(text: &str) -> f64 {
    AreaExtractor::new(AreaLabel::Balcony)
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(0.0)
}

/// First canopy entry.
pub fn extract_canopy_area(text: &str) -> f64 {
    AreaExtractor::new(AreaLabel::Canopy)
        .extract(text)
        .map(|m| m.value)
        .unwrap_or(0.0)
}

/// Extractor for shared-area entries.
pub struct CommonAreaExtractor;

impl CommonAreaExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommonAreaExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CommonAreaExtractor {
    type Output = ExtractionMatch<CommonAreaEntry>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        COMMON_AREA
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let entry = CommonAreaEntry {
                    area: parse_number(&caps[1]),
                    description: caps.get(2).map(|d| d.as_str().trim().to_string()),
                };
                Some(
                    ExtractionMatch::new(entry, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Shared-area sums by category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CommonAreaTotals {
    /// Parking-related total (`common_area1`).
    pub parking_related: f64,
    /// General total (`common_area2`).
    pub general: f64,
    /// Number of entries found.
    pub entries: usize,
}

/// Classify and sum every shared-area entry.
///
/// Sums are rounded once, after accumulation.
pub fn sum_common_areas(text: &str, classifier: &AreaClassifier) -> CommonAreaTotals {
    let mut totals = CommonAreaTotals::default();

    for m in CommonAreaExtractor::new().extract_all(text) {
        let category = classifier.classify_entry(&m.value);
        debug!(
            "Shared area {} ping at {:?} classified as {:?}: {}",
            m.value.area, m.position, category, m.source
        );
        match category {
            AreaCategory::Parking => totals.parking_related += m.value.area,
            AreaCategory::General => totals.general += m.value.area,
        }
        totals.entries += 1;
    }

    totals.parking_related = round2(totals.parking_related);
    totals.general = round2(totals.general);
    totals
}

/// Sum the proportional land transfers of the land data section.
///
/// Zero-area parcels are skipped. Text outside the section is ignored.
pub fn extract_land_area(text: &str) -> f64 {
    let Some(section) = LAND_SECTION.captures(text).and_then(|caps| caps.get(1)) else {
        return 0.0;
    };

    let total: f64 = LAND_SHARE_ENTRY
        .captures_iter(section.as_str())
        .map(|caps| parse_number(&caps[1]))
        .filter(|area| *area > 0.0)
        .sum();

    round2(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_building_entries_are_summed() {
        let text = "0 主建物0.02坪 持分移轉 店鋪 0 主建物0.03坪 持分移轉 辦公室 0 主建物23.32坪 全筆移轉";
        assert_eq!(extract_main_building_area(text), 23.37);
    }

    #[test]
    fn test_main_building_tab_layout() {
        let text = "主建物\t23.32坪\n主建物\t1.00 坪";
        assert_eq!(extract_main_building_area(text), 24.32);
    }

    #[test]
    fn test_balcony_and_canopy_take_first() {
        let text = "四層,陽台,雨遮 陽台3.08坪 雨遮0.47坪 陽台9.99坪";
        assert_eq!(extract_balcony_area(text), 3.08);
        assert_eq!(extract_canopy_area(text), 0.47);
    }

    #[test]
    fn test_missing_areas_default_to_zero() {
        assert_eq!(extract_main_building_area("沒有資料"), 0.0);
        assert_eq!(extract_balcony_area("沒有資料"), 0.0);
        assert_eq!(extract_canopy_area("沒有資料"), 0.0);
    }

    #[test]
    fn test_common_area_entries() {
        let text = "0 2.62坪 共同使用部分，本共同使用部分項目有：防空避難室兼停車空間、車道、停車空間等３項。 \
                    0 14.28坪 共同使用部分，本共同使用部分項目有：電梯、梯廳、停車空間等３項。";
        let entries = CommonAreaExtractor::new().extract_all(text);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value.area, 2.62);
        assert_eq!(
            entries[0].value.description.as_deref(),
            Some("防空避難室兼停車空間、車道、停車空間等３項")
        );

        let totals = sum_common_areas(text, &AreaClassifier::new());
        assert_eq!(totals.parking_related, 2.62);
        assert_eq!(totals.general, 14.28);
        assert_eq!(totals.entries, 2);
    }

    #[test]
    fn test_common_area_without_description_is_general() {
        let text = "0\t5.12坪\t共同使用部分\t鋼筋混凝土構造\t111/10\t十四層";
        let entries = CommonAreaExtractor::new().extract_all(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].value.description, None);

        let totals = sum_common_areas(text, &AreaClassifier::new());
        assert_eq!(totals.parking_related, 0.0);
        assert_eq!(totals.general, 5.12);
    }

    #[test]
    fn test_match_position_and_source() {
        let text = "四層,陽台 陽台3.08坪";
        let m = AreaExtractor::new(AreaLabel::Balcony).extract(text).unwrap();
        assert_eq!(m.value, 3.08);
        assert_eq!(m.source, "陽台3.08坪");
        let (start, end) = m.position.unwrap();
        assert_eq!(&text[start..end], "陽台3.08坪");
    }

    #[test]
    fn test_full_width_digits_are_not_numbers() {
        assert_eq!(extract_main_building_area("主建物１２.５坪"), 0.0);
        assert_eq!(extract_main_building_area("主建物1０.5坪"), 0.0);
        assert_eq!(extract_balcony_area("陽台３坪"), 0.0);
        assert!(CommonAreaExtractor::new()
            .extract_all("０.５坪 共同使用部分")
            .iter()
            .all(|m| m.value.area != 0.5));
    }

    #[test]
    fn test_common_areas_rounded_after_accumulation() {
        let text = "0 0.005坪 共同使用部分 0 0.005坪 共同使用部分 0 0.005坪 共同使用部分";
        let totals = sum_common_areas(text, &AreaClassifier::new());
        assert_eq!(totals.entries, 3);
        // Rounding each entry first would give 0.03
        assert_eq!(totals.general, 0.02);
        assert_eq!(totals.parking_related, 0.0);
    }

    #[test]
    fn test_land_area_restricted_to_section() {
        let text = "交易總價: 1 元 9.99坪 持分移轉 \
                    土 地 資 料 福德段270地號 6.79坪 持分移轉(10224/920000) \
                    福德段276地號 0.00坪 持分移轉(15/600000) \
                    建 物 資 料 0 主建物0.02坪 持分移轉";
        assert_eq!(extract_land_area(text), 6.79);
    }

    #[test]
    fn test_land_area_without_section() {
        assert_eq!(extract_land_area("6.79坪 持分移轉"), 0.0);
    }
}
