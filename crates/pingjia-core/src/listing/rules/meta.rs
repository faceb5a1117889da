//! Descriptive metadata extraction.

use regex::Regex;

use super::parking::{extract_parking_floor, extract_parking_type};
use super::parse_number;
use super::patterns::*;
use crate::models::listing::MetaInfo;

/// Capture a label's value, trimmed; empty when the label is missing.
fn capture_label(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// The last match of a pattern; later building records supersede earlier ones.
pub fn last_match<'t>(pattern: &Regex, text: &'t str) -> Option<regex::Captures<'t>> {
    pattern.captures_iter(text).last()
}

/// First known construction material anywhere in the text.
pub fn extract_building_material(text: &str) -> Option<String> {
    BUILDING_MATERIAL.find(text).map(|m| m.as_str().to_string())
}

/// Completion year/month of the most recently listed building record.
pub fn extract_completion_date(text: &str) -> Option<String> {
    last_match(&COMPLETION_DATE, text).map(|caps| format!("{}/{}", &caps[1], &caps[2]))
}

/// Extract every descriptive field. `total_price_raw` is left for the caller.
pub fn extract_meta(text: &str) -> MetaInfo {
    MetaInfo {
        address: capture_label(&META_ADDRESS, text),
        community_name: capture_label(&META_COMMUNITY_NAME, text),
        transaction_target: capture_label(&META_TRANSACTION_TARGET, text),
        transaction_date: capture_label(&META_TRANSACTION_DATE, text),
        transaction_count: capture_label(&META_TRANSACTION_COUNT, text),
        total_price_raw: 0.0,
        unit_price_per_ping: parse_number(&capture_label(&META_UNIT_PRICE, text)),
        total_area: parse_number(&capture_label(&META_TOTAL_AREA, text)),
        main_building_ratio: capture_label(&META_MAIN_BUILDING_RATIO, text),
        building_type: capture_label(&META_BUILDING_TYPE, text),
        layout: capture_label(&META_LAYOUT, text),
        main_usage: capture_label(&META_MAIN_USAGE, text),
        management: capture_label(&META_MANAGEMENT, text),
        has_elevator: capture_label(&META_HAS_ELEVATOR, text),
        note: capture_label(&META_NOTE, text),
        building_material: extract_building_material(text).unwrap_or_default(),
        completion_date: extract_completion_date(text).unwrap_or_default(),
        parking_type: extract_parking_type(text).unwrap_or_default(),
        parking_floor: extract_parking_floor(text).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_line_labels() {
        let text = "地段位置或門牌: 汐止區福德一路１７６巷００１５號四樓 社區名稱: 采采良品 \
                    交易標的: 房地(土地+建物)+車位 交易日期: 108/12/31 交易總價: 14,340,000 元 \
                    交易單價約: 320,565 (元/坪) 交易總面積: 50.51 坪 主建物佔比(%): 58.07%";
        let meta = extract_meta(text);

        assert_eq!(meta.address, "汐止區福德一路１７６巷００１５號四樓");
        assert_eq!(meta.community_name, "采采良品");
        assert_eq!(meta.transaction_target, "房地(土地+建物)+車位");
        assert_eq!(meta.transaction_date, "108/12/31");
        assert_eq!(meta.unit_price_per_ping, 320565.0);
        assert_eq!(meta.total_area, 50.51);
        assert_eq!(meta.main_building_ratio, "58.07%");
    }

    #[test]
    fn test_tab_delimited_labels() {
        let text = "地段位置或門牌:\t中山區民生東路一段\n社區名稱:\t\n交易標的:\t房地(土地+建物)\n管理組織:\t無\n有無電梯:\t無\n";
        let meta = extract_meta(text);

        assert_eq!(meta.address, "中山區民生東路一段");
        assert_eq!(meta.community_name, "");
        assert_eq!(meta.transaction_target, "房地(土地+建物)");
        assert_eq!(meta.management, "無");
        assert_eq!(meta.has_elevator, "無");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let meta = extract_meta("交易總價: 100 元");
        assert_eq!(meta, MetaInfo::default());
    }

    #[test]
    fn test_completion_date_takes_last_record() {
        let text = "鋼筋混凝土構造 109/11 十一層 0 主建物0.02坪 鋼筋混凝土構造 111/10 十四層 一層";
        assert_eq!(extract_completion_date(text).as_deref(), Some("111/10"));
        assert_eq!(extract_building_material(text).as_deref(), Some("鋼筋混凝土構造"));
    }

    #[test]
    fn test_completion_date_ignores_transaction_date() {
        assert_eq!(extract_completion_date("交易日期: 108/12/31 交易總價"), None);
        assert_eq!(extract_completion_date("加強磚造 75/3 四層").as_deref(), Some("75/3"));
    }

    #[test]
    fn test_full_width_completion_date_is_ignored() {
        let text = "鋼筋混凝土構造 １１１/１０ 十四層";
        assert_eq!(extract_completion_date(text), None);

        let meta = extract_meta(text);
        assert_eq!(meta.completion_date, "");
        assert_eq!(meta.completion_date_gregorian(), None);
    }

    #[test]
    fn test_material_takes_first_in_text_order() {
        let text = "加強磚造 75/3 五層 0 主建物15.00坪 鋼筋混凝土構造 111/10 十四層";
        assert_eq!(extract_building_material(text).as_deref(), Some("加強磚造"));
        assert_eq!(extract_completion_date(text).as_deref(), Some("111/10"));
    }

    #[test]
    fn test_material_variants() {
        assert_eq!(
            extract_building_material("鋼骨鋼筋混凝土構造 112/01 二十層").as_deref(),
            Some("鋼骨鋼筋混凝土構造")
        );
        assert_eq!(extract_building_material("加強磚造").as_deref(), Some("加強磚造"));
        assert_eq!(extract_building_material("木構造"), None);
    }
}
