//! Floor and building age extraction.

use super::numerals::chinese_to_number;
use super::parse_number;
use super::patterns::{BUILDING_AGE, FLOOR};

/// Floor of the unit and height of the building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloorInfo {
    pub current: u32,
    pub total: u32,
}

/// Extract the `樓別/樓高` pair.
pub fn extract_floors(text: &str) -> Option<FloorInfo> {
    let caps = FLOOR.captures(text)?;
    Some(FloorInfo {
        current: chinese_to_number(&caps[1]),
        total: chinese_to_number(&caps[2]),
    })
}

/// Extract the summary building age, when the registry states one.
pub fn extract_building_age(text: &str) -> Option<f64> {
    BUILDING_AGE.captures(text).map(|caps| parse_number(&caps[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chinese_floors() {
        let floors = extract_floors("車位交易總價: 144 樓別/樓高: 四層/十四層 管理組織: 有");
        assert_eq!(floors, Some(FloorInfo { current: 4, total: 14 }));
    }

    #[test]
    fn test_tab_layout_and_digits() {
        let floors = extract_floors("樓別/樓高:\t12層/25層\n管理組織:\t有");
        assert_eq!(floors, Some(FloorInfo { current: 12, total: 25 }));
    }

    #[test]
    fn test_floor_at_end_of_text() {
        let floors = extract_floors("樓別/樓高: 三層/五層");
        assert_eq!(floors, Some(FloorInfo { current: 3, total: 5 }));
    }

    #[test]
    fn test_missing_floor() {
        assert_eq!(extract_floors("管理組織: 有"), None);
    }

    #[test]
    fn test_building_age() {
        assert_eq!(extract_building_age("屋齡: 6.5 建物現況格局"), Some(6.5));
        assert_eq!(extract_building_age("屋齡: 建物現況格局: 3房2廳2衛"), None);
    }
}
