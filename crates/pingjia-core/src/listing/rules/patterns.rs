//! Regex patterns for registry listing extraction.
//!
//! Labels accept an ASCII or full-width colon followed by any whitespace, which
//! covers the single-line copy and the tab-delimited browser copy alike.
//! Numbers are ASCII `[0-9]` only; `\d` would also accept full-width digits.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Marker phrase every registry listing carries
    pub static ref LISTING_MARKER: Regex = Regex::new(r"交易總價").unwrap();

    // Summary prices
    pub static ref TOTAL_PRICE: Regex = Regex::new(
        r"交易總價[:：]\s*([0-9,]+)\s*元"
    ).unwrap();

    pub static ref PARKING_PRICE_SUMMARY: Regex = Regex::new(
        r"車位交易總價[:：]\s*([0-9,]+)"
    ).unwrap();

    // Parking data table: "<price>元 <area>坪" after the price column header
    pub static ref PARKING_PRICE_DETAIL: Regex = Regex::new(
        r"(?s)車位交易價格.*?([0-9,]+)\s*元\s+([0-9]+(?:\.[0-9]+)?)\s*坪"
    ).unwrap();

    // Floor "<current>/<total>"
    pub static ref FLOOR: Regex = Regex::new(
        r"樓別/樓高[:：]\s*(.+?)/(.+?)(?:\s|$)"
    ).unwrap();

    pub static ref BUILDING_AGE: Regex = Regex::new(
        r"屋齡[:：][ \t]*([0-9]+(?:\.[0-9]+)?)"
    ).unwrap();

    // Building areas
    pub static ref MAIN_BUILDING_AREA: Regex = Regex::new(
        r"主建物\s*([0-9]+(?:\.[0-9]+)?)\s*坪"
    ).unwrap();

    pub static ref BALCONY_AREA: Regex = Regex::new(
        r"陽台\s*([0-9]+(?:\.[0-9]+)?)\s*坪"
    ).unwrap();

    pub static ref CANOPY_AREA: Regex = Regex::new(
        r"雨遮\s*([0-9]+(?:\.[0-9]+)?)\s*坪"
    ).unwrap();

    // Shared area, optionally followed by its item list
    pub static ref COMMON_AREA: Regex = Regex::new(
        r"([0-9]+(?:\.[0-9]+)?)\s*坪\s+共同使用部分(?:[，,]\s*本共同使用部分項目有[：:]([^。]+))?"
    ).unwrap();

    // Section headers (copies may space out each character)
    pub static ref LAND_SECTION: Regex = Regex::new(
        r"(?s)土\s*地\s*資\s*料(.*?)建\s*物\s*資\s*料"
    ).unwrap();

    pub static ref PARKING_SECTION: Regex = Regex::new(
        r"車\s*位\s*資\s*料"
    ).unwrap();

    pub static ref LAND_SHARE_ENTRY: Regex = Regex::new(
        r"([0-9]+(?:\.[0-9]+)?)\s*坪\s+持分移轉"
    ).unwrap();

    // Enumerations
    pub static ref BUILDING_MATERIAL: Regex = Regex::new(
        r"鋼骨鋼筋混凝土構造|鋼筋混凝土構造|鋼骨構造|加強磚造|磚造|木造"
    ).unwrap();

    pub static ref COMPLETION_DATE: Regex = Regex::new(
        r"([0-9]{2,3})/([0-9]{1,2})\s+[零一二三四五六七八九十百0-9]+層"
    ).unwrap();

    pub static ref PARKING_TYPE: Regex = Regex::new(
        r"坡道平面|坡道機械|升降平面|升降機械|塔式車位|一樓平面"
    ).unwrap();

    pub static ref PARKING_FLOOR: Regex = Regex::new(
        r"(?:地下|地上)[一二三四五六七八九十0-9]+樓"
    ).unwrap();

    // Summary labels, each ending at the next label or end of line
    pub static ref META_ADDRESS: Regex = Regex::new(
        r"(?m)地段位置或門牌[:：]\s*(.*?)(?:\s*社區名稱|$)"
    ).unwrap();

    pub static ref META_COMMUNITY_NAME: Regex = Regex::new(
        r"(?m)社區名稱[:：]\s*(.*?)(?:\s*交易標的|$)"
    ).unwrap();

    pub static ref META_TRANSACTION_TARGET: Regex = Regex::new(
        r"(?m)交易標的[:：]\s*(.*?)(?:\s*交易日期|$)"
    ).unwrap();

    pub static ref META_TRANSACTION_DATE: Regex = Regex::new(
        r"交易日期[:：]\s*(\S+)"
    ).unwrap();

    pub static ref META_UNIT_PRICE: Regex = Regex::new(
        r"交易單價約[:：]\s*([0-9,]+)"
    ).unwrap();

    pub static ref META_TOTAL_AREA: Regex = Regex::new(
        r"交易總面積[:：]\s*([0-9]+(?:\.[0-9]+)?)"
    ).unwrap();

    pub static ref META_MAIN_BUILDING_RATIO: Regex = Regex::new(
        r"主建物佔比\(%\)[:：]\s*(\S+)"
    ).unwrap();

    pub static ref META_TRANSACTION_COUNT: Regex = Regex::new(
        r"(?m)交易棟筆數[:：]\s*(.*?)(?:\s*建物型態|$)"
    ).unwrap();

    pub static ref META_BUILDING_TYPE: Regex = Regex::new(
        r"(?m)建物型態[:：]\s*(.*?)(?:\s*屋齡|$)"
    ).unwrap();

    pub static ref META_LAYOUT: Regex = Regex::new(
        r"(?m)建物現況格局[:：]\s*(.*?)(?:\s*主要用途|$)"
    ).unwrap();

    pub static ref META_MAIN_USAGE: Regex = Regex::new(
        r"(?m)主要用途[:：]\s*(.*?)(?:\s*(?:車位交易總價|樓別/樓高)|$)"
    ).unwrap();

    pub static ref META_MANAGEMENT: Regex = Regex::new(
        r"(?m)管理組織[:：]\s*(.*?)(?:\s*有無電梯|$)"
    ).unwrap();

    pub static ref META_HAS_ELEVATOR: Regex = Regex::new(
        r"(?m)有無電梯[:：]\s*(.*?)(?:\s*備註|$)"
    ).unwrap();

    pub static ref META_NOTE: Regex = Regex::new(
        r"(?m)備註[:：]\s*(.*?)(?:\s*交易明細|$)"
    ).unwrap();
}
