//! Parking price, area, type and floor extraction.

use super::patterns::{
    PARKING_FLOOR, PARKING_PRICE_DETAIL, PARKING_PRICE_SUMMARY, PARKING_SECTION, PARKING_TYPE,
};
use super::parse_number;

/// A row of the parking data table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkingDetail {
    /// Price in raw currency.
    pub price: f64,
    /// Area in ping.
    pub area: f64,
}

/// Parking figures found in a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParkingInfo {
    /// Summary total, already in ten-thousand units.
    pub summary_price: Option<f64>,
    /// Parking data table entry.
    pub detail: Option<ParkingDetail>,
}

impl ParkingInfo {
    /// The parking price to use, raw or pre-scaled.
    pub fn price(&self) -> f64 {
        detail_overrides_summary(self.summary_price, self.detail.map(|d| d.price))
    }

    /// Parking area, only known from the parking data table.
    pub fn area(&self) -> f64 {
        self.detail.map(|d| d.area).unwrap_or(0.0)
    }
}

/// The table entry wins over the summary total whenever both exist.
pub fn detail_overrides_summary(summary: Option<f64>, detail: Option<f64>) -> f64 {
    detail.or(summary).unwrap_or(0.0)
}

/// Extract the summary total and the parking table entry.
pub fn extract_parking(text: &str) -> ParkingInfo {
    let summary_price = PARKING_PRICE_SUMMARY
        .captures(text)
        .map(|caps| parse_number(&caps[1]));

    let detail = PARKING_PRICE_DETAIL.captures(text).map(|caps| ParkingDetail {
        price: parse_number(&caps[1]),
        area: parse_number(&caps[2]),
    });

    ParkingInfo {
        summary_price,
        detail,
    }
}

/// Text following the parking data header.
pub fn parking_section(text: &str) -> Option<&str> {
    PARKING_SECTION.find(text).map(|m| &text[m.end()..])
}

/// Parking type from the parking data section.
pub fn extract_parking_type(text: &str) -> Option<String> {
    let section = parking_section(text)?;
    PARKING_TYPE.find(section).map(|m| m.as_str().to_string())
}

/// Parking floor from the parking data section.
pub fn extract_parking_floor(text: &str) -> Option<String> {
    let section = parking_section(text)?;
    PARKING_FLOOR.find(section).map(|m| m.as_str().to_string())
}
