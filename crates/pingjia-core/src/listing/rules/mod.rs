//! Rule-based field extractors for registry listings.

pub mod areas;
pub mod classifier;
pub mod dates;
pub mod floors;
pub mod meta;
pub mod numerals;
pub mod parking;
pub mod patterns;
pub mod unit_price;

pub use areas::{
    extract_balcony_area, extract_canopy_area, extract_land_area, extract_main_building_area,
    sum_common_areas, AreaExtractor, AreaLabel, CommonAreaExtractor, CommonAreaTotals,
};
pub use classifier::{classify, AreaCategory, AreaClassifier};
pub use dates::parse_roc_date;
pub use floors::{extract_building_age, extract_floors, FloorInfo};
pub use meta::extract_meta;
pub use numerals::chinese_to_number;
pub use parking::{extract_parking, ParkingDetail, ParkingInfo};
pub use unit_price::{derive_unit_price, to_ten_thousands};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value matched in the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the scanned text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Parse a registry amount such as `14,340,000` or `10.26`.
pub fn parse_registry_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Decimal::from_str(&cleaned).ok()
}

/// Parse a registry amount into a float, 0 when unparseable.
pub fn parse_number(s: &str) -> f64 {
    parse_registry_amount(s)
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}

/// Round to two decimals, midpoints away from zero.
pub fn round2(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}
