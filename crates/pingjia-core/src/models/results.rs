//! Derived calculation results.

use serde::{Deserialize, Serialize};

/// Area breakdown in ping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaResult {
    /// Main building plus balcony and canopy.
    pub main_building_with_attachments: f64,

    /// Both shared-area categories, parking included.
    pub common_areas: f64,

    /// Shared areas with the parking area deducted.
    pub common_areas_without_parking: f64,

    /// Building area excluding parking.
    pub building_total_area: f64,

    /// Building area including parking.
    pub total_area_with_parking: f64,
}

/// Prices in ten-thousand currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResult {
    /// Building area times unit price.
    pub base_building_price: f64,

    /// Base price after floor and age premiums.
    pub adjusted_building_price: f64,

    /// Adjusted building price plus parking.
    pub total_price: f64,

    /// Adjusted building price per ping of building area.
    pub actual_unit_price: f64,
}

/// Area ratios in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioResult {
    /// Main building over total area including parking.
    pub main_building_ratio: f64,

    /// Main building over building area excluding parking.
    pub main_building_ratio_without_parking: f64,

    /// Shared areas (parking deducted) over building area.
    pub public_facility_ratio: f64,

    /// Balcony and canopy over building area.
    pub attachment_ratio: f64,

    /// Indoor usage share; equal to `main_building_ratio_without_parking`.
    pub actual_usage_ratio: f64,

    /// Main building and attachments over building area.
    pub usable_area_ratio: f64,
}

/// All three result groups computed from one parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub areas: AreaResult,
    pub prices: PriceResult,
    pub ratios: RatioResult,
}

impl Calculation {
    /// Whether every value is finite (false when the building area is zero).
    pub fn is_finite(&self) -> bool {
        let a = &self.areas;
        let p = &self.prices;
        let r = &self.ratios;
        [
            a.main_building_with_attachments,
            a.common_areas,
            a.common_areas_without_parking,
            a.building_total_area,
            a.total_area_with_parking,
            p.base_building_price,
            p.adjusted_building_price,
            p.total_price,
            p.actual_unit_price,
            r.main_building_ratio,
            r.main_building_ratio_without_parking,
            r.public_facility_ratio,
            r.attachment_ratio,
            r.actual_usage_ratio,
            r.usable_area_ratio,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
