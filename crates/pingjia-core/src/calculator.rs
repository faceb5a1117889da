//! Area, price and ratio formulas.
//!
//! Every function is a pure projection of [`Parameters`]. Nothing is clamped:
//! a zero building area produces non-finite values, left for the caller to
//! display or reject.

use crate::models::listing::Parameters;
use crate::models::results::{AreaResult, Calculation, PriceResult, RatioResult};

/// Compute the area breakdown.
pub fn compute_areas(params: &Parameters) -> AreaResult {
    let main_building_with_attachments =
        params.main_building_area + params.balcony_area + params.canopy_area;
    let common_areas = params.common_area1 + params.common_area2;
    let common_areas_without_parking = common_areas - params.parking_area;
    let building_total_area = main_building_with_attachments + common_areas_without_parking;

    AreaResult {
        main_building_with_attachments,
        common_areas,
        common_areas_without_parking,
        building_total_area,
        total_area_with_parking: building_total_area + params.parking_area,
    }
}

/// Compute building and total prices.
pub fn compute_prices(params: &Parameters) -> PriceResult {
    let areas = compute_areas(params);

    let base_building_price = areas.building_total_area * params.unit_price;
    let adjusted_building_price = base_building_price * params.floor_premium * params.age_premium;

    PriceResult {
        base_building_price,
        adjusted_building_price,
        total_price: adjusted_building_price + params.parking_price,
        actual_unit_price: adjusted_building_price / areas.building_total_area,
    }
}

/// Compute area ratios in percent.
pub fn compute_ratios(params: &Parameters) -> RatioResult {
    let areas = compute_areas(params);
    let building = areas.building_total_area;

    let main_building_ratio_without_parking = params.main_building_area / building * 100.0;

    RatioResult {
        main_building_ratio: params.main_building_area / areas.total_area_with_parking * 100.0,
        main_building_ratio_without_parking,
        public_facility_ratio: areas.common_areas_without_parking / building * 100.0,
        attachment_ratio: (params.balcony_area + params.canopy_area) / building * 100.0,
        actual_usage_ratio: main_building_ratio_without_parking,
        usable_area_ratio: areas.main_building_with_attachments / building * 100.0,
    }
}

/// Compute all three result groups from one parameter snapshot.
pub fn compute_all(params: &Parameters) -> Calculation {
    Calculation {
        areas: compute_areas(params),
        prices: compute_prices(params),
        ratios: compute_ratios(params),
    }
}
