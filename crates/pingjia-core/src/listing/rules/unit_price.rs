//! Unit price derivation from extracted totals.

use super::round2;
use crate::models::listing::Parameters;

/// Amounts at or above this are raw currency rather than ten-thousands.
pub const RAW_CURRENCY_THRESHOLD: f64 = 10_000.0;

/// Currency per ten-thousand unit.
pub const TEN_THOUSAND: f64 = 10_000.0;

/// Normalize a price to ten-thousand units when it looks like raw currency.
pub fn to_ten_thousands(price: f64) -> f64 {
    if price >= RAW_CURRENCY_THRESHOLD {
        price / TEN_THOUSAND
    } else {
        price
    }
}

/// Back-compute the building unit price in ten-thousands per ping.
///
/// `total_price` is raw currency; `params.parking_price` may be raw or
/// pre-scaled. Shared areas smaller than the parking area are clamped to zero.
/// Returns 0 when the building area or total price is not positive.
pub fn derive_unit_price(params: &Parameters, total_price: f64) -> f64 {
    let parking_price = to_ten_thousands(params.parking_price);
    let common_without_parking =
        (params.common_area1 + params.common_area2 - params.parking_area).max(0.0);
    let building_area = params.main_building_area
        + params.balcony_area
        + params.canopy_area
        + common_without_parking;
    let total_price = total_price / TEN_THOUSAND;

    if building_area > 0.0 && total_price > 0.0 {
        round2((total_price - parking_price) / building_area)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params(parking_price: f64) -> Parameters {
        Parameters {
            main_building_area: 23.37,
            balcony_area: 3.08,
            canopy_area: 0.47,
            common_area1: 9.27,
            common_area2: 14.31,
            parking_area: 10.26,
            parking_price,
            ..Parameters::empty()
        }
    }

    #[test]
    fn test_to_ten_thousands() {
        assert_eq!(to_ten_thousands(1_440_000.0), 144.0);
        assert_eq!(to_ten_thousands(144.0), 144.0);
        assert_eq!(to_ten_thousands(10_000.0), 1.0);
        assert_eq!(to_ten_thousands(9_999.0), 9_999.0);
    }

    #[test]
    fn test_raw_and_scaled_parking_agree() {
        let raw = derive_unit_price(&sample_params(1_440_000.0), 14_340_000.0);
        let scaled = derive_unit_price(&sample_params(144.0), 14_340_000.0);
        // (1434 - 144) / 40.24
        assert_eq!(raw, 32.06);
        assert_eq!(raw, scaled);
    }

    #[test]
    fn test_negative_shared_area_is_clamped() {
        let params = Parameters {
            main_building_area: 30.0,
            common_area1: 2.0,
            parking_area: 10.0,
            ..Parameters::empty()
        };
        assert_eq!(derive_unit_price(&params, 9_000_000.0), 30.0);
    }

    #[test]
    fn test_zero_inputs() {
        assert_eq!(derive_unit_price(&Parameters::empty(), 9_000_000.0), 0.0);
        assert_eq!(derive_unit_price(&sample_params(0.0), 0.0), 0.0);
    }
}
