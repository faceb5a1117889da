//! Listing data models: the numeric parameter record and descriptive metadata.

use chrono::NaiveDate;
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::listing::rules::dates::parse_roc_date;

/// Numeric parameters of a property transaction.
///
/// Areas are in ping (≈3.3058 m²), prices in ten-thousand currency units.
/// This record is the single input of the calculator; every result type is
/// derived from it on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Parameters {
    /// Main building area.
    pub main_building_area: f64,

    /// Balcony area (attachment).
    pub balcony_area: f64,

    /// Canopy area (attachment).
    pub canopy_area: f64,

    /// Parking-related shared area.
    pub common_area1: f64,

    /// General shared area.
    pub common_area2: f64,

    /// Parking space area.
    pub parking_area: f64,

    /// Building unit price per ping, excluding parking.
    pub unit_price: f64,

    /// Parking price.
    pub parking_price: f64,

    /// Land transfer area.
    pub land_area: f64,

    /// Total floors of the building.
    #[serde(deserialize_with = "deserialize_floor")]
    pub floors: u32,

    /// Floor of the unit.
    #[serde(deserialize_with = "deserialize_floor")]
    pub current_floor: u32,

    /// Building age in years.
    pub building_age: f64,

    /// Floor premium coefficient (1.0 = no adjustment).
    pub floor_premium: f64,

    /// Age premium coefficient (1.0 = no adjustment).
    pub age_premium: f64,

    /// Land share ratio.
    pub land_share_ratio: f64,
}

/// Accept `14` and `14.0` alike; form inputs hand over every number as a float.
fn deserialize_floor<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(de::Error::custom(format!(
            "expected a whole, non-negative floor number, got {}",
            value
        )))
    }
}

impl Parameters {
    /// Create a parameter record with every field at its neutral default.
    pub fn empty() -> Self {
        Self {
            main_building_area: 0.0,
            balcony_area: 0.0,
            canopy_area: 0.0,
            common_area1: 0.0,
            common_area2: 0.0,
            parking_area: 0.0,
            unit_price: 0.0,
            parking_price: 0.0,
            land_area: 0.0,
            floors: 0,
            current_floor: 0,
            building_age: 0.0,
            floor_premium: 1.0,
            age_premium: 1.0,
            land_share_ratio: 0.0,
        }
    }

    /// Merge an imported record into this one.
    ///
    /// Extracted fields replace the current values. The premiums and the land
    /// share ratio are user adjustments the registry never carries, so they are
    /// kept. Building age is replaced only when the import found one.
    pub fn apply_import(&mut self, imported: &Parameters) {
        self.main_building_area = imported.main_building_area;
        self.balcony_area = imported.balcony_area;
        self.canopy_area = imported.canopy_area;
        self.common_area1 = imported.common_area1;
        self.common_area2 = imported.common_area2;
        self.parking_area = imported.parking_area;
        self.unit_price = imported.unit_price;
        self.parking_price = imported.parking_price;
        self.land_area = imported.land_area;
        self.floors = imported.floors;
        self.current_floor = imported.current_floor;
        if imported.building_age > 0.0 {
            self.building_age = imported.building_age;
        }
    }

    /// Check the record and return any issues found.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let fields = [
            ("mainBuildingArea", self.main_building_area),
            ("balconyArea", self.balcony_area),
            ("canopyArea", self.canopy_area),
            ("commonArea1", self.common_area1),
            ("commonArea2", self.common_area2),
            ("parkingArea", self.parking_area),
            ("unitPrice", self.unit_price),
            ("parkingPrice", self.parking_price),
            ("landArea", self.land_area),
            ("buildingAge", self.building_age),
            ("floorPremium", self.floor_premium),
            ("agePremium", self.age_premium),
            ("landShareRatio", self.land_share_ratio),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                issues.push(format!("{} is not a finite number", name));
            } else if value < 0.0 {
                issues.push(format!("{} is negative ({})", name, value));
            }
        }

        if self.current_floor > self.floors && self.floors > 0 {
            issues.push(format!(
                "Current floor ({}) is above the building height ({})",
                self.current_floor, self.floors
            ));
        }

        if self.common_area1 + self.common_area2 < self.parking_area {
            issues.push(format!(
                "Shared areas ({:.2}) are smaller than the parking area ({:.2})",
                self.common_area1 + self.common_area2,
                self.parking_area
            ));
        }

        let building_area = self.main_building_area
            + self.balcony_area
            + self.canopy_area
            + self.common_area1
            + self.common_area2
            - self.parking_area;
        if building_area == 0.0 {
            issues.push("Building total area is zero".to_string());
        }

        issues
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::empty()
    }
}

/// A shared-area entry found in the building section of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonAreaEntry {
    /// Area in ping.
    pub area: f64,

    /// Item list following the entry, absent in the no-description layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Descriptive fields of a listing, used for reporting only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetaInfo {
    /// Land section or street address.
    pub address: String,

    /// Community (building complex) name.
    pub community_name: String,

    /// Transaction target, e.g. land + building + parking.
    pub transaction_target: String,

    /// Transaction date in the ROC calendar (`108/12/31`).
    pub transaction_date: String,

    /// Number of land parcels, buildings and parking spaces transferred.
    pub transaction_count: String,

    /// Total price in raw currency.
    pub total_price_raw: f64,

    /// Registry-stated unit price in raw currency per ping.
    pub unit_price_per_ping: f64,

    /// Registry-stated total area in ping.
    pub total_area: f64,

    /// Registry-stated main building ratio, kept verbatim (`58.07%`).
    pub main_building_ratio: String,

    /// Building type.
    pub building_type: String,

    /// Current layout, e.g. rooms / halls / bathrooms.
    pub layout: String,

    /// Main usage.
    pub main_usage: String,

    /// Management organization presence.
    pub management: String,

    /// Elevator presence.
    pub has_elevator: String,

    /// Free-text note.
    pub note: String,

    /// Construction material.
    pub building_material: String,

    /// Completion year/month in the ROC calendar (`111/10`).
    pub completion_date: String,

    /// Parking type.
    pub parking_type: String,

    /// Parking floor.
    pub parking_floor: String,
}

impl MetaInfo {
    /// Transaction date converted to the Gregorian calendar.
    pub fn transaction_date_gregorian(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.transaction_date)
    }

    /// Completion date converted to the Gregorian calendar (first of the month).
    pub fn completion_date_gregorian(&self) -> Option<NaiveDate> {
        parse_roc_date(&self.completion_date)
    }
}
