//! Core library for real-estate transaction listing analysis.
//!
//! This crate provides:
//! - Registry listing extraction (areas, prices, floors, metadata)
//! - Shared-area classification into parking-related and general
//! - Unit price derivation from the transaction total
//! - Area, price and ratio formulas over a single parameter record

pub mod calculator;
pub mod error;
pub mod listing;
pub mod models;

pub use calculator::{compute_all, compute_areas, compute_prices, compute_ratios};
pub use error::{ListingError, PingjiaError, Result};
pub use listing::rules::{chinese_to_number, classify, derive_unit_price, AreaCategory, AreaClassifier};
pub use listing::{parse_listing, ExtractionResult, ListingParser, RegistryListingParser};
pub use models::config::{ClassifierConfig, OutputConfig, PingjiaConfig};
pub use models::listing::{CommonAreaEntry, MetaInfo, Parameters};
pub use models::results::{AreaResult, Calculation, PriceResult, RatioResult};
