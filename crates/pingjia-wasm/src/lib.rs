//! WASM bindings for registry listing extraction and calculation.
//!
//! This crate provides WebAssembly bindings for the browser form.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use pingjia_core::{
    AreaCategory, AreaClassifier, ClassifierConfig, ListingParser, Parameters,
    RegistryListingParser,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn params_from_js(params: JsValue) -> Result<Parameters, JsValue> {
    serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse pasted listing text.
///
/// Returns `{ data, meta, warnings }`, or throws the error message.
#[wasm_bindgen]
pub fn parse_listing(text: &str) -> Result<JsValue, JsValue> {
    let result = pingjia_core::parse_listing(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&result)
}

/// Compute the area breakdown for a parameters object.
#[wasm_bindgen]
pub fn compute_areas(params: JsValue) -> Result<JsValue, JsValue> {
    to_js(&pingjia_core::compute_areas(&params_from_js(params)?))
}

/// Compute building and total prices for a parameters object.
#[wasm_bindgen]
pub fn compute_prices(params: JsValue) -> Result<JsValue, JsValue> {
    to_js(&pingjia_core::compute_prices(&params_from_js(params)?))
}

/// Compute area ratios for a parameters object.
#[wasm_bindgen]
pub fn compute_ratios(params: JsValue) -> Result<JsValue, JsValue> {
    to_js(&pingjia_core::compute_ratios(&params_from_js(params)?))
}

/// Compute all three result groups at once.
#[wasm_bindgen]
pub fn compute_all(params: JsValue) -> Result<JsValue, JsValue> {
    to_js(&pingjia_core::compute_all(&params_from_js(params)?))
}

/// A parameters object with every field at its neutral default.
#[wasm_bindgen]
pub fn empty_parameters() -> Result<JsValue, JsValue> {
    to_js(&Parameters::empty())
}

/// Convert a floor label such as `十四層` to its number.
#[wasm_bindgen]
pub fn chinese_to_number(text: &str) -> u32 {
    pingjia_core::chinese_to_number(text)
}

fn category_name(category: AreaCategory) -> String {
    match category {
        AreaCategory::Parking => "parking".to_string(),
        AreaCategory::General => "general".to_string(),
    }
}

/// Classify a shared-area description as `parking` or `general`.
#[wasm_bindgen]
pub fn classify_area(description: &str) -> String {
    category_name(pingjia_core::classify(description))
}

/// Listing importer with configurable keyword tables.
#[wasm_bindgen]
pub struct ListingImporter {
    config: ClassifierConfig,
    parser: RegistryListingParser,
}

#[wasm_bindgen]
impl ListingImporter {
    /// Create an importer with the default keyword tables.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
            parser: RegistryListingParser::new(),
        }
    }

    /// Replace the keywords that force a shared area to be general.
    #[wasm_bindgen]
    pub fn set_general_keywords(&mut self, keywords: Vec<String>) {
        self.config.general_keywords = keywords;
        self.rebuild();
    }

    /// Replace the keywords that mark a shared area as parking-related.
    #[wasm_bindgen]
    pub fn set_parking_keywords(&mut self, keywords: Vec<String>) {
        self.config.parking_keywords = keywords;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.parser =
            RegistryListingParser::new().with_classifier(AreaClassifier::from_config(&self.config));
    }

    /// Classify a description with this importer's tables.
    #[wasm_bindgen]
    pub fn classify(&self, description: &str) -> String {
        category_name(AreaClassifier::from_config(&self.config).classify(description))
    }

    /// Parse listing text into `{ data, meta, warnings }`.
    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self
            .parser
            .parse(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&result)
    }

    /// Parse listing text and merge it into the current form parameters.
    ///
    /// Premiums and the land share ratio stay as edited; building age is kept
    /// unless the listing states one.
    #[wasm_bindgen]
    pub fn apply(&self, current: JsValue, text: &str) -> Result<JsValue, JsValue> {
        let mut params = params_from_js(current)?;
        let result = self
            .parser
            .parse(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        params.apply_import(&result.data);
        to_js(&params)
    }
}

impl Default for ListingImporter {
    fn default() -> Self {
        Self::new()
    }
}
