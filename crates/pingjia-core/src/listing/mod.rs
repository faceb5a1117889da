//! Registry listing extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, RegistryListingParser};

use crate::error::ListingError;

/// Result type for listing extraction.
pub type Result<T> = std::result::Result<T, ListingError>;

/// Trait for listing parsers.
pub trait ListingParser {
    /// Parse pasted listing text into parameters and metadata.
    ///
    /// Fails only when the text is empty or not a registry listing; any
    /// individual field that cannot be found is left at its default.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Parse a listing with the default keyword tables.
pub fn parse_listing(text: &str) -> Result<ExtractionResult> {
    RegistryListingParser::new().parse(text)
}
