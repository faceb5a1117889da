//! Error types for the pingjia-core library.

use thiserror::Error;

/// Main error type for the pingjia library.
#[derive(Error, Debug)]
pub enum PingjiaError {
    /// Listing validation error.
    #[error("listing error: {0}")]
    Listing(#[from] ListingError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised at the listing parse boundary.
///
/// Only the input gate can fail; individual field rules fall back to defaults.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingError {
    /// The text is empty or whitespace only.
    #[error("no listing text was provided; paste the full registry print page")]
    EmptyInput,

    /// The text lacks the total-price marker of a registry listing.
    #[error("text is not a recognized registry listing; copy the complete print page")]
    UnrecognizedFormat,
}

/// Result type for the pingjia library.
pub type Result<T> = std::result::Result<T, PingjiaError>;
