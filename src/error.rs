//! Error types for the tool rental engine.
//!
//! Validation of a rental request is the only failure the pricing path can
//! produce. Catalog loading has its own variants so that a bad catalog file
//! is reported separately from a bad request.

use thiserror::Error;

/// Message returned when a request asks for fewer than one rental day.
pub const INVALID_RENTAL_DAYS: &str = "Rental day count must be 1 or greater.";

/// Message returned when a discount falls outside 0..=100.
pub const INVALID_DISCOUNT_PERCENT: &str = "Discount percent must be between 0 and 100.";

/// Message returned when the due date cannot be represented on the calendar.
pub const DUE_DATE_OUT_OF_RANGE: &str = "Due date is out of range.";

/// The main error type for the tool rental engine.
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::invalid_request("Rental day count must be 1 or greater.");
/// assert_eq!(error.to_string(), "Rental day count must be 1 or greater.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    /// The rental request failed validation. The message is shown verbatim.
    #[error("{message}")]
    InvalidRequest {
        /// Human-readable reason the request was rejected.
        message: String,
    },

    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl RentalError {
    /// Builds an [`RentalError::InvalidRequest`] from any message.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        RentalError::InvalidRequest {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
