//! Rental request model.
//!
//! A [`RentalRequest`] carries the four inputs entered at checkout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{INVALID_DISCOUNT_PERCENT, INVALID_RENTAL_DAYS, RentalError, RentalResult};

/// The inputs for pricing a single rental.
///
/// Values are not checked on construction; [`RentalRequest::validate`] runs
/// before any pricing takes place.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalRequest;
/// use chrono::NaiveDate;
///
/// let request = RentalRequest::new("LADW", 5, 10, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
/// assert!(request.validate().is_ok());
///
/// let request = RentalRequest::new("LADW", 0, 10, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
/// assert_eq!(
///     request.validate().unwrap_err().to_string(),
///     "Rental day count must be 1 or greater."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// Catalog code of the tool being rented (e.g., "LADW").
    pub tool_code: String,
    /// Number of days the tool is rented for. Must be 1 or greater.
    pub rental_days: i32,
    /// Whole-number discount percentage, 0 through 100.
    pub discount_percent: i32,
    /// The date the tool leaves the counter.
    pub checkout_date: NaiveDate,
}

impl RentalRequest {
    /// Creates a new rental request.
    pub fn new(
        tool_code: impl Into<String>,
        rental_days: i32,
        discount_percent: i32,
        checkout_date: NaiveDate,
    ) -> Self {
        Self {
            tool_code: tool_code.into(),
            rental_days,
            discount_percent,
            checkout_date,
        }
    }

    /// Checks the day count, then the discount.
    ///
    /// The first failing check determines the error message.
    pub fn validate(&self) -> RentalResult<()> {
        if self.rental_days < 1 {
            return Err(RentalError::invalid_request(INVALID_RENTAL_DAYS));
        }

        if !(0..=100).contains(&self.discount_percent) {
            return Err(RentalError::invalid_request(INVALID_DISCOUNT_PERCENT));
        }

        Ok(())
    }
}
