//! Rental agreement model.
//!
//! A [`RentalAgreement`] is the priced result of a
//! [`RentalRequest`](super::RentalRequest). It is only produced by the
//! agreement builder and exposes its fields read-only.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::DayCategory;

use super::AuditTrace;

/// A fully priced rental agreement.
///
/// Tool details are copied in at checkout, so later catalog changes never
/// alter an agreement that was already produced.
///
/// # Example
///
/// ```
/// use tool_rental::models::{RentalAgreement, RentalRequest};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let request = RentalRequest::new("LADW", 5, 0, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
/// let agreement = RentalAgreement::build(&request).unwrap();
///
/// assert_eq!(agreement.tool_type(), "Ladder");
/// assert_eq!(agreement.due_date(), NaiveDate::from_ymd_opt(2024, 7, 20).unwrap());
/// assert_eq!(agreement.final_charge(), Decimal::new(995, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalAgreement {
    pub(crate) tool_code: String,
    pub(crate) tool_type: String,
    pub(crate) tool_brand: String,
    pub(crate) rental_days: u32,
    pub(crate) checkout_date: NaiveDate,
    pub(crate) due_date: NaiveDate,
    pub(crate) day_category: DayCategory,
    pub(crate) daily_rental_charge: Decimal,
    pub(crate) charge_days: u32,
    pub(crate) pre_discount_charge: Decimal,
    pub(crate) discount_percent: u32,
    pub(crate) discount_amount: Decimal,
    pub(crate) final_charge: Decimal,
    pub(crate) audit_trace: AuditTrace,
}

impl RentalAgreement {
    /// The catalog code of the rented tool.
    pub fn tool_code(&self) -> &str {
        &self.tool_code
    }

    /// The tool type, or "Unknown" for codes missing from the catalog.
    pub fn tool_type(&self) -> &str {
        &self.tool_type
    }

    /// The tool brand, or "Unknown" for codes missing from the catalog.
    pub fn tool_brand(&self) -> &str {
        &self.tool_brand
    }

    /// Number of days the tool is rented for.
    pub fn rental_days(&self) -> u32 {
        self.rental_days
    }

    /// The date the tool left the counter.
    pub fn checkout_date(&self) -> NaiveDate {
        self.checkout_date
    }

    /// The checkout date plus the rental days.
    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// The category of the checkout date, which selected the daily rate.
    pub fn day_category(&self) -> DayCategory {
        self.day_category
    }

    /// The rate charged for every charge day.
    pub fn daily_rental_charge(&self) -> Decimal {
        self.daily_rental_charge
    }

    /// Number of days the daily rate was applied to.
    pub fn charge_days(&self) -> u32 {
        self.charge_days
    }

    /// Charge before the discount, rounded to cents.
    pub fn pre_discount_charge(&self) -> Decimal {
        self.pre_discount_charge
    }

    /// Whole-number discount percentage.
    pub fn discount_percent(&self) -> u32 {
        self.discount_percent
    }

    /// Discount taken off the pre-discount charge, rounded to cents.
    pub fn discount_amount(&self) -> Decimal {
        self.discount_amount
    }

    /// The amount owed.
    pub fn final_charge(&self) -> Decimal {
        self.final_charge
    }

    /// The pricing decisions that produced this agreement.
    pub fn audit_trace(&self) -> &AuditTrace {
        &self.audit_trace
    }
}
