//! Text rendering of rental agreements.
//!
//! The report lists one field per line in a fixed order, with dates as
//! `MM/DD/YY`, money as `$0.00` and the discount as a whole percentage.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::round_currency;
use crate::models::RentalAgreement;

/// Formats a date as `MM/DD/YY`.
///
/// # Example
///
/// ```
/// use tool_rental::report::format_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(format_date(NaiveDate::from_ymd_opt(2015, 9, 3).unwrap()), "09/03/15");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}

/// Formats an amount as `$0.00`, rounding half-up to cents.
///
/// # Example
///
/// ```
/// use tool_rental::report::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(995, 2)), "$9.95");
/// assert_eq!(format_currency(Decimal::ZERO), "$0.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", round_currency(amount))
}

/// Renders the twelve-line agreement summary.
pub fn render_report(agreement: &RentalAgreement) -> String {
    agreement.to_string()
}

impl fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tool code: {}", self.tool_code())?;
        writeln!(f, "Tool type: {}", self.tool_type())?;
        writeln!(f, "Tool brand: {}", self.tool_brand())?;
        writeln!(f, "Rental days: {}", self.rental_days())?;
        writeln!(f, "Checkout date: {}", format_date(self.checkout_date()))?;
        writeln!(f, "Due date: {}", format_date(self.due_date()))?;
        writeln!(
            f,
            "Daily rental charge: {}",
            format_currency(self.daily_rental_charge())
        )?;
        writeln!(f, "Charge days: {}", self.charge_days())?;
        writeln!(
            f,
            "Pre-discount charge: {}",
            format_currency(self.pre_discount_charge())
        )?;
        writeln!(f, "Discount percent: {}%", self.discount_percent())?;
        writeln!(
            f,
            "Discount amount: {}",
            format_currency(self.discount_amount())
        )?;
        writeln!(f, "Final charge: {}", format_currency(self.final_charge()))
    }
}
