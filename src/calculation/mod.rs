//! Pricing logic for the tool rental engine.
//!
//! This module contains the calendar rules that classify a date as weekday,
//! weekend or holiday, the daily rate selection driven by the checkout date,
//! and the charge, discount and rounding arithmetic.

mod calendar;
mod charges;
mod daily_rate;

pub use calendar::{
    DayCategory, classify, holiday_name, is_holiday, is_weekend, rental_period_dates,
};
pub use charges::{ChargeBreakdown, calculate_charges, round_currency};
pub use daily_rate::{DailyRateResult, daily_rate, rate_for_category};
