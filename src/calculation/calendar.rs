//! Calendar rules for rental pricing.
//!
//! This module classifies a calendar date as a weekday, weekend day or
//! holiday. Only two holidays are observed: Independence Day on July 4
//! (never shifted when it lands on a weekend) and Labor Day, recognised only
//! when September 1 itself is a Monday.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The pricing category of a day.
///
/// When a date is both a holiday and a weekend day, it is a holiday.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayCategory;
///
/// assert_eq!(DayCategory::Holiday.to_string(), "Holiday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday or Sunday, not a holiday.
    Weekend,
    /// An observed holiday, whatever the day of the week.
    Holiday,
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Weekday => write!(f, "Weekday"),
            DayCategory::Weekend => write!(f, "Weekend"),
            DayCategory::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Returns true if the date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2024-07-13 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 7, 13).unwrap()));
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the name of the holiday observed on the date, if any.
pub fn holiday_name(date: NaiveDate) -> Option<&'static str> {
    match (date.month(), date.day()) {
        (7, 4) => Some("Independence Day"),
        (9, 1) if date.weekday() == Weekday::Mon => Some("Labor Day"),
        _ => None,
    }
}

/// Returns true if the date is an observed holiday.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::is_holiday;
/// use chrono::NaiveDate;
///
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2020, 7, 4).unwrap()));
/// // 2025-09-01 is a Monday
/// assert!(is_holiday(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()));
/// // 2024-09-02 is the first Monday of September 2024, but not September 1
/// assert!(!is_holiday(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()));
/// ```
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_name(date).is_some()
}

/// Classifies a date as holiday, weekend or weekday, in that priority.
pub fn classify(date: NaiveDate) -> DayCategory {
    if is_holiday(date) {
        DayCategory::Holiday
    } else if is_weekend(date) {
        DayCategory::Weekend
    } else {
        DayCategory::Weekday
    }
}

/// Returns the dates of a rental period: the day after checkout through the
/// due date, inclusive.
///
/// Dates are produced lazily. The sequence stops early if the period runs
/// past the end of the calendar.
pub fn rental_period_dates(
    checkout_date: NaiveDate,
    rental_days: u32,
) -> impl Iterator<Item = NaiveDate> {
    (1..=u64::from(rental_days))
        .map_while(move |offset| checkout_date.checked_add_days(Days::new(offset)))
}
