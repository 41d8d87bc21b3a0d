//! Daily rate selection.
//!
//! A rental is billed at a single daily rate, chosen from the tool's price
//! table by the category of the checkout date alone. The days between
//! checkout and the due date are not consulted.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::ToolSpec;
use crate::models::AuditStep;

use super::calendar::{DayCategory, classify, holiday_name};

/// The result of selecting a daily rate, including the audit step.
#[derive(Debug, Clone)]
pub struct DailyRateResult {
    /// The rate charged for every rental day.
    pub rate: Decimal,
    /// The category of the checkout date that selected the rate.
    pub category: DayCategory,
    /// The audit step recording this selection.
    pub audit_step: AuditStep,
}

/// Returns the tool's rate for a day category.
pub fn rate_for_category(tool: &ToolSpec, category: DayCategory) -> Decimal {
    match category {
        DayCategory::Holiday => tool.holiday_rate,
        DayCategory::Weekend => tool.weekend_rate,
        DayCategory::Weekday => tool.weekday_rate,
    }
}

/// Selects the daily rate for a rental from its checkout date.
///
/// The checkout date is classified as holiday, else weekend, else weekday,
/// and the matching rate from the tool's price table is returned.
///
/// # Examples
///
/// ```
/// use tool_rental::calculation::{DayCategory, daily_rate};
/// use tool_rental::config::ToolCatalog;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ladder = ToolCatalog::standard().lookup("LADW");
///
/// // 2024-07-15 is a Monday
/// let result = daily_rate(&ladder, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(), 1);
/// assert_eq!(result.category, DayCategory::Weekday);
/// assert_eq!(result.rate, Decimal::new(199, 2));
/// ```
pub fn daily_rate(tool: &ToolSpec, checkout_date: NaiveDate, step_number: u32) -> DailyRateResult {
    let category = classify(checkout_date);
    let rate = rate_for_category(tool, category);

    let reasoning = match (category, holiday_name(checkout_date)) {
        (DayCategory::Holiday, Some(name)) => format!(
            "Checkout on {} ({}) uses the {} holiday rate ${}",
            checkout_date, name, tool.code, rate
        ),
        _ => format!(
            "Checkout on {} ({}) uses the {} {} rate ${}",
            checkout_date,
            checkout_date.format("%A"),
            tool.code,
            category.to_string().to_lowercase(),
            rate
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_rate".to_string(),
        rule_name: "Daily Rate Selection".to_string(),
        input: serde_json::json!({
            "tool_code": tool.code,
            "checkout_date": checkout_date.to_string(),
            "weekday_rate": tool.weekday_rate.to_string(),
            "weekend_rate": tool.weekend_rate.to_string(),
            "holiday_rate": tool.holiday_rate.to_string()
        }),
        output: serde_json::json!({
            "day_category": category,
            "rate": rate.to_string()
        }),
        reasoning,
    };

    DailyRateResult {
        rate,
        category,
        audit_step,
    }
}
