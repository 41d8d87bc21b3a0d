//! Charge and discount arithmetic.
//!
//! Every rental day is a charge day, even when the selected rate is zero.
//! Monetary amounts are rounded to cents, half-up, as they are produced.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::AuditStep;

/// Rounds an amount to currency precision (2 decimal places, half-up).
///
/// The result always carries exactly two decimal places.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(1005, 3)), Decimal::new(101, 2));
/// assert_eq!(round_currency(Decimal::new(1004, 3)), Decimal::new(100, 2));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// The monetary breakdown of a rental.
#[derive(Debug, Clone)]
pub struct ChargeBreakdown {
    /// Number of days the daily rate is applied to.
    pub charge_days: u32,
    /// `charge_days × daily_rate`, rounded to cents.
    pub pre_discount_charge: Decimal,
    /// `pre_discount_charge × discount_percent / 100`, rounded to cents.
    pub discount_amount: Decimal,
    /// `pre_discount_charge − discount_amount`.
    pub final_charge: Decimal,
    /// Audit steps recording each figure, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Computes charge days, pre-discount charge, discount and final charge.
///
/// `discount_percent` is expected to be within 0..=100; it is clamped to
/// that range so the discount can never exceed the pre-discount charge.
///
/// # Arguments
///
/// * `daily_rate` - The rate applied to every charge day
/// * `rental_days` - The number of rental days
/// * `discount_percent` - Whole-number discount percentage
/// * `first_step_number` - The step number for the first audit step
///
/// # Examples
///
/// ```
/// use tool_rental::calculation::calculate_charges;
/// use rust_decimal::Decimal;
///
/// let breakdown = calculate_charges(Decimal::new(299, 2), 2, 50, 1);
/// assert_eq!(breakdown.charge_days, 2);
/// assert_eq!(breakdown.pre_discount_charge, Decimal::new(598, 2));
/// assert_eq!(breakdown.discount_amount, Decimal::new(299, 2));
/// assert_eq!(breakdown.final_charge, Decimal::new(299, 2));
/// ```
pub fn calculate_charges(
    daily_rate: Decimal,
    rental_days: u32,
    discount_percent: u32,
    first_step_number: u32,
) -> ChargeBreakdown {
    let discount_percent = discount_percent.min(100);

    let charge_days = rental_days;
    let pre_discount_charge = round_currency(Decimal::from(charge_days) * daily_rate);
    let discount_amount = round_currency(
        pre_discount_charge * Decimal::from(discount_percent) / Decimal::ONE_HUNDRED,
    );
    let final_charge = pre_discount_charge - discount_amount;

    let audit_steps = vec![
        AuditStep {
            step_number: first_step_number,
            rule_id: "charge_days".to_string(),
            rule_name: "Charge Days".to_string(),
            input: serde_json::json!({
                "rental_days": rental_days
            }),
            output: serde_json::json!({
                "charge_days": charge_days
            }),
            reasoning: format!("All {} rental days are charged", charge_days),
        },
        AuditStep {
            step_number: first_step_number + 1,
            rule_id: "pre_discount_charge".to_string(),
            rule_name: "Pre-Discount Charge".to_string(),
            input: serde_json::json!({
                "charge_days": charge_days,
                "daily_rate": daily_rate.to_string()
            }),
            output: serde_json::json!({
                "pre_discount_charge": pre_discount_charge.to_string()
            }),
            reasoning: format!(
                "{} days x ${} = ${}",
                charge_days, daily_rate, pre_discount_charge
            ),
        },
        AuditStep {
            step_number: first_step_number + 2,
            rule_id: "discount".to_string(),
            rule_name: "Discount".to_string(),
            input: serde_json::json!({
                "pre_discount_charge": pre_discount_charge.to_string(),
                "discount_percent": discount_percent
            }),
            output: serde_json::json!({
                "discount_amount": discount_amount.to_string()
            }),
            reasoning: format!(
                "${} x {}% = ${} (rounded half-up to cents)",
                pre_discount_charge, discount_percent, discount_amount
            ),
        },
        AuditStep {
            step_number: first_step_number + 3,
            rule_id: "final_charge".to_string(),
            rule_name: "Final Charge".to_string(),
            input: serde_json::json!({
                "pre_discount_charge": pre_discount_charge.to_string(),
                "discount_amount": discount_amount.to_string()
            }),
            output: serde_json::json!({
                "final_charge": final_charge.to_string()
            }),
            reasoning: format!(
                "${} - ${} = ${}",
                pre_discount_charge, discount_amount, final_charge
            ),
        },
    ];

    ChargeBreakdown {
        charge_days,
        pre_discount_charge,
        discount_amount,
        final_charge,
        audit_steps,
    }
}
