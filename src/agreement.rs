//! Agreement builder.
//!
//! Turns a [`RentalRequest`] into a [`RentalAgreement`]: validate, resolve the
//! tool, compute the due date, select the daily rate, compute the charges.
//! Either every field is produced or the request is rejected.

use chrono::{Days, NaiveDate};
use tracing::{debug, info, warn};

use crate::calculation::{
    DayCategory, calculate_charges, classify, daily_rate, rental_period_dates,
};
use crate::config::{ToolCatalog, ToolSpec};
use crate::error::{DUE_DATE_OUT_OF_RANGE, RentalError, RentalResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, RentalAgreement, RentalRequest, SINGLE_RATE_WARNING,
    UNKNOWN_TOOL_WARNING,
};

impl RentalAgreement {
    /// Prices a request against the built-in tool catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RentalError::InvalidRequest`] when the rental day count is
    /// below 1 or the discount is outside 0..=100.
    pub fn build(request: &RentalRequest) -> RentalResult<Self> {
        build_agreement(request, ToolCatalog::standard())
    }

    /// Prices a request against the given catalog.
    pub fn build_with_catalog(
        request: &RentalRequest,
        catalog: &ToolCatalog,
    ) -> RentalResult<Self> {
        build_agreement(request, catalog)
    }
}

/// Validates a rental request and prices it against a catalog.
///
/// Unknown tool codes are not an error: they price at zero with "Unknown"
/// type and brand, and an `UNKNOWN_TOOL` warning is recorded.
///
/// # Example
///
/// ```
/// use tool_rental::agreement::build_agreement;
/// use tool_rental::config::ToolCatalog;
/// use tool_rental::models::RentalRequest;
/// use chrono::NaiveDate;
///
/// let request = RentalRequest::new("CHNS", 3, 10, NaiveDate::from_ymd_opt(2024, 7, 13).unwrap());
/// let agreement = build_agreement(&request, ToolCatalog::standard()).unwrap();
/// assert!(agreement.final_charge().is_zero());
///
/// let request = RentalRequest::new("CHNS", 3, 101, NaiveDate::from_ymd_opt(2024, 7, 13).unwrap());
/// let error = build_agreement(&request, ToolCatalog::standard()).unwrap_err();
/// assert_eq!(error.to_string(), "Discount percent must be between 0 and 100.");
/// ```
pub fn build_agreement(
    request: &RentalRequest,
    catalog: &ToolCatalog,
) -> RentalResult<RentalAgreement> {
    if let Err(err) = request.validate() {
        warn!(
            tool_code = %request.tool_code,
            rental_days = request.rental_days,
            discount_percent = request.discount_percent,
            error = %err,
            "Rental request rejected"
        );
        return Err(err);
    }

    // Both values are known to be non-negative after validation.
    let rental_days = request.rental_days as u32;
    let discount_percent = request.discount_percent as u32;
    let checkout_date = request.checkout_date;

    let due_date = checkout_date
        .checked_add_days(Days::new(u64::from(rental_days)))
        .ok_or_else(|| RentalError::invalid_request(DUE_DATE_OUT_OF_RANGE))?;

    let mut trace = AuditTrace::default();

    let tool = resolve_tool(&request.tool_code, catalog, &mut trace);

    let step_number = trace.next_step_number();
    trace.steps.push(AuditStep {
        step_number,
        rule_id: "due_date".to_string(),
        rule_name: "Due Date".to_string(),
        input: serde_json::json!({
            "checkout_date": checkout_date.to_string(),
            "rental_days": rental_days
        }),
        output: serde_json::json!({
            "due_date": due_date.to_string()
        }),
        reasoning: format!("{} + {} days = {}", checkout_date, rental_days, due_date),
    });

    let rate = daily_rate(&tool, checkout_date, trace.next_step_number());
    debug!(
        tool_code = %tool.code,
        checkout_date = %checkout_date,
        day_category = %rate.category,
        rate = %rate.rate,
        "Daily rate selected"
    );
    trace.steps.push(rate.audit_step);

    if let Some(warning) = single_rate_warning(checkout_date, rental_days, rate.category) {
        debug!(tool_code = %tool.code, "{}", warning.message);
        trace.warnings.push(warning);
    }

    let charges = calculate_charges(
        rate.rate,
        rental_days,
        discount_percent,
        trace.next_step_number(),
    );
    trace.steps.extend(charges.audit_steps);

    info!(
        tool_code = %tool.code,
        rental_days,
        discount_percent,
        final_charge = %charges.final_charge,
        "Rental agreement priced"
    );

    Ok(RentalAgreement {
        tool_code: request.tool_code.clone(),
        tool_type: tool.tool_type,
        tool_brand: tool.brand,
        rental_days,
        checkout_date,
        due_date,
        day_category: rate.category,
        daily_rental_charge: rate.rate,
        charge_days: charges.charge_days,
        pre_discount_charge: charges.pre_discount_charge,
        discount_percent,
        discount_amount: charges.discount_amount,
        final_charge: charges.final_charge,
        audit_trace: trace,
    })
}

fn resolve_tool(code: &str, catalog: &ToolCatalog, trace: &mut AuditTrace) -> ToolSpec {
    let found = catalog.contains(code);
    let tool = catalog.lookup(code);

    if !found {
        warn!(tool_code = %code, "Tool code not in catalog, pricing at zero");
        trace.warnings.push(AuditWarning {
            code: UNKNOWN_TOOL_WARNING.to_string(),
            message: format!(
                "Tool code '{}' is not in the catalog; type and brand are Unknown and all rates are 0.00",
                code
            ),
        });
    }

    let step_number = trace.next_step_number();
    trace.steps.push(AuditStep {
        step_number,
        rule_id: "tool_lookup".to_string(),
        rule_name: "Tool Lookup".to_string(),
        input: serde_json::json!({
            "tool_code": code
        }),
        output: serde_json::json!({
            "found": found,
            "tool_type": tool.tool_type,
            "brand": tool.brand
        }),
        reasoning: if found {
            format!("{} is a {} {}", code, tool.brand, tool.tool_type)
        } else {
            format!("{} is not in the catalog", code)
        },
    });

    tool
}

/// Flags rentals whose period contains days of another category than the
/// checkout day. The checkout day's rate still applies to every day.
///
/// Any seven consecutive days include both weekdays and a weekend, so only
/// shorter rentals need their days classified.
fn single_rate_warning(
    checkout_date: NaiveDate,
    rental_days: u32,
    checkout_category: DayCategory,
) -> Option<AuditWarning> {
    let mixed = rental_days >= 7
        || rental_period_dates(checkout_date, rental_days)
            .any(|date| classify(date) != checkout_category);

    if !mixed {
        return None;
    }

    Some(AuditWarning {
        code: SINGLE_RATE_WARNING.to_string(),
        message: format!(
            "Rental period includes days outside the checkout day category ({}); \
             the checkout day rate was applied to all {} rental days",
            checkout_category, rental_days
        ),
    })
}
