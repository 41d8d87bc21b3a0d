//! Audit trace models.
//!
//! Every rental agreement records the pricing decisions that produced it so
//! that the counter can explain a charge line by line.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a pricing decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning raised while pricing a rental.
///
/// Warnings never block checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
}

/// Warning code raised when a tool code is missing from the catalog.
pub const UNKNOWN_TOOL_WARNING: &str = "UNKNOWN_TOOL";

/// Warning code raised when the rental period contains days whose category
/// differs from the checkout day, which still set the rate for every day.
pub const SINGLE_RATE_WARNING: &str = "SINGLE_RATE_APPLIED";

/// The complete audit trace for a rental agreement.
///
/// # Example
///
/// ```
/// use tool_rental::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(!trace.has_warning("UNKNOWN_TOOL"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pricing steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during pricing.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns the number the next recorded step should carry.
    pub fn next_step_number(&self) -> u32 {
        self.steps.len() as u32 + 1
    }

    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Test Rule".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "test".to_string(),
        }
    }

    #[test]
    fn test_next_step_number_follows_recorded_steps() {
        let mut trace = AuditTrace::default();
        assert_eq!(trace.next_step_number(), 1);

        trace.steps.push(make_step(1, "tool_lookup"));
        trace.steps.push(make_step(2, "due_date"));
        assert_eq!(trace.next_step_number(), 3);
    }

    #[test]
    fn test_has_warning() {
        let trace = AuditTrace {
            steps: vec![],
            warnings: vec![AuditWarning {
                code: UNKNOWN_TOOL_WARNING.to_string(),
                message: "Tool code 'ZZZZ' is not in the catalog".to_string(),
            }],
        };

        assert!(trace.has_warning(UNKNOWN_TOOL_WARNING));
        assert!(!trace.has_warning(SINGLE_RATE_WARNING));
    }

    #[test]
    fn test_audit_trace_serialization_round_trip() {
        let trace = AuditTrace {
            steps: vec![make_step(1, "tool_lookup")],
            warnings: vec![],
        };

        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: AuditTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
