//! Command line tests for the `tool-rental` binary.
//!
//! Each test runs the compiled binary and checks its exit status and output.

use std::process::{Command, Output};

use serde_json::Value;

// =============================================================================
// Test Helpers
// =============================================================================

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tool-rental"))
        .args(args)
        .env("RUST_LOG", "off")
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run tool-rental")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

// =============================================================================
// Checkout
// =============================================================================

#[test]
fn test_text_report() {
    let output = run(&[
        "--tool", "LADW", "--days", "5", "--discount", "20", "--checkout", "2024-07-15",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let report = stdout(&output);
    assert!(report.starts_with("Tool code: LADW\n"));
    assert!(report.contains("Checkout date: 07/15/24\n"));
    assert!(report.contains("Discount percent: 20%\n"));
    assert!(report.ends_with("Final charge: $7.96\n"));
}

#[test]
fn test_json_agreement() {
    let output = run(&[
        "-t", "JAKD", "-d", "2", "-p", "50", "-c", "2024-07-04", "--format", "json",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let agreement = json(&output);
    assert_eq!(agreement["tool_code"], "JAKD");
    assert_eq!(agreement["tool_brand"], "DeWalt");
    assert_eq!(agreement["rental_days"], 2);
    assert_eq!(agreement["checkout_date"], "2024-07-04");
    assert_eq!(agreement["due_date"], "2024-07-06");
    assert_eq!(agreement["day_category"], "holiday");
    assert_eq!(agreement["daily_rental_charge"], "2.99");
    assert_eq!(agreement["pre_discount_charge"], "5.98");
    assert_eq!(agreement["discount_percent"], 50);
    assert_eq!(agreement["discount_amount"], "2.99");
    assert_eq!(agreement["final_charge"], "2.99");
    assert!(agreement["audit_trace"]["steps"].is_array());
}

#[test]
fn test_catalog_file_is_used() {
    let output = run(&[
        "--catalog", "config/tools.yaml", "--tool", "CHNS", "--days", "3", "--checkout",
        "2024-07-13", "--format", "json",
    ]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(json(&output)["final_charge"], "0.00");
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_zero_days_reports_checkout_error() {
    let output = run(&["--tool", "JAKR", "--days", "0", "--checkout", "2015-09-03"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert_eq!(
        stderr(&output).trim_end(),
        "Error during checkout: Rental day count must be 1 or greater."
    );
}

#[test]
fn test_negative_discount_reports_checkout_error() {
    let output = run(&[
        "--tool", "JAKR", "--days", "5", "--discount", "-1", "--checkout", "2015-09-03",
    ]);

    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim_end(),
        "Error during checkout: Discount percent must be between 0 and 100."
    );
}

#[test]
fn test_missing_catalog_file_reports_load_error() {
    let output = run(&[
        "--catalog", "config/missing.yaml", "--tool", "LADW", "--days", "1",
    ]);

    assert!(!output.status.success());
    assert!(stderr(&output).starts_with("Error loading catalog: "));
}

#[test]
fn test_tool_and_days_are_required() {
    let output = run(&["--tool", "LADW"]);
    assert!(!output.status.success());
}

// =============================================================================
// Tool Listing
// =============================================================================

#[test]
fn test_list_tools_json() {
    let output = run(&["--list-tools", "--format", "json"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let tools = json(&output);
    let tools = tools.as_array().expect("tool list should be an array");
    let codes: Vec<&str> = tools.iter().filter_map(|t| t["code"].as_str()).collect();
    assert_eq!(codes, vec!["CHNS", "JAKD", "JAKR", "LADW"]);
    assert_eq!(tools[3]["type"], "Ladder");
    assert_eq!(tools[3]["weekend_rate"], "1.49");
    assert_eq!(tools[3]["holiday_rate"], "0.00");
}

#[test]
fn test_list_tools_text() {
    let output = run(&["--list-tools"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let listing = stdout(&output);
    assert_eq!(listing.lines().count(), 5);
    assert!(listing.lines().next().unwrap_or_default().starts_with("Code"));
    assert!(listing.contains("LADW  Ladder      Werner"));
}
