//! Core data models for the tool rental engine.
//!
//! This module contains the request and agreement types plus the audit
//! trace attached to every agreement.

mod audit;
mod rental_agreement;
mod rental_request;

pub use audit::{AuditStep, AuditTrace, AuditWarning, SINGLE_RATE_WARNING, UNKNOWN_TOOL_WARNING};
pub use rental_agreement::RentalAgreement;
pub use rental_request::RentalRequest;
