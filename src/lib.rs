//! Tool Rental Pricing Engine
//!
//! This crate prices a single tool rental at checkout. Given a tool code, a
//! rental day count, a discount percentage and a checkout date, it produces a
//! [`RentalAgreement`](models::RentalAgreement) with the due date, the daily
//! rate selected by the checkout day's category, and the discounted charge.
//!
//! # Example
//!
//! ```
//! use tool_rental::models::{RentalAgreement, RentalRequest};
//! use chrono::NaiveDate;
//!
//! let request = RentalRequest::new("JAKD", 2, 50, NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
//! let agreement = RentalAgreement::build(&request)?;
//! println!("{}", agreement);
//! # Ok::<(), tool_rental::error::RentalError>(())
//! ```

#![warn(missing_docs)]

pub mod agreement;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
