//! Tool catalog types.
//!
//! This module contains the strongly-typed reference data describing each
//! rentable tool and its price table, plus the in-memory [`ToolCatalog`]
//! used for lookups.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Placeholder used for the type and brand of a tool code missing from the catalog.
pub const UNKNOWN_TOOL: &str = "Unknown";

static STANDARD_CATALOG: Lazy<ToolCatalog> = Lazy::new(ToolCatalog::builtin);

/// Reference data for a single rentable tool.
///
/// A rate of `0.00` means the tool is free on that day category.
///
/// # Example
///
/// ```
/// use tool_rental::config::ToolSpec;
/// use rust_decimal::Decimal;
///
/// let ladder = ToolSpec {
///     code: "LADW".to_string(),
///     tool_type: "Ladder".to_string(),
///     brand: "Werner".to_string(),
///     daily_charge: Decimal::new(149, 2),
///     weekday_rate: Decimal::new(199, 2),
///     weekend_rate: Decimal::new(149, 2),
///     holiday_rate: Decimal::ZERO,
/// };
/// assert!(ladder.holiday_rate.is_zero());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Short identifier, unique within a catalog (e.g., "LADW").
    pub code: String,
    /// Display name of the tool type (e.g., "Ladder").
    #[serde(rename = "type")]
    pub tool_type: String,
    /// Display name of the manufacturer (e.g., "Werner").
    pub brand: String,
    /// Reference daily charge. Listed in the catalog but never used to
    /// select the rate of a rental.
    #[serde(default)]
    pub daily_charge: Decimal,
    /// Rate applied when the checkout day is a weekday.
    pub weekday_rate: Decimal,
    /// Rate applied when the checkout day falls on a weekend.
    pub weekend_rate: Decimal,
    /// Rate applied when the checkout day is a holiday.
    pub holiday_rate: Decimal,
}

impl ToolSpec {
    fn priced(
        code: &str,
        tool_type: &str,
        brand: &str,
        daily_charge: Decimal,
        weekday_rate: Decimal,
        weekend_rate: Decimal,
        holiday_rate: Decimal,
    ) -> Self {
        Self {
            code: code.to_string(),
            tool_type: tool_type.to_string(),
            brand: brand.to_string(),
            daily_charge,
            weekday_rate,
            weekend_rate,
            holiday_rate,
        }
    }

    /// Returns the placeholder spec for a code that is not in the catalog.
    ///
    /// The placeholder keeps the requested code, reports "Unknown" for type
    /// and brand, and prices every day category at zero.
    pub fn unknown(code: &str) -> Self {
        Self::priced(
            code,
            UNKNOWN_TOOL,
            UNKNOWN_TOOL,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        )
    }
}

/// Catalog file structure (`tools.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    /// The tools offered for rent.
    pub tools: Vec<ToolSpec>,
}

/// Read-only collection of tool specs keyed by tool code.
///
/// Lookups never fail: a code that is not in the catalog resolves to
/// [`ToolSpec::unknown`].
///
/// # Example
///
/// ```
/// use tool_rental::config::ToolCatalog;
///
/// let catalog = ToolCatalog::standard();
/// assert_eq!(catalog.lookup("JAKR").brand, "Ridgid");
/// assert_eq!(catalog.lookup("ZZZZ").brand, "Unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolSpec>,
}

impl ToolCatalog {
    /// Creates a catalog from a list of tool specs.
    ///
    /// A later spec with the same code replaces an earlier one; use
    /// [`CatalogLoader`](super::CatalogLoader) when duplicates must be rejected.
    pub fn new(tools: Vec<ToolSpec>) -> Self {
        Self {
            tools: tools
                .into_iter()
                .map(|tool| (tool.code.clone(), tool))
                .collect(),
        }
    }

    /// Builds the four-tool catalog the rental counter ships with.
    pub fn builtin() -> Self {
        let rate = |cents: i64| Decimal::new(cents, 2);
        Self::new(vec![
            ToolSpec::priced(
                "CHNS",
                "Chainsaw",
                "Stihl",
                rate(199),
                rate(199),
                rate(0),
                rate(199),
            ),
            ToolSpec::priced(
                "LADW",
                "Ladder",
                "Werner",
                rate(149),
                rate(199),
                rate(149),
                rate(0),
            ),
            ToolSpec::priced(
                "JAKD",
                "Jackhammer",
                "DeWalt",
                rate(299),
                rate(299),
                rate(0),
                rate(299),
            ),
            ToolSpec::priced(
                "JAKR",
                "Jackhammer",
                "Ridgid",
                rate(299),
                rate(299),
                rate(0),
                rate(299),
            ),
        ])
    }

    /// Returns the process-wide built-in catalog.
    ///
    /// Initialized on first use and never mutated, so it can be shared
    /// across threads freely.
    pub fn standard() -> &'static ToolCatalog {
        &STANDARD_CATALOG
    }

    /// Returns the spec for a code, if the catalog carries it.
    pub fn get(&self, code: &str) -> Option<&ToolSpec> {
        self.tools.get(code)
    }

    /// Resolves a code to a spec, substituting [`ToolSpec::unknown`] for
    /// codes that are not in the catalog.
    pub fn lookup(&self, code: &str) -> ToolSpec {
        self.get(code)
            .cloned()
            .unwrap_or_else(|| ToolSpec::unknown(code))
    }

    /// Returns true if the catalog carries the code.
    pub fn contains(&self, code: &str) -> bool {
        self.tools.contains_key(code)
    }

    /// Returns all tool codes in ascending order.
    pub fn codes(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    /// Iterates over the tools in code order.
    pub fn tools(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.values()
    }

    /// Returns the number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
