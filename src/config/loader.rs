//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a tool
//! catalog from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{RentalError, RentalResult};

use super::types::{CatalogFile, ToolCatalog};

/// Loads a [`ToolCatalog`] from a YAML file.
///
/// # File Format
///
/// ```text
/// tools:
///   - code: LADW
///     type: Ladder
///     brand: Werner
///     daily_charge: "1.49"
///     weekday_rate: "1.99"
///     weekend_rate: "1.49"
///     holiday_rate: "0.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::CatalogLoader;
///
/// let catalog = CatalogLoader::load("./config/tools.yaml")?;
/// println!("{} tools available", catalog.len());
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads a catalog from the specified file.
    ///
    /// Returns an error if:
    /// - The file does not exist (`CatalogNotFound`)
    /// - The file cannot be read as UTF-8 text (`CatalogParseError`)
    /// - The file contains invalid YAML or a malformed entry (`CatalogParseError`)
    /// - Two entries share a tool code, or a rate is negative (`CatalogParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<ToolCatalog> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RentalError::CatalogNotFound {
                path: path_str.clone(),
            },
            _ => RentalError::CatalogParseError {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        let catalog = Self::parse(&content).map_err(|message| RentalError::CatalogParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, tools = catalog.len(), "Loaded tool catalog");
        Ok(catalog)
    }

    /// Parses catalog YAML that has already been read into memory.
    pub fn from_yaml_str(content: &str) -> RentalResult<ToolCatalog> {
        Self::parse(content).map_err(|message| RentalError::CatalogParseError {
            path: "<inline>".to_string(),
            message,
        })
    }

    fn parse(content: &str) -> Result<ToolCatalog, String> {
        let file: CatalogFile = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

        let mut seen = HashSet::new();
        for tool in &file.tools {
            if tool.code.trim().is_empty() {
                return Err("tool code must not be empty".to_string());
            }
            if !seen.insert(tool.code.as_str()) {
                return Err(format!("duplicate tool code: {}", tool.code));
            }
            let rates = [
                ("daily_charge", tool.daily_charge),
                ("weekday_rate", tool.weekday_rate),
                ("weekend_rate", tool.weekend_rate),
                ("holiday_rate", tool.holiday_rate),
            ];
            if let Some((field, rate)) = rates.iter().find(|(_, rate)| *rate < Decimal::ZERO) {
                return Err(format!(
                    "{} of {} must not be negative: {}",
                    field, tool.code, rate
                ));
            }
        }

        Ok(ToolCatalog::new(file.tools))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    fn catalog_path() -> &'static str {
        "./config/tools.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_shipped_catalog_matches_builtin() {
        let result = CatalogLoader::load(catalog_path());
        assert!(result.is_ok(), "Failed to load catalog: {:?}", result.err());

        assert_eq!(result.unwrap(), ToolCatalog::builtin());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = CatalogLoader::load("/nonexistent/tools.yaml");

        match result {
            Err(RentalError::CatalogNotFound { path }) => {
                assert!(path.contains("tools.yaml"));
            }
            other => panic!("Expected CatalogNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tools: [unclosed").unwrap();

        match CatalogLoader::load(file.path()) {
            Err(RentalError::CatalogParseError { path, .. }) => {
                assert_eq!(path, file.path().display().to_string());
            }
            other => panic!("Expected CatalogParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_code_is_rejected() {
        let yaml = r#"
tools:
  - { code: CHNS, type: Chainsaw, brand: Stihl, weekday_rate: "1.99", weekend_rate: "0", holiday_rate: "1.99" }
  - { code: CHNS, type: Chainsaw, brand: Husqvarna, weekday_rate: "2.49", weekend_rate: "0", holiday_rate: "2.49" }
"#;
        match CatalogLoader::from_yaml_str(yaml) {
            Err(RentalError::CatalogParseError { message, .. }) => {
                assert_eq!(message, "duplicate tool code: CHNS");
            }
            other => panic!("Expected CatalogParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_code_is_rejected() {
        let yaml = r#"
tools:
  - { code: "", type: Saw, brand: Acme, weekday_rate: "1", weekend_rate: "1", holiday_rate: "1" }
"#;
        assert!(matches!(
            CatalogLoader::from_yaml_str(yaml),
            Err(RentalError::CatalogParseError { .. })
        ));
    }

    #[test]
    fn test_daily_charge_defaults_to_zero() {
        let yaml = r#"
tools:
  - code: TILE
    type: Tile Saw
    brand: Makita
    weekday_rate: "4.25"
    weekend_rate: "3.75"
    holiday_rate: "0.00"
"#;
        let catalog = CatalogLoader::from_yaml_str(yaml).unwrap();
        let saw = catalog.lookup("TILE");

        assert_eq!(saw.tool_type, "Tile Saw");
        assert!(saw.daily_charge.is_zero());
        assert_eq!(saw.weekday_rate, dec("4.25"));
        assert_eq!(saw.weekend_rate, dec("3.75"));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let yaml = r#"
tools:
  - { code: TILE, type: Tile Saw, brand: Makita, weekday_rate: "-2.00", weekend_rate: "3.75", holiday_rate: "0" }
"#;
        match CatalogLoader::from_yaml_str(yaml) {
            Err(RentalError::CatalogParseError { message, .. }) => {
                assert_eq!(message, "weekday_rate of TILE must not be negative: -2.00");
            }
            other => panic!("Expected CatalogParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_daily_charge_is_rejected() {
        let yaml = r#"
tools:
  - { code: TILE, type: Tile Saw, brand: Makita, daily_charge: "-0.01", weekday_rate: "4.25", weekend_rate: "3.75", holiday_rate: "0" }
"#;
        assert!(matches!(
            CatalogLoader::from_yaml_str(yaml),
            Err(RentalError::CatalogParseError { .. })
        ));
    }

    #[test]
    fn test_negative_zero_rate_is_accepted() {
        let yaml = r#"
tools:
  - { code: TILE, type: Tile Saw, brand: Makita, weekday_rate: "4.25", weekend_rate: "-0.00", holiday_rate: "0" }
"#;
        let catalog = CatalogLoader::from_yaml_str(yaml).unwrap();
        assert!(catalog.lookup("TILE").weekend_rate.is_zero());
    }

    #[test]
    fn test_unreadable_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        match CatalogLoader::load(file.path()) {
            Err(RentalError::CatalogParseError { path, message }) => {
                assert_eq!(path, file.path().display().to_string());
                assert!(!message.is_empty());
            }
            other => panic!("Expected CatalogParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_rate_is_parse_error() {
        let yaml = r#"
tools:
  - { code: TILE, type: Tile Saw, brand: Makita, weekday_rate: "4.25" }
"#;
        assert!(matches!(
            CatalogLoader::from_yaml_str(yaml),
            Err(RentalError::CatalogParseError { .. })
        ));
    }
}
