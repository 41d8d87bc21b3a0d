//! Tool catalog reference data.
//!
//! The engine ships with a built-in four-tool catalog, exposed through
//! [`ToolCatalog::standard`]. A catalog can also be loaded from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/tools.yaml").unwrap();
//! println!("Ladder brand: {}", catalog.lookup("LADW").brand);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{CatalogFile, ToolCatalog, ToolSpec, UNKNOWN_TOOL};
