//! fuelinfo - FuelPHP application diagnostic report generator.
//!
//! This crate turns a snapshot of a FuelPHP application's internal state
//! (search paths, routes, request data, database configuration, session
//! contents, loaded configuration) plus a scan of its module and package
//! directories into a styled HTML report for developer debugging.
//!
//! # Architecture
//!
//! - [`value::Value`] - closed sum type for framework state, order-preserving
//! - [`render`] - pure recursive structure-to-table renderer plus the
//!   styled table/stylesheet building blocks
//! - [`snapshot`] - serde model of the exported application state
//! - [`scan`] - filesystem introspection for the modules/packages sections
//! - [`report`] - section collectors and document assembly
//! - [`serve`] - optional local HTTP endpoint re-rendering per request
//!
//! # Example
//!
//! ```rust,ignore
//! use fuelinfo::render::StyleSheet;
//! use fuelinfo::report::{build_report, SectionKind};
//! use fuelinfo::scan::Scanner;
//! use fuelinfo::snapshot::Snapshot;
//!
//! let snapshot = Snapshot::load(std::path::Path::new("fuelinfo.json"))?;
//! let scanner = Scanner::new(".");
//! let report = build_report(&snapshot, &scanner, &SectionKind::ALL, "fuelinfo");
//! println!("{}", report.to_document(&StyleSheet::default(), None));
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod report;
pub mod scan;
pub mod serve;
pub mod snapshot;
pub mod value;

// Re-exports for convenience
pub use config::Config;
pub use error::Error;
pub use value::Value;
