//! Command-line Interface
//!
//! Drives the reservation mapping system from the command line.
//!
//! # Architecture
//!
//! - **Config**: `MAPPING_*` environment settings
//! - **Demo**: one pass through discovery, mapping, partner rules and
//!   validation, captured as a [`DemoReport`]
//! - **Error Handling**: one error type over every failure the run can hit
//!
//! # Example
//!
//! ```rust
//! use interface_cli::{config::{CliConfig, OutputFormat}, demo};
//!
//! let report = demo::run(&CliConfig::default()).unwrap();
//! assert!(report.validated.is_valid());
//! let text = report.render(OutputFormat::Text).unwrap();
//! assert!(text.contains("GOOGLE-R-1001"));
//! ```

pub mod config;
pub mod demo;
pub mod error;

pub use config::{CliConfig, OutputFormat};
pub use demo::DemoReport;
pub use error::CliError;
