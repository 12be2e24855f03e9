//! Console Layer
//!
//! This crate wires the donation ledger to the terminal: it loads
//! configuration, runs the demonstration scenario, and renders the reports.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::Currency;
//! use interface_cli::{demo::{run_demo, DemoOptions}, output::render, config::OutputFormat};
//! use rust_decimal_macros::dec;
//!
//! let options = DemoOptions {
//!     currency: Currency::USD,
//!     min_donation: dec!(150),
//!     search_name: "Alice".to_string(),
//! };
//! let sections = run_demo(&options).unwrap();
//! let text = render(&sections, OutputFormat::Text).unwrap();
//! assert!(text.contains("--- Search Result ---"));
//! ```

pub mod args;
pub mod config;
pub mod demo;
pub mod output;
pub mod error;

pub use args::CommandLine;
pub use config::{CliConfig, OutputFormat};
pub use demo::{run_demo, run_reports, seed_ledger, DemoOptions};
pub use error::CliError;
