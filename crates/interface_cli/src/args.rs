//! Command-line flags
//!
//! Every flag is optional; a flag that is given overrides the matching
//! `LEDGER_*` setting.

use clap::Parser;
use rust_decimal::Decimal;

use core_kernel::Currency;
use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "charity-ledger")]
#[command(about = "Records a fixed set of donations and prints ledger reports.")]
pub struct CommandLine {
    /// Minimum total for the filtered donor report
    #[arg(long)]
    pub min_donation: Option<Decimal>,
    /// Donor name to search for (case-insensitive)
    #[arg(long)]
    pub search: Option<String>,
    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Ledger currency (ISO 4217 code)
    #[arg(long)]
    pub currency: Option<Currency>,
    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
