//! Console layer errors

use core_kernel::MoneyError;
use domain_donation::LedgerError;
use thiserror::Error;

/// Errors raised while configuring or running the demonstration
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid currency: {0}")]
    Currency(#[from] MoneyError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
