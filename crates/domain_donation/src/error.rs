//! Donation domain errors

use core_kernel::MoneyError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the donation domain
#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    /// Donation amount was zero or negative
    #[error("Invalid donation amount: {0}")]
    InvalidAmount(String),

    /// Donor is not registered with the ledger
    #[error("Donor not found: {0}")]
    DonorNotFound(String),

    /// Charity is not registered with the ledger
    #[error("Charity not found: {0}")]
    CharityNotFound(String),

    /// Money arithmetic failed (currency mismatch or overflow)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// A recorded total disagrees with the donations behind it
    #[error("Totals mismatch for {name}: recorded={recorded}, derived={derived}")]
    TotalsMismatch {
        name: String,
        recorded: Decimal,
        derived: Decimal,
    },
}

impl LedgerError {
    /// Creates a DonorNotFound error from any ID type
    pub fn donor_not_found(id: impl std::fmt::Display) -> Self {
        LedgerError::DonorNotFound(id.to_string())
    }

    /// Creates a CharityNotFound error from any ID type
    pub fn charity_not_found(id: impl std::fmt::Display) -> Self {
        LedgerError::CharityNotFound(id.to_string())
    }

    /// Returns true if the caller supplied a bad argument
    ///
    /// Every rejection from `Ledger::record_donation` is an invalid argument;
    /// only a failed reconciliation is not.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, LedgerError::TotalsMismatch { .. })
    }
}
