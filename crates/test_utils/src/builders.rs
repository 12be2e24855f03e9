//! Test Data Builders
//!
//! Builds ledgers from participant names so tests only spell out the
//! donations they care about.

use core_kernel::{Currency, Money};
use domain_donation::{Charity, Donor, Ledger};
use rust_decimal::Decimal;

/// Builder for constructing test ledgers
pub struct TestLedgerBuilder {
    currency: Currency,
    donors: Vec<String>,
    charities: Vec<String>,
    donations: Vec<(String, String, Decimal)>,
}

impl Default for TestLedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLedgerBuilder {
    /// Creates a new USD builder with no participants
    pub fn new() -> Self {
        Self {
            currency: Currency::USD,
            donors: Vec::new(),
            charities: Vec::new(),
            donations: Vec::new(),
        }
    }

    /// Sets the ledger currency
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Adds a donor
    pub fn with_donor(mut self, name: impl Into<String>) -> Self {
        self.donors.push(name.into());
        self
    }

    /// Adds a charity
    pub fn with_charity(mut self, name: impl Into<String>) -> Self {
        self.charities.push(name.into());
        self
    }

    /// Queues a donation between two named participants
    ///
    /// Names resolve to the first case-insensitive match at build time.
    pub fn donate(mut self, donor: impl Into<String>, charity: impl Into<String>, amount: Decimal) -> Self {
        self.donations.push((donor.into(), charity.into(), amount));
        self
    }

    /// Builds the ledger
    ///
    /// # Panics
    ///
    /// Panics if a queued donation names an unknown participant or is
    /// rejected by the ledger.
    pub fn build(self) -> Ledger {
        let mut ledger = Ledger::new(self.currency);

        for name in self.donors {
            ledger.add_donor(Donor::new(name, self.currency));
        }
        for name in self.charities {
            ledger.add_charity(Charity::new(name, self.currency));
        }

        for (donor, charity, amount) in self.donations {
            let donor_id = ledger
                .find_donor_by_name(&donor)
                .unwrap_or_else(|| panic!("unknown donor in builder: {}", donor))
                .id();
            let charity_id = ledger
                .find_charity_by_name(&charity)
                .unwrap_or_else(|| panic!("unknown charity in builder: {}", charity))
                .id();

            ledger
                .record_donation(donor_id, charity_id, Money::new(amount, self.currency))
                .unwrap_or_else(|e| panic!("builder donation rejected: {}", e));
        }

        ledger
    }
}
