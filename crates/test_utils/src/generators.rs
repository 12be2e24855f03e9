//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating ledgers and donation
//! sequences that respect domain invariants.

use core_kernel::{Currency, Money};
use domain_donation::{Charity, Donor, Ledger};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for generating positive donation amounts with cents
pub fn donation_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating thresholds, including zero
pub fn threshold_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..20_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating participant names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

/// A generated ledger layout plus donations by participant index
#[derive(Debug, Clone)]
pub struct DonationPlan {
    pub donors: Vec<String>,
    pub charities: Vec<String>,
    pub donations: Vec<(usize, usize, Decimal)>,
}

impl DonationPlan {
    /// Builds a USD ledger and records every planned donation
    ///
    /// # Panics
    ///
    /// Panics if the ledger rejects a planned donation.
    pub fn apply(&self) -> Ledger {
        let mut ledger = Ledger::new(Currency::USD);
        let donor_ids: Vec<_> = self
            .donors
            .iter()
            .map(|name| ledger.add_donor(Donor::new(name.clone(), Currency::USD)))
            .collect();
        let charity_ids: Vec<_> = self
            .charities
            .iter()
            .map(|name| ledger.add_charity(Charity::new(name.clone(), Currency::USD)))
            .collect();

        for (donor, charity, amount) in &self.donations {
            ledger
                .record_donation(
                    donor_ids[*donor],
                    charity_ids[*charity],
                    Money::new(*amount, Currency::USD),
                )
                .unwrap_or_else(|e| panic!("planned donation rejected: {}", e));
        }

        ledger
    }
}

/// Strategy for generating donation plans
///
/// Names may repeat, which exercises non-unique participants.
pub fn donation_plan_strategy() -> impl Strategy<Value = DonationPlan> {
    (
        proptest::collection::vec(name_strategy(), 1..6),
        proptest::collection::vec(name_strategy(), 1..6),
    )
        .prop_flat_map(|(donors, charities)| {
            let donation = (0..donors.len(), 0..charities.len(), donation_amount_strategy());
            (
                Just(donors),
                Just(charities),
                proptest::collection::vec(donation, 0..30),
            )
        })
        .prop_map(|(donors, charities, donations)| DonationPlan {
            donors,
            charities,
            donations,
        })
}
