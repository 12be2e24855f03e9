//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for ledger tests. These fixtures are
//! consistent and predictable so expected totals can be written by hand.

use core_kernel::{Currency, Money};
use domain_donation::Ledger;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::builders::TestLedgerBuilder;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a USD amount
    pub fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// Creates a zero USD amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a negative amount for rejection tests
    pub fn usd_negative() -> Money {
        Money::new(dec!(-25.00), Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Participant names used across fixtures
pub struct NameFixtures;

impl NameFixtures {
    pub const ALICE: &'static str = "Alice";
    pub const BOB: &'static str = "Bob";
    pub const SAVE_THE_CHILDREN: &'static str = "Save the Children";
    pub const RED_CROSS: &'static str = "Red Cross";
}

/// Fixture ledgers
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// The reference scenario
    ///
    /// Alice gives $100 to Save the Children and $200 to Red Cross; Bob gives
    /// $150 to Save the Children.
    pub fn demo_scenario() -> Ledger {
        TestLedgerBuilder::new()
            .with_donor(NameFixtures::ALICE)
            .with_donor(NameFixtures::BOB)
            .with_charity(NameFixtures::SAVE_THE_CHILDREN)
            .with_charity(NameFixtures::RED_CROSS)
            .donate(NameFixtures::ALICE, NameFixtures::SAVE_THE_CHILDREN, dec!(100))
            .donate(NameFixtures::BOB, NameFixtures::SAVE_THE_CHILDREN, dec!(150))
            .donate(NameFixtures::ALICE, NameFixtures::RED_CROSS, dec!(200))
            .build()
    }

    /// A ledger with participants but no donations
    pub fn without_donations() -> Ledger {
        TestLedgerBuilder::new()
            .with_donor(NameFixtures::ALICE)
            .with_charity(NameFixtures::RED_CROSS)
            .build()
    }
}
