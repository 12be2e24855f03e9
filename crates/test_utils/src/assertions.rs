//! Custom Test Assertions
//!
//! Provides assertion helpers for ledger invariants that give more
//! meaningful failure messages than standard assertions.

use core_kernel::Money;
use domain_donation::{Charity, Ledger};
use rust_decimal::Decimal;

/// Asserts every donor and charity total equals the sum of its donations
///
/// Computes the sums independently of `Ledger::reconcile`.
pub fn assert_totals_match_donations(ledger: &Ledger) {
    for donor in ledger.donors() {
        let expected: Decimal = ledger
            .donations()
            .iter()
            .filter(|d| d.donor_id() == donor.id())
            .map(|d| d.amount().amount())
            .sum();
        assert_eq!(
            donor.total_donated().amount(),
            expected,
            "Donor {} total {} does not match donations {}",
            donor.name(),
            donor.total_donated(),
            expected
        );
    }

    for charity in ledger.charities() {
        let expected: Decimal = ledger
            .donations()
            .iter()
            .filter(|d| d.charity_id() == charity.id())
            .map(|d| d.amount().amount())
            .sum();
        assert_eq!(
            charity.total_received().amount(),
            expected,
            "Charity {} total {} does not match donations {}",
            charity.name(),
            charity.total_received(),
            expected
        );
    }
}

/// Asserts charities are ordered by amount received, largest first
pub fn assert_sorted_by_received_descending(charities: &[Charity]) {
    for pair in charities.windows(2) {
        assert!(
            pair[0].total_received().amount() >= pair[1].total_received().amount(),
            "Charities out of order: {} ({}) before {} ({})",
            pair[0].name(),
            pair[0].total_received(),
            pair[1].name(),
            pair[1].total_received()
        );
    }
}

/// Asserts the named donor exists and has the expected total
pub fn assert_donor_total(ledger: &Ledger, name: &str, expected: Decimal) {
    let donor = ledger
        .find_donor_by_name(name)
        .unwrap_or_else(|| panic!("Expected donor {} to exist", name));
    assert_eq!(
        donor.total_donated().amount(),
        expected,
        "Donor {} has total {}",
        name,
        donor.total_donated()
    );
}

/// Asserts the named charity exists and has the expected total
pub fn assert_charity_total(ledger: &Ledger, name: &str, expected: Decimal) {
    let charity = ledger
        .find_charity_by_name(name)
        .unwrap_or_else(|| panic!("Expected charity {} to exist", name));
    assert_eq!(
        charity.total_received().amount(),
        expected,
        "Charity {} has total {}",
        name,
        charity.total_received()
    );
}

/// Asserts a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {}",
        money
    );
}
