//! The fixed demonstration scenario
//!
//! Seeds a ledger with two donors, two charities, and three donations, then
//! runs every report over it in a fixed order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::info;

use core_kernel::{Currency, Money};
use domain_donation::{Charity, Donor, Ledger, LedgerError, ReportSection};

/// Knobs for a demonstration run
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOptions {
    pub currency: Currency,
    pub min_donation: Decimal,
    pub search_name: String,
}

/// Builds the reference ledger
///
/// Alice gives 100 to Save the Children and 200 to Red Cross; Bob gives 150
/// to Save the Children.
pub fn seed_ledger(currency: Currency) -> Result<Ledger, LedgerError> {
    let mut ledger = Ledger::new(currency);

    let alice = ledger.add_donor(Donor::new("Alice", currency));
    let bob = ledger.add_donor(Donor::new("Bob", currency));

    let save_the_children = ledger.add_charity(Charity::new("Save the Children", currency));
    let red_cross = ledger.add_charity(Charity::new("Red Cross", currency));

    ledger.record_donation(alice, save_the_children, Money::new(dec!(100), currency))?;
    ledger.record_donation(bob, save_the_children, Money::new(dec!(150), currency))?;
    ledger.record_donation(alice, red_cross, Money::new(dec!(200), currency))?;

    Ok(ledger)
}

/// Produces the report sequence for a ledger
///
/// The ledger is reconciled first so a broken invariant is reported instead
/// of printed. Charities are left sorted by amount received afterwards.
pub fn run_reports(ledger: &mut Ledger, options: &DemoOptions) -> Result<Vec<ReportSection>, LedgerError> {
    ledger.reconcile()?;

    let sections = vec![
        ReportSection::donors(ledger),
        ReportSection::charities(ledger),
        ReportSection::donations(ledger),
        ReportSection::filtered_donors(ledger, options.min_donation),
        ReportSection::sorted_charities(ledger),
        ReportSection::search(ledger, &options.search_name),
    ];

    info!(
        donors = ledger.donors().len(),
        charities = ledger.charities().len(),
        donations = ledger.donations().len(),
        "Reports generated"
    );

    Ok(sections)
}

/// Seeds the reference ledger and runs every report over it
pub fn run_demo(options: &DemoOptions) -> Result<Vec<ReportSection>, LedgerError> {
    let mut ledger = seed_ledger(options.currency)?;
    run_reports(&mut ledger, options)
}
