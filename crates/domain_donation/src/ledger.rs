//! In-memory donation ledger
//!
//! The ledger owns every donor, charity, and donation. Donations are the only
//! path by which participant totals change.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use core_kernel::{CharityId, Currency, DonorId, Money, MoneyError};
use crate::charity::Charity;
use crate::donation::Donation;
use crate::donor::Donor;
use crate::error::LedgerError;
use crate::participant::Participant;

/// Store of donors, charities, and the donations between them
///
/// # Invariants
///
/// - A donor's total equals the sum of the donations it made
/// - A charity's total equals the sum of the donations it received
/// - Entities are never removed; sequences keep insertion order
///
/// Participants are not checked against the ledger currency when added. A
/// donor or charity created in another currency is stored, but every
/// donation involving it is rejected with `CurrencyMismatch`, and
/// [`filter_donors_by_minimum`](Self::filter_donors_by_minimum) compares its
/// raw amount.
#[derive(Debug)]
pub struct Ledger {
    currency: Currency,
    donors: Vec<Donor>,
    charities: Vec<Charity>,
    donations: Vec<Donation>,
}

impl Ledger {
    /// Creates an empty ledger that accepts donations in `currency`
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            donors: Vec::new(),
            charities: Vec::new(),
            donations: Vec::new(),
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Appends a donor. Names are not required to be unique.
    pub fn add_donor(&mut self, donor: Donor) -> DonorId {
        let id = donor.id();
        debug!(donor = %donor.name(), %id, "Donor added");
        self.donors.push(donor);
        id
    }

    /// Appends a charity. Names are not required to be unique.
    pub fn add_charity(&mut self, charity: Charity) -> CharityId {
        let id = charity.id();
        debug!(charity = %charity.name(), %id, "Charity added");
        self.charities.push(charity);
        id
    }

    /// Records a donation and moves both participant totals
    ///
    /// The work happens in three steps: the request is validated, both new
    /// totals are computed and then assigned together, and finally the
    /// donation is appended. A rejected request changes nothing.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is zero or negative
    /// - `Money(CurrencyMismatch)` if `amount` is not in the ledger currency
    /// - `DonorNotFound` / `CharityNotFound` for unknown identifiers
    /// - `Money(CurrencyMismatch)` if a participant holds another currency
    /// - `Money(Overflow)` if either new total would overflow
    pub fn record_donation(
        &mut self,
        donor_id: DonorId,
        charity_id: CharityId,
        amount: Money,
    ) -> Result<&Donation, LedgerError> {
        let pending = self
            .validate_donation(donor_id, charity_id, &amount)
            .and_then(|(donor_idx, charity_idx)| self.next_totals(donor_idx, charity_idx, &amount))
            .inspect_err(|e| warn!(%donor_id, %charity_id, %amount, error = %e, "Donation rejected"))?;

        let PendingTotals {
            donor_idx,
            charity_idx,
            donor_total,
            charity_total,
        } = pending;

        self.donors[donor_idx].apply_total(donor_total);
        self.charities[charity_idx].apply_total(charity_total);

        debug!(
            donor = %self.donors[donor_idx].name(),
            charity = %self.charities[charity_idx].name(),
            %amount,
            "Donation recorded"
        );

        self.donations.push(Donation::new(donor_id, charity_id, amount));
        let index = self.donations.len() - 1;
        Ok(&self.donations[index])
    }

    /// Checks a donation request and returns the participant positions
    fn validate_donation(
        &self,
        donor_id: DonorId,
        charity_id: CharityId,
        amount: &Money,
    ) -> Result<(usize, usize), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(format!(
                "donation must be positive, got {}",
                amount
            )));
        }

        if amount.currency() != self.currency {
            return Err(LedgerError::Money(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                amount.currency().to_string(),
            )));
        }

        let donor_idx = self
            .donors
            .iter()
            .position(|d| d.id() == donor_id)
            .ok_or_else(|| LedgerError::donor_not_found(donor_id))?;

        let charity_idx = self
            .charities
            .iter()
            .position(|c| c.id() == charity_id)
            .ok_or_else(|| LedgerError::charity_not_found(charity_id))?;

        Ok((donor_idx, charity_idx))
    }

    /// Computes both new totals without assigning either
    fn next_totals(
        &self,
        donor_idx: usize,
        charity_idx: usize,
        amount: &Money,
    ) -> Result<PendingTotals, LedgerError> {
        Ok(PendingTotals {
            donor_idx,
            charity_idx,
            donor_total: self.donors[donor_idx].total_donated().checked_add(amount)?,
            charity_total: self.charities[charity_idx].total_received().checked_add(amount)?,
        })
    }

    /// Donors in insertion order
    pub fn donors(&self) -> &[Donor] {
        &self.donors
    }

    /// Charities in their current order
    ///
    /// This is insertion order until
    /// [`sort_charities_by_received_descending`](Self::sort_charities_by_received_descending)
    /// is called.
    pub fn charities(&self) -> &[Charity] {
        &self.charities
    }

    /// Donations in the order they were recorded
    pub fn donations(&self) -> &[Donation] {
        &self.donations
    }

    pub fn donor(&self, id: DonorId) -> Option<&Donor> {
        self.donors.iter().find(|d| d.id() == id)
    }

    pub fn charity(&self, id: CharityId) -> Option<&Charity> {
        self.charities.iter().find(|c| c.id() == id)
    }

    /// Donors whose total is at least `minimum`, in insertion order
    pub fn filter_donors_by_minimum(&self, minimum: Decimal) -> Vec<&Donor> {
        self.donors
            .iter()
            .filter(|d| d.total_donated().amount() >= minimum)
            .collect()
    }

    /// Reorders charities by amount received, largest first
    ///
    /// The sort is stable, so charities with equal totals keep their
    /// relative order.
    pub fn sort_charities_by_received_descending(&mut self) -> &[Charity] {
        self.charities
            .sort_by(|a, b| b.total_received().amount().cmp(&a.total_received().amount()));
        &self.charities
    }

    /// First donor whose name matches ignoring case
    pub fn find_donor_by_name(&self, name: &str) -> Option<&Donor> {
        self.donors.iter().find(|d| d.is_named(name))
    }

    /// First charity whose name matches ignoring case
    pub fn find_charity_by_name(&self, name: &str) -> Option<&Charity> {
        self.charities.iter().find(|c| c.is_named(name))
    }

    /// Donations made by one donor, in recorded order
    pub fn donations_by_donor(&self, donor_id: DonorId) -> Vec<&Donation> {
        self.donations
            .iter()
            .filter(|d| d.donor_id() == donor_id)
            .collect()
    }

    /// Donations received by one charity, in recorded order
    pub fn donations_to_charity(&self, charity_id: CharityId) -> Vec<&Donation> {
        self.donations
            .iter()
            .filter(|d| d.charity_id() == charity_id)
            .collect()
    }

    /// Sum of every recorded donation
    pub fn total_raised(&self) -> Result<Money, LedgerError> {
        self.derived_total(self.donations.iter().collect())
    }

    /// Re-derives every total from the donation history
    ///
    /// # Errors
    ///
    /// Returns `TotalsMismatch` for the first participant whose recorded
    /// total disagrees with its donations.
    pub fn reconcile(&self) -> Result<(), LedgerError> {
        for donor in &self.donors {
            let derived = self.derived_total(self.donations_by_donor(donor.id()))?;
            check_total(donor, derived)?;
        }

        for charity in &self.charities {
            let derived = self.derived_total(self.donations_to_charity(charity.id()))?;
            check_total(charity, derived)?;
        }

        debug!(
            donors = self.donors.len(),
            charities = self.charities.len(),
            donations = self.donations.len(),
            "Ledger reconciled"
        );
        Ok(())
    }

    fn derived_total(&self, donations: Vec<&Donation>) -> Result<Money, LedgerError> {
        let amounts: Vec<Money> = donations.iter().map(|d| d.amount()).collect();
        Ok(Money::sum(self.currency, &amounts)?)
    }
}

/// New participant totals for a validated donation
struct PendingTotals {
    donor_idx: usize,
    charity_idx: usize,
    donor_total: Money,
    charity_total: Money,
}

fn check_total(participant: &impl Participant, derived: Money) -> Result<(), LedgerError> {
    let recorded = participant.running_total();
    if recorded.amount() != derived.amount() {
        return Err(LedgerError::TotalsMismatch {
            name: participant.name().to_string(),
            recorded: recorded.amount(),
            derived: derived.amount(),
        });
    }
    Ok(())
}
