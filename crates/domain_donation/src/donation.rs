//! Donations: immutable records of money moving from a donor to a charity

use chrono::{DateTime, Utc};
use serde::Serialize;

use core_kernel::{CharityId, DonationId, DonorId, Money};

/// One transfer from a donor to a charity
///
/// Donations are only created by the ledger, after the amount and both
/// participants have been validated, and are never edited afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Donation {
    id: DonationId,
    donor_id: DonorId,
    charity_id: CharityId,
    amount: Money,
    recorded_at: DateTime<Utc>,
}

impl Donation {
    pub(crate) fn new(donor_id: DonorId, charity_id: CharityId, amount: Money) -> Self {
        Self {
            id: DonationId::new_v7(),
            donor_id,
            charity_id,
            amount,
            recorded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> DonationId {
        self.id
    }

    pub fn donor_id(&self) -> DonorId {
        self.donor_id
    }

    pub fn charity_id(&self) -> CharityId {
        self.charity_id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
