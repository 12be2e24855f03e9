//! Donors and their running contribution totals

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::hash::{Hash, Hasher};

use core_kernel::{Currency, DonorId, Money};
use crate::participant::{Participant, ParticipantRole};

/// Someone who gives money to charities
///
/// The total starts at zero and is only ever moved by
/// [`Ledger::record_donation`](crate::Ledger::record_donation). Equality and
/// hashing look at the name alone.
#[derive(Debug, Clone, Serialize)]
pub struct Donor {
    id: DonorId,
    name: String,
    total_donated: Money,
    created_at: DateTime<Utc>,
}

impl Donor {
    /// Creates a donor with nothing donated yet
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: DonorId::new_v7(),
            name: name.into(),
            total_donated: Money::zero(currency),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> DonorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of every donation this donor has made
    pub fn total_donated(&self) -> Money {
        self.total_donated
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn apply_total(&mut self, total: Money) {
        self.total_donated = total;
    }
}

impl Participant for Donor {
    fn name(&self) -> &str {
        &self.name
    }

    fn running_total(&self) -> Money {
        self.total_donated
    }

    fn role(&self) -> ParticipantRole {
        ParticipantRole::Donor
    }
}

impl PartialEq for Donor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Donor {}

impl Hash for Donor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
