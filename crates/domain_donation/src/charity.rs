//! Charities and the amounts they have received

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::hash::{Hash, Hasher};

use core_kernel::{CharityId, Currency, Money};
use crate::participant::{Participant, ParticipantRole};

/// An organisation that receives donations
#[derive(Debug, Clone, Serialize)]
pub struct Charity {
    id: CharityId,
    name: String,
    total_received: Money,
    created_at: DateTime<Utc>,
}

impl Charity {
    /// Creates a charity that has received nothing yet
    pub fn new(name: impl Into<String>, currency: Currency) -> Self {
        Self {
            id: CharityId::new_v7(),
            name: name.into(),
            total_received: Money::zero(currency),
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> CharityId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sum of every donation made to this charity
    pub fn total_received(&self) -> Money {
        self.total_received
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn apply_total(&mut self, total: Money) {
        self.total_received = total;
    }
}

impl Participant for Charity {
    fn name(&self) -> &str {
        &self.name
    }

    fn running_total(&self) -> Money {
        self.total_received
    }

    fn role(&self) -> ParticipantRole {
        ParticipantRole::Charity
    }
}

impl PartialEq for Charity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Charity {}

impl Hash for Charity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charity_creation() {
        let charity = Charity::new("Red Cross", Currency::EUR);
        assert_eq!(charity.name(), "Red Cross");
        assert!(charity.total_received().is_zero());
        assert_eq!(charity.role(), ParticipantRole::Charity);
    }
}
