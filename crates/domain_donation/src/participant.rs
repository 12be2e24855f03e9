//! Shared shape of donors and charities
//!
//! Donors and charities share only a name and a running total;
//! [`Participant`] captures that shape.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Which side of a donation a participant sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    /// Gives money
    Donor,
    /// Receives money
    Charity,
}

impl ParticipantRole {
    /// Label printed before the participant's name
    pub fn name_label(&self) -> &'static str {
        match self {
            ParticipantRole::Donor => "Donor Name",
            ParticipantRole::Charity => "Charity Name",
        }
    }

    /// Label printed before the participant's running total
    pub fn total_label(&self) -> &'static str {
        match self {
            ParticipantRole::Donor => "Total Donations",
            ParticipantRole::Charity => "Total Donations Received",
        }
    }
}

/// A named entity with a running total that only donations can move
pub trait Participant {
    /// Display name, also the entity's identity
    fn name(&self) -> &str;

    /// Cumulative amount given (donor) or received (charity)
    fn running_total(&self) -> Money;

    /// Which side of a donation this participant takes
    fn role(&self) -> ParticipantRole;

    /// Case-insensitive exact comparison against `name`
    fn is_named(&self, name: &str) -> bool {
        names_match(self.name(), name)
    }
}

/// Compares two names after Unicode lowercase folding
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_ignores_case() {
        assert!(names_match("Alice", "aLICE"));
        assert!(names_match("Ärzte ohne Grenzen", "ärzte OHNE grenzen"));
    }

    #[test]
    fn test_names_match_is_exact() {
        assert!(!names_match("Alice", "Alic"));
        assert!(!names_match("Alice", "Alice "));
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(ParticipantRole::Donor.total_label(), "Total Donations");
        assert_eq!(ParticipantRole::Charity.name_label(), "Charity Name");
    }
}
