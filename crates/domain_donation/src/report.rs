//! Console reports over a ledger
//!
//! Each report is captured as a [`ReportSection`] value so that it can be
//! printed as text or serialized as JSON by the caller.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use core_kernel::Money;
use crate::donation::Donation;
use crate::ledger::Ledger;
use crate::participant::{Participant, ParticipantRole};

/// One participant as it appears in a report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantLine {
    pub role: ParticipantRole,
    pub name: String,
    pub total: Money,
}

impl ParticipantLine {
    pub fn from_participant(participant: &impl Participant) -> Self {
        Self {
            role: participant.role(),
            name: participant.name().to_string(),
            total: participant.running_total(),
        }
    }
}

impl fmt::Display for ParticipantLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.role.name_label(), self.name)?;
        write!(f, "{}: {}", self.role.total_label(), self.total)
    }
}

/// One donation with participant names resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonationLine {
    pub donor: String,
    pub charity: String,
    pub amount: Money,
}

impl DonationLine {
    fn resolve(ledger: &Ledger, donation: &Donation) -> Self {
        let donor = ledger
            .donor(donation.donor_id())
            .map_or_else(|| donation.donor_id().to_string(), |d| d.name().to_string());
        let charity = ledger
            .charity(donation.charity_id())
            .map_or_else(|| donation.charity_id().to_string(), |c| c.name().to_string());

        Self {
            donor,
            charity,
            amount: donation.amount(),
        }
    }
}

impl fmt::Display for DonationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.donor, self.charity, self.amount)
    }
}

/// A titled block of report output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum ReportSection {
    Donors {
        donors: Vec<ParticipantLine>,
    },
    Charities {
        charities: Vec<ParticipantLine>,
    },
    Donations {
        donations: Vec<DonationLine>,
    },
    FilteredDonors {
        minimum: Money,
        donors: Vec<ParticipantLine>,
    },
    SortedCharities {
        charities: Vec<ParticipantLine>,
    },
    SearchResult {
        query: String,
        found: Option<ParticipantLine>,
    },
}

impl ReportSection {
    /// Every donor in insertion order
    pub fn donors(ledger: &Ledger) -> Self {
        ReportSection::Donors {
            donors: lines(ledger.donors()),
        }
    }

    /// Every charity in the ledger's current order
    pub fn charities(ledger: &Ledger) -> Self {
        ReportSection::Charities {
            charities: lines(ledger.charities()),
        }
    }

    /// Every donation in recorded order
    pub fn donations(ledger: &Ledger) -> Self {
        ReportSection::Donations {
            donations: ledger
                .donations()
                .iter()
                .map(|d| DonationLine::resolve(ledger, d))
                .collect(),
        }
    }

    /// Donors whose total is at least `minimum`
    pub fn filtered_donors(ledger: &Ledger, minimum: Decimal) -> Self {
        ReportSection::FilteredDonors {
            minimum: Money::new(minimum, ledger.currency()),
            donors: ledger
                .filter_donors_by_minimum(minimum)
                .into_iter()
                .map(ParticipantLine::from_participant)
                .collect(),
        }
    }

    /// Sorts the ledger's charities by amount received and reports them
    pub fn sorted_charities(ledger: &mut Ledger) -> Self {
        ReportSection::SortedCharities {
            charities: lines(ledger.sort_charities_by_received_descending()),
        }
    }

    /// Looks up a donor by name, ignoring case
    pub fn search(ledger: &Ledger, query: &str) -> Self {
        ReportSection::SearchResult {
            query: query.to_string(),
            found: ledger
                .find_donor_by_name(query)
                .map(ParticipantLine::from_participant),
        }
    }

    /// Heading printed above the section, if it has one
    pub fn title(&self) -> Option<String> {
        match self {
            ReportSection::Donors { .. } => Some("Donors".to_string()),
            ReportSection::Charities { .. } => Some("Charities".to_string()),
            ReportSection::Donations { .. } => Some("Donations".to_string()),
            ReportSection::FilteredDonors { minimum, .. } => {
                Some(format!("Donors with Donations >= {}", minimum))
            }
            ReportSection::SortedCharities { .. } => {
                Some("Charities Sorted by Donations".to_string())
            }
            ReportSection::SearchResult { found: Some(_), .. } => {
                Some("Search Result".to_string())
            }
            ReportSection::SearchResult { found: None, .. } => None,
        }
    }
}

impl fmt::Display for ReportSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = self.title() {
            writeln!(f, "--- {} ---", title)?;
        }

        match self {
            ReportSection::Donors { donors: entries }
            | ReportSection::Charities { charities: entries }
            | ReportSection::FilteredDonors { donors: entries, .. } => {
                for entry in entries {
                    writeln!(f, "{}", entry)?;
                }
            }
            ReportSection::SortedCharities { charities } => {
                // The sorted listing repeats the plain charities heading.
                writeln!(f)?;
                writeln!(f, "--- Charities ---")?;
                for entry in charities {
                    writeln!(f, "{}", entry)?;
                }
            }
            ReportSection::Donations { donations } => {
                for donation in donations {
                    writeln!(f, "{}", donation)?;
                }
            }
            ReportSection::SearchResult { found: Some(entry), .. } => {
                writeln!(f, "{}", entry)?;
            }
            ReportSection::SearchResult { found: None, .. } => {
                writeln!(f, "Donor not found.")?;
            }
        }

        Ok(())
    }
}

fn lines<P: Participant>(participants: &[P]) -> Vec<ParticipantLine> {
    participants.iter().map(ParticipantLine::from_participant).collect()
}
