//! Donation Domain - In-Memory Charity Ledger
//!
//! This crate tracks donors, the charities they support, and the donations
//! that connect them.
//!
//! # Key Concepts
//!
//! - **Donor**: gives money; tracked by cumulative contribution
//! - **Charity**: receives money; tracked by cumulative receipts
//! - **Donation**: an immutable record of one transfer
//! - **Ledger**: owns all of the above and answers queries over them
//!
//! Recording a donation is the only way either running total changes, and
//! the ledger updates both totals together or not at all.
//!
//! # Example
//!
//! ```rust
//! use core_kernel::{Currency, Money};
//! use domain_donation::{Charity, Donor, Ledger};
//! use rust_decimal_macros::dec;
//!
//! let mut ledger = Ledger::new(Currency::USD);
//! let alice = ledger.add_donor(Donor::new("Alice", Currency::USD));
//! let red_cross = ledger.add_charity(Charity::new("Red Cross", Currency::USD));
//!
//! ledger
//!     .record_donation(alice, red_cross, Money::new(dec!(200), Currency::USD))
//!     .unwrap();
//!
//! assert_eq!(ledger.find_donor_by_name("alice").unwrap().total_donated().amount(), dec!(200));
//! ```

pub mod participant;
pub mod donor;
pub mod charity;
pub mod donation;
pub mod ledger;
pub mod report;
pub mod error;

pub use participant::{Participant, ParticipantRole};
pub use donor::Donor;
pub use charity::Charity;
pub use donation::Donation;
pub use ledger::Ledger;
pub use report::{DonationLine, ParticipantLine, ReportSection};
pub use error::LedgerError;
