//! Core Kernel - Foundational types for the charity ledger
//!
//! This crate provides the building blocks shared by the domain and
//! interface crates:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for donors, charities, and donations

pub mod money;
pub mod identifiers;

pub use money::{Money, Currency, MoneyError};
pub use identifiers::{DonorId, CharityId, DonationId};
