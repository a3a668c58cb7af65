//! Shared utilities and error types for the MedLedger contract suite.
//!
//! This crate provides:
//! - [`LedgerError`] — standardised error codes for all contracts.
//! - [`bounded`] — capacity-checked list helpers for fixed-capacity
//!   on-chain collections.
//!
//! Contract-specific errors can extend the range starting at code **100** and
//! above, ensuring no collisions with the common set.

#![no_std]
#![allow(clippy::arithmetic_side_effects)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use soroban_sdk::contracterror;

pub mod bounded;

pub use bounded::*;

/// Standardised error codes shared by every MedLedger contract.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 10 – 19 | Authentication & authorisation |
/// | 20 – 29 | Resource not found             |
/// | 30 – 39 | Duplicate registration         |
/// | 40 – 49 | Validation / input             |
/// | 50 – 59 | Bounded-collection state       |
/// | 100+    | Reserved for contract-specific |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum LedgerError {
    /// Caller lacks the required relationship to the target record.
    Unauthorized = 10,
    /// Referenced patient identity has no record.
    PatientNotFound = 20,
    /// Referenced provider identity has no directory entry.
    ProviderNotFound = 21,
    /// Patient identity already registered; records are created once.
    DuplicateRecord = 30,
    /// Provider identity already registered.
    DuplicateProvider = 31,
    /// String length or charset violation.
    InvalidInput = 40,
    /// Prescription date ordering violation, or no such prescription.
    InvalidPrescriptionData = 41,
    /// Provider is already a member of the patient's authorized set.
    AlreadyAuthorized = 50,
    /// The authorized-provider set is at capacity.
    MaxProvidersReached = 51,
    /// The prescription tracking list is at capacity.
    PrescriptionListOverflow = 52,
}
