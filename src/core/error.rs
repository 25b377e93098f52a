use thiserror::Error;

/// Errors surfaced by the reference engine.
///
/// Not-applicable situations (non-BVR bank account, missing invoice
/// number, no qualifying lines) are values, not errors: the affected
/// operation returns `None` or an empty report instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BvrError {
    /// Adherent number and reference body together exceed the 26-digit
    /// base. A truncated reference would still checksum cleanly, so the
    /// builder rejects instead of truncating.
    #[error(
        "reference overflow: {adherent}-digit adherent number and {body}-digit body exceed the 26-digit base"
    )]
    Overflow {
        /// Digit count of the sanitized adherent number.
        adherent: usize,
        /// Digit count of the sanitized body seed.
        body: usize,
    },

    /// A caller-side contract was violated (e.g. a host adapter resolving
    /// an ambiguous bank-account id set).
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// The host adapter failed to read or persist data.
    #[error("host error: {0}")]
    Host(String),
}
