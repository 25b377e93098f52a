//! Reference construction: sanitize a seed, pad it behind the adherent
//! number, close with the check digit.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::BvrError;

use super::checksum;
use super::format::group_for_print;

/// Length of the reference base: adherent number plus zero-padded body.
pub const BASE_LEN: usize = 26;

/// Full reference length including the check digit.
pub const REFERENCE_LEN: usize = BASE_LEN + 1;

/// Keep only ASCII digits, preserving order.
///
/// Idempotent; empty input yields empty output.
pub fn sanitize(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A complete BVR/ESR reference: 26-digit base plus check digit.
///
/// The raw digits are what goes into the coding line; [`grouped`] is the
/// human-readable form printed on the slip.
///
/// [`grouped`]: EsrReference::grouped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EsrReference(String);

impl EsrReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The trailing check digit.
    pub fn check_digit(&self) -> u8 {
        // the builder guarantees a non-empty all-digit string
        self.0.as_bytes()[self.0.len() - 1] - b'0'
    }

    /// Print form: `"21 00000 00003 13947 14300 09017"`.
    pub fn grouped(&self) -> String {
        group_for_print(&self.0)
    }
}

impl fmt::Display for EsrReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EsrReference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Build a reference from an adherent number and a body seed.
///
/// Both inputs are sanitized; the body is left-padded with zeros until
/// the base reaches [`BASE_LEN`] digits, then the check digit is
/// appended. An adherent/body combination longer than the base is
/// rejected with [`BvrError::Overflow`] — truncation would produce a
/// checksum-valid reference pointing at the wrong document.
pub fn build_reference(adherent: &str, seed: &str) -> Result<EsrReference, BvrError> {
    let adherent = sanitize(adherent);
    let body = sanitize(seed);
    if adherent.len() + body.len() > BASE_LEN {
        return Err(BvrError::Overflow {
            adherent: adherent.len(),
            body: body.len(),
        });
    }

    let mut base = String::with_capacity(REFERENCE_LEN);
    base.push_str(&adherent);
    for _ in 0..BASE_LEN - adherent.len() - body.len() {
        base.push('0');
    }
    base.push_str(&body);

    Ok(EsrReference(checksum::append_check_digit(&base)))
}
