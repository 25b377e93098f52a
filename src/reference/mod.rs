//! The reference pipeline: sanitize → build → check digit → print form.
//!
//! A BVR/ESR reference is a 26-digit base (adherent number followed by a
//! zero-padded body) closed by one check digit from the recursive mod-10
//! algorithm. This module is purely algorithmic — it knows nothing about
//! invoices or ledgers; [`crate::assign`] decides which strings get fed
//! in at each call site.

mod checksum;
mod format;
mod generate;

pub use checksum::{append_check_digit, check_digit, is_valid};
pub use format::group_for_print;
pub use generate::{BASE_LEN, EsrReference, REFERENCE_LEN, build_reference, sanitize};
