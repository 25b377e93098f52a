//! # bvr
//!
//! Swiss BVR/ESR payment-slip reference engine.
//!
//! BVR (bulletin de versement avec numéro de référence) / ESR
//! (Einzahlungsschein mit Referenznummer) payment slips carry a
//! checksummed reference number that lets the bank match an incoming
//! payment to the invoice it pays. This crate computes those references
//! (a 26-digit base plus a recursive mod-10 check digit), formats them
//! for printing, and decides which reference belongs on which accounting
//! line when an invoice is numbered. Persistence stays with the host ERP
//! behind the [`assign::LedgerHost`] adapter.
//!
//! ## Quick Start
//!
//! ```rust
//! use bvr::assign::{display_reference, number_and_assign, MemoryLedger};
//! use bvr::core::*;
//! use chrono::NaiveDate;
//!
//! let mut ledger = MemoryLedger::new();
//! ledger.insert_line(MoveLine::new(MoveLineId(1), MoveId(10), AccountKind::Receivable));
//!
//! let mut invoice = InvoiceBuilder::new(
//!     InvoiceType::CustomerInvoice,
//!     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//!     MoveId(10),
//! )
//! .bank_account(BankAccount::bvr("123456", "01-162-8"))
//! .build();
//!
//! let mut sequence = InvoiceNumberSequence::new("FA-", 2026);
//! let reports =
//!     number_and_assign(std::slice::from_mut(&mut invoice), &mut sequence, &mut ledger);
//! assert_eq!(reports[0].as_ref().unwrap().assigned.len(), 1);
//!
//! // 27 digits grouped for printing
//! let printed = display_reference(&invoice, &ledger).unwrap().unwrap();
//! assert_eq!(printed.len(), 27 + 5);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`core`] | Entity types, errors, invoice construction, numbering |
//! | [`reference`] | Sanitizer, reference builder, check digit, print grouping |
//! | [`assign`] | Assignment policy and the host persistence adapter |

pub mod assign;
pub mod core;
pub mod reference;

// Re-export core types at crate root for convenience
pub use crate::core::*;
