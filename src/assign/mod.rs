//! Which reference goes on which accounting line.
//!
//! Three call sites feed [`crate::reference::build_reference`]:
//!
//! - the invoice-level reference seeds on the invoice number alone;
//! - the line-level reference also mixes in the move line id, so each
//!   line of a multi-line invoice reconciles independently;
//! - supplier documents skip generation entirely and reuse the reference
//!   the supplier printed on the slip.
//!
//! [`assign_references`] freezes the chosen reference into each line's
//! `transaction_ref` during the numbering action; a pre-existing,
//! different value is never overwritten (payment services assign their
//! own references, and those win).

mod host;

pub use host::{LedgerHost, MemoryLedger};

use crate::core::{
    BankAccountState, BvrError, Invoice, InvoiceNumberSequence, MoveLine, MoveLineId,
    ReferenceType,
};
use crate::reference::{EsrReference, build_reference, sanitize};

/// Separator between per-line references in the display field.
const DISPLAY_SEPARATOR: &str = " ; ";

/// Adherent number of the invoice's bank account, if references apply at
/// all: the account must exist, be a BVR account, and the invoice must
/// already carry a number.
fn reference_inputs(invoice: &Invoice) -> Option<(&str, &str)> {
    let bank = invoice.partner_bank_account.as_ref()?;
    if bank.state != BankAccountState::Bvr {
        return None;
    }
    let number = invoice.number.as_deref()?;
    Some((bank.adherent_number.as_str(), number))
}

/// BVR reference derived from the invoice number alone.
///
/// `None` when the partner account is missing or not a BVR account, or
/// when the invoice has not been numbered yet.
pub fn invoice_reference(invoice: &Invoice) -> Result<Option<EsrReference>, BvrError> {
    match reference_inputs(invoice) {
        Some((adherent, number)) => build_reference(adherent, number).map(Some),
        None => Ok(None),
    }
}

/// Line-level reference without the external-management guard.
fn computed_line_reference(
    invoice: &Invoice,
    line: &MoveLine,
) -> Result<Option<EsrReference>, BvrError> {
    match reference_inputs(invoice) {
        Some((adherent, number)) => {
            let seed = format!("{}{}", sanitize(number), line.id);
            build_reference(adherent, &seed).map(Some)
        }
        None => Ok(None),
    }
}

/// BVR reference for one move line, seeded on the invoice number plus
/// the line id so multi-line invoices reconcile per line.
///
/// A line already carrying a *different* transaction reference yields
/// `None`: such a reference came from outside (typically a payment
/// service) and suppresses generation.
pub fn line_reference(
    invoice: &Invoice,
    line: &MoveLine,
) -> Result<Option<EsrReference>, BvrError> {
    match computed_line_reference(invoice, line)? {
        Some(reference) => match &line.transaction_ref {
            Some(existing) if existing != reference.as_str() => Ok(None),
            _ => Ok(Some(reference)),
        },
        None => Ok(None),
    }
}

/// Display form of the invoice's reference(s), grouped for printing.
///
/// A single qualifying line shows the invoice-level reference; several
/// lines show one reference each, joined with `" ; "` (suppressed lines
/// contribute an empty segment). No qualifying lines, or a single line
/// on a non-BVR invoice, yields `None`.
pub fn display_reference(
    invoice: &Invoice,
    host: &dyn LedgerHost,
) -> Result<Option<String>, BvrError> {
    let lines = host.counterpart_lines(invoice.move_id);
    match lines.as_slice() {
        [] => Ok(None),
        [_single] => Ok(invoice_reference(invoice)?.map(|r| r.grouped())),
        lines => {
            let mut parts = Vec::with_capacity(lines.len());
            for line in lines {
                let part = line_reference(invoice, line)?
                    .map(|r| r.grouped())
                    .unwrap_or_default();
                parts.push(part);
            }
            Ok(Some(parts.join(DISPLAY_SEPARATOR)))
        }
    }
}

/// Per-invoice outcome of the assignment step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentReport {
    /// Lines that received a fresh reference.
    pub assigned: Vec<MoveLineId>,
    /// Lines already carrying the exact reference (idempotent re-run).
    pub already_assigned: Vec<MoveLineId>,
    /// Lines left untouched because a different reference was present.
    pub conflicts: Vec<MoveLineId>,
}

impl AssignmentReport {
    /// True when the step had nothing to do: no qualifying lines, or no
    /// reference applied to any of them.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty() && self.already_assigned.is_empty() && self.conflicts.is_empty()
    }
}

/// The reference this invoice wants on the given line, before the
/// overwrite guard.
fn candidate_reference(
    invoice: &Invoice,
    line: &MoveLine,
    single_line: bool,
) -> Result<Option<String>, BvrError> {
    if invoice.invoice_type.is_customer() {
        let computed = if single_line {
            invoice_reference(invoice)?
        } else {
            computed_line_reference(invoice, line)?
        };
        Ok(computed.map(EsrReference::into_string))
    } else if invoice.reference_type == ReferenceType::Bvr {
        // supplier slip reference, trusted verbatim — no checksum applied
        Ok(invoice.reference.clone().filter(|r| !r.is_empty()))
    } else {
        Ok(None)
    }
}

/// Freeze references into the move lines of a numbered invoice.
///
/// Customer documents get computed references (invoice-level for a
/// single qualifying line, per-line otherwise); supplier documents reuse
/// their own BVR reference. Re-running is safe: matching references are
/// reported as already assigned, differing ones as conflicts, and
/// neither is written again.
pub fn assign_references(
    invoice: &Invoice,
    host: &mut dyn LedgerHost,
) -> Result<AssignmentReport, BvrError> {
    let lines = host.counterpart_lines(invoice.move_id);
    let mut report = AssignmentReport::default();
    let single_line = lines.len() == 1;

    for line in &lines {
        let Some(candidate) = candidate_reference(invoice, line, single_line)? else {
            continue;
        };
        match &line.transaction_ref {
            Some(existing) if *existing == candidate => {
                report.already_assigned.push(line.id);
            }
            Some(_) => {
                report.conflicts.push(line.id);
            }
            None => {
                host.set_transaction_ref(line.id, &candidate)?;
                host.propagate_analytic_refs(invoice.move_id, &candidate)?;
                report.assigned.push(line.id);
            }
        }
    }

    Ok(report)
}

/// Run the numbering action over a batch of invoices.
///
/// Unnumbered invoices draw their number from `sequence` first (a
/// pre-assigned number is preserved), then references are frozen into
/// their move lines. Invoices fail in isolation: one invoice's error
/// lands in its own slot and never aborts the rest of the batch.
pub fn number_and_assign(
    invoices: &mut [Invoice],
    sequence: &mut InvoiceNumberSequence,
    host: &mut dyn LedgerHost,
) -> Vec<Result<AssignmentReport, BvrError>> {
    invoices
        .iter_mut()
        .map(|invoice| {
            if invoice.number.is_none() {
                invoice.number = Some(sequence.next_number());
            }
            assign_references(invoice, host)
        })
        .collect()
}
