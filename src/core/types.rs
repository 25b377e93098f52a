use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment vector of a partner bank account.
///
/// Only [`BankAccountState::Bvr`] accounts participate in reference
/// generation; everything else makes the engine report "not applicable".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankAccountState {
    /// ESR participant account — payments are reconciled by reference.
    Bvr,
    /// Plain IBAN account.
    Iban,
    /// Anything else (postal giro, foreign account).
    Other,
}

/// Partner bank account as stored by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Payment vector of this account.
    pub state: BankAccountState,
    /// Issuer participation code with the clearing system. Digits only,
    /// possibly empty; at most 11 digits in practice.
    pub adherent_number: String,
    /// Account number in the postal notation, e.g. "01-162-8".
    pub account_number: String,
    /// Account holder, if it differs from the company name.
    pub owner_name: Option<String>,
}

impl BankAccount {
    /// A BVR participant account with the given adherent number.
    pub fn bvr(adherent_number: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            state: BankAccountState::Bvr,
            adherent_number: adherent_number.into(),
            account_number: account_number.into(),
            owner_name: None,
        }
    }

    /// A plain IBAN account (no reference generation).
    pub fn iban(account_number: impl Into<String>) -> Self {
        Self {
            state: BankAccountState::Iban,
            adherent_number: String::new(),
            account_number: account_number.into(),
            owner_name: None,
        }
    }
}

/// Invoice document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceType {
    /// Outgoing invoice to a customer.
    CustomerInvoice,
    /// Credit note issued to a customer.
    CustomerRefund,
    /// Incoming invoice from a supplier.
    SupplierInvoice,
    /// Credit note received from a supplier.
    SupplierRefund,
}

impl InvoiceType {
    /// Customer documents get computed references; supplier documents
    /// reuse the reference the supplier printed on the slip.
    pub fn is_customer(&self) -> bool {
        matches!(self, Self::CustomerInvoice | Self::CustomerRefund)
    }

    pub fn is_supplier(&self) -> bool {
        !self.is_customer()
    }
}

/// How the free-text `reference` field of a supplier document is to be
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceType {
    /// Free-form reference, ignored by the engine.
    Free,
    /// The reference is a BVR reference from the supplier's slip and is
    /// trusted verbatim.
    Bvr,
}

/// Host-assigned identifier of a move line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MoveLineId(pub u64);

impl fmt::Display for MoveLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Host-assigned identifier of an accounting move (journal entry).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MoveId(pub u64);

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Ledger account classification of a move line.
///
/// Only receivable/payable lines carry payment references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Receivable,
    Payable,
    /// Revenue, expense, tax and other lines; never referenced.
    Other,
}

impl AccountKind {
    /// Whether lines on this account qualify for a payment reference.
    pub fn is_counterpart(&self) -> bool {
        matches!(self, Self::Receivable | Self::Payable)
    }
}

/// Invoice document.
///
/// `number` stays `None` until the numbering action runs; references are
/// only derived from numbered invoices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Document number assigned by the numbering sequence.
    pub number: Option<String>,
    /// Issue date.
    pub issue_date: NaiveDate,
    /// Document type.
    pub invoice_type: InvoiceType,
    /// Interpretation of the `reference` field.
    pub reference_type: ReferenceType,
    /// Supplier-supplied payment reference (supplier documents only).
    pub reference: Option<String>,
    /// Bank account the payment goes through.
    pub partner_bank_account: Option<BankAccount>,
    /// The accounting move this invoice posted to.
    pub move_id: MoveId,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Gross total.
    pub amount_total: Decimal,
}

impl Invoice {
    /// Copy for re-issue: the payment reference is never carried over to
    /// a new document, and the duplicate re-enters the numbering action.
    pub fn duplicate(&self) -> Self {
        Self {
            number: None,
            reference: None,
            ..self.clone()
        }
    }
}

/// One line of an accounting move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLine {
    pub id: MoveLineId,
    /// Owning move.
    pub move_id: MoveId,
    /// Account classification; only receivable/payable lines qualify.
    pub account_kind: AccountKind,
    /// Frozen payment reference. `None` means never assigned; a present
    /// value is only ever overwritten with itself.
    pub transaction_ref: Option<String>,
    pub debit: Decimal,
    pub credit: Decimal,
}

impl MoveLine {
    /// A line with zero amounts and no reference.
    pub fn new(id: MoveLineId, move_id: MoveId, account_kind: AccountKind) -> Self {
        Self {
            id,
            move_id,
            account_kind,
            transaction_ref: None,
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
        }
    }

    pub fn with_debit(mut self, amount: Decimal) -> Self {
        self.debit = amount;
        self
    }

    pub fn with_credit(mut self, amount: Decimal) -> Self {
        self.credit = amount;
        self
    }

    /// Pre-set transaction reference (e.g. assigned by a payment service).
    pub fn with_transaction_ref(mut self, reference: impl Into<String>) -> Self {
        self.transaction_ref = Some(reference.into());
        self
    }
}

/// Cost-accounting entry mirrored from a move line.
///
/// Carries a denormalized copy of the move line's reference so analytic
/// reports can be reconciled without joining back to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticLine {
    /// The move line this entry mirrors.
    pub move_line_id: MoveLineId,
    /// Denormalized payment reference.
    pub reference: Option<String>,
    pub amount: Decimal,
}

impl AnalyticLine {
    pub fn new(move_line_id: MoveLineId, amount: Decimal) -> Self {
        Self {
            move_line_id,
            reference: None,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn duplicate_clears_reference_and_number() {
        let invoice = Invoice {
            number: Some("FA-2026-0001".into()),
            issue_date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            invoice_type: InvoiceType::SupplierInvoice,
            reference_type: ReferenceType::Bvr,
            reference: Some("123456789012345".into()),
            partner_bank_account: Some(BankAccount::bvr("123456", "01-162-8")),
            move_id: MoveId(1),
            currency_code: "CHF".into(),
            amount_total: Decimal::ZERO,
        };
        let copy = invoice.duplicate();
        assert_eq!(copy.number, None);
        assert_eq!(copy.reference, None);
        assert_eq!(copy.partner_bank_account, invoice.partner_bank_account);
        assert_eq!(copy.invoice_type, invoice.invoice_type);
    }

    #[test]
    fn counterpart_accounts() {
        assert!(AccountKind::Receivable.is_counterpart());
        assert!(AccountKind::Payable.is_counterpart());
        assert!(!AccountKind::Other.is_counterpart());
    }

    #[test]
    fn customer_and_supplier_split() {
        assert!(InvoiceType::CustomerInvoice.is_customer());
        assert!(InvoiceType::CustomerRefund.is_customer());
        assert!(InvoiceType::SupplierInvoice.is_supplier());
        assert!(InvoiceType::SupplierRefund.is_supplier());
    }
}
