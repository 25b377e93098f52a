use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::*;

/// Builder for invoices fed to the reference engine.
///
/// ```
/// use bvr::core::*;
/// use chrono::NaiveDate;
///
/// let invoice = InvoiceBuilder::new(
///     InvoiceType::CustomerInvoice,
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     MoveId(10),
/// )
/// .bank_account(BankAccount::bvr("123456", "01-162-8"))
/// .build();
///
/// assert_eq!(invoice.number, None);
/// assert_eq!(invoice.currency_code, "CHF");
/// ```
pub struct InvoiceBuilder {
    number: Option<String>,
    issue_date: NaiveDate,
    invoice_type: InvoiceType,
    reference_type: ReferenceType,
    reference: Option<String>,
    partner_bank_account: Option<BankAccount>,
    move_id: MoveId,
    currency_code: String,
    amount_total: Decimal,
}

impl InvoiceBuilder {
    pub fn new(invoice_type: InvoiceType, issue_date: NaiveDate, move_id: MoveId) -> Self {
        Self {
            number: None,
            issue_date,
            invoice_type,
            reference_type: ReferenceType::Free,
            reference: None,
            partner_bank_account: None,
            move_id,
            currency_code: "CHF".to_string(),
            amount_total: Decimal::ZERO,
        }
    }

    /// Pre-assigned document number. Leave unset to let the numbering
    /// action issue one.
    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Mark the `reference` field as a supplier BVR reference.
    pub fn bvr_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_type = ReferenceType::Bvr;
        self.reference = Some(reference.into());
        self
    }

    /// Free-form reference (ignored by the engine).
    pub fn free_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_type = ReferenceType::Free;
        self.reference = Some(reference.into());
        self
    }

    pub fn bank_account(mut self, account: BankAccount) -> Self {
        self.partner_bank_account = Some(account);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }

    pub fn amount_total(mut self, amount: Decimal) -> Self {
        self.amount_total = amount;
        self
    }

    pub fn build(self) -> Invoice {
        Invoice {
            number: self.number,
            issue_date: self.issue_date,
            invoice_type: self.invoice_type,
            reference_type: self.reference_type,
            reference: self.reference,
            partner_bank_account: self.partner_bank_account,
            move_id: self.move_id,
            currency_code: self.currency_code,
            amount_total: self.amount_total,
        }
    }
}
