use chrono::{Datelike, NaiveDate};

use super::error::BvrError;

/// Gapless invoice number sequence.
///
/// Stands in for the host ERP's numbering action: numbers are issued in
/// the form `{prefix}{year}-{sequential}`, e.g. "FA-2026-0001". The
/// reference engine only requires that a number exists before references
/// are assigned; the yearly counter format follows common Swiss
/// invoicing practice.
#[derive(Debug, Clone)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    next_number: u64,
    zero_pad: usize,
}

impl InvoiceNumberSequence {
    /// Create a new sequence starting at 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            next_number: 1,
            zero_pad: 4,
        }
    }

    /// Create a sequence continuing from a given number.
    pub fn starting_at(prefix: impl Into<String>, year: i32, next_number: u64) -> Self {
        Self {
            next_number,
            ..Self::new(prefix, year)
        }
    }

    /// Set zero-padding width (default: 4, so "0001").
    pub fn with_padding(mut self, width: usize) -> Self {
        self.zero_pad = width;
        self
    }

    fn format_number(&self, number: u64) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            number,
            width = self.zero_pad
        )
    }

    /// Issue the next invoice number.
    pub fn next_number(&mut self) -> String {
        let number = self.next_number;
        self.next_number += 1;
        self.format_number(number)
    }

    /// Preview the next number without consuming it.
    pub fn peek(&self) -> String {
        self.format_number(self.next_number)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Advance to a new year, resetting the counter to 1.
    pub fn advance_year(&mut self, new_year: i32) -> Result<(), BvrError> {
        if new_year <= self.year {
            return Err(BvrError::Numbering(format!(
                "new year {new_year} must be greater than current year {}",
                self.year
            )));
        }
        self.year = new_year;
        self.next_number = 1;
        Ok(())
    }

    /// Auto-advance when an issue date falls in a later year. Returns
    /// true if the year was advanced.
    pub fn auto_advance(&mut self, date: NaiveDate) -> bool {
        if date.year() > self.year {
            self.year = date.year();
            self.next_number = 1;
            true
        } else {
            false
        }
    }
}
