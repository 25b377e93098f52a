//! The persistence seam between the engine and the host ERP.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::{AnalyticLine, BvrError, MoveId, MoveLine, MoveLineId};

/// Narrow adapter over the host's storage.
///
/// The engine never touches tables or transactions itself; it reads move
/// lines and writes references through this trait. Reads and writes of
/// one engine call go through the same borrow, so the overwrite guard
/// always sees the state it is about to write against; cross-process
/// races remain the host transaction's business.
pub trait LedgerHost {
    /// Receivable/payable lines of the given move, in posting order.
    fn counterpart_lines(&self, move_id: MoveId) -> Vec<MoveLine>;

    /// Persist a transaction reference on a move line.
    fn set_transaction_ref(
        &mut self,
        line: MoveLineId,
        reference: &str,
    ) -> Result<(), BvrError>;

    /// Copy `reference` onto every analytic line mirroring a line of the
    /// given move. Returns how many analytic lines were touched.
    fn propagate_analytic_refs(
        &mut self,
        move_id: MoveId,
        reference: &str,
    ) -> Result<usize, BvrError>;
}

/// In-memory ledger, for tests and for embedding the reference semantics
/// without an ERP behind them.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    lines: BTreeMap<MoveLineId, MoveLine>,
    analytic: Vec<AnalyticLine>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_line(&mut self, line: MoveLine) {
        self.lines.insert(line.id, line);
    }

    pub fn insert_analytic(&mut self, line: AnalyticLine) {
        self.analytic.push(line);
    }

    pub fn line(&self, id: MoveLineId) -> Option<&MoveLine> {
        self.lines.get(&id)
    }

    pub fn analytic_lines(&self) -> &[AnalyticLine] {
        &self.analytic
    }
}

impl LedgerHost for MemoryLedger {
    fn counterpart_lines(&self, move_id: MoveId) -> Vec<MoveLine> {
        self.lines
            .values()
            .filter(|line| line.move_id == move_id && line.account_kind.is_counterpart())
            .cloned()
            .collect()
    }

    fn set_transaction_ref(
        &mut self,
        line: MoveLineId,
        reference: &str,
    ) -> Result<(), BvrError> {
        match self.lines.get_mut(&line) {
            Some(line) => {
                line.transaction_ref = Some(reference.to_string());
                Ok(())
            }
            None => Err(BvrError::Host(format!("unknown move line {line}"))),
        }
    }

    fn propagate_analytic_refs(
        &mut self,
        move_id: MoveId,
        reference: &str,
    ) -> Result<usize, BvrError> {
        let members: BTreeSet<MoveLineId> = self
            .lines
            .values()
            .filter(|line| line.move_id == move_id)
            .map(|line| line.id)
            .collect();

        let mut touched = 0;
        for analytic in &mut self.analytic {
            if members.contains(&analytic.move_line_id) {
                analytic.reference = Some(reference.to_string());
                touched += 1;
            }
        }
        Ok(touched)
    }
}
