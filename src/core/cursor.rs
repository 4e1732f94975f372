use crate::core::preferences::PreferenceStore;
use crate::domain::model::{ProposeeId, ProposerId};
use crate::utils::error::InvariantViolation;

/// Per-proposer position in its own preference list. Only moves forward.
#[derive(Debug, Clone)]
pub struct ProposalCursor {
    positions: Vec<usize>,
}

impl ProposalCursor {
    pub fn new(size: usize) -> Self {
        Self {
            positions: vec![0; size],
        }
    }

    /// 回傳下一個要提議的對象並前進一格。
    pub fn next_proposal(
        &mut self,
        store: &PreferenceStore,
        proposer: ProposerId,
    ) -> Result<ProposeeId, InvariantViolation> {
        let position = &mut self.positions[proposer.index()];
        let proposee = store
            .preference_of(proposer)
            .get(*position)
            .copied()
            .ok_or(InvariantViolation::CursorExhausted { proposer })?;
        *position += 1;
        Ok(proposee)
    }

    pub fn position(&self, proposer: ProposerId) -> usize {
        self.positions[proposer.index()]
    }
}
