//! Immutable preference storage.
//!
//! Proposer lists are kept in preference order; proposee lists are turned
//! into rank tables at construction so that "does `q` prefer `p` over its
//! current partner" is a single comparison. Both sides also keep the inverse
//! table, which the stability checker needs.

use crate::core::validator;
use crate::domain::model::{PreferenceInput, ProposeeId, ProposerId, Side};
use crate::utils::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    size: usize,
    proposer_prefs: Vec<Vec<ProposeeId>>,
    /// `proposer_ranks[p][q]`: position of `q` in `p`'s list.
    proposer_ranks: Vec<Vec<usize>>,
    /// `proposee_ranks[q][p]`: position of `p` in `q`'s list.
    proposee_ranks: Vec<Vec<usize>>,
}

impl PreferenceStore {
    /// 由 1-based 的偏好清單建立。兩邊清單數量必須相同，
    /// 每條清單都必須是 1..=N 的排列，否則回傳 `ValidationError`。
    pub fn from_one_based(
        proposer_lists: &[Vec<i64>],
        proposee_lists: &[Vec<i64>],
    ) -> Result<Self, ValidationError> {
        let size = proposer_lists.len();
        if proposee_lists.len() != size {
            return Err(ValidationError::CountMismatch {
                side: Side::Proposee,
                what: "preference lists",
                expected: size,
                found: proposee_lists.len(),
            });
        }

        validator::check_lists(Side::Proposer, proposer_lists, size)?;
        validator::check_lists(Side::Proposee, proposee_lists, size)?;

        // 已驗證過，每個值都落在 1..=size
        let to_zero_based = |list: &Vec<i64>| -> Vec<usize> {
            list.iter().map(|&value| value as usize - 1).collect()
        };

        let proposer_prefs: Vec<Vec<ProposeeId>> = proposer_lists
            .iter()
            .map(|list| to_zero_based(list).into_iter().map(ProposeeId).collect())
            .collect();
        let proposer_ranks = proposer_lists
            .iter()
            .map(|list| invert(&to_zero_based(list)))
            .collect();
        let proposee_ranks = proposee_lists
            .iter()
            .map(|list| invert(&to_zero_based(list)))
            .collect();

        Ok(Self {
            size,
            proposer_prefs,
            proposer_ranks,
            proposee_ranks,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn proposers(&self) -> impl Iterator<Item = ProposerId> {
        (0..self.size).map(ProposerId)
    }

    pub fn proposees(&self) -> impl Iterator<Item = ProposeeId> {
        (0..self.size).map(ProposeeId)
    }

    /// Full preference list of `proposer`, most preferred first.
    pub fn preference_of(&self, proposer: ProposerId) -> &[ProposeeId] {
        &self.proposer_prefs[proposer.index()]
    }

    /// Rank `proposee` gives `proposer`. Lower is strictly better.
    pub fn rank_of(&self, proposee: ProposeeId, proposer: ProposerId) -> usize {
        self.proposee_ranks[proposee.index()][proposer.index()]
    }

    /// Rank `proposer` gives `proposee`. Lower is strictly better.
    pub fn proposer_rank_of(&self, proposer: ProposerId, proposee: ProposeeId) -> usize {
        self.proposer_ranks[proposer.index()][proposee.index()]
    }

    /// Whether `proposee` strictly prefers `challenger` over `incumbent`.
    pub fn prefers(&self, proposee: ProposeeId, challenger: ProposerId, incumbent: ProposerId) -> bool {
        self.rank_of(proposee, challenger) < self.rank_of(proposee, incumbent)
    }
}

impl TryFrom<&PreferenceInput> for PreferenceStore {
    type Error = ValidationError;

    fn try_from(input: &PreferenceInput) -> Result<Self, Self::Error> {
        validator::validate(input)?;
        Self::from_one_based(&input.proposer_lists, &input.proposee_lists)
    }
}

/// position -> value 轉成 value -> position
fn invert(order: &[usize]) -> Vec<usize> {
    let mut ranks = vec![0; order.len()];
    for (position, &value) in order.iter().enumerate() {
        ranks[value] = position;
    }
    ranks
}
