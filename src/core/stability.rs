use crate::core::engine::Matching;
use crate::core::preferences::PreferenceStore;
use crate::domain::model::{ProposeeId, ProposerId};
use crate::utils::error::InvariantViolation;

/// Every pair (p, q) that is not matched together while p prefers q over its
/// partner and q prefers p over its partner.
pub fn blocking_pairs(store: &PreferenceStore, matching: &Matching) -> Vec<(ProposerId, ProposeeId)> {
    let mut blocking = Vec::new();

    for (proposer, partner) in matching.pairs() {
        let partner_rank = store.proposer_rank_of(proposer, partner);
        // 只需看 p 比現任更喜歡的對象
        for &proposee in &store.preference_of(proposer)[..partner_rank] {
            let incumbent = matching.partner_of_proposee(proposee);
            if store.prefers(proposee, proposer, incumbent) {
                blocking.push((proposer, proposee));
            }
        }
    }

    blocking
}

pub fn is_stable(store: &PreferenceStore, matching: &Matching) -> bool {
    blocking_pairs(store, matching).is_empty()
}

/// Fails with the first blocking pair found, if any.
pub fn verify(store: &PreferenceStore, matching: &Matching) -> Result<(), InvariantViolation> {
    match blocking_pairs(store, matching).first() {
        Some(&(proposer, proposee)) => Err(InvariantViolation::Unstable { proposer, proposee }),
        None => Ok(()),
    }
}
