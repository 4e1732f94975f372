//! Gale-Shapley deferred acceptance.
//!
//! The engine owns the only mutable state of a run: the proposal cursor, the
//! two partner mappings and the queue of free proposers. Preferences are
//! borrowed and never touched.
//!
//! Each loop iteration peeks the proposer at the head of the queue and lets it
//! propose to the next entry of its list. The head is popped only when the
//! proposal is accepted; an evicted partner goes to the back of the queue. A
//! rejected proposer stays at the head and proposes again on the next
//! iteration. Every iteration advances exactly one cursor, so a run makes at
//! most `N * N` proposals.

use crate::core::cursor::ProposalCursor;
use crate::core::preferences::PreferenceStore;
use crate::domain::model::{MatchStats, ProposeeId, ProposerId};
use crate::utils::error::InvariantViolation;
use std::collections::VecDeque;

/// One decision taken by a proposee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProposalEvent {
    /// The proposee was free and accepted.
    Accepted {
        proposer: ProposerId,
        proposee: ProposeeId,
    },
    /// The proposee traded `evicted` for `proposer`.
    Replaced {
        proposer: ProposerId,
        proposee: ProposeeId,
        evicted: ProposerId,
    },
    /// The proposee kept `incumbent`.
    Rejected {
        proposer: ProposerId,
        proposee: ProposeeId,
        incumbent: ProposerId,
    },
}

/// A complete bijection between proposers and proposees. Both directions are
/// mutually inverse. Stability is checked separately in `core::stability`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    proposer_to_proposee: Vec<ProposeeId>,
    proposee_to_proposer: Vec<ProposerId>,
    stats: MatchStats,
}

impl Matching {
    /// Builds a matching from `partners[p] = q`. Returns `None` unless
    /// `partners` is a permutation of the proposee ids.
    pub fn from_partners(partners: Vec<ProposeeId>) -> Option<Self> {
        let mut inverse = vec![None; partners.len()];
        for (p, q) in partners.iter().enumerate() {
            let slot = inverse.get_mut(q.index())?;
            if slot.is_some() {
                return None;
            }
            *slot = Some(ProposerId(p));
        }

        Some(Self {
            proposee_to_proposer: inverse.into_iter().collect::<Option<Vec<_>>>()?,
            proposer_to_proposee: partners,
            stats: MatchStats::default(),
        })
    }

    pub fn size(&self) -> usize {
        self.proposer_to_proposee.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposer_to_proposee.is_empty()
    }

    pub fn partner_of_proposer(&self, proposer: ProposerId) -> ProposeeId {
        self.proposer_to_proposee[proposer.index()]
    }

    pub fn partner_of_proposee(&self, proposee: ProposeeId) -> ProposerId {
        self.proposee_to_proposer[proposee.index()]
    }

    /// Pairs in ascending proposer order.
    pub fn pairs(&self) -> impl Iterator<Item = (ProposerId, ProposeeId)> + '_ {
        self.proposer_to_proposee
            .iter()
            .enumerate()
            .map(|(p, &q)| (ProposerId(p), q))
    }

    pub fn stats(&self) -> MatchStats {
        self.stats
    }
}

/// 兩個方向的配對表，永遠成對更新。
#[derive(Debug)]
struct MatchingState {
    proposer_match: Vec<Option<ProposeeId>>,
    proposee_match: Vec<Option<ProposerId>>,
}

impl MatchingState {
    fn new(size: usize) -> Self {
        Self {
            proposer_match: vec![None; size],
            proposee_match: vec![None; size],
        }
    }

    fn partner_of(&self, proposee: ProposeeId) -> Option<ProposerId> {
        self.proposee_match[proposee.index()]
    }

    fn pair(&mut self, proposer: ProposerId, proposee: ProposeeId) {
        self.proposer_match[proposer.index()] = Some(proposee);
        self.proposee_match[proposee.index()] = Some(proposer);
    }

    fn unpair(&mut self, proposer: ProposerId) {
        if let Some(proposee) = self.proposer_match[proposer.index()].take() {
            self.proposee_match[proposee.index()] = None;
        }
    }

    fn into_matching(self, stats: MatchStats) -> Result<Matching, InvariantViolation> {
        let mut proposer_to_proposee = Vec::with_capacity(self.proposer_match.len());
        for (p, partner) in self.proposer_match.into_iter().enumerate() {
            let proposer = ProposerId(p);
            proposer_to_proposee.push(partner.ok_or(InvariantViolation::Unmatched { proposer })?);
        }

        // 互為反函數，所以 proposee 端一定也完整
        let proposee_to_proposer = self.proposee_match.into_iter().flatten().collect();

        Ok(Matching {
            proposer_to_proposee,
            proposee_to_proposer,
            stats,
        })
    }
}

pub struct MatchingEngine<'a> {
    store: &'a PreferenceStore,
}

impl<'a> MatchingEngine<'a> {
    pub fn new(store: &'a PreferenceStore) -> Self {
        Self { store }
    }

    pub fn run(&self) -> Result<Matching, InvariantViolation> {
        self.run_with_observer(|_| {})
    }

    /// Runs to completion, reporting every proposee decision to `observer`
    /// in the order it happens.
    pub fn run_with_observer<F>(&self, mut observer: F) -> Result<Matching, InvariantViolation>
    where
        F: FnMut(&ProposalEvent),
    {
        let store = self.store;
        let size = store.size();
        let mut cursor = ProposalCursor::new(size);
        let mut state = MatchingState::new(size);
        let mut available: VecDeque<ProposerId> = store.proposers().collect();
        let mut stats = MatchStats::default();

        tracing::debug!("Starting deferred acceptance with {} proposers", size);

        while let Some(&proposer) = available.front() {
            let proposee = cursor.next_proposal(store, proposer)?;
            stats.proposals += 1;

            let event = match state.partner_of(proposee) {
                None => {
                    state.pair(proposer, proposee);
                    available.pop_front();
                    stats.acceptances += 1;
                    ProposalEvent::Accepted { proposer, proposee }
                }
                Some(incumbent) if store.prefers(proposee, proposer, incumbent) => {
                    state.unpair(incumbent);
                    available.push_back(incumbent);
                    state.pair(proposer, proposee);
                    available.pop_front();
                    stats.evictions += 1;
                    ProposalEvent::Replaced {
                        proposer,
                        proposee,
                        evicted: incumbent,
                    }
                }
                Some(incumbent) => {
                    stats.rejections += 1;
                    ProposalEvent::Rejected {
                        proposer,
                        proposee,
                        incumbent,
                    }
                }
            };

            tracing::trace!(?event, "proposal");
            observer(&event);
        }

        tracing::debug!(
            proposals = stats.proposals,
            evictions = stats.evictions,
            rejections = stats.rejections,
            "Deferred acceptance converged"
        );

        state.into_matching(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_store() -> PreferenceStore {
        // A, B, C 對 X, Y, Z
        PreferenceStore::from_one_based(
            &[vec![1, 2, 3], vec![2, 1, 3], vec![1, 2, 3]],
            &[vec![2, 1, 3], vec![1, 2, 3], vec![1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn test_example_yields_proposer_optimal_pairing() {
        let store = example_store();
        let matching = MatchingEngine::new(&store).run().unwrap();

        assert_eq!(matching.partner_of_proposer(ProposerId(0)), ProposeeId(0));
        assert_eq!(matching.partner_of_proposer(ProposerId(1)), ProposeeId(1));
        assert_eq!(matching.partner_of_proposer(ProposerId(2)), ProposeeId(2));
        for (p, q) in matching.pairs() {
            assert_eq!(matching.partner_of_proposee(q), p);
        }
    }

    #[test]
    fn test_example_trace() {
        let store = example_store();
        let mut events = Vec::new();
        let matching = MatchingEngine::new(&store)
            .run_with_observer(|event| events.push(*event))
            .unwrap();

        let (a, b, c) = (ProposerId(0), ProposerId(1), ProposerId(2));
        let (x, y, z) = (ProposeeId(0), ProposeeId(1), ProposeeId(2));
        assert_eq!(
            events,
            vec![
                ProposalEvent::Accepted { proposer: a, proposee: x },
                ProposalEvent::Accepted { proposer: b, proposee: y },
                ProposalEvent::Rejected {
                    proposer: c,
                    proposee: x,
                    incumbent: a
                },
                ProposalEvent::Rejected {
                    proposer: c,
                    proposee: y,
                    incumbent: b
                },
                ProposalEvent::Accepted { proposer: c, proposee: z },
            ]
        );
        assert_eq!(
            matching.stats(),
            MatchStats {
                proposals: 5,
                acceptances: 3,
                evictions: 0,
                rejections: 2
            }
        );
    }

    #[test]
    fn test_eviction_requeues_previous_partner() {
        // 兩位提議方都先找 X，X 比較喜歡 B
        let store =
            PreferenceStore::from_one_based(&[vec![1, 2], vec![1, 2]], &[vec![2, 1], vec![1, 2]]).unwrap();
        let mut events = Vec::new();
        let matching = MatchingEngine::new(&store)
            .run_with_observer(|event| events.push(*event))
            .unwrap();

        assert_eq!(
            events[1],
            ProposalEvent::Replaced {
                proposer: ProposerId(1),
                proposee: ProposeeId(0),
                evicted: ProposerId(0)
            }
        );
        assert_eq!(matching.partner_of_proposer(ProposerId(0)), ProposeeId(1));
        assert_eq!(matching.partner_of_proposer(ProposerId(1)), ProposeeId(0));
        assert_eq!(matching.stats().evictions, 1);
    }

    #[test]
    fn test_from_partners_requires_bijection() {
        let matching = Matching::from_partners(vec![ProposeeId(1), ProposeeId(0)]).unwrap();
        assert_eq!(matching.partner_of_proposee(ProposeeId(1)), ProposerId(0));
        assert!(Matching::from_partners(vec![ProposeeId(0), ProposeeId(0)]).is_none());
        assert!(Matching::from_partners(vec![ProposeeId(2), ProposeeId(0)]).is_none());
    }

    #[test]
    fn test_single_pair() {
        let store = PreferenceStore::from_one_based(&[vec![1]], &[vec![1]]).unwrap();
        let matching = MatchingEngine::new(&store).run().unwrap();
        assert_eq!(matching.size(), 1);
        assert_eq!(matching.partner_of_proposee(ProposeeId(0)), ProposerId(0));
        assert_eq!(matching.stats().proposals, 1);
    }

    #[test]
    fn test_empty_store_matches_nothing() {
        let store = PreferenceStore::from_one_based(&[], &[]).unwrap();
        let matching = MatchingEngine::new(&store).run().unwrap();
        assert!(matching.is_empty());
        assert_eq!(matching.stats(), MatchStats::default());
    }

    #[test]
    fn test_worst_case_stays_within_quadratic_bound() {
        // 所有提議方偏好相同，被提議方的偏好與編號相反，產生大量驅逐
        let n = 8;
        let same: Vec<i64> = (1..=n).collect();
        let reversed: Vec<i64> = (1..=n).rev().collect();
        let store =
            PreferenceStore::from_one_based(&vec![same; n as usize], &vec![reversed; n as usize]).unwrap();
        let matching = MatchingEngine::new(&store).run().unwrap();

        let size = n as usize;
        assert!(matching.stats().proposals <= size * size);
        // 最後一位提議方最受歡迎，拿到第一志願
        assert_eq!(matching.partner_of_proposer(ProposerId(size - 1)), ProposeeId(0));
    }
}
