//! Shared helpers for integration tests.

#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stable_match::core::preferences::PreferenceStore;

/// Random complete preference lists (1-based) for both sides.
pub fn random_lists(n: usize, seed: u64) -> (Vec<Vec<i64>>, Vec<Vec<i64>>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut side = || {
        (0..n)
            .map(|_| {
                let mut list: Vec<i64> = (1..=n as i64).collect();
                list.shuffle(&mut rng);
                list
            })
            .collect::<Vec<_>>()
    };
    let proposers = side();
    let proposees = side();
    (proposers, proposees)
}

pub fn random_store(n: usize, seed: u64) -> PreferenceStore {
    let (proposers, proposees) = random_lists(n, seed);
    PreferenceStore::from_one_based(&proposers, &proposees).unwrap()
}

/// Every permutation of `0..n`, used to enumerate all matchings.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    fn extend(prefix: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if prefix.len() == used.len() {
            out.push(prefix.clone());
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                prefix.push(i);
                extend(prefix, used, out);
                prefix.pop();
                used[i] = false;
            }
        }
    }

    let mut out = Vec::new();
    extend(&mut Vec::new(), &mut vec![false; n], &mut out);
    out
}

/// Renders lists in the text input format.
pub fn to_input_text(
    proposer_names: &[&str],
    proposer_lists: &[Vec<i64>],
    proposee_names: &[&str],
    proposee_lists: &[Vec<i64>],
) -> String {
    let join = |list: &Vec<i64>| {
        list.iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut lines = vec![proposer_names.len().to_string()];
    lines.extend(proposer_names.iter().map(|name| name.to_string()));
    lines.extend(proposer_lists.iter().map(join));
    lines.extend(proposee_names.iter().map(|name| name.to_string()));
    lines.extend(proposee_lists.iter().map(join));
    lines.join("\n") + "\n"
}
