//! Prime implicant generation by iterative merging.
//!
//! Each round partitions the current generation of terms by [weight][Term::weight]
//! and tries every pair from adjacent weight groups. A pair at distance 1
//! merges into the lower-weight term with the differing position made absent,
//! and both sources are retired. Terms that took part in no merge survive
//! into the next round unchanged. Once a round produces nothing new, the
//! generation consists of prime implicants.
//!
//! Each term that gets merged loses a defined position, so the loop reaches
//! its fixpoint after at most `n` productive rounds for terms of length `n`.
//!
//! # Example
//!
//! ```
//! use qmc_rs::merge::prime_implicants;
//! use qmc_rs::term::Term;
//!
//! let minterms: Vec<Term> = ["00", "01", "10", "11"]
//!     .iter()
//!     .map(|s| Term::from_binary(s).unwrap())
//!     .collect();
//!
//! let primes = prime_implicants(&minterms);
//! assert_eq!(primes, vec![Term::absent(2)]);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::term::Term;

/// Terms of one generation, grouped by weight in ascending order.
///
/// Group members are indices into the generation slice; the per-round
/// merged flags are indexed the same way.
pub type Groups = BTreeMap<usize, Vec<usize>>;

/// Groups the terms of a generation by weight.
pub fn group_by_weight(terms: &[Term]) -> Groups {
    let mut groups = Groups::new();
    for (index, term) in terms.iter().enumerate() {
        groups.entry(term.weight()).or_default().push(index);
    }
    groups
}

/// Merges every term of group `lower` with every term of group `upper`.
///
/// Merged terms are appended to `out`, and both sources of every merge are
/// flagged in `merged`.
pub fn merge_groups(terms: &[Term], lower: &[usize], upper: &[usize], merged: &mut [bool], out: &mut BTreeSet<Term>) {
    for &i in lower {
        for &j in upper {
            let (a, b) = (&terms[i], &terms[j]);
            if a.distance(b) == 1 {
                merged[i] = true;
                merged[j] = true;
                if let Some(index) = a.differing_index(b) {
                    out.insert(a.with_absent(index));
                }
            }
        }
    }
}

/// Runs a single merge round.
///
/// Returns `None` when no pair could be merged, meaning `terms` is already a
/// fixpoint. Otherwise returns the next generation: the unmerged terms
/// together with the newly merged ones, deduplicated and in canonical order.
pub fn merge_round(terms: &[Term]) -> Option<Vec<Term>> {
    let groups = group_by_weight(terms);
    let mut merged = vec![false; terms.len()];
    let mut emitted = BTreeSet::new();

    for (&weight, upper) in &groups {
        if weight == 0 {
            continue;
        }
        if let Some(lower) = groups.get(&(weight - 1)) {
            merge_groups(terms, lower, upper, &mut merged, &mut emitted);
        }
    }

    if emitted.is_empty() {
        return None;
    }

    debug!(
        "merge_round: {} terms in {} groups, {} merged, {} new",
        terms.len(),
        groups.len(),
        merged.iter().filter(|&&m| m).count(),
        emitted.len()
    );

    let mut next = emitted;
    next.extend(
        terms
            .iter()
            .zip(&merged)
            .filter(|&(_, &m)| !m)
            .map(|(term, _)| term.clone()),
    );
    Some(next.into_iter().collect())
}

/// Computes the prime implicants of a set of terms of equal length.
///
/// The result is deduplicated and sorted in canonical order. An empty input
/// gives an empty result.
pub fn prime_implicants(terms: &[Term]) -> Vec<Term> {
    let mut current: Vec<Term> = terms.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
    let mut round = 0;
    while let Some(next) = merge_round(&current) {
        round += 1;
        debug!("prime_implicants: round {} produced {} terms", round, next.len());
        current = next;
    }
    debug!("prime_implicants: fixpoint after {} rounds, {} primes", round, current.len());
    current
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::truth_table::TruthTable;

    fn terms(list: &[&str]) -> Vec<Term> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn strings(terms: &[Term]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty() {
        assert!(group_by_weight(&[]).is_empty());
        assert!(prime_implicants(&[]).is_empty());
    }

    #[test]
    fn test_group_by_weight() {
        let ts = terms(&["00", "01", "10", "11"]);
        let groups = group_by_weight(&ts);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(groups[&1], vec![1, 2]);
    }

    #[test]
    fn test_merge_groups_flags_sources() {
        let ts = terms(&["000", "001", "110"]);
        let mut merged = vec![false; 3];
        let mut out = BTreeSet::new();
        merge_groups(&ts, &[0], &[1, 2], &mut merged, &mut out);
        assert_eq!(merged, vec![true, true, false]);
        assert_eq!(strings(&out.into_iter().collect::<Vec<_>>()), vec!["00~"]);
    }

    #[test]
    fn test_single_minterm() {
        let primes = prime_implicants(&terms(&["00"]));
        assert_eq!(strings(&primes), vec!["00"]);
    }

    #[test]
    fn test_xor_does_not_merge() {
        let ts = terms(&["01", "10"]);
        assert_eq!(merge_round(&ts), None);
        assert_eq!(prime_implicants(&ts), ts);
    }

    #[test]
    fn test_full_collapse() {
        let primes = prime_implicants(&terms(&["00", "01", "10", "11"]));
        assert_eq!(strings(&primes), vec!["~~"]);
    }

    #[test]
    fn test_unmerged_terms_survive() {
        // f = x2x1 + !x2!x1!x0
        let primes = prime_implicants(&terms(&["110", "111", "000"]));
        assert_eq!(strings(&primes), vec!["000", "11~"]);
    }

    #[test]
    fn test_classic_three_variable() {
        // Minterms 0, 1, 2, 5, 6, 7 (positions read MSB-first) give the cyclic
        // six-prime function.
        let tt = TruthTable::from_values(&[1, 1, 1, 0, 0, 1, 1, 1]).unwrap();
        let primes = prime_implicants(&tt.minterms());
        assert_eq!(primes.len(), 6);
        assert!(primes.iter().all(|p| p.defined_count() == 2));
    }

    #[test]
    fn test_fixpoint() {
        let tt = TruthTable::from_values(&[1, 0, 1, 1, 1, 0, 1, 1, 0, 0, 1, 1, 0, 0, 1, 1]).unwrap();
        let primes = prime_implicants(&tt.minterms());
        assert_eq!(merge_round(&primes), None);
        assert_eq!(prime_implicants(&primes), primes);
    }

    #[test]
    fn test_coverage_preserved() {
        let tt = TruthTable::from_values(&[0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0, 1, 0, 1, 1]).unwrap();
        let minterms = tt.minterms();
        let primes = prime_implicants(&minterms);
        for m in &minterms {
            assert!(primes.iter().any(|p| p.covers(m)), "minterm {} is not covered", m);
        }
        // Primes never cover inputs outside the on-set.
        for i in 0..tt.len() {
            let input = tt.assignment(i);
            assert_eq!(primes.iter().any(|p| p.eval(&input)), tt.value(i));
        }
    }

    #[test]
    fn test_deterministic() {
        let tt = TruthTable::from_values(&[1, 1, 0, 1, 0, 1, 1, 1]).unwrap();
        let a = prime_implicants(&tt.minterms());
        let mut reversed = tt.minterms();
        reversed.reverse();
        let b = prime_implicants(&reversed);
        assert_eq!(a, b);
    }
}
