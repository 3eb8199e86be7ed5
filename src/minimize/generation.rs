use fxhash::{FxHashMap, FxHashSet};

use crate::Cube;

use super::classify::sort_by_rank;

/// Outcome of one merging round
pub struct Round {
    /// Deduplicated merge results, forming the next generation
    pub next: FxHashSet<Cube>,
    /// Cubes of this generation that took part in no merge
    pub survivors: FxHashSet<Cube>,
}

/// Run one merging round over a deduplicated generation of cubes
///
/// The generation is partitioned into mask-equal groups (adjacency is only
/// defined between cubes of equal mask) and each group is rank-sorted. Only
/// adjacent rank buckets are cross-tested: cubes whose ranks differ by
/// anything other than one can never differ in exactly one literal. Every
/// successful merge marks both parents consumed; cubes never consumed in
/// their group survive the round.
///
/// The output is order-independent for a fixed input multiset, since both
/// sets deduplicate by `(value, mask)`.
pub fn run_round(generation: &[Cube], n_bits: u32) -> Round {
    let mut groups = FxHashMap::<u64, Vec<Cube>>::default();
    for &c in generation {
        groups.entry(c.mask()).or_default().push(c);
    }

    let mut next = FxHashSet::default();
    let mut survivors = FxHashSet::default();
    for group in groups.values_mut() {
        let separations = sort_by_rank(group, n_bits);
        let mut consumed = vec![false; group.len()];
        for w in separations.windows(3) {
            let (lo, mid, hi) = (w[0], w[1], w[2]);
            for i in lo..mid {
                for j in mid..hi {
                    if group[i].mergeable(&group[j]) {
                        next.insert(group[i].merge(&group[j]));
                        consumed[i] = true;
                        consumed[j] = true;
                    }
                }
            }
        }
        for (i, c) in group.iter().enumerate() {
            if !consumed[i] {
                survivors.insert(*c);
            }
        }
    }

    Round { next, survivors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minterms(values: &[u64], n_bits: u32) -> Vec<Cube> {
        values.iter().map(|&v| Cube::minterm(v, n_bits)).collect()
    }

    #[test]
    fn test_single_round_merges() {
        // 0 merges with 1 (pivot bit 0) and with 2 (pivot bit 1); 1 and 2
        // differ in both bits and stay apart
        let round = run_round(&minterms(&[0b00, 0b01, 0b10], 2), 2);
        let next: FxHashSet<Cube> = [Cube::new(0b00, 0b10), Cube::new(0b00, 0b01)]
            .into_iter()
            .collect();
        assert_eq!(round.next, next);
        assert!(round.survivors.is_empty());
    }

    #[test]
    fn test_converging_merges_dedup() {
        // Four 2-bit minterms merge pairwise into four cubes; one more round
        // collapses them all onto the single tautology cube
        let round = run_round(&minterms(&[0, 1, 2, 3], 2), 2);
        assert_eq!(round.next.len(), 4);
        assert!(round.survivors.is_empty());

        let gen1: Vec<Cube> = round.next.into_iter().collect();
        let round = run_round(&gen1, 2);
        assert_eq!(round.next.len(), 1);
        assert!(round.next.contains(&Cube::new(0, 0)));
        assert!(round.survivors.is_empty());
    }

    #[test]
    fn test_singleton_group_survives() {
        let cubes = vec![Cube::minterm(0b101, 3)];
        let round = run_round(&cubes, 3);
        assert!(round.next.is_empty());
        assert_eq!(round.survivors.len(), 1);
        assert!(round.survivors.contains(&cubes[0]));
    }

    #[test]
    fn test_no_cross_mask_merge() {
        // Same values, different masks: never compared
        let cubes = vec![Cube::new(0b0, 0b01), Cube::new(0b0, 0b10)];
        let round = run_round(&cubes, 2);
        assert!(round.next.is_empty());
        assert_eq!(round.survivors.len(), 2);
    }

    #[test]
    fn test_partial_survivors() {
        // 6 (110) and 7 (111) merge; 0 has no rank-adjacent partner
        let round = run_round(&minterms(&[0b000, 0b110, 0b111], 3), 3);
        assert_eq!(round.next.len(), 1);
        assert!(round.next.contains(&Cube::new(0b110, 0b110)));
        assert_eq!(round.survivors.len(), 1);
        assert!(round.survivors.contains(&Cube::minterm(0b000, 3)));
    }

    #[test]
    fn test_empty_generation() {
        let round = run_round(&[], 4);
        assert!(round.next.is_empty());
        assert!(round.survivors.is_empty());
    }
}
