use crate::Cube;

/// Sort a mask group into non-decreasing rank order; return the bucket boundaries
///
/// All cubes in the slice must share one mask. The returned vector has
/// `n_bits + 2` entries: entry `r` is the index of the first cube of rank `r`,
/// and the last entry is the one-past-end index, so bucket `r` is the range
/// `separations[r]..separations[r + 1]`.
///
/// Uses a counting sort: the rank domain is small and statically bounded, so
/// grouping is linear in the number of cubes. This runs once per mask group
/// per generation.
pub fn sort_by_rank(cubes: &mut [Cube], n_bits: u32) -> Vec<usize> {
    debug_assert!(cubes.windows(2).all(|w| w[0].mask() == w[1].mask()));

    let n_ranks = n_bits as usize + 1;
    let mut counts = vec![0usize; n_ranks];
    for c in cubes.iter() {
        counts[c.rank() as usize] += 1;
    }

    let mut separations = vec![0usize; n_ranks + 1];
    for r in 0..n_ranks {
        separations[r + 1] = separations[r] + counts[r];
    }

    // Scatter each cube into its bucket slot
    let mut offsets = separations[..n_ranks].to_vec();
    let mut sorted = vec![Cube::default(); cubes.len()];
    for &c in cubes.iter() {
        let slot = &mut offsets[c.rank() as usize];
        sorted[*slot] = c;
        *slot += 1;
    }
    cubes.copy_from_slice(&sorted);

    separations
}
