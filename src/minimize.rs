//! Quine–McCluskey prime-implicant computation
//!
//! ```
//! use primin::{minimize, Cube};
//!
//! // f(b1, b0) with satisfying assignments 00, 01 and 10
//! let minterms: Vec<Cube> = [0, 1, 2].iter().map(|&v| Cube::minterm(v, 2)).collect();
//! let primes = minimize(&minterms, 2).unwrap();
//!
//! // Two prime implicants: !b1 (covers 00, 01) and !b0 (covers 00, 10)
//! assert_eq!(primes, vec![Cube::new(0, 0b01), Cube::new(0, 0b10)]);
//! ```

mod classify;
mod generation;

use fxhash::FxHashSet;

use crate::errors::{Error, Result};
use crate::Cube;

/// Compute the prime implicants of the boolean function given by a set of cubes
///
/// The input cubes are the function's satisfying terms over `n_bits` variables,
/// typically fully-specified minterms built with [`Cube::minterm`]; duplicates
/// are collapsed. The result is the deduplicated set of prime implicants,
/// sorted, so permuting the input leaves the output identical. Every input
/// cube is covered by at least one result cube, and no two result cubes can
/// merge any further.
///
/// All validation happens up front: a non-canonical cube or one using literal
/// positions outside `[0, n_bits)` fails the whole call with
/// [`Error::InvalidCube`] and no partial results. An empty input is not an
/// error and yields an empty result.
///
/// Starting from the deduplicated input as generation 0, each round merges
/// every rank-adjacent, single-literal-difference pair within each mask group
/// and carries unmerged cubes into the accumulator. Each merge eliminates one
/// literal, so the loop runs at most `n_bits + 1` rounds.
pub fn minimize(cubes: &[Cube], n_bits: u32) -> Result<Vec<Cube>> {
    if n_bits > Cube::MAX_WIDTH {
        return Err(Error::UnsupportedWidth {
            n_bits,
            max: Cube::MAX_WIDTH,
        });
    }
    for c in cubes {
        if !c.is_canonical() || !c.fits_width(n_bits) {
            return Err(Error::InvalidCube {
                value: c.value(),
                mask: c.mask(),
                n_bits,
            });
        }
    }

    let dedup: FxHashSet<Cube> = cubes.iter().copied().collect();
    let mut generation: Vec<Cube> = dedup.into_iter().collect();

    let mut primes = FxHashSet::<Cube>::default();
    while !generation.is_empty() {
        let round = generation::run_round(&generation, n_bits);
        primes.extend(round.survivors);
        generation = round.next.into_iter().collect();
    }

    let mut result: Vec<Cube> = primes.into_iter().collect();
    result.sort_unstable();
    Ok(result)
}

/// Compute the prime implicants of the function satisfied exactly on `values`
///
/// Convenience wrapper over [`minimize`] for fully-specified minterms.
pub fn minimize_minterms(values: &[u64], n_bits: u32) -> Result<Vec<Cube>> {
    if n_bits > Cube::MAX_WIDTH {
        return Err(Error::UnsupportedWidth {
            n_bits,
            max: Cube::MAX_WIDTH,
        });
    }
    let cubes: Vec<Cube> = values.iter().map(|&v| Cube::minterm(v, n_bits)).collect();
    minimize(&cubes, n_bits)
}
