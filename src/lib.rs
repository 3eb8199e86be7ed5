//! Boolean function minimization tools
//!
//! This crate computes the [prime implicants](https://en.wikipedia.org/wiki/Implicant)
//! of a boolean function with the
//! [Quine–McCluskey algorithm](https://en.wikipedia.org/wiki/Quine%E2%80%93McCluskey_algorithm):
//! given the function's satisfying assignments, it returns the minimal set of
//! partially-specified terms that together cover them and cannot be reduced
//! any further.
//!
//! # Usage
//!
//! ```bash
//! # Show available commands
//! primin help
//! # Compute the prime implicants of the minterms listed in f.cubes
//! primin minimize f.cubes -o primes.cubes
//! # Check that the result still covers every minterm
//! primin cover f.cubes primes.cubes
//! ```
//!
//! # Datastructures
//!
//! A boolean term is a [`Cube`]: a bit pattern paired with a mask telling
//! which positions are still literals. Variables eliminated during
//! minimization become don't-cares, tracked by clearing their mask bit.
//! Everything operates on plain machine words, so functions of up to 64
//! variables are supported; there is no symbolic variable layer.
//!
//! Minimization works on whole generations of cubes. Each round groups the
//! generation by mask, buckets every group by rank with a counting sort, and
//! merges the rank-adjacent pairs that differ in exactly one literal. Cubes
//! that no merge consumes are prime; merged cubes form the next, strictly
//! narrower generation, so the loop is bounded by the number of variables.
//!
//! ```
//! use primin::{minimize, Cube};
//!
//! let minterms: Vec<Cube> = [0b00, 0b01, 0b10]
//!     .iter()
//!     .map(|&v| Cube::minterm(v, 2))
//!     .collect();
//! let primes = minimize(&minterms, 2).unwrap();
//! assert_eq!(primes.len(), 2);
//! ```
//!
//! Selecting a minimal subset of the prime implicants (the set-cover step,
//! e.g. Petrick's method) is out of scope.

#![warn(missing_docs)]

pub mod cmd;
pub mod cube;
pub mod errors;
pub mod io;
pub mod minimize;

pub use cube::Cube;
pub use errors::{Error, Result};
pub use minimize::{minimize, minimize_minterms};
