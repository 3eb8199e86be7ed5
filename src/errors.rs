//! Error types for boolean minimization and cube file handling

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported at the crate's public boundaries
///
/// Validation happens before any processing: a failed `minimize` call
/// produces no partial results.
#[derive(Error, Debug)]
pub enum Error {
    /// More variables requested than the cube representation can hold
    #[error("unsupported width: {n_bits} variables requested, at most {max} supported")]
    UnsupportedWidth {
        /// Requested number of variables
        n_bits: u32,
        /// Widest supported cube
        max: u32,
    },

    /// A cube with value bits outside its mask, or literals outside the declared width
    #[error("invalid cube: value {value:#x}, mask {mask:#x} for width {n_bits}")]
    InvalidCube {
        /// Offending bit pattern
        value: u64,
        /// Offending literal mask
        mask: u64,
        /// Width the cube was validated against
        n_bits: u32,
    },

    /// A cube file line with characters outside `0`, `1`, `-`
    #[error("invalid cube pattern {0:?}")]
    InvalidPattern(String),

    /// Cube file lines of different widths
    #[error("inconsistent cube width: expected {expected} variables, got {found}")]
    WidthMismatch {
        /// Width set by the first pattern in the file
        expected: usize,
        /// Width of the offending pattern
        found: usize,
    },

    /// Underlying IO failure when reading or writing cube files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
