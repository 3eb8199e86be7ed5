use std::fmt;

/// Representation of a partially-specified boolean term (a cube)
///
/// A cube pairs a bit pattern (`value`) with a `mask` telling which positions
/// are still literals. A set mask bit means the variable at that position is
/// constrained to the corresponding `value` bit; a clear mask bit means the
/// variable was eliminated as don't-care.
///
/// Cubes are kept canonical: `value` carries no bits outside `mask`.
/// Equality and hashing are by the `(value, mask)` pair, so sets of cubes
/// deduplicate by content.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct Cube {
    value: u64,
    mask: u64,
}

impl Cube {
    /// Widest supported cube, in variables
    pub const MAX_WIDTH: u32 = u64::BITS;

    /// Create a cube from a bit pattern and a literal mask
    pub fn new(value: u64, mask: u64) -> Cube {
        Cube { value, mask }
    }

    /// Create a fully-specified cube (every position a literal) over `n_bits` variables
    pub fn minterm(value: u64, n_bits: u32) -> Cube {
        Cube {
            value,
            mask: width_mask(n_bits),
        }
    }

    /// The literal bit pattern
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The literal mask: set bits are still literals, clear bits are don't-care
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Number of true literals; only meaningful relative to cubes of equal mask
    pub fn rank(&self) -> u32 {
        (self.value & self.mask).count_ones()
    }

    /// Returns true if `value` carries no bits outside `mask`
    pub fn is_canonical(&self) -> bool {
        self.value & !self.mask == 0
    }

    /// Returns true if all literal positions lie within `n_bits` variables
    pub fn fits_width(&self, n_bits: u32) -> bool {
        self.mask & !width_mask(n_bits) == 0 && self.value & !width_mask(n_bits) == 0
    }

    /// Returns true if the two cubes differ in exactly one literal position
    ///
    /// Only cubes with equal masks can merge; the single differing bit is the
    /// pivot eliminated by [`Cube::merge`].
    pub fn mergeable(&self, other: &Cube) -> bool {
        self.mask == other.mask && ((self.value ^ other.value) & self.mask).is_power_of_two()
    }

    /// Merge two cubes differing in exactly one literal, eliminating the pivot
    ///
    /// Must only be called when [`Cube::mergeable`] holds; the pivot bit is
    /// cleared from both `value` and `mask`, keeping the result canonical.
    pub fn merge(&self, other: &Cube) -> Cube {
        debug_assert!(self.mergeable(other));
        let pivot = (self.value ^ other.value) & self.mask;
        Cube {
            value: self.value & !pivot,
            mask: self.mask & !pivot,
        }
    }

    /// Returns true if the cube covers the given fully-specified assignment
    pub fn covers(&self, minterm: u64) -> bool {
        (minterm ^ self.value) & self.mask == 0
    }
}

/// Mask with the low `n_bits` bits set
pub(crate) fn width_mask(n_bits: u32) -> u64 {
    debug_assert!(n_bits <= Cube::MAX_WIDTH);
    if n_bits == Cube::MAX_WIDTH {
        !0u64
    } else {
        (1u64 << n_bits) - 1
    }
}

impl fmt::Display for Cube {
    /// Render as a `0`/`1`/`-` pattern, most significant position first
    ///
    /// The formatter width selects how many positions to print, defaulting to
    /// the full 64: `format!("{:4}", cube)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(Cube::MAX_WIDTH as usize);
        for i in (0..width).rev() {
            let bit = 1u64 << i;
            let c = if self.mask & bit == 0 {
                '-'
            } else if self.value & bit != 0 {
                '1'
            } else {
                '0'
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cube({:#x}/{:#x})", self.value, self.mask)
    }
}
