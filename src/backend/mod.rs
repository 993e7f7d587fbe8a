//! Backend traits and vector implementations.
//!
//! The traits here define the contract the solver is written against:
//!
//! - [`SimdFloat`]: a fixed-width vector of floats with elementwise
//!   arithmetic, bitwise operations on the lane representations,
//!   comparisons producing a [`LaneMask`], and a branchless per-lane
//!   select.
//! - [`LaneMask`]: the per-lane boolean result of a vector comparison,
//!   reducible to one bit per lane in a scalar word.
//! - [`LaneCounts`]: a small integer vector holding one count per lane.
//!
//! [`portable`] provides array-backed implementations for every supported
//! width and is always compiled. [`x86`] provides intrinsic-backed
//! implementations on `x86_64` (SSE2 unconditionally, AVX widths when the
//! target enables the `avx` feature).

use core::fmt::Debug;
use core::ops::{Add, BitAnd, BitXor, Div, Mul, Neg, Sub};

pub mod portable;

#[cfg(target_arch = "x86_64")]
pub mod x86;

/// Scalar element of a vector lane (`f32` or `f64`).
pub trait Element:
    Copy
    + Clone
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Widening conversion from an `f32` literal.
    fn from_f32(val: f32) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;
}

impl Element for f32 {
    #[inline(always)]
    fn from_f32(val: f32) -> Self {
        val
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        f32::sqrt(self)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        f32::abs(self)
    }
}

impl Element for f64 {
    #[inline(always)]
    fn from_f32(val: f32) -> Self {
        val as f64
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        f64::abs(self)
    }
}

/// Per-lane boolean result of a vector comparison.
///
/// Each lane is either all-ones (true) or all-zeros (false). The mask
/// reduces to a scalar word with one bit per lane, which is what
/// [`PredicateMask`](crate::mask::PredicateMask) packs its fields from.
pub trait LaneMask: Copy + Clone + Debug {
    /// Number of lanes packed into this mask.
    const LANES: usize;

    /// Pack one bit per lane into the low bits of a scalar word.
    ///
    /// Bit `i` is 1 iff lane `i` compared true. Bits at and above
    /// `LANES` must be zero.
    fn to_bits(self) -> u32;

    /// True if every lane compared true.
    #[inline(always)]
    fn all(self) -> bool {
        self.to_bits() == !0u32 >> (32 - Self::LANES as u32)
    }

    /// True if at least one lane compared true.
    #[inline(always)]
    fn any(self) -> bool {
        self.to_bits() != 0
    }
}

/// Integer vector holding one small count per lane.
pub trait LaneCounts: Copy + Clone + Debug + Default + PartialEq {
    /// Number of lanes.
    const LANES: usize;

    /// Broadcast one count to every lane.
    fn splat(val: u32) -> Self;

    /// Build the vector by evaluating `f` for each lane index.
    fn from_fn(f: impl FnMut(usize) -> u32) -> Self;

    /// Read one lane.
    fn lane(self, lane: usize) -> u32;
}

/// A fixed-width vector of floats.
///
/// Bitwise operators act on the IEEE bit patterns of the lanes, which is
/// how sign manipulation is done without branches. Comparisons return the
/// associated [`LaneMask`] rather than another float vector.
pub trait SimdFloat:
    Copy
    + Clone
    + Debug
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
{
    /// The scalar element type of each lane.
    type Elem: Element;

    /// The comparison-result type for this width.
    type Mask: LaneMask;

    /// The per-lane integer count vector for this width.
    type Counts: LaneCounts;

    /// Number of lanes.
    const LANES: usize;

    /// Broadcast a scalar across all lanes.
    fn splat(val: Self::Elem) -> Self;

    /// Load from a slice. The slice must hold at least `LANES` elements.
    fn from_slice(slice: &[Self::Elem]) -> Self;

    /// Store to a slice. The slice must hold at least `LANES` elements.
    fn store(&self, out: &mut [Self::Elem]);

    /// Elementwise square root.
    fn sqrt(self) -> Self;

    /// Elementwise equality.
    fn cmp_eq(self, rhs: Self) -> Self::Mask;

    /// Elementwise inequality.
    fn cmp_ne(self, rhs: Self) -> Self::Mask;

    /// Elementwise greater-than.
    fn cmp_gt(self, rhs: Self) -> Self::Mask;

    /// Elementwise less-than-or-equal.
    fn cmp_le(self, rhs: Self) -> Self::Mask;

    /// Branchless select: `if_true` where the mask lane is set, `if_false`
    /// elsewhere.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;
}
