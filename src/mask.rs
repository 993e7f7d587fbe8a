//! Bit-packed per-lane predicate sets.
//!
//! [`PredicateMask`] stores the truth value of several independently named
//! boolean tests, for every lane of a vector batch, inside one `u32`.
//! Predicate `P` with field index `i` owns the contiguous bit range
//! `[i * L, i * L + L)`, where `L` is the lane count of the mask vector
//! type; bit `i * L + lane` is set iff `P` holds for `lane`.
//!
//! The payoff is the aggregate queries: [`all_true`](PredicateMask::all_true)
//! and [`all_false`](PredicateMask::all_false) are a single compare against
//! a constant field mask, which is what lets a batch algorithm decide in
//! O(1) whether every lane can take the same fast path.
//!
//! A predicate whose field would not fit in the word (`(i + 1) * L > 32`)
//! is rejected at compile time; there is no runtime failure mode.

use crate::backend::LaneMask;
use core::marker::PhantomData;

/// A named per-lane boolean test, identified by its field index.
///
/// Implementors are zero-sized marker types; declare them with the
/// [`predicates!`](crate::predicates) macro. Two predicates used with the
/// same mask must not share an index.
pub trait Predicate {
    /// Zero-based field index of this predicate within the mask word.
    const INDEX: usize;
}

/// Declares zero-sized predicate marker types with explicit field indices.
///
/// ```
/// lanemask::predicates! {
///     /// `x > 0` per lane.
///     Positive = 0,
///     /// `x == 0` per lane.
///     Zero = 1,
/// }
/// ```
#[macro_export]
macro_rules! predicates {
    ($($(#[$meta:meta])* $name:ident = $index:expr),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::mask::Predicate for $name {
                const INDEX: usize = $index;
            }
        )+
    };
}

/// A set of named per-lane predicates packed into one machine word.
///
/// `M` is the comparison-result type the predicates are merged from; its
/// lane count fixes the field width. The mask is zero-initialized, mutated
/// only by merge/set/clear during a single computation, and never shared;
/// every operation is pure bit arithmetic with no allocation.
#[derive(Copy, Clone, Debug)]
pub struct PredicateMask<M: LaneMask> {
    bits: u32,
    _mask: PhantomData<M>,
}

impl<M: LaneMask> Default for PredicateMask<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: LaneMask> PredicateMask<M> {
    /// All-ones field for a single predicate, before shifting.
    const LANE_FIELD: u32 = !0u32 >> (32 - M::LANES as u32);

    /// An empty mask: every predicate false for every lane.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            bits: 0,
            _mask: PhantomData,
        }
    }

    /// Bit offset of predicate `P`'s field.
    ///
    /// The `const` block rejects, at compile time, any predicate whose
    /// field would overflow the mask word.
    #[inline(always)]
    fn shift<P: Predicate>() -> u32 {
        const {
            assert!(
                (P::INDEX + 1) * M::LANES <= u32::BITS as usize,
                "predicate field overflows the mask word"
            );
        }
        (P::INDEX * M::LANES) as u32
    }

    /// All-ones mask covering exactly predicate `P`'s field.
    #[inline(always)]
    fn field<P: Predicate>() -> u32 {
        Self::LANE_FIELD << Self::shift::<P>()
    }

    /// Reset every predicate for every lane.
    #[inline(always)]
    pub fn clear_all(&mut self) {
        self.bits = 0;
    }

    /// Clear all lanes of predicate `P`, leaving every other field intact.
    #[inline(always)]
    pub fn clear<P: Predicate>(&mut self) {
        self.bits &= !Self::field::<P>();
    }

    /// Merge a vector comparison result into predicate `P`'s field with
    /// bitwise OR. No other field is touched.
    #[inline(always)]
    pub fn merge<P: Predicate>(&mut self, lanes: M) {
        self.bits |= lanes.to_bits() << Self::shift::<P>();
    }

    /// Merge all-true into predicate `P`'s field.
    #[inline(always)]
    pub fn set_all<P: Predicate>(&mut self) {
        self.bits |= Self::field::<P>();
    }

    /// True if predicate `P` holds for every lane.
    #[inline(always)]
    pub fn all_true<P: Predicate>(&self) -> bool {
        self.bits & Self::field::<P>() == Self::field::<P>()
    }

    /// True if predicate `P` holds for no lane.
    #[inline(always)]
    pub fn all_false<P: Predicate>(&self) -> bool {
        self.bits & Self::field::<P>() == 0
    }

    /// True if predicate `P` holds for the given lane.
    ///
    /// `lane` must be below the lane count; an out-of-range index is a
    /// programming error, checked in debug builds only.
    #[inline(always)]
    pub fn lane<P: Predicate>(&self, lane: usize) -> bool {
        debug_assert!(lane < M::LANES, "lane index out of range");
        self.bits & (1u32 << (Self::shift::<P>() + lane as u32)) != 0
    }

    /// The raw packed word.
    #[inline(always)]
    pub fn bits(&self) -> u32 {
        self.bits
    }
}
