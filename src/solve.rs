//! Branch-free batched quadratic/linear equation solving.
//!
//! [`solve`] takes one batch of `L` independent equations
//! `a·x² + b·x + c = 0` (degrading to `b·x + c = 0` where `a == 0`) and
//! returns the per-lane root counts and roots without executing any
//! per-lane scalar control flow.
//!
//! The routing works on aggregate predicate queries: each per-lane test is
//! one vector compare merged into a [`PredicateMask`], and each
//! `all_true`/`all_false` query is one scalar compare. When an entire
//! batch shares a solution class, the matching uniform path runs with no
//! blending at all; only a genuinely mixed batch pays for the blended
//! general path. Predicates are computed lazily: a batch resolved by the
//! first two tests never evaluates the remaining ones.

use crate::backend::{Element, LaneCounts, LaneMask, SimdFloat};
use crate::mask::PredicateMask;
use log::trace;

crate::predicates! {
    /// `a != 0`: the lane holds a genuinely quadratic equation.
    Quadratic = 0,
    /// The discriminant `b² - 4ac` is strictly positive.
    DiscrPositive = 1,
    /// The discriminant is strictly negative.
    DiscrNegative = 2,
    /// `b == 0` (meaningful for non-quadratic lanes).
    ZeroB = 3,
}

/// Per-lane solutions for one batch of equations.
///
/// Where `roots` is 0 for a lane, both root slots are unspecified; where
/// it is 1, `r2` is unspecified. Unspecified slots may be non-finite but
/// never affect any other lane. Where `roots` is 2, `r1 <= r2`.
#[derive(Copy, Clone, Debug)]
pub struct Solution<V: SimdFloat> {
    /// Count of real roots per lane, each in `0..=2`.
    pub roots: V::Counts,
    /// The smaller root, or the only root.
    pub r1: V,
    /// The larger root; meaningful only where `roots` is 2.
    pub r2: V,
}

/// Solution class of a whole batch, established by the aggregate queries.
///
/// Selects which per-lane classifier [`count_roots`] runs; the classifier
/// is the only per-lane scalar work in the slow paths.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EquationClass {
    /// Every lane has `a != 0`.
    Quadratic,
    /// No lane has `a != 0`.
    Linear,
    /// Lanes disagree.
    Mixed,
}

/// Root count for a lane known to be quadratic: sign of the discriminant.
fn quadratic_roots<M: LaneMask>(mask: &PredicateMask<M>, lane: usize) -> u32 {
    if mask.lane::<DiscrNegative>(lane) {
        return 0;
    }
    if mask.lane::<DiscrPositive>(lane) {
        return 2;
    }
    1
}

/// Root count for a lane known to be linear: 1 unless `b == 0`.
fn linear_roots<M: LaneMask>(mask: &PredicateMask<M>, lane: usize) -> u32 {
    if mask.lane::<ZeroB>(lane) {
        return 0;
    }
    1
}

/// Root count for a lane of unknown class; the slowest classifier.
fn general_roots<M: LaneMask>(mask: &PredicateMask<M>, lane: usize) -> u32 {
    if mask.lane::<Quadratic>(lane) {
        quadratic_roots(mask, lane)
    } else {
        linear_roots(mask, lane)
    }
}

/// Build the per-lane root-count vector with the classifier for `class`.
fn count_roots<V: SimdFloat>(mask: &PredicateMask<V::Mask>, class: EquationClass) -> V::Counts {
    let classify = match class {
        EquationClass::Quadratic => quadratic_roots::<V::Mask>,
        EquationClass::Linear => linear_roots::<V::Mask>,
        EquationClass::Mixed => general_roots::<V::Mask>,
    };
    V::Counts::from_fn(|lane| classify(mask, lane))
}

/// `(b ± sqrt(discr)) * (0.5 / a)` for the whole batch.
///
/// `b` arrives already negated and `a` already non-negative, so the
/// subtracted form is the smaller root: the pair comes out sorted.
fn quadratic_formula<V: SimdFloat>(a: V, b: V, discr: V) -> (V, V) {
    let sqrt_d = discr.sqrt();
    let mul = V::splat(V::Elem::from_f32(0.5)) / a;
    ((b - sqrt_d) * mul, (b + sqrt_d) * mul)
}

/// Solve a batch of `V::LANES` independent quadratic/linear equations.
///
/// Lanes with `a != 0` are quadratic; lanes with `a == 0` are linear, with
/// zero roots where `b == 0` as well. Returns per-lane root counts in
/// `0..=2` and the roots themselves, sorted (`r1 <= r2`) where two exist.
///
/// The function is pure: no allocation, no shared state, safe to call
/// concurrently from any number of threads.
pub fn solve<V: SimdFloat>(a: V, b: V, c: V) -> Solution<V> {
    let sign_bits = V::splat(V::Elem::from_f32(-0.0));

    // Flip the signs of a, b, c together wherever a < 0, so a >= 0 holds
    // in every lane; with the negated b below this makes the two-root
    // case come out sorted without a compare.
    let a_sign = a & sign_bits;
    let a = a ^ a_sign;
    let b = b ^ a_sign;
    let c = c ^ a_sign;
    // Both formulas below want -b.
    let b = b ^ sign_bits;

    let zero = V::splat(V::Elem::from_f32(0.0));
    let mut mask = PredicateMask::<V::Mask>::new();

    let quadratic = a.cmp_ne(zero);
    mask.merge::<Quadratic>(quadratic);

    let discr = b * b - V::splat(V::Elem::from_f32(4.0)) * a * c;
    mask.merge::<DiscrPositive>(discr.cmp_gt(zero));

    // Uniform two-root batch: one formula evaluation, nothing per-lane.
    if mask.all_true::<Quadratic>() && mask.all_true::<DiscrPositive>() {
        trace!("uniform quadratic batch, two roots per lane");
        let (r1, r2) = quadratic_formula(a, b, discr);
        return Solution {
            roots: V::Counts::splat(2),
            r1,
            r2,
        };
    }

    // Strict: a zero discriminant is neither positive nor negative, which
    // is what lets the classifier count its single root.
    mask.merge::<DiscrNegative>(zero.cmp_gt(discr));

    if mask.all_true::<Quadratic>() {
        if mask.all_true::<DiscrNegative>() {
            trace!("uniform quadratic batch, no real roots");
            return Solution {
                roots: V::Counts::splat(0),
                r1: zero,
                r2: zero,
            };
        }

        // Root counts straddle the discriminant's sign. The formula still
        // runs for the whole vector; lanes with a negative discriminant
        // get a harmless NaN that the count keeps callers away from.
        trace!("quadratic batch, mixed root counts");
        let (r1, r2) = quadratic_formula(a, b, discr);
        return Solution {
            roots: count_roots::<V>(&mask, EquationClass::Quadratic),
            r1,
            r2,
        };
    }

    mask.merge::<ZeroB>(b.cmp_eq(zero));

    if mask.all_false::<Quadratic>() {
        // All lanes linear: the root is c / b (b holds -b, so this is the
        // textbook -c/b). Lanes with b == 0 divide by zero into a slot
        // their count marks unused.
        let r1 = c / b;

        if mask.all_false::<ZeroB>() {
            trace!("uniform linear batch");
            return Solution {
                roots: V::Counts::splat(1),
                r1,
                r2: zero,
            };
        }

        trace!("linear batch with degenerate lanes");
        return Solution {
            roots: count_roots::<V>(&mask, EquationClass::Linear),
            r1,
            r2: zero,
        };
    }

    // Mixed quadratic/linear batch: compute both candidate r1 vectors and
    // blend under the Quadratic mask. This is the worst case.
    trace!("mixed quadratic/linear batch");
    let (quad_r1, r2) = quadratic_formula(a, b, discr);
    let r1 = V::select(quadratic, quad_r1, c / b);
    Solution {
        roots: count_roots::<V>(&mask, EquationClass::Mixed),
        r1,
        r2,
    }
}
