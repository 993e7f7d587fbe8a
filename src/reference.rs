//! Scalar reference solver.
//!
//! An independently written, branch-per-lane solver with the same
//! canonicalization and formulas as [`solve`](crate::solve::solve). Ground
//! truth for the tests and the demo; not part of the production path.

use crate::backend::Element;

/// Solve one equation `a·x² + b·x + c = 0` with ordinary branches.
///
/// Returns `(count, r1, r2)` with `count` in `0..=2`; unused root slots
/// are zero. Where two roots exist, `r1 <= r2`.
pub fn solve_scalar<E: Element>(a: E, b: E, c: E) -> (u32, E, E) {
    let zero = E::from_f32(0.0);

    // Same canonicalization as the vector path: a >= 0 and b negated.
    // When a is flipped, b's two negations cancel.
    let (a, b, c) = if a < zero { (-a, b, -c) } else { (a, -b, c) };

    if a != zero {
        let d = b * b - E::from_f32(4.0) * a * c;
        if d < zero {
            return (0, zero, zero);
        }
        let mul = E::from_f32(0.5) / a;
        if d > zero {
            let sq = d.sqrt();
            return (2, (b - sq) * mul, (b + sq) * mul);
        }
        return (1, b * mul, zero);
    }

    if b != zero {
        return (1, c / b, zero);
    }
    (0, zero, zero)
}
