//! # lanemask
//!
//! Bit-packed per-lane predicate masks for branch-free SIMD batch
//! algorithms, demonstrated on a batched quadratic-equation solver.
//!
//! ## The problem
//!
//! A batch of independent numeric problems packed into vector lanes may
//! straddle several solution classes (here: quadratic with two real
//! roots, quadratic with none, linear, degenerate). Scalar per-lane
//! branching throws the vectorization away; always running the fully
//! general blended computation wastes the common uniform case.
//!
//! ## The technique
//!
//! Every per-lane boolean test is one vector compare, reduced to one bit
//! per lane and packed into a named field of a
//! [`PredicateMask`](mask::PredicateMask), a single `u32`. Whether an
//! entire batch shares a class is then an O(1) aggregate query
//! (`all_true` / `all_false`), and [`solve`](solve::solve) uses those
//! queries to route each batch to the cheapest applicable vector path.
//! Predicates the chosen path does not need are never computed.
//!
//! ```
//! use lanemask::{solve, LaneCounts};
//! use lanemask::backend::portable::F32x4;
//!
//! let a = F32x4::new([1.0, 1.0, 0.0, 1.0]);
//! let b = F32x4::new([0.0, 5.0, 2.0, -4.0]);
//! let c = F32x4::new([-4.0, 6.0, -3.0, 4.0]);
//! let solution = solve(a, b, c);
//! assert_eq!(solution.roots.lane(0), 2); // x² - 4: roots ±2
//! assert_eq!(solution.roots.lane(2), 1); // 2x - 3: root 1.5
//! ```
//!
//! The width-native aliases below pick the intrinsic-backed types where
//! the target provides them and the portable array-backed fallback
//! elsewhere; both honor the same [`SimdFloat`] contract.

pub mod backend;
pub mod mask;
pub mod reference;
pub mod solve;

pub use backend::{Element, LaneCounts, LaneMask, SimdFloat};
pub use mask::{Predicate, PredicateMask};
pub use solve::{solve, Solution};

#[cfg(target_arch = "x86_64")]
pub use backend::x86::{F32x4, F64x2};

#[cfg(not(target_arch = "x86_64"))]
pub use backend::portable::{F32x4, F64x2};

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub use backend::x86::{F32x8, F64x4};

#[cfg(not(all(target_arch = "x86_64", target_feature = "avx")))]
pub use backend::portable::{F32x8, F64x4};
