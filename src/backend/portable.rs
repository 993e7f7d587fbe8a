//! Portable array-backed vectors (no intrinsics).
//!
//! Every supported width exists here regardless of the target, which is
//! what the tests validate the intrinsic backends against. The loops are
//! simple enough that they auto-vectorize on any SIMD-capable target.

use super::{LaneCounts, LaneMask, SimdFloat};
use core::ops::{Add, BitAnd, BitXor, Div, Mul, Sub};

macro_rules! lane_counts {
    ($(#[$meta:meta])* $name:ident, $lanes:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        #[repr(transparent)]
        pub struct $name(pub [u32; $lanes]);

        impl LaneCounts for $name {
            const LANES: usize = $lanes;

            #[inline(always)]
            fn splat(val: u32) -> Self {
                Self([val; $lanes])
            }

            #[inline(always)]
            fn from_fn(mut f: impl FnMut(usize) -> u32) -> Self {
                let mut out = [0u32; $lanes];
                for (lane, slot) in out.iter_mut().enumerate() {
                    *slot = f(lane);
                }
                Self(out)
            }

            #[inline(always)]
            fn lane(self, lane: usize) -> u32 {
                self.0[lane]
            }
        }
    };
}

lane_counts!(
    /// 2-lane count vector.
    U32x2, 2
);
lane_counts!(
    /// 4-lane count vector.
    U32x4, 4
);
lane_counts!(
    /// 8-lane count vector.
    U32x8, 8
);

macro_rules! lane_mask {
    ($(#[$meta:meta])* $name:ident, $lanes:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
        #[repr(transparent)]
        pub struct $name(pub [bool; $lanes]);

        impl LaneMask for $name {
            const LANES: usize = $lanes;

            #[inline(always)]
            fn to_bits(self) -> u32 {
                let mut bits = 0u32;
                for lane in 0..$lanes {
                    bits |= (self.0[lane] as u32) << lane;
                }
                bits
            }
        }
    };
}

lane_mask!(
    /// 2-lane comparison result.
    Mask2, 2
);
lane_mask!(
    /// 4-lane comparison result.
    Mask4, 4
);
lane_mask!(
    /// 8-lane comparison result.
    Mask8, 8
);

macro_rules! simd_float {
    ($(#[$meta:meta])* $name:ident, $elem:ty, $lanes:literal, $mask:ident, $counts:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub [$elem; $lanes]);

        impl $name {
            /// Wrap an array of lanes.
            #[inline(always)]
            pub fn new(lanes: [$elem; $lanes]) -> Self {
                Self(lanes)
            }

            /// Unwrap into an array of lanes.
            #[inline(always)]
            pub fn to_array(self) -> [$elem; $lanes] {
                self.0
            }

            #[inline(always)]
            fn map2(self, rhs: Self, f: impl Fn($elem, $elem) -> $elem) -> Self {
                let mut out = self.0;
                for lane in 0..$lanes {
                    out[lane] = f(self.0[lane], rhs.0[lane]);
                }
                Self(out)
            }

            #[inline(always)]
            fn cmp(self, rhs: Self, f: impl Fn($elem, $elem) -> bool) -> $mask {
                let mut out = [false; $lanes];
                for lane in 0..$lanes {
                    out[lane] = f(self.0[lane], rhs.0[lane]);
                }
                $mask(out)
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                self.map2(rhs, |x, y| x + y)
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                self.map2(rhs, |x, y| x - y)
            }
        }

        impl Mul for $name {
            type Output = Self;
            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                self.map2(rhs, |x, y| x * y)
            }
        }

        impl Div for $name {
            type Output = Self;
            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                self.map2(rhs, |x, y| x / y)
            }
        }

        impl BitAnd for $name {
            type Output = Self;
            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                self.map2(rhs, |x, y| <$elem>::from_bits(x.to_bits() & y.to_bits()))
            }
        }

        impl BitXor for $name {
            type Output = Self;
            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                self.map2(rhs, |x, y| <$elem>::from_bits(x.to_bits() ^ y.to_bits()))
            }
        }

        impl SimdFloat for $name {
            type Elem = $elem;
            type Mask = $mask;
            type Counts = $counts;
            const LANES: usize = $lanes;

            #[inline(always)]
            fn splat(val: $elem) -> Self {
                Self([val; $lanes])
            }

            #[inline(always)]
            fn from_slice(slice: &[$elem]) -> Self {
                assert!(slice.len() >= Self::LANES);
                let mut out = [0.0; $lanes];
                out.copy_from_slice(&slice[..$lanes]);
                Self(out)
            }

            #[inline(always)]
            fn store(&self, out: &mut [$elem]) {
                assert!(out.len() >= Self::LANES);
                out[..$lanes].copy_from_slice(&self.0);
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                let mut out = self.0;
                for lane in &mut out {
                    *lane = lane.sqrt();
                }
                Self(out)
            }

            #[inline(always)]
            fn cmp_eq(self, rhs: Self) -> $mask {
                self.cmp(rhs, |x, y| x == y)
            }

            #[inline(always)]
            fn cmp_ne(self, rhs: Self) -> $mask {
                self.cmp(rhs, |x, y| x != y)
            }

            #[inline(always)]
            fn cmp_gt(self, rhs: Self) -> $mask {
                self.cmp(rhs, |x, y| x > y)
            }

            #[inline(always)]
            fn cmp_le(self, rhs: Self) -> $mask {
                self.cmp(rhs, |x, y| x <= y)
            }

            #[inline(always)]
            fn select(mask: $mask, if_true: Self, if_false: Self) -> Self {
                let mut out = if_false.0;
                for lane in 0..$lanes {
                    if mask.0[lane] {
                        out[lane] = if_true.0[lane];
                    }
                }
                Self(out)
            }
        }
    };
}

simd_float!(
    /// 4 lanes of `f32`.
    F32x4, f32, 4, Mask4, U32x4
);
simd_float!(
    /// 8 lanes of `f32`.
    F32x8, f32, 8, Mask8, U32x8
);
simd_float!(
    /// 2 lanes of `f64`.
    F64x2, f64, 2, Mask2, U32x2
);
simd_float!(
    /// 4 lanes of `f64`.
    F64x4, f64, 4, Mask4, U32x4
);
