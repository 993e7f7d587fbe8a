//! x86_64 intrinsic backend.
//!
//! SSE2 types (`F32x4`, `F64x2`) are always available on `x86_64`. The
//! 256-bit types (`F32x8`, `F64x4`) require the target to enable the
//! `avx` feature; otherwise the portable versions stand in.
//!
//! Lane-bit extraction uses `movemask`, which takes the sign bit of each
//! lane. Comparison results are all-ones or all-zeros per lane, so the
//! sign bit carries the full truth value.

use super::{LaneMask, SimdFloat};
use crate::backend::portable::{U32x2, U32x4};
#[cfg(target_feature = "avx")]
use crate::backend::portable::U32x8;
use core::arch::x86_64::*;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, BitAnd, BitXor, Div, Mul, Sub};

// ============================================================================
// SSE: F32x4 / Mask4
// ============================================================================

/// 4-lane comparison result (SSE).
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask4(__m128);

impl Default for Mask4 {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }
}

impl Debug for Mask4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Mask4({:04b})", self.to_bits())
    }
}

impl LaneMask for Mask4 {
    const LANES: usize = 4;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        unsafe { _mm_movemask_ps(self.0) as u32 }
    }
}

/// 4 lanes of `f32` (SSE).
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x4(__m128);

impl Default for F32x4 {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }
}

impl Debug for F32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut out = [0.0f32; 4];
        self.store(&mut out);
        write!(f, "F32x4({:?})", out)
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, rhs.0)) }
    }
}

impl Sub for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_ps(self.0, rhs.0)) }
    }
}

impl Mul for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, rhs.0)) }
    }
}

impl Div for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm_div_ps(self.0, rhs.0)) }
    }
}

impl BitAnd for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(_mm_and_ps(self.0, rhs.0)) }
    }
}

impl BitXor for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        unsafe { Self(_mm_xor_ps(self.0, rhs.0)) }
    }
}

impl SimdFloat for F32x4 {
    type Elem = f32;
    type Mask = Mask4;
    type Counts = U32x4;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(val: f32) -> Self {
        unsafe { Self(_mm_set1_ps(val)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Self(_mm_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn store(&self, out: &mut [f32]) {
        assert!(out.len() >= Self::LANES);
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Self(_mm_sqrt_ps(self.0)) }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Mask4 {
        unsafe { Mask4(_mm_cmpeq_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Mask4 {
        unsafe { Mask4(_mm_cmpneq_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask4 {
        unsafe { Mask4(_mm_cmpgt_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask4 {
        unsafe { Mask4(_mm_cmple_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Mask4, if_true: Self, if_false: Self) -> Self {
        unsafe {
            // (mask & if_true) | (!mask & if_false); andnot computes !a & b.
            let t = _mm_and_ps(mask.0, if_true.0);
            let f = _mm_andnot_ps(mask.0, if_false.0);
            Self(_mm_or_ps(t, f))
        }
    }
}

// ============================================================================
// SSE2: F64x2 / Mask2
// ============================================================================

/// 2-lane comparison result (SSE2).
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask2(__m128d);

impl Default for Mask2 {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_pd()) }
    }
}

impl Debug for Mask2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Mask2({:02b})", self.to_bits())
    }
}

impl LaneMask for Mask2 {
    const LANES: usize = 2;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        unsafe { _mm_movemask_pd(self.0) as u32 }
    }
}

/// 2 lanes of `f64` (SSE2).
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F64x2(__m128d);

impl Default for F64x2 {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_pd()) }
    }
}

impl Debug for F64x2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut out = [0.0f64; 2];
        self.store(&mut out);
        write!(f, "F64x2({:?})", out)
    }
}

impl Add for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_pd(self.0, rhs.0)) }
    }
}

impl Sub for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_pd(self.0, rhs.0)) }
    }
}

impl Mul for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_pd(self.0, rhs.0)) }
    }
}

impl Div for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm_div_pd(self.0, rhs.0)) }
    }
}

impl BitAnd for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(_mm_and_pd(self.0, rhs.0)) }
    }
}

impl BitXor for F64x2 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        unsafe { Self(_mm_xor_pd(self.0, rhs.0)) }
    }
}

impl SimdFloat for F64x2 {
    type Elem = f64;
    type Mask = Mask2;
    type Counts = U32x2;
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(val: f64) -> Self {
        unsafe { Self(_mm_set1_pd(val)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Self(_mm_loadu_pd(slice.as_ptr())) }
    }

    #[inline(always)]
    fn store(&self, out: &mut [f64]) {
        assert!(out.len() >= Self::LANES);
        unsafe { _mm_storeu_pd(out.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Self(_mm_sqrt_pd(self.0)) }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Mask2 {
        unsafe { Mask2(_mm_cmpeq_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Mask2 {
        unsafe { Mask2(_mm_cmpneq_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask2 {
        unsafe { Mask2(_mm_cmpgt_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask2 {
        unsafe { Mask2(_mm_cmple_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Mask2, if_true: Self, if_false: Self) -> Self {
        unsafe {
            let t = _mm_and_pd(mask.0, if_true.0);
            let f = _mm_andnot_pd(mask.0, if_false.0);
            Self(_mm_or_pd(t, f))
        }
    }
}

// ============================================================================
// AVX: F32x8 / Mask8
// ============================================================================

/// 8-lane comparison result (AVX).
#[cfg(target_feature = "avx")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask8(__m256);

#[cfg(target_feature = "avx")]
impl Default for Mask8 {
    fn default() -> Self {
        unsafe { Self(_mm256_setzero_ps()) }
    }
}

#[cfg(target_feature = "avx")]
impl Debug for Mask8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Mask8({:08b})", self.to_bits())
    }
}

#[cfg(target_feature = "avx")]
impl LaneMask for Mask8 {
    const LANES: usize = 8;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        unsafe { _mm256_movemask_ps(self.0) as u32 }
    }
}

/// 8 lanes of `f32` (AVX).
#[cfg(target_feature = "avx")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32x8(__m256);

#[cfg(target_feature = "avx")]
impl Default for F32x8 {
    fn default() -> Self {
        unsafe { Self(_mm256_setzero_ps()) }
    }
}

#[cfg(target_feature = "avx")]
impl Debug for F32x8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut out = [0.0f32; 8];
        self.store(&mut out);
        write!(f, "F32x8({:?})", out)
    }
}

#[cfg(target_feature = "avx")]
impl Add for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_add_ps(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl Sub for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_sub_ps(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl Mul for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_mul_ps(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl Div for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_div_ps(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl BitAnd for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_and_ps(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl BitXor for F32x8 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_xor_ps(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl SimdFloat for F32x8 {
    type Elem = f32;
    type Mask = Mask8;
    type Counts = U32x8;
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(val: f32) -> Self {
        unsafe { Self(_mm256_set1_ps(val)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Self(_mm256_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn store(&self, out: &mut [f32]) {
        assert!(out.len() >= Self::LANES);
        unsafe { _mm256_storeu_ps(out.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Self(_mm256_sqrt_ps(self.0)) }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_NEQ_UQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask8 {
        unsafe { Mask8(_mm256_cmp_ps::<_CMP_LE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Mask8, if_true: Self, if_false: Self) -> Self {
        unsafe { Self(_mm256_blendv_ps(if_false.0, if_true.0, mask.0)) }
    }
}

// ============================================================================
// AVX: F64x4 / Mask4d
// ============================================================================

/// 4-lane comparison result for `f64` (AVX).
#[cfg(target_feature = "avx")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask4d(__m256d);

#[cfg(target_feature = "avx")]
impl Default for Mask4d {
    fn default() -> Self {
        unsafe { Self(_mm256_setzero_pd()) }
    }
}

#[cfg(target_feature = "avx")]
impl Debug for Mask4d {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Mask4d({:04b})", self.to_bits())
    }
}

#[cfg(target_feature = "avx")]
impl LaneMask for Mask4d {
    const LANES: usize = 4;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        unsafe { _mm256_movemask_pd(self.0) as u32 }
    }
}

/// 4 lanes of `f64` (AVX).
#[cfg(target_feature = "avx")]
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F64x4(__m256d);

#[cfg(target_feature = "avx")]
impl Default for F64x4 {
    fn default() -> Self {
        unsafe { Self(_mm256_setzero_pd()) }
    }
}

#[cfg(target_feature = "avx")]
impl Debug for F64x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut out = [0.0f64; 4];
        self.store(&mut out);
        write!(f, "F64x4({:?})", out)
    }
}

#[cfg(target_feature = "avx")]
impl Add for F64x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_add_pd(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl Sub for F64x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_sub_pd(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl Mul for F64x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_mul_pd(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl Div for F64x4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_div_pd(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl BitAnd for F64x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_and_pd(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl BitXor for F64x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        unsafe { Self(_mm256_xor_pd(self.0, rhs.0)) }
    }
}

#[cfg(target_feature = "avx")]
impl SimdFloat for F64x4 {
    type Elem = f64;
    type Mask = Mask4d;
    type Counts = U32x4;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(val: f64) -> Self {
        unsafe { Self(_mm256_set1_pd(val)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Self(_mm256_loadu_pd(slice.as_ptr())) }
    }

    #[inline(always)]
    fn store(&self, out: &mut [f64]) {
        assert!(out.len() >= Self::LANES);
        unsafe { _mm256_storeu_pd(out.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        unsafe { Self(_mm256_sqrt_pd(self.0)) }
    }

    #[inline(always)]
    fn cmp_eq(self, rhs: Self) -> Mask4d {
        unsafe { Mask4d(_mm256_cmp_pd::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_ne(self, rhs: Self) -> Mask4d {
        unsafe { Mask4d(_mm256_cmp_pd::<_CMP_NEQ_UQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_gt(self, rhs: Self) -> Mask4d {
        unsafe { Mask4d(_mm256_cmp_pd::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn cmp_le(self, rhs: Self) -> Mask4d {
        unsafe { Mask4d(_mm256_cmp_pd::<_CMP_LE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Mask4d, if_true: Self, if_false: Self) -> Self {
        unsafe { Self(_mm256_blendv_pd(if_false.0, if_true.0, mask.0)) }
    }
}
