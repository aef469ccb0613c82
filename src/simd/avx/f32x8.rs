//! AVX 8-lane f32 vector.
//!
//! Wraps `__m256`. A 4x4 `f32` matrix is exactly two registers, which is what
//! makes this the preferred lane type for matrix kernels.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::SimdLane;

/// Number of f32 elements that fit in an AVX 256-bit register.
pub const LANE_COUNT: usize = 8;

/// AVX register containing 8 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x8 {
    /// AVX 256-bit register containing 8 packed f32 values
    pub elements: __m256,
}

/// Lane mask selecting the first `size` elements.
#[inline(always)]
unsafe fn prefix_mask(size: usize) -> __m256i {
    match size {
        0 => _mm256_setzero_si256(),
        1 => _mm256_setr_epi32(-1, 0, 0, 0, 0, 0, 0, 0),
        2 => _mm256_setr_epi32(-1, -1, 0, 0, 0, 0, 0, 0),
        3 => _mm256_setr_epi32(-1, -1, -1, 0, 0, 0, 0, 0),
        4 => _mm256_setr_epi32(-1, -1, -1, -1, 0, 0, 0, 0),
        5 => _mm256_setr_epi32(-1, -1, -1, -1, -1, 0, 0, 0),
        6 => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, 0, 0),
        _ => _mm256_setr_epi32(-1, -1, -1, -1, -1, -1, -1, 0),
    }
}

impl SimdLane<f32> for F32x8 {
    const LANE_COUNT: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm256_set1_ps(value) },
        }
    }

    /// Loads 8 elements with `_mm256_loadu_ps`.
    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm256_loadu_ps(ptr),
        }
    }

    /// Masked load of the first `size` elements, remaining lanes are zero.
    #[inline(always)]
    unsafe fn load_partial(ptr: *const f32, size: usize) -> Self {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm256_maskload_ps(ptr, prefix_mask(size)),
        }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm256_storeu_ps(ptr, self.elements);
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f32, size: usize) {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm256_maskstore_ps(ptr, prefix_mask(size), self.elements);
    }

    #[inline(always)]
    fn reduce_sum(&self) -> f32 {
        unsafe {
            let low = _mm256_castps256_ps128(self.elements);
            let high = _mm256_extractf128_ps(self.elements, 1);
            let quad = _mm_add_ps(low, high);

            let swapped = _mm_shuffle_ps(quad, quad, 0b10_11_00_01);
            let pairs = _mm_add_ps(quad, swapped);
            let upper = _mm_movehl_ps(swapped, pairs);
            _mm_cvtss_f32(_mm_add_ss(pairs, upper))
        }
    }

    /// Loads 4 elements with `_mm_loadu_ps` and places them in both 128-bit halves.
    #[inline(always)]
    unsafe fn load_repeated(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let half = _mm_loadu_ps(ptr);
        Self {
            elements: _mm256_set_m128(half, half),
        }
    }

    #[inline(always)]
    fn splat_halves(low: f32, high: f32) -> Self {
        Self {
            elements: unsafe { _mm256_set_m128(_mm_set1_ps(high), _mm_set1_ps(low)) },
        }
    }
}

impl Add for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm256_div_ps(self.elements, rhs.elements) },
        }
    }
}
