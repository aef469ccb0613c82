//! SSE2 2-lane f64 vector.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::SimdLane;

/// Number of f64 elements that fit in an SSE2 128-bit register.
pub const LANE_COUNT: usize = 2;

/// SSE2 register containing 2 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub struct F64x2 {
    /// SSE2 128-bit register containing 2 packed f64 values
    pub elements: __m128d,
}

impl SimdLane<f64> for F64x2 {
    const LANE_COUNT: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { _mm_set1_pd(value) },
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm_loadu_pd(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f64, size: usize) -> Self {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let elements = match size {
            0 => _mm_setzero_pd(),
            _ => _mm_load_sd(ptr),
        };

        Self { elements }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm_storeu_pd(ptr, self.elements);
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f64, size: usize) {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        if size == 1 {
            _mm_store_sd(ptr, self.elements);
        }
    }

    #[inline(always)]
    fn reduce_sum(&self) -> f64 {
        unsafe {
            let high = _mm_unpackhi_pd(self.elements, self.elements);
            _mm_cvtsd_f64(_mm_add_sd(self.elements, high))
        }
    }
}

impl Add for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_add_pd(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_sub_pd(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_mul_pd(self.elements, rhs.elements) },
        }
    }
}

impl Div for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_div_pd(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_store() {
        let src = [1.5f64, -2.5];
        let mut dst = [0.0f64; 2];

        unsafe { F64x2::load(src.as_ptr()).store_at(dst.as_mut_ptr()) };

        assert_eq!(dst, src);
    }

    #[test]
    fn test_partial_store_writes_one_element() {
        let src = [4.0f64];
        let mut dst = [0.0f64, 8.0];

        unsafe {
            let lane = F64x2::load_partial(src.as_ptr(), 1);
            lane.store_at_partial(dst.as_mut_ptr(), 1);
        }

        assert_eq!(dst, [4.0, 8.0]);
    }

    #[test]
    fn test_reduce_sum() {
        let src = [1.25f64, 2.5];
        let lane = unsafe { F64x2::load(src.as_ptr()) };
        assert_eq!(lane.reduce_sum(), 3.75);
    }
}
