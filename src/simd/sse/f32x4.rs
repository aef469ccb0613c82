//! SSE 4-lane f32 vector.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::SimdLane;

/// Number of f32 elements that fit in an SSE 128-bit register.
pub const LANE_COUNT: usize = 4;

/// SSE register containing 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// SSE 128-bit register containing 4 packed f32 values
    pub elements: __m128,
}

impl SimdLane<f32> for F32x4 {
    const LANE_COUNT: usize = LANE_COUNT;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm_set1_ps(value) },
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f32, size: usize) -> Self {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let elements = match size {
            0 => _mm_setzero_ps(),
            1 => _mm_load_ss(ptr),
            2 => _mm_setr_ps(*ptr, *ptr.add(1), 0.0, 0.0),
            _ => _mm_setr_ps(*ptr, *ptr.add(1), *ptr.add(2), 0.0),
        };

        Self { elements }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        _mm_storeu_ps(ptr, self.elements);
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f32, size: usize) {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        let mut buffer = [0.0f32; LANE_COUNT];
        _mm_storeu_ps(buffer.as_mut_ptr(), self.elements);
        std::ptr::copy_nonoverlapping(buffer.as_ptr(), ptr, size);
    }

    #[inline(always)]
    fn reduce_sum(&self) -> f32 {
        unsafe {
            // [a+b, b+a, c+d, d+c] then fold the high pair onto the low pair
            let swapped = _mm_shuffle_ps(self.elements, self.elements, 0b10_11_00_01);
            let pairs = _mm_add_ps(self.elements, swapped);
            let high = _mm_movehl_ps(swapped, pairs);
            _mm_cvtss_f32(_mm_add_ss(pairs, high))
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_div_ps(self.elements, rhs.elements) },
        }
    }
}
