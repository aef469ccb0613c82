//! NEON 4-lane f32 vector.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Div, Mul, Sub};

use crate::simd::SimdLane;

/// Number of f32 elements that fit in a NEON 128-bit register.
pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F32x4 {
    /// NEON 128-bit register containing 4 packed f32 values
    pub elements: float32x4_t,
}

impl SimdLane<f32> for F32x4 {
    const LANE_COUNT: usize = LANE_COUNT;

    /// Creates a new vector with all elements set to the same value.
    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        Self {
            elements: vld1q_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load_partial(ptr: *const f32, size: usize) -> Self {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        // Lanes past `size` stay zero so reductions ignore them
        let mut v = vdupq_n_f32(0.0);
        if size > 0 {
            v = vsetq_lane_f32(*ptr, v, 0);
        }
        if size > 1 {
            v = vsetq_lane_f32(*ptr.add(1), v, 1);
        }
        if size > 2 {
            v = vsetq_lane_f32(*ptr.add(2), v, 2);
        }

        Self { elements: v }
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f32) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        vst1q_f32(ptr, self.elements);
    }

    #[inline(always)]
    unsafe fn store_at_partial(&self, ptr: *mut f32, size: usize) {
        debug_assert!(size < LANE_COUNT, "Size must be < {LANE_COUNT}");
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match size {
            3 => {
                vst1_f32(ptr, vget_low_f32(self.elements)); // store [0, 1]
                *ptr.add(2) = vgetq_lane_f32(self.elements, 2);
            }
            2 => vst1_f32(ptr, vget_low_f32(self.elements)),
            1 => *ptr = vgetq_lane_f32(self.elements, 0),
            _ => {}
        }
    }

    #[inline(always)]
    fn reduce_sum(&self) -> f32 {
        unsafe { vaddvq_f32(self.elements) }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vdivq_f32(self.elements, rhs.elements) },
        }
    }
}
