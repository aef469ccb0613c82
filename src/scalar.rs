//! Element types accepted by the vector and matrix types.
//!
//! [`Scalar`] is sealed and implemented for `f32` and `f64` only, so
//! `Vector4<i32>` or `Matrix4<u8>` fail to compile instead of failing at runtime.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use bytemuck::Pod;
use num::Float;

#[cfg(any(sse, neon, avx))]
use crate::simd::SimdLane;

/// Tolerance used by every approximate comparison, whatever the precision of `T`.
pub const EPS: f64 = 1e-6;

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// IEEE-754 floating point element of a vector or matrix.
///
/// Integer element types are rejected when the crate using them is built:
///
/// ```compile_fail
/// let v = locomath::Vector4::<i32>::new(1, 2, 3, 4);
/// ```
///
/// ```compile_fail
/// let m = locomath::Matrix4::<u8>::identity();
/// ```
///
/// ```compile_fail
/// let v = locomath::Vector2::<i64>::new(1, 2);
/// ```
///
/// The float types themselves are accepted:
///
/// ```
/// let v = locomath::Vector4::<f32>::new(1.0, 2.0, 3.0, 4.0);
/// let m = locomath::Matrix4::<f64>::identity();
/// assert_eq!(m.trace(), 4.0);
/// assert_eq!(v.w(), 4.0);
/// ```
pub trait Scalar:
    Float + Pod + Default + Debug + Display + FromStr + Send + Sync + 'static + private::Sealed
{
    /// [`EPS`] in this precision.
    const EPS: Self;

    /// Type suffix used in textual output (`Vector4f`, `Matrix4d`).
    const SUFFIX: &'static str;

    /// Decimals printed when the formatter does not ask for a precision.
    const DISPLAY_PRECISION: usize;

    /// 128-bit register holding lanes of this type.
    #[cfg(any(sse, neon))]
    type Lane128: SimdLane<Self>;

    /// 256-bit register holding lanes of this type.
    #[cfg(avx)]
    type Lane256: SimdLane<Self>;
}

impl Scalar for f32 {
    const EPS: Self = EPS as f32;
    const SUFFIX: &'static str = "f";
    const DISPLAY_PRECISION: usize = 6;

    #[cfg(sse)]
    type Lane128 = crate::simd::sse::F32x4;
    #[cfg(neon)]
    type Lane128 = crate::simd::neon::F32x4;

    #[cfg(avx)]
    type Lane256 = crate::simd::avx::F32x8;
}

impl Scalar for f64 {
    const EPS: Self = EPS;
    const SUFFIX: &'static str = "d";
    const DISPLAY_PRECISION: usize = 10;

    #[cfg(sse)]
    type Lane128 = crate::simd::sse::F64x2;
    #[cfg(neon)]
    type Lane128 = crate::simd::neon::F64x2;

    #[cfg(avx)]
    type Lane256 = crate::simd::avx::F64x4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_is_shared_across_precisions() {
        assert_eq!(<f64 as Scalar>::EPS, EPS);
        assert_eq!(<f32 as Scalar>::EPS, EPS as f32);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(<f32 as Scalar>::SUFFIX, "f");
        assert_eq!(<f64 as Scalar>::SUFFIX, "d");
    }
}
