//! Reference kernels written as plain element loops.
//!
//! Always compiled. The SIMD sets are tested against these.

use super::{KernelSet, MAT4_DIM, MAT4_SIZE};
use crate::Scalar;

/// Portable loop-based kernel set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarKernels;

impl KernelSet for ScalarKernels {
    #[inline(always)]
    fn add<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        for i in 0..N {
            dst[i] = lhs[i] + rhs[i];
        }
    }

    #[inline(always)]
    fn sub<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        for i in 0..N {
            dst[i] = lhs[i] - rhs[i];
        }
    }

    #[inline(always)]
    fn scale<T: Scalar, const N: usize>(dst: &mut [T; N], factor: T, src: &[T; N]) {
        for i in 0..N {
            dst[i] = factor * src[i];
        }
    }

    #[inline(always)]
    fn hadamard<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        for i in 0..N {
            dst[i] = lhs[i] * rhs[i];
        }
    }

    #[inline(always)]
    fn dot<T: Scalar, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T {
        let mut accum = T::zero();
        for i in 0..N {
            accum = accum + lhs[i] * rhs[i];
        }
        accum
    }

    #[inline(always)]
    fn normalize_in_place<T: Scalar, const N: usize>(vec: &mut [T; N]) {
        let length = Self::length_square(vec).sqrt();
        for element in vec.iter_mut() {
            *element = *element / length;
        }
    }

    #[inline(always)]
    fn matmul_mat4<T: Scalar>(
        dst: &mut [T; MAT4_SIZE],
        lhs: &[T; MAT4_SIZE],
        rhs: &[T; MAT4_SIZE],
    ) {
        for col in 0..MAT4_DIM {
            for row in 0..MAT4_DIM {
                let mut accum = T::zero();
                for k in 0..MAT4_DIM {
                    accum = accum + lhs[k * MAT4_DIM + row] * rhs[col * MAT4_DIM + k];
                }
                dst[col * MAT4_DIM + row] = accum;
            }
        }
    }

    #[inline(always)]
    fn matmul_vec_mat4<T: Scalar>(
        dst: &mut [T; MAT4_DIM],
        mat: &[T; MAT4_SIZE],
        vec: &[T; MAT4_DIM],
    ) {
        for row in 0..MAT4_DIM {
            let mut accum = T::zero();
            for k in 0..MAT4_DIM {
                accum = accum + mat[k * MAT4_DIM + row] * vec[k];
            }
            dst[row] = accum;
        }
    }
}

/// False as soon as one pair of elements differs by `T::EPS` or more.
///
/// The tolerance applies per component: a single element off by `EPS` or more
/// fails the whole comparison, whatever the overall distance. A NaN difference
/// is not a measured difference and never fails a component, so the comparison
/// is reflexive for every buffer.
#[inline(always)]
pub fn compare_eq<T: Scalar, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> bool {
    !lhs.iter()
        .zip(rhs.iter())
        .any(|(&a, &b)| (a - b).abs() >= T::EPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let mut dst = [0.0f32; 4];
        ScalarKernels::add(&mut dst, &[1.0, 2.0, 3.0, 4.0], &[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(dst, [5.0; 4]);

        ScalarKernels::sub(&mut dst, &[1.0, 2.0, 3.0, 4.0], &[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(dst, [-3.0, -1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_dot_starts_from_zero() {
        assert_eq!(ScalarKernels::dot(&[1.0f64, 2.0], &[3.0, 4.0]), 11.0);
        assert_eq!(ScalarKernels::length_square(&[3.0f64, 4.0]), 25.0);
    }

    #[test]
    fn test_normalize_zero_vector_is_nan() {
        let mut vec = [0.0f64; 4];
        ScalarKernels::normalize_in_place(&mut vec);
        assert!(vec.iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_compare_eq_is_componentwise() {
        let base = [1.0f64, 2.0, 3.0, 4.0];
        assert!(compare_eq(&base, &base));

        // Each component is within EPS, even though the euclidean distance is not
        let half = 0.9 * crate::EPS;
        let near = [1.0 + half, 2.0 + half, 3.0 + half, 4.0 + half];
        assert!(compare_eq(&base, &near));

        let far = [1.0, 2.0, 3.0 + 2.0 * crate::EPS, 4.0];
        assert!(!compare_eq(&base, &far));
    }

    #[test]
    fn test_compare_eq_is_reflexive_with_nan() {
        let nan = [f32::NAN, 0.0];
        assert!(compare_eq(&nan, &nan));

        let inf = [f64::INFINITY, f64::NEG_INFINITY];
        assert!(compare_eq(&inf, &inf));

        // Finite components are still checked beside a NaN one
        assert!(!compare_eq(&nan, &[f32::NAN, 1.0]));
        assert!(!compare_eq(&[f64::INFINITY, 0.0], &[1.0, 0.0]));
    }

    #[test]
    fn test_matmul_identity() {
        let mut identity = [0.0f64; MAT4_SIZE];
        for i in 0..MAT4_DIM {
            identity[i * MAT4_DIM + i] = 1.0;
        }
        let mat: [f64; MAT4_SIZE] = std::array::from_fn(|i| i as f64);

        let mut dst = [0.0f64; MAT4_SIZE];
        ScalarKernels::matmul_mat4(&mut dst, &mat, &identity);
        assert_eq!(dst, mat);

        ScalarKernels::matmul_mat4(&mut dst, &identity, &mat);
        assert_eq!(dst, mat);
    }
}
