//! 256-bit kernel set: 8 x f32 or 4 x f64 per register (AVX).
//!
//! A whole `f32` matrix fits in two registers and an `f64` column in one, so
//! this set is selected for `Vector4` and `Matrix4` whenever the build enables AVX.

use super::{lanes, KernelSet, MAT4_DIM, MAT4_SIZE};
use crate::Scalar;

/// Kernel set running on 256-bit lanes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simd256Kernels;

impl KernelSet for Simd256Kernels {
    #[inline(always)]
    fn add<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        lanes::add::<T, T::Lane256, N>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn sub<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        lanes::sub::<T, T::Lane256, N>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn scale<T: Scalar, const N: usize>(dst: &mut [T; N], factor: T, src: &[T; N]) {
        lanes::scale::<T, T::Lane256, N>(dst, factor, src);
    }

    #[inline(always)]
    fn hadamard<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        lanes::hadamard::<T, T::Lane256, N>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn dot<T: Scalar, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T {
        lanes::dot::<T, T::Lane256, N>(lhs, rhs)
    }

    #[inline(always)]
    fn normalize_in_place<T: Scalar, const N: usize>(vec: &mut [T; N]) {
        lanes::normalize_in_place::<T, T::Lane256, N>(vec);
    }

    #[inline(always)]
    fn matmul_mat4<T: Scalar>(
        dst: &mut [T; MAT4_SIZE],
        lhs: &[T; MAT4_SIZE],
        rhs: &[T; MAT4_SIZE],
    ) {
        lanes::matmul_mat4::<T, T::Lane256>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn matmul_vec_mat4<T: Scalar>(
        dst: &mut [T; MAT4_DIM],
        mat: &[T; MAT4_SIZE],
        vec: &[T; MAT4_DIM],
    ) {
        lanes::matmul_vec_mat4::<T, T::Lane256>(dst, mat, vec);
    }
}
