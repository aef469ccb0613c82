//! 128-bit kernel set: 4 x f32 or 2 x f64 per register.
//!
//! Backed by SSE2 on x86/x86_64 and NEON on aarch64 through `T::Lane128`.

use super::{lanes, KernelSet, MAT4_DIM, MAT4_SIZE};
use crate::Scalar;

/// Kernel set running on 128-bit lanes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simd128Kernels;

impl KernelSet for Simd128Kernels {
    #[inline(always)]
    fn add<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        lanes::add::<T, T::Lane128, N>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn sub<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        lanes::sub::<T, T::Lane128, N>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn scale<T: Scalar, const N: usize>(dst: &mut [T; N], factor: T, src: &[T; N]) {
        lanes::scale::<T, T::Lane128, N>(dst, factor, src);
    }

    #[inline(always)]
    fn hadamard<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]) {
        lanes::hadamard::<T, T::Lane128, N>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn dot<T: Scalar, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T {
        lanes::dot::<T, T::Lane128, N>(lhs, rhs)
    }

    #[inline(always)]
    fn normalize_in_place<T: Scalar, const N: usize>(vec: &mut [T; N]) {
        lanes::normalize_in_place::<T, T::Lane128, N>(vec);
    }

    #[inline(always)]
    fn matmul_mat4<T: Scalar>(
        dst: &mut [T; MAT4_SIZE],
        lhs: &[T; MAT4_SIZE],
        rhs: &[T; MAT4_SIZE],
    ) {
        lanes::matmul_mat4::<T, T::Lane128>(dst, lhs, rhs);
    }

    #[inline(always)]
    fn matmul_vec_mat4<T: Scalar>(
        dst: &mut [T; MAT4_DIM],
        mat: &[T; MAT4_SIZE],
        vec: &[T; MAT4_DIM],
    ) {
        lanes::matmul_vec_mat4::<T, T::Lane128>(dst, mat, vec);
    }
}
