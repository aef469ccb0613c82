//! Kernel sets operating on raw element buffers.
//!
//! Every set implements [`KernelSet`], so the dispatch layer can swap one for
//! another without touching call sites:
//!
//! - [`scalar::ScalarKernels`]: plain loops, always available
//! - [`simd128::Simd128Kernels`]: 128-bit lanes (SSE2 or NEON)
//! - [`simd256::Simd256Kernels`]: 256-bit lanes (AVX)
//!
//! Buffers are `[T; N]` with `N` = 2, 4 or 16. Matrix buffers are column-major:
//! element (row, col) lives at `col * 4 + row`.
//!
//! Approximate comparison ([`scalar::compare_eq`]) and the matrix algorithms in
//! [`matrix`] are not loop-shaped, so they exist once and are shared by all sets.

use crate::Scalar;

#[cfg(any(sse, neon, avx))]
pub(crate) mod lanes;

pub mod matrix;
pub mod scalar;

#[cfg(any(sse, neon))]
pub mod simd128;

#[cfg(avx)]
pub mod simd256;

/// Number of rows (and columns) of a matrix buffer.
pub const MAT4_DIM: usize = 4;

/// Number of elements of a matrix buffer.
pub const MAT4_SIZE: usize = MAT4_DIM * MAT4_DIM;

/// Buffer operations every kernel set provides.
///
/// Results of two sets for the same input agree up to floating-point rounding;
/// reductions may associate differently, so results are not bit-identical.
pub trait KernelSet {
    /// `dst[i] = lhs[i] + rhs[i]`
    fn add<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]);

    /// `dst[i] = lhs[i] - rhs[i]`
    fn sub<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]);

    /// `dst[i] = factor * src[i]`
    fn scale<T: Scalar, const N: usize>(dst: &mut [T; N], factor: T, src: &[T; N]);

    /// `dst[i] = lhs[i] * rhs[i]`
    fn hadamard<T: Scalar, const N: usize>(dst: &mut [T; N], lhs: &[T; N], rhs: &[T; N]);

    /// `Σ lhs[i] * rhs[i]`
    fn dot<T: Scalar, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T;

    /// Squared euclidean norm.
    fn length_square<T: Scalar, const N: usize>(vec: &[T; N]) -> T {
        Self::dot(vec, vec)
    }

    /// Divides every element by the euclidean norm.
    ///
    /// A zero buffer is not special-cased: `0 / 0` turns every element into NaN.
    fn normalize_in_place<T: Scalar, const N: usize>(vec: &mut [T; N]);

    /// `dst(i, j) = Σ_k lhs(i, k) * rhs(k, j)`
    fn matmul_mat4<T: Scalar>(
        dst: &mut [T; MAT4_SIZE],
        lhs: &[T; MAT4_SIZE],
        rhs: &[T; MAT4_SIZE],
    );

    /// `dst(i) = Σ_k mat(i, k) * vec(k)`
    fn matmul_vec_mat4<T: Scalar>(
        dst: &mut [T; MAT4_DIM],
        mat: &[T; MAT4_SIZE],
        vec: &[T; MAT4_DIM],
    );
}
