//! Kernel bodies written once over any [`SimdLane`].
//!
//! Elementwise kernels walk the buffer in full lanes and finish with one partial
//! lane, the same block/remainder split used for slices of any length. The
//! matrix kernels accumulate one output block per lane in the same `k` order as
//! the scalar loops, so products match the scalar set exactly.

use super::{MAT4_DIM, MAT4_SIZE};
use crate::simd::SimdLane;
use crate::Scalar;

#[inline(always)]
unsafe fn load_block<T: Scalar, L: SimdLane<T>>(ptr: *const T, size: usize) -> L {
    if size == L::LANE_COUNT {
        L::load(ptr)
    } else {
        L::load_partial(ptr, size)
    }
}

#[inline(always)]
unsafe fn store_block<T: Scalar, L: SimdLane<T>>(lane: L, ptr: *mut T, size: usize) {
    if size == L::LANE_COUNT {
        lane.store_at(ptr)
    } else {
        lane.store_at_partial(ptr, size)
    }
}

#[inline(always)]
fn map_binary<T: Scalar, L: SimdLane<T>, const N: usize>(
    dst: &mut [T; N],
    lhs: &[T; N],
    rhs: &[T; N],
    op: impl Fn(L, L) -> L,
) {
    let step = L::LANE_COUNT;

    let nb_lanes = N - (N % step);
    let rem_lanes = N - nb_lanes;

    for i in (0..nb_lanes).step_by(step) {
        unsafe {
            let a = L::load(lhs.as_ptr().add(i));
            let b = L::load(rhs.as_ptr().add(i));
            op(a, b).store_at(dst.as_mut_ptr().add(i));
        }
    }

    if rem_lanes > 0 {
        unsafe {
            let a = L::load_partial(lhs.as_ptr().add(nb_lanes), rem_lanes);
            let b = L::load_partial(rhs.as_ptr().add(nb_lanes), rem_lanes);
            op(a, b).store_at_partial(dst.as_mut_ptr().add(nb_lanes), rem_lanes);
        }
    }
}

#[inline(always)]
pub(crate) fn add<T: Scalar, L: SimdLane<T>, const N: usize>(
    dst: &mut [T; N],
    lhs: &[T; N],
    rhs: &[T; N],
) {
    map_binary::<T, L, N>(dst, lhs, rhs, |a, b| a + b);
}

#[inline(always)]
pub(crate) fn sub<T: Scalar, L: SimdLane<T>, const N: usize>(
    dst: &mut [T; N],
    lhs: &[T; N],
    rhs: &[T; N],
) {
    map_binary::<T, L, N>(dst, lhs, rhs, |a, b| a - b);
}

#[inline(always)]
pub(crate) fn hadamard<T: Scalar, L: SimdLane<T>, const N: usize>(
    dst: &mut [T; N],
    lhs: &[T; N],
    rhs: &[T; N],
) {
    map_binary::<T, L, N>(dst, lhs, rhs, |a, b| a * b);
}

#[inline(always)]
pub(crate) fn scale<T: Scalar, L: SimdLane<T>, const N: usize>(
    dst: &mut [T; N],
    factor: T,
    src: &[T; N],
) {
    let factor = L::splat(factor);
    map_binary::<T, L, N>(dst, src, src, |a, _| factor * a);
}

#[inline(always)]
pub(crate) fn dot<T: Scalar, L: SimdLane<T>, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T {
    let step = L::LANE_COUNT;
    let mut accum = L::splat(T::zero());

    for start in (0..N).step_by(step) {
        let size = step.min(N - start);
        unsafe {
            let a: L = load_block(lhs.as_ptr().add(start), size);
            let b: L = load_block(rhs.as_ptr().add(start), size);
            accum = accum + a * b;
        }
    }

    accum.reduce_sum()
}

#[inline(always)]
pub(crate) fn normalize_in_place<T: Scalar, L: SimdLane<T>, const N: usize>(vec: &mut [T; N]) {
    let src = *vec;
    let length = L::splat(dot::<T, L, N>(&src, &src).sqrt());
    map_binary::<T, L, N>(vec, &src, &src, |a, _| a / length);
}

#[inline(always)]
pub(crate) fn matmul_mat4<T: Scalar, L: SimdLane<T>>(
    dst: &mut [T; MAT4_SIZE],
    lhs: &[T; MAT4_SIZE],
    rhs: &[T; MAT4_SIZE],
) {
    let step = L::LANE_COUNT;

    if step <= MAT4_DIM {
        // Output block `start..start + step` lies within one column: a slice of lhs
        // column k times one broadcast rhs entry.
        for start in (0..MAT4_SIZE).step_by(step) {
            let (row, col) = (start % MAT4_DIM, start / MAT4_DIM);
            let mut accum = L::splat(T::zero());

            for k in 0..MAT4_DIM {
                let a: L = unsafe { L::load(lhs.as_ptr().add(k * MAT4_DIM + row)) };
                accum = accum + a * L::splat(rhs[col * MAT4_DIM + k]);
            }

            unsafe { accum.store_at(dst.as_mut_ptr().add(start)) };
        }
        return;
    }

    // Two output columns per lane: lhs column k repeated in both halves, times
    // rhs(k, col) in the low half and rhs(k, col + 1) in the high half.
    debug_assert_eq!(step, 2 * MAT4_DIM, "Unsupported lane width {step}");

    let columns: [L; MAT4_DIM] =
        std::array::from_fn(|k| unsafe { L::load_repeated(lhs.as_ptr().add(k * MAT4_DIM)) });

    for start in (0..MAT4_SIZE).step_by(step) {
        let col = start / MAT4_DIM;
        let mut accum = L::splat(T::zero());

        for (k, &column) in columns.iter().enumerate() {
            let weights = L::splat_halves(rhs[col * MAT4_DIM + k], rhs[(col + 1) * MAT4_DIM + k]);
            accum = accum + column * weights;
        }

        unsafe { accum.store_at(dst.as_mut_ptr().add(start)) };
    }
}

#[inline(always)]
pub(crate) fn matmul_vec_mat4<T: Scalar, L: SimdLane<T>>(
    dst: &mut [T; MAT4_DIM],
    mat: &[T; MAT4_SIZE],
    vec: &[T; MAT4_DIM],
) {
    // A lane wider than a column only fills its first four slots
    let step = L::LANE_COUNT.min(MAT4_DIM);

    for start in (0..MAT4_DIM).step_by(step) {
        let mut accum = L::splat(T::zero());

        for (k, &weight) in vec.iter().enumerate() {
            let column: L = unsafe { load_block(mat.as_ptr().add(k * MAT4_DIM + start), step) };
            accum = accum + column * L::splat(weight);
        }

        unsafe { store_block(accum, dst.as_mut_ptr().add(start), step) };
    }
}
