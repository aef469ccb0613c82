//! 4x4 matrix algorithms shared by every kernel set.
//!
//! Transpose, trace, determinant and inverse are closed-form and branch-free at
//! this size, so they are written once on plain buffers instead of per lane width.

use super::{MAT4_DIM, MAT4_SIZE};
use crate::Scalar;

/// Swaps element (r, c) with (c, r) for every r < c.
#[inline(always)]
pub fn transpose_in_place_mat4<T: Scalar>(mat: &mut [T; MAT4_SIZE]) {
    for row in 0..MAT4_DIM {
        for col in (row + 1)..MAT4_DIM {
            mat.swap(col * MAT4_DIM + row, row * MAT4_DIM + col);
        }
    }
}

/// Sum of the diagonal.
#[inline(always)]
pub fn trace_mat4<T: Scalar>(mat: &[T; MAT4_SIZE]) -> T {
    (0..MAT4_DIM).fold(T::zero(), |accum, i| accum + mat[i * MAT4_DIM + i])
}

// 2x2 minors of rows (0, 1) and of rows (2, 3), indexed by column pair:
// (0,1) (0,2) (0,3) (1,2) (1,3) (2,3)
struct Minors<T> {
    upper: [T; 6],
    lower: [T; 6],
}

#[inline(always)]
fn minors<T: Scalar>(mat: &[T; MAT4_SIZE]) -> Minors<T> {
    let m = |row: usize, col: usize| mat[col * MAT4_DIM + row];
    let pair = |top: usize, c0: usize, c1: usize| {
        m(top, c0) * m(top + 1, c1) - m(top + 1, c0) * m(top, c1)
    };

    Minors {
        upper: [
            pair(0, 0, 1),
            pair(0, 0, 2),
            pair(0, 0, 3),
            pair(0, 1, 2),
            pair(0, 1, 3),
            pair(0, 2, 3),
        ],
        lower: [
            pair(2, 0, 1),
            pair(2, 0, 2),
            pair(2, 0, 3),
            pair(2, 1, 2),
            pair(2, 1, 3),
            pair(2, 2, 3),
        ],
    }
}

#[inline(always)]
fn determinant_from_minors<T: Scalar>(minors: &Minors<T>) -> T {
    let [s0, s1, s2, s3, s4, s5] = minors.upper;
    let [c0, c1, c2, c3, c4, c5] = minors.lower;

    s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
}

/// Determinant by Laplace expansion along the top two rows.
#[inline(always)]
pub fn determinant_mat4<T: Scalar>(mat: &[T; MAT4_SIZE]) -> T {
    determinant_from_minors(&minors(mat))
}

/// Inverse as the adjugate (transposed cofactor matrix) over the determinant.
///
/// Singular input is not detected: dividing by a zero determinant fills `dst`
/// with NaN/Inf. Check [`determinant_mat4`] first when that matters.
#[inline(always)]
pub fn inverse_mat4<T: Scalar>(dst: &mut [T; MAT4_SIZE], src: &[T; MAT4_SIZE]) {
    let m = |row: usize, col: usize| src[col * MAT4_DIM + row];
    let minors = minors(src);
    let det = determinant_from_minors(&minors);

    let [s0, s1, s2, s3, s4, s5] = minors.upper;
    let [c0, c1, c2, c3, c4, c5] = minors.lower;

    // Cofactor matrix C, column-major: C(i, j) at j * 4 + i
    let mut cofactors = [
        // column 0
        m(1, 1) * c5 - m(1, 2) * c4 + m(1, 3) * c3,
        -m(0, 1) * c5 + m(0, 2) * c4 - m(0, 3) * c3,
        m(3, 1) * s5 - m(3, 2) * s4 + m(3, 3) * s3,
        -m(2, 1) * s5 + m(2, 2) * s4 - m(2, 3) * s3,
        // column 1
        -m(1, 0) * c5 + m(1, 2) * c2 - m(1, 3) * c1,
        m(0, 0) * c5 - m(0, 2) * c2 + m(0, 3) * c1,
        -m(3, 0) * s5 + m(3, 2) * s2 - m(3, 3) * s1,
        m(2, 0) * s5 - m(2, 2) * s2 + m(2, 3) * s1,
        // column 2
        m(1, 0) * c4 - m(1, 1) * c2 + m(1, 3) * c0,
        -m(0, 0) * c4 + m(0, 1) * c2 - m(0, 3) * c0,
        m(3, 0) * s4 - m(3, 1) * s2 + m(3, 3) * s0,
        -m(2, 0) * s4 + m(2, 1) * s2 - m(2, 3) * s0,
        // column 3
        -m(1, 0) * c3 + m(1, 1) * c1 - m(1, 2) * c0,
        m(0, 0) * c3 - m(0, 1) * c1 + m(0, 2) * c0,
        -m(3, 0) * s3 + m(3, 1) * s1 - m(3, 2) * s0,
        m(2, 0) * s3 - m(2, 1) * s1 + m(2, 2) * s0,
    ];

    transpose_in_place_mat4(&mut cofactors);

    for (element, adjugate) in dst.iter_mut().zip(cofactors.iter()) {
        *element = *adjugate / det;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Row-major literal to column-major buffer
    fn from_rows(rows: [[f64; 4]; 4]) -> [f64; MAT4_SIZE] {
        std::array::from_fn(|i| rows[i % MAT4_DIM][i / MAT4_DIM])
    }

    #[test]
    fn test_transpose_swaps_off_diagonal() {
        let mut mat = from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        transpose_in_place_mat4(&mut mat);

        // Column-major storage of the transpose reads as the original rows
        let expected: Vec<f64> = (1..=16).map(|i| i as f64).collect();
        assert_eq!(mat.to_vec(), expected);
    }

    #[test]
    fn test_trace() {
        let mat: [f64; MAT4_SIZE] = std::array::from_fn(|i| i as f64);
        assert_eq!(trace_mat4(&mat), 0.0 + 5.0 + 10.0 + 15.0);
    }

    #[test]
    fn test_determinant_known_values() {
        let diagonal = from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 5.0],
        ]);
        assert_eq!(determinant_mat4(&diagonal), 120.0);

        // Rows 3 and 4 are linearly dependent
        let singular = from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(determinant_mat4(&singular), 0.0);

        let general = from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        assert_eq!(determinant_mat4(&general), 30.0);
    }

    #[test]
    fn test_inverse_of_diagonal() {
        let diagonal = from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 4.0, 0.0, 0.0],
            [0.0, 0.0, 8.0, 0.0],
            [0.0, 0.0, 0.0, 0.5],
        ]);
        let mut inverse = [0.0; MAT4_SIZE];
        inverse_mat4(&mut inverse, &diagonal);

        let expected = from_rows([
            [0.5, 0.0, 0.0, 0.0],
            [0.0, 0.25, 0.0, 0.0],
            [0.0, 0.0, 0.125, 0.0],
            [0.0, 0.0, 0.0, 2.0],
        ]);
        assert_eq!(inverse, expected);
    }

    #[test]
    fn test_inverse_of_general_matrix() {
        let general = from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        let mut inverse = [0.0; MAT4_SIZE];
        inverse_mat4(&mut inverse, &general);

        // general * inverse == identity
        for row in 0..MAT4_DIM {
            for col in 0..MAT4_DIM {
                let value: f64 = (0..MAT4_DIM)
                    .map(|k| general[k * MAT4_DIM + row] * inverse[col * MAT4_DIM + k])
                    .sum();
                let expected = if row == col { 1.0 } else { 0.0 };
                assert!((value - expected).abs() < 1e-12, "({row}, {col}) = {value}");
            }
        }
    }

    #[test]
    fn test_inverse_of_singular_matrix_is_not_finite() {
        let mut inverse = [0.0f32; MAT4_SIZE];
        inverse_mat4(&mut inverse, &[0.0f32; MAT4_SIZE]);
        assert!(inverse.iter().all(|x| !x.is_finite()));
    }
}
