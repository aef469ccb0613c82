use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::dispatch::{compare_eq, Wide};
use crate::error::{ParseError, Result};
use crate::kernels::{matrix, KernelSet, MAT4_DIM, MAT4_SIZE};
use crate::text;
use crate::{Scalar, Vector4};

/// 4x4 matrix of `f32` or `f64`, stored column-major.
///
/// Element `(row, col)` lives at index `col * 4 + row` of the 16-element buffer
/// returned by [`elements`](Self::elements). The layout is `#[repr(C)]` without
/// padding, so the buffer can be handed to graphics APIs as-is.
///
/// Transforms follow the column-vector convention: `m * v` applies `m` to `v`, and
/// `a * b` applies `b` first. Equality is approximate, componentwise within
/// [`EPS`](crate::EPS).
///
/// ```rust
/// use locomath::{Matrix4, Vector4};
///
/// let m = Matrix4::<f64>::translation(1.0, 2.0, 3.0) * Matrix4::scale_uniform(2.0);
/// let p = m * Vector4::new(1.0, 1.0, 1.0, 1.0);
///
/// assert_eq!(p, Vector4::new(3.0, 4.0, 5.0, 1.0));
/// assert_eq!(m.get(0, 3), 1.0);
/// ```
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Matrix4<T: Scalar> {
    elements: [T; MAT4_SIZE],
}

// SAFETY: `repr(C)` over `[T; 16]` with `T: Pod` has no padding and every bit
// pattern is a valid value.
unsafe impl<T: Scalar> Zeroable for Matrix4<T> {}
unsafe impl<T: Scalar> Pod for Matrix4<T> {}

impl<T: Scalar> Matrix4<T> {
    /// Number of rows and of columns.
    pub const DIM: usize = MAT4_DIM;

    /// Number of stored elements.
    pub const SIZE: usize = MAT4_SIZE;

    /// Builds a matrix from its entries in reading order: `mRC` is row `R`, column `C`.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            elements: [
                m00, m10, m20, m30,
                m01, m11, m21, m31,
                m02, m12, m22, m32,
                m03, m13, m23, m33,
            ],
        }
    }

    /// All-zero matrix.
    pub fn zeros() -> Self {
        Self {
            elements: [T::zero(); MAT4_SIZE],
        }
    }

    /// Identity matrix.
    pub fn identity() -> Self {
        Self::from_diagonal(T::one(), T::one(), T::one(), T::one())
    }

    /// Diagonal matrix `diag(d0, d1, d2, d3)`.
    pub fn from_diagonal(d0: T, d1: T, d2: T, d3: T) -> Self {
        let mut mat = Self::zeros();
        for (i, value) in [d0, d1, d2, d3].into_iter().enumerate() {
            mat.elements[i * MAT4_DIM + i] = value;
        }
        mat
    }

    /// Matrix whose columns are `c0..c3`.
    pub fn from_columns(c0: Vector4<T>, c1: Vector4<T>, c2: Vector4<T>, c3: Vector4<T>) -> Self {
        let mut mat = Self::zeros();
        for (j, column) in [c0, c1, c2, c3].iter().enumerate() {
            mat.set_column(j, column);
        }
        mat
    }

    /// Wraps a buffer that is already column-major.
    pub const fn from_column_major(elements: [T; MAT4_SIZE]) -> Self {
        Self { elements }
    }

    /// Reads `values` as four rows of four.
    pub fn from_row_major(values: [T; MAT4_SIZE]) -> Self {
        Self {
            elements: std::array::from_fn(|i| values[swap_major(i)]),
        }
    }

    /// Non-uniform scale along the x, y and z axes.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Self::from_diagonal(sx, sy, sz, T::one())
    }

    /// Same scale `s` along x, y and z.
    pub fn scale_uniform(s: T) -> Self {
        Self::scale(s, s, s)
    }

    /// Translation by `(tx, ty, tz)`, stored in column 3.
    pub fn translation(tx: T, ty: T, tz: T) -> Self {
        let mut mat = Self::identity();
        mat.set_column(3, &Vector4::new(tx, ty, tz, T::one()));
        mat
    }

    /// Right-handed rotation of `angle` radians about the x axis.
    #[rustfmt::skip]
    pub fn rotation_x(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::new(
            l, o, o, o,
            o, c, -s, o,
            o, s, c, o,
            o, o, o, l,
        )
    }

    /// Right-handed rotation of `angle` radians about the y axis.
    #[rustfmt::skip]
    pub fn rotation_y(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::new(
            c, o, s, o,
            o, l, o, o,
            -s, o, c, o,
            o, o, o, l,
        )
    }

    /// Right-handed rotation of `angle` radians about the z axis.
    #[rustfmt::skip]
    pub fn rotation_z(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (T::zero(), T::one());
        Self::new(
            c, -s, o, o,
            s, c, o, o,
            o, o, l, o,
            o, o, o, l,
        )
    }

    /// Element at `(row, col)`. Panics if either index is 4 or more.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }

    /// Writes element `(row, col)`. Panics if either index is 4 or more.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self[(row, col)] = value;
    }

    /// Copy of column `col`.
    pub fn column(&self, col: usize) -> Vector4<T> {
        let start = col * MAT4_DIM;
        let mut column = [T::zero(); MAT4_DIM];
        column.copy_from_slice(&self.elements[start..start + MAT4_DIM]);
        Vector4::from_array(column)
    }

    /// Overwrites column `col`.
    pub fn set_column(&mut self, col: usize, column: &Vector4<T>) {
        let start = col * MAT4_DIM;
        self.elements[start..start + MAT4_DIM].copy_from_slice(column.elements());
    }

    /// Copy of row `row`.
    pub fn row(&self, row: usize) -> Vector4<T> {
        Vector4::from_array(std::array::from_fn(|col| self.elements[col * MAT4_DIM + row]))
    }

    /// The raw column-major buffer.
    #[inline]
    pub fn elements(&self) -> &[T; MAT4_SIZE] {
        &self.elements
    }

    /// Mutable access to the column-major buffer.
    #[inline]
    pub fn elements_mut(&mut self) -> &mut [T; MAT4_SIZE] {
        &mut self.elements
    }

    /// Pointer to element `(0, 0)`; the other 15 follow in column-major order.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Native-endian bytes of the column-major buffer.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Elements in reading order, row by row.
    pub fn to_row_major(&self) -> [T; MAT4_SIZE] {
        std::array::from_fn(|i| self.elements[swap_major(i)])
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = *self;
        out.transpose_in_place();
        out
    }

    /// Transposes without a copy.
    pub fn transpose_in_place(&mut self) {
        matrix::transpose_in_place_mat4(&mut self.elements);
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        matrix::trace_mat4(&self.elements)
    }

    /// Determinant, expanded over 2x2 minors.
    pub fn determinant(&self) -> T {
        matrix::determinant_mat4(&self.elements)
    }

    /// Inverse through the adjugate.
    ///
    /// Singularity is not checked: a zero [`determinant`](Self::determinant)
    /// yields NaN/Inf elements. Test the determinant first when that matters.
    pub fn inverse(&self) -> Self {
        let mut out = Self::zeros();
        matrix::inverse_mat4(&mut out.elements, &self.elements);
        out
    }

    /// Elementwise sum.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Wide::add(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Elementwise difference.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Wide::sub(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Every element multiplied by `factor`.
    #[inline]
    pub fn scale_by(&self, factor: T) -> Self {
        let mut out = Self::zeros();
        Wide::scale(&mut out.elements, factor, &self.elements);
        out
    }

    /// Elementwise product.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Wide::hadamard(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Matrix product `self * other`.
    #[inline]
    pub fn matmul(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Wide::matmul_mat4(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Matrix-vector product `self * vec`.
    #[inline]
    pub fn matmul_vec(&self, vec: &Vector4<T>) -> Vector4<T> {
        let mut out = [T::zero(); MAT4_DIM];
        Wide::matmul_vec_mat4(&mut out, &self.elements, vec.elements());
        Vector4::from_array(out)
    }

    /// Parses 16 row-major numbers into `self`.
    ///
    /// `self` is only written when the whole input is valid; on error it keeps
    /// its previous value.
    pub fn read_from(&mut self, input: &str) -> Result<()> {
        *self = input.parse()?;
        Ok(())
    }
}

// Index of the same (row, col) element in the other storage order
#[inline(always)]
fn swap_major(index: usize) -> usize {
    (index % MAT4_DIM) * MAT4_DIM + index / MAT4_DIM
}

impl<T: Scalar> Index<(usize, usize)> for Matrix4<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < MAT4_DIM && col < MAT4_DIM, "index ({row}, {col}) out of range");
        &self.elements[col * MAT4_DIM + row]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix4<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(row < MAT4_DIM && col < MAT4_DIM, "index ({row}, {col}) out of range");
        &mut self.elements[col * MAT4_DIM + row]
    }
}

impl<T: Scalar> PartialEq for Matrix4<T> {
    fn eq(&self, other: &Self) -> bool {
        compare_eq(&self.elements, &other.elements)
    }
}

impl<T: Scalar> Add for Matrix4<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl<T: Scalar> Sub for Matrix4<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl<T: Scalar> Neg for Matrix4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale_by(-T::one())
    }
}

impl<T: Scalar> Mul for Matrix4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.matmul(&rhs)
    }
}

impl<T: Scalar> Mul<Vector4<T>> for Matrix4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        self.matmul_vec(&rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix4<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        self.scale_by(factor)
    }
}

impl Mul<Matrix4<f32>> for f32 {
    type Output = Matrix4<f32>;

    fn mul(self, mat: Matrix4<f32>) -> Matrix4<f32> {
        mat.scale_by(self)
    }
}

impl Mul<Matrix4<f64>> for f64 {
    type Output = Matrix4<f64>;

    fn mul(self, mat: Matrix4<f64>) -> Matrix4<f64> {
        mat.scale_by(self)
    }
}

impl<T: Scalar> AddAssign for Matrix4<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(self, &rhs);
    }
}

impl<T: Scalar> SubAssign for Matrix4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(self, &rhs);
    }
}

/// `a *= b` is `a = a * b`.
impl<T: Scalar> MulAssign for Matrix4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.matmul(&rhs);
    }
}

impl<T: Scalar> MulAssign<T> for Matrix4<T> {
    fn mul_assign(&mut self, factor: T) {
        *self = self.scale_by(factor);
    }
}

/// Row-major, one row per line:
///
/// ```text
/// Matrix4f([[1.000000, 0.000000, 0.000000, 0.000000],
///           [0.000000, 1.000000, 0.000000, 0.000000],
///           [0.000000, 0.000000, 1.000000, 0.000000],
///           [0.000000, 0.000000, 0.000000, 1.000000]])
/// ```
///
/// `{:.N}` overrides the number of decimals.
impl<T: Scalar> fmt::Display for Matrix4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = text::precision::<T>(f);
        let prefix = format!("Matrix4{}([", T::SUFFIX);
        let rows = self.to_row_major();

        f.write_str(&prefix)?;
        for (i, row) in rows.chunks_exact(MAT4_DIM).enumerate() {
            if i > 0 {
                write!(f, ",\n{:width$}", "", width = prefix.len())?;
            }
            f.write_str("[")?;
            text::write_list(f, row, precision)?;
            f.write_str("]")?;
        }
        f.write_str("])")
    }
}

/// Reads the first 16 whitespace-separated numbers in row-major order.
impl<T: Scalar> FromStr for Matrix4<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        text::parse_tokens(s).map(Self::from_row_major)
    }
}
