use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::dispatch::{compare_eq, Wide};
use crate::error::ParseError;
use crate::kernels::KernelSet;
use crate::text;
use crate::{Scalar, Vector2};

/// Four-component vector of `f32` or `f64`.
///
/// Stored as four contiguous elements (`#[repr(C)]`, no padding), so a
/// `Vector4<T>` can be viewed as `[T; 4]` or as raw bytes without copying.
/// Arithmetic runs on the widest kernel set of the build, see [`backend`](crate::backend).
///
/// Equality is approximate: two vectors are equal when every component differs by
/// less than [`EPS`](crate::EPS).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector4<T: Scalar> {
    elements: [T; 4],
}

// SAFETY: `repr(C)` over `[T; 4]` with `T: Pod` has no padding and every bit
// pattern is a valid value.
unsafe impl<T: Scalar> Zeroable for Vector4<T> {}
unsafe impl<T: Scalar> Pod for Vector4<T> {}

impl<T: Scalar> Vector4<T> {
    /// Number of components.
    pub const DIM: usize = 4;

    /// Vector `(x, y, z, w)`.
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            elements: [x, y, z, w],
        }
    }

    /// The zero vector.
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Vector with every component set to `value`.
    pub fn splat(value: T) -> Self {
        Self {
            elements: [value; 4],
        }
    }

    /// Wraps `[x, y, z, w]`.
    pub const fn from_array(elements: [T; 4]) -> Self {
        Self { elements }
    }

    /// `(xy.x, xy.y, zw.x, zw.y)`
    pub fn from_xy_zw(xy: Vector2<T>, zw: Vector2<T>) -> Self {
        Self::new(xy.x(), xy.y(), zw.x(), zw.y())
    }

    /// Extends a 2D vector with `z` and `w`, e.g. `w = 1` for a point.
    pub fn from_vec2(xy: Vector2<T>, z: T, w: T) -> Self {
        Self::new(xy.x(), xy.y(), z, w)
    }

    /// The `x` component.
    #[inline]
    pub fn x(&self) -> T {
        self.elements[0]
    }

    /// The `y` component.
    #[inline]
    pub fn y(&self) -> T {
        self.elements[1]
    }

    /// The `z` component.
    #[inline]
    pub fn z(&self) -> T {
        self.elements[2]
    }

    /// The `w` component.
    #[inline]
    pub fn w(&self) -> T {
        self.elements[3]
    }

    /// First two components.
    pub fn xy(&self) -> Vector2<T> {
        Vector2::new(self.x(), self.y())
    }

    /// The raw `[x, y, z, w]` layout.
    #[inline]
    pub fn elements(&self) -> &[T; 4] {
        &self.elements
    }

    /// Mutable access to `[x, y, z, w]`.
    #[inline]
    pub fn elements_mut(&mut self) -> &mut [T; 4] {
        &mut self.elements
    }

    /// Pointer to `x`, followed by `y`, `z` and `w`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Native-endian bytes of the four components.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Wide::add(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Componentwise difference.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Wide::sub(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Every component multiplied by `factor`.
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        let mut out = Self::zeros();
        Wide::scale(&mut out.elements, factor, &self.elements);
        out
    }

    /// Componentwise product.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Wide::hadamard(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        Wide::dot(&self.elements, &other.elements)
    }

    /// Squared euclidean length.
    #[inline]
    pub fn length_square(&self) -> T {
        Wide::length_square(&self.elements)
    }

    /// Euclidean length, `sqrt(length_square)`.
    #[inline]
    pub fn length(&self) -> T {
        self.length_square().sqrt()
    }

    /// Unit vector with the same direction.
    ///
    /// The zero vector is not special-cased: every component of the result is NaN.
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize_in_place();
        out
    }

    /// Divides every component by [`length`](Self::length).
    ///
    /// The zero vector is not special-cased: every component becomes NaN.
    pub fn normalize_in_place(&mut self) {
        Wide::normalize_in_place(&mut self.elements);
    }
}

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    fn from(elements: [T; 4]) -> Self {
        Self::from_array(elements)
    }
}

impl<T: Scalar> From<Vector4<T>> for [T; 4] {
    fn from(vec: Vector4<T>) -> Self {
        vec.elements
    }
}

impl<T: Scalar> Index<usize> for Vector4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T: Scalar> PartialEq for Vector4<T> {
    fn eq(&self, other: &Self) -> bool {
        compare_eq(&self.elements, &other.elements)
    }
}

impl<T: Scalar> Add for Vector4<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl<T: Scalar> Sub for Vector4<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl<T: Scalar> Neg for Vector4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-T::one())
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        self.scale(factor)
    }
}

impl Mul<Vector4<f32>> for f32 {
    type Output = Vector4<f32>;

    fn mul(self, vec: Vector4<f32>) -> Vector4<f32> {
        vec.scale(self)
    }
}

impl Mul<Vector4<f64>> for f64 {
    type Output = Vector4<f64>;

    fn mul(self, vec: Vector4<f64>) -> Vector4<f64> {
        vec.scale(self)
    }
}

impl<T: Scalar> AddAssign for Vector4<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(self, &rhs);
    }
}

impl<T: Scalar> SubAssign for Vector4<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(self, &rhs);
    }
}

impl<T: Scalar> MulAssign<T> for Vector4<T> {
    fn mul_assign(&mut self, factor: T) {
        *self = self.scale(factor);
    }
}

/// `Vector4f(1.000000, 2.000000, 3.000000, 4.000000)`; `{:.2}` overrides the decimals.
impl<T: Scalar> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = text::precision::<T>(f);
        write!(f, "Vector4{}(", T::SUFFIX)?;
        text::write_list(f, &self.elements, precision)?;
        f.write_str(")")
    }
}

/// Reads the first four whitespace-separated numbers.
impl<T: Scalar> FromStr for Vector4<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_tokens(s).map(Self::from_array)
    }
}
