use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::dispatch::{compare_eq, Narrow};
use crate::error::ParseError;
use crate::kernels::KernelSet;
use crate::text;
use crate::Scalar;

/// Two-component vector of `f32` or `f64`.
///
/// Same layout and equality rules as [`Vector4`](crate::Vector4), but kernels
/// never go wider than 128 bits, see [`vector2_backend`](crate::dispatch::vector2_backend).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2<T: Scalar> {
    elements: [T; 2],
}

// SAFETY: `repr(C)` over `[T; 2]` with `T: Pod`.
unsafe impl<T: Scalar> Zeroable for Vector2<T> {}
unsafe impl<T: Scalar> Pod for Vector2<T> {}

impl<T: Scalar> Vector2<T> {
    /// Number of components.
    pub const DIM: usize = 2;

    /// Vector `(x, y)`.
    pub fn new(x: T, y: T) -> Self {
        Self { elements: [x, y] }
    }

    /// The zero vector.
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Vector with both components set to `value`.
    pub fn splat(value: T) -> Self {
        Self {
            elements: [value; 2],
        }
    }

    /// Wraps `[x, y]`.
    pub const fn from_array(elements: [T; 2]) -> Self {
        Self { elements }
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

    /// The raw `[x, y]` layout.
    #[inline]
    pub fn elements(&self) -> &[T; 2] {
        &self.elements
    }

    /// Mutable access to `[x, y]`.
    #[inline]
    pub fn elements_mut(&mut self) -> &mut [T; 2] {
        &mut self.elements
    }

    /// Pointer to `x`, followed by `y`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.elements.as_ptr()
    }

    /// Native-endian bytes of both components.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Narrow::add(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Componentwise difference.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Narrow::sub(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Both components multiplied by `factor`.
    #[inline]
    pub fn scale(&self, factor: T) -> Self {
        let mut out = Self::zeros();
        Narrow::scale(&mut out.elements, factor, &self.elements);
        out
    }

    /// Componentwise product.
    #[inline]
    pub fn hadamard(&self, other: &Self) -> Self {
        let mut out = Self::zeros();
        Narrow::hadamard(&mut out.elements, &self.elements, &other.elements);
        out
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        Narrow::dot(&self.elements, &other.elements)
    }

    /// Squared euclidean length, `self.dot(self)`.
    #[inline]
    pub fn length_square(&self) -> T {
        Narrow::length_square(&self.elements)
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> T {
        self.length_square().sqrt()
    }

    /// Unit vector with the same direction; NaN components for the zero vector.
    pub fn normalized(&self) -> Self {
        let mut out = *self;
        out.normalize_in_place();
        out
    }

    /// In-place [`normalized`](Self::normalized); NaN components for the zero vector.
    pub fn normalize_in_place(&mut self) {
        Narrow::normalize_in_place(&mut self.elements);
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    fn from(elements: [T; 2]) -> Self {
        Self::from_array(elements)
    }
}

impl<T: Scalar> From<Vector2<T>> for [T; 2] {
    fn from(vec: Vector2<T>) -> Self {
        vec.elements
    }
}

impl<T: Scalar> Index<usize> for Vector2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.elements[index]
    }
}

impl<T: Scalar> PartialEq for Vector2<T> {
    fn eq(&self, other: &Self) -> bool {
        compare_eq(&self.elements, &other.elements)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(&self, &rhs)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::sub(&self, &rhs)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.scale(-T::one())
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        self.scale(factor)
    }
}

impl Mul<Vector2<f32>> for f32 {
    type Output = Vector2<f32>;

    fn mul(self, vec: Vector2<f32>) -> Vector2<f32> {
        vec.scale(self)
    }
}

impl Mul<Vector2<f64>> for f64 {
    type Output = Vector2<f64>;

    fn mul(self, vec: Vector2<f64>) -> Vector2<f64> {
        vec.scale(self)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = Self::add(self, &rhs);
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Self::sub(self, &rhs);
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    fn mul_assign(&mut self, factor: T) {
        *self = self.scale(factor);
    }
}

impl<T: Scalar> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = text::precision::<T>(f);
        write!(f, "Vector2{}(", T::SUFFIX)?;
        text::write_list(f, &self.elements, precision)?;
        f.write_str(")")
    }
}

impl<T: Scalar> FromStr for Vector2<T> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        text::parse_tokens(s).map(Self::from_array)
    }
}
