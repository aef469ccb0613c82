//! Fixed-size linear algebra: [`Vector2`], [`Vector4`] and [`Matrix4`] over `f32` or `f64`.
//!
//! Every elementwise and product operation runs on one of three kernel sets:
//!
//! - **scalar**: portable loops, always compiled, the reference the others are tested against
//! - **128-bit SIMD**: SSE2 on x86/x86_64, NEON on aarch64
//! - **256-bit SIMD**: AVX on x86/x86_64
//!
//! The set is picked by `build.rs` from the target features the compiler enables
//! (for example `RUSTFLAGS="-C target-cpu=native"`), optionally narrowed with
//! `LOCOMATH_BACKEND=scalar|sse|neon|avx`. Nothing is decided at runtime.
//!
//! Numerical edge cases follow IEEE-754: normalizing a zero vector or inverting a
//! singular matrix yields NaN/Inf values instead of an error.
//!
//! ```rust
//! use locomath::{Matrix4, Vector4};
//!
//! let scale = Matrix4::<f32>::scale(2.0, 2.0, 2.0);
//! let v = Vector4::new(1.0, 1.0, 1.0, 1.0);
//!
//! assert_eq!(scale * v, Vector4::new(2.0, 2.0, 2.0, 1.0));
//! assert_eq!(Matrix4::<f64>::identity().determinant(), 1.0);
//! ```

#![warn(missing_docs)]

pub mod dispatch;
pub mod error;
pub mod kernels;
pub mod scalar;
pub mod simd;

mod matrix4;
mod text;
mod vector2;
mod vector4;

pub use dispatch::{backend, Backend};
pub use error::{ParseError, Result};
pub use matrix4::Matrix4;
pub use scalar::{Scalar, EPS};
pub use vector2::Vector2;
pub use vector4::Vector4;

/// Single-precision [`Vector2`].
pub type Vector2f = Vector2<f32>;
/// Double-precision [`Vector2`].
pub type Vector2d = Vector2<f64>;
/// Single-precision [`Vector4`].
pub type Vector4f = Vector4<f32>;
/// Double-precision [`Vector4`].
pub type Vector4d = Vector4<f64>;
/// Single-precision [`Matrix4`].
pub type Matrix4f = Matrix4<f32>;
/// Double-precision [`Matrix4`].
pub type Matrix4d = Matrix4<f64>;
