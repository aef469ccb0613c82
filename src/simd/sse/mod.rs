//! SSE2 lane types for 128-bit vector operations.
//!
//! SSE2 is part of the x86_64 baseline, so every x86_64 build gets these lanes
//! unless `LOCOMATH_BACKEND=scalar` is set.
//!
//! # Available Types
//!
//! - [`F32x4`]: 4 packed single-precision values (`__m128`)
//! - [`F64x2`]: 2 packed double-precision values (`__m128d`)

pub mod f32x4;

pub mod f64x2;

pub use f32x4::F32x4;
pub use f64x2::F64x2;
