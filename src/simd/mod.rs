//! SIMD lane types used by the vectorized kernel sets.
//!
//! Only the instruction sets selected by the build script are compiled in:
//!
//! - `sse`: [`sse::F32x4`], [`sse::F64x2`] (128-bit, x86/x86_64)
//! - `neon`: [`neon::F32x4`], [`neon::F64x2`] (128-bit, aarch64)
//! - `avx`: [`avx::F32x8`], [`avx::F64x4`] (256-bit, x86/x86_64)

#[cfg(avx)]
pub mod avx;

#[cfg(neon)]
pub mod neon;

#[cfg(sse)]
pub mod sse;

pub mod traits;

pub use traits::SimdLane;

/// Widest lane count of any lane type, used to size scratch buffers.
pub const MAX_LANE_COUNT: usize = 8;
