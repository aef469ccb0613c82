//! ARM NEON lane types for 128-bit vector operations.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: any AArch64 processor (NEON is mandatory there)
//! - **Target Architecture**: AArch64
//! - **Compilation**: NEON is on by default for aarch64 targets
//!
//! # Available Types
//!
//! - [`F32x4`]: 4 packed single-precision values (`float32x4_t`)
//! - [`F64x2`]: 2 packed double-precision values (`float64x2_t`)
//!
//! NEON fills the same 128-bit slot as SSE2 on x86; the kernel set built on top
//! of these lanes is shared between the two.

pub mod f32x4;

pub mod f64x2;

pub use f32x4::F32x4;
pub use f64x2::F64x2;
