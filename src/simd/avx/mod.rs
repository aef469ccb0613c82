//! AVX lane types for 256-bit vector operations.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Sandy Bridge (2011+) or AMD Bulldozer (2011+)
//! - **Target Architecture**: x86 or x86_64
//! - **Compilation**: AVX must be enabled for the target (`-C target-feature=+avx`
//!   or `-C target-cpu=native`); the build script only selects this module then
//!
//! # Available Types
//!
//! - [`F32x8`]: 8 packed single-precision values (`__m256`)
//! - [`F64x4`]: 4 packed double-precision values (`__m256d`)
//!
//! Partial loads and stores use `vmaskmov`, so reading a 4-element column into
//! an 8-lane register never touches memory past the column.

pub mod f32x8;

pub mod f64x4;

pub use f32x8::F32x8;
pub use f64x4::F64x4;
