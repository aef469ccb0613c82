//! Build-time routing from value types to kernel sets.
//!
//! `build.rs` enables at most one of the `avx`, `sse` or `neon` cfgs (`avx` also
//! enables `sse`). The aliases below resolve to a concrete [`KernelSet`] once per
//! build, so every call is a direct, inlinable function call:
//!
//! | alias    | used by               | priority                      |
//! |----------|-----------------------|-------------------------------|
//! | `Wide`   | `Vector4`, `Matrix4`  | 256-bit, 128-bit, scalar      |
//! | `Narrow` | `Vector2`             | 128-bit, scalar               |
//!
//! Two elements never fill a 256-bit register, so `Vector2` stops at 128 bits.
//!
//! [`KernelSet`]: crate::kernels::KernelSet

use std::fmt;

use tracing::debug;

pub(crate) use crate::kernels::scalar::compare_eq;

#[cfg(avx)]
pub(crate) type Wide = crate::kernels::simd256::Simd256Kernels;
#[cfg(all(not(avx), any(sse, neon)))]
pub(crate) type Wide = crate::kernels::simd128::Simd128Kernels;
#[cfg(not(any(avx, sse, neon)))]
pub(crate) type Wide = crate::kernels::scalar::ScalarKernels;

#[cfg(any(sse, neon))]
pub(crate) type Narrow = crate::kernels::simd128::Simd128Kernels;
#[cfg(not(any(sse, neon)))]
pub(crate) type Narrow = crate::kernels::scalar::ScalarKernels;

/// Instruction set behind a kernel alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Plain loops.
    Scalar,
    /// 128-bit SSE2 lanes (x86/x86_64).
    Sse,
    /// 128-bit NEON lanes (aarch64).
    Neon,
    /// 256-bit AVX lanes (x86/x86_64).
    Avx,
}

impl Backend {
    /// Lower-case name, matching the `LOCOMATH_BACKEND` values.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Scalar => "scalar",
            Backend::Sse => "sse",
            Backend::Neon => "neon",
            Backend::Avx => "avx",
        }
    }

    /// Register width in bits, 0 for the scalar set.
    pub const fn lane_bits(self) -> usize {
        match self {
            Backend::Scalar => 0,
            Backend::Sse | Backend::Neon => 128,
            Backend::Avx => 256,
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(avx)]
const WIDE: Backend = Backend::Avx;
#[cfg(all(not(avx), sse))]
const WIDE: Backend = Backend::Sse;
#[cfg(all(not(avx), neon))]
const WIDE: Backend = Backend::Neon;
#[cfg(not(any(avx, sse, neon)))]
const WIDE: Backend = Backend::Scalar;

#[cfg(sse)]
const NARROW: Backend = Backend::Sse;
#[cfg(neon)]
const NARROW: Backend = Backend::Neon;
#[cfg(not(any(sse, neon)))]
const NARROW: Backend = Backend::Scalar;

/// Kernel set used by [`Vector4`](crate::Vector4) and [`Matrix4`](crate::Matrix4).
pub const fn backend() -> Backend {
    WIDE
}

/// Kernel set used by [`Vector2`](crate::Vector2).
pub const fn vector2_backend() -> Backend {
    NARROW
}

/// Reports the kernel sets compiled into this build at `debug` level.
pub fn log_backend() {
    debug!(
        backend = %backend(),
        lane_bits = backend().lane_bits(),
        vector2_backend = %vector2_backend(),
        "locomath kernel selection"
    );
}
