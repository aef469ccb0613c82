//! The lane abstraction shared by every SIMD instruction set.

use std::ops::{Add, Div, Mul, Sub};

use super::MAX_LANE_COUNT;

/// A SIMD register holding `LANE_COUNT` values of `T`.
///
/// Arithmetic operators act lane by lane. Loads and stores go through raw
/// pointers, mirroring the underlying intrinsics; partial variants touch only
/// the first `size` elements and zero the remaining lanes.
pub trait SimdLane<T: Copy>:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    /// Number of `T` values held by the register.
    const LANE_COUNT: usize;

    /// Broadcasts `value` to every lane.
    fn splat(value: T) -> Self;

    /// Loads exactly `LANE_COUNT` elements.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANE_COUNT` elements of `T`.
    unsafe fn load(ptr: *const T) -> Self;

    /// Loads the first `size` elements and zeroes the remaining lanes.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `size` elements, and `size < LANE_COUNT`.
    unsafe fn load_partial(ptr: *const T, size: usize) -> Self;

    /// Stores all `LANE_COUNT` lanes.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANE_COUNT` elements of `T`.
    unsafe fn store_at(&self, ptr: *mut T);

    /// Stores the first `size` lanes.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `size` elements, and `size < LANE_COUNT`.
    unsafe fn store_at_partial(&self, ptr: *mut T, size: usize);

    /// Horizontal sum of every lane.
    fn reduce_sum(&self) -> T;

    /// Loads `LANE_COUNT / 2` elements into the low half and repeats them in the
    /// high half.
    ///
    /// The default goes through a scratch buffer; lane types that have a native
    /// half-register broadcast override it.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANE_COUNT / 2` elements, and
    /// `LANE_COUNT >= 2`.
    unsafe fn load_repeated(ptr: *const T) -> Self {
        let half = Self::LANE_COUNT / 2;
        let mut buffer = [*ptr; MAX_LANE_COUNT];
        for (i, slot) in buffer.iter_mut().take(Self::LANE_COUNT).enumerate() {
            *slot = *ptr.add(i % half);
        }
        Self::load(buffer.as_ptr())
    }

    /// Broadcasts `low` to the low half of the lanes and `high` to the high half.
    fn splat_halves(low: T, high: T) -> Self {
        let mut buffer = [low; MAX_LANE_COUNT];
        buffer[Self::LANE_COUNT / 2..Self::LANE_COUNT].fill(high);
        unsafe { Self::load(buffer.as_ptr()) }
    }
}
