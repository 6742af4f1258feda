
mod imp;

mod dynarr;

use core::{alloc::Layout, fmt};

pub use dynarr::*;

//--------------------------------------------------------------

macro_rules! impl_slice_partial_eq_generic {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs where
            T : PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool { self.as_slice()[..] == other[..] }
            #[inline]
            fn ne(&self, other: &$rhs) -> bool { self.as_slice()[..] != other[..] }
        }
    };
}
use impl_slice_partial_eq_generic;

//--------------------------------------------------------------

/// Error returned by the container operations.
///
/// Both kinds are raised before the container is touched, so a failed call always leaves the container as it was.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrayError {
    /// A required input was absent, or a requested capacity can't be represented in memory.
    InvalidArgument(&'static str),
    /// An index fell outside of the range that is valid for the operation.
    IndexOutOfRange {
        index: usize,
        len:   usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrayError::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            ArrayError::IndexOutOfRange { index, len } => write!(f, "index {index} is out of range for length {len}"),
        }
    }
}

impl std::error::Error for ArrayError {}

/// Error returned when a buffer could not be (re)allocated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TryReserveError {
    CapacityOverflow,
    AllocError(Layout),
}

//--------------------------------------------------------------

/// A trait used to define a strategy to reserve additional memory for containers.
pub trait ReserveStrategy {
    /// Calculate the new capacity for a container.
    ///
    /// `cur_capacity` represents the current capacity of the container.
    ///
    /// `min_capacity` represents the minimum required capacity to be able to resize.
    ///
    /// Returns `Err(())` if the capacity were to overflow
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()>;
}

/// A reserve strategy that will try to either return double the current capacity, or the minimum required capacity, whichever is bigger.
///
/// Doubling from an empty buffer still yields 0, so the minimum required capacity always acts as the floor.
pub struct DoubleOrMinReserveStrategy;

impl ReserveStrategy for DoubleOrMinReserveStrategy {
    fn calculate(cur_capacity: usize, min_capacity: usize) -> Result<usize, ()> {
        let double_cap = cur_capacity.saturating_mul(2);
        let new_cap = if double_cap > min_capacity { double_cap } else { min_capacity };
        if new_cap <= isize::MAX as usize {
            Ok(new_cap)
        } else {
            Err(())
        }
    }
}
