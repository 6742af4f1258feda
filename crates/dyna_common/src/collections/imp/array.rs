use std::{
    alloc::{self, Layout},
    marker::PhantomData,
    mem::{align_of, size_of},
    ptr::NonNull,
};

use crate::collections::{ReserveStrategy, TryReserveError};


/// Low level utility for more ergonomically allocating, reallocating, and deallocating
/// a buffer of memory without having to worry about all the corner cases involved.
/// In particular:
///
/// - Produces a dangling pointer on zero-sized types and on zero-length allocations.
/// - Avoids freeing the dangling pointer.
/// - Catches all overflows in capacity computations (promotes them to "capacity overflow" errors).
/// - Keeps the old allocation intact when growing fails, so a failed grow is never observable.
///
/// The capacity is tracked explicitly, so zero-sized types report the capacity that was requested for them, even though nothing is ever allocated.
///
/// This type does not in anyway inspect the memory it manages. When dropped it *will* free its memory, but it *won't* try to drop its contents.
/// It is up to the user of `RawArray` to handle the actual things *stored* inside of `RawArray`
pub(crate) struct RawArray<T, R: ReserveStrategy> {
    ptr:      NonNull<T>,
    cap:      usize,
    _phantom: PhantomData<(T, fn() -> R)>,
}

// SAFETY: `RawArray` uniquely owns its allocation, so it is as thread-safe as `T` is.
unsafe impl<T: Send, R: ReserveStrategy> Send for RawArray<T, R> {}
// SAFETY: see above, shared access only ever hands out shared access to `T`.
unsafe impl<T: Sync, R: ReserveStrategy> Sync for RawArray<T, R> {}

impl<T, R: ReserveStrategy> RawArray<T, R> {
    /// Creates an empty `RawArray` without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self { ptr: NonNull::dangling(), cap: 0, _phantom: PhantomData }
    }

    /// Creates a `RawArray` with exactly the capacity and alignment requirements for a `[T; capacity]`.
    ///
    /// Non-fallible version of `try_with_capacity`.
    ///
    /// # Panics
    ///
    /// Panics if the requested capacity exceeds `isize::MAX` bytes.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(arr) => arr,
            Err(err) => handle_error(err),
        }
    }

    /// Tries to create a `RawArray` with exactly the capacity and alignment requirements for a `[T; capacity]`.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut arr = Self::new();
        if capacity != 0 {
            // SAFETY: Nothing is stored yet, so no element can be lost
            unsafe { arr.reallocate(capacity)? };
        }
        Ok(arr)
    }

    /// Get the capacity of the allocation.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Get a raw pointer to the start of the allocation.
    /// Note that this is a dangling pointer when either `capacity() == 0` or `T` is zero-sized.
    #[inline]
    pub const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if size_of::<T>() == 0 || self.cap == 0 {
            None
        } else {
            // We could use Layout::array here, but this memory has already been allocated with that layout, so we know it can't overflow.
            // SAFETY: The layout was validated by `Layout::array` when the memory was allocated.
            let layout = unsafe { Layout::from_size_align_unchecked(size_of::<T>() * self.cap, align_of::<T>()) };
            Some((self.ptr.cast(), layout))
        }
    }

    /// Returns if the buffer needs to grow to fulfill the needed extra capacity.
    #[inline]
    pub fn needs_to_grow(&self, len: usize, additional: usize) -> bool {
        additional > self.cap.wrapping_sub(len)
    }

    /// Ensures that the buffer contains at least enough space to hold `len + additional` elements.
    /// If it doesn't already have enough capacity, the reserve strategy decides how much space to reallocate.
    ///
    /// `len` may not exceed `self.capacity()`.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Aborts
    ///
    /// Aborts on OOM.
    pub fn reserve(&mut self, len: usize, additional: usize) {
        if let Err(err) = self.try_reserve(len, additional) {
            handle_error(err);
        }
    }

    /// The same as `reserve`, but returns on errors instead of panicking or aborting.
    pub fn try_reserve(&mut self, len: usize, additional: usize) -> Result<(), TryReserveError> {
        if self.needs_to_grow(len, additional) {
            self.grow_amortized(len, additional)?;
        }
        Ok(())
    }

    /// Reallocates the buffer to exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is smaller than `len`, as that would lose live elements.
    pub fn resize_exact(&mut self, len: usize, capacity: usize) {
        assert!(capacity >= len, "Tried to resize below the number of live elements");
        if capacity == self.cap {
            return;
        }
        // SAFETY: We just checked that all `len` live elements fit in the new allocation.
        if let Err(err) = unsafe { self.reallocate(capacity) } {
            handle_error(err);
        }
    }

    //--------------------------------------------------------------

    fn grow_amortized(&mut self, len: usize, additional: usize) -> Result<(), TryReserveError> {
        debug_assert!(additional > 0);

        let required_cap = len.checked_add(additional).ok_or(TryReserveError::CapacityOverflow)?;
        let new_cap = R::calculate(self.cap, required_cap).map_err(|_| TryReserveError::CapacityOverflow)?;
        debug_assert!(new_cap >= required_cap, "reserve strategy returned a capacity that is too small");

        // SAFETY: `new_cap >= required_cap > len`, so every live element fits.
        unsafe { self.reallocate(new_cap) }
    }

    /// Move the buffer into an allocation of `new_cap` elements.
    ///
    /// The new buffer only replaces the current one once the reallocation succeeded.
    ///
    /// # Safety
    ///
    /// The caller must make sure that all live elements fit in `new_cap` elements.
    unsafe fn reallocate(&mut self, new_cap: usize) -> Result<(), TryReserveError> {
        // Element count limit, `Layout::array` only limits the byte size, which is always 0 for zero-sized types
        if new_cap > isize::MAX as usize {
            return Err(TryReserveError::CapacityOverflow);
        }

        if size_of::<T>() == 0 {
            self.cap = new_cap;
            return Ok(());
        }

        if new_cap == 0 {
            if let Some((ptr, layout)) = self.current_memory() {
                alloc::dealloc(ptr.as_ptr(), layout);
            }
            self.ptr = NonNull::dangling();
            self.cap = 0;
            return Ok(());
        }

        let new_layout = Layout::array::<T>(new_cap).map_err(|_| TryReserveError::CapacityOverflow)?;
        let new_ptr = match self.current_memory() {
            // `realloc` copies the whole old allocation into the new one and frees the old one
            Some((ptr, old_layout)) => alloc::realloc(ptr.as_ptr(), old_layout, new_layout.size()),
            None => alloc::alloc(new_layout),
        };

        let Some(new_ptr) = NonNull::new(new_ptr) else {
            return Err(TryReserveError::AllocError(new_layout));
        };
        self.ptr = new_ptr.cast();
        self.cap = new_cap;
        Ok(())
    }
}

impl<T, R: ReserveStrategy> Drop for RawArray<T, R> {
    fn drop(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: The memory was allocated with this exact layout.
            unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
        }
    }
}

/// Central function for reserve error handling
#[cold]
#[track_caller]
pub(crate) fn handle_error(e: TryReserveError) -> ! {
    match e {
        TryReserveError::CapacityOverflow => capacity_overflow(),
        TryReserveError::AllocError(layout) => alloc::handle_alloc_error(layout),
    }
}

#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
