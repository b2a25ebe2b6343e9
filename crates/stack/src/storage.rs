use std::alloc::{Layout, alloc, dealloc};

use crate::Error;

/// The backing slot array: one contiguous allocation, replaced wholesale
/// on growth. Slots are uninitialized memory; the owning container tracks
/// how many hold live values and is responsible for dropping them. `Slots`
/// itself only frees the allocation.
pub(crate) struct Slots<T> {
    pub(crate) data: *mut T,
    pub(crate) capacity: usize,
}

impl<T> Slots<T> {
    fn layout(capacity: usize) -> Layout {
        Layout::array::<T>(capacity).expect("slot layout overflow")
    }

    /// Allocate a fresh array of `capacity` uninitialized slots. A null
    /// return from the allocator is reported, not escalated.
    pub(crate) fn new(capacity: usize) -> Result<Self, Error> {
        debug_assert!(capacity > 0);
        let data = unsafe { alloc(Self::layout(capacity)).cast::<T>() };
        if data.is_null() {
            return Err(Error::AllocationFailure);
        }
        Ok(Self { data, capacity })
    }

    /// Replace the allocation with a larger one, moving the initialized
    /// prefix `0..len` into it and freeing the old region. On failure the
    /// old allocation and its contents are untouched.
    pub(crate) fn grow(&mut self, new_capacity: usize, len: usize) -> Result<(), Error> {
        debug_assert!(new_capacity > self.capacity);
        debug_assert!(len <= self.capacity);
        let data = unsafe { alloc(Self::layout(new_capacity)).cast::<T>() };
        if data.is_null() {
            return Err(Error::AllocationFailure);
        }
        unsafe {
            std::ptr::copy_nonoverlapping(self.data, data, len);
            dealloc(self.data.cast(), Self::layout(self.capacity));
        }
        self.data = data;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        unsafe {
            dealloc(self.data.cast(), Self::layout(self.capacity));
        }
    }
}

// Moving the whole container between threads is fine; shared access is not
// (no Sync), the container assumes one exclusive owner.
unsafe impl<T: Send> Send for Slots<T> {}
