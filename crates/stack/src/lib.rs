//! A growable LIFO stack of bounded-length strings.
//!
//! Capacity starts at [BoundedStack::INITIAL_CAPACITY] slots and doubles
//! when full, capped at [BoundedStack::MAX_CAPACITY]; a push into a full
//! stack at the cap is an [Error::Overflow], not a resize. Capacity never
//! shrinks. Values are validated against [Text::MAX_LEN] on the way in.

use thiserror::Error;

pub use text::{Text, TooLong};

mod storage;
use storage::Slots;

/// An owning, contiguous stack of [Text] values.
///
/// The stack has exactly one owner for its whole lifetime: it is movable
/// but not clonable, and teardown happens in `Drop`, which releases every
/// live value and then the slot array. All failures are reported to the
/// caller and leave the stack exactly as it was.
pub struct BoundedStack {
    slots: Slots<Text>,
    len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The pushed value exceeds [Text::MAX_LEN] bytes.
    #[error(transparent)]
    ValueTooLong(#[from] TooLong),
    /// The stack is full and already at [BoundedStack::MAX_CAPACITY].
    #[error("stack is full at the maximum capacity of {max}", max = BoundedStack::MAX_CAPACITY)]
    Overflow,
    /// Pop on an empty stack.
    #[error("stack is empty")]
    Underflow,
    /// The allocator could not satisfy a slot-array request.
    #[error("slot storage allocation failed")]
    AllocationFailure,
}

impl BoundedStack {
    /// Slot count of a fresh stack.
    pub const INITIAL_CAPACITY: usize = 10;
    /// Hard ceiling on capacity; growth never passes it.
    pub const MAX_CAPACITY: usize = 1000;

    /// Create an empty stack with [Self::INITIAL_CAPACITY] slots.
    pub fn new() -> Result<Self, Error> {
        let slots = Slots::new(Self::INITIAL_CAPACITY)?;
        Ok(Self { slots, len: 0 })
    }

    /// Push `value` onto the top of the stack.
    ///
    /// The length limit is checked before anything else, so an oversized
    /// value never triggers a resize. Growth doubles the capacity, capped
    /// at [Self::MAX_CAPACITY]; pushing while full at the cap fails with
    /// [Error::Overflow]. On any failure the stack is unchanged.
    pub fn push(&mut self, value: impl Into<String>) -> Result<(), Error> {
        let value = Text::new(value)?;
        if self.len == self.slots.capacity {
            if self.slots.capacity == Self::MAX_CAPACITY {
                return Err(Error::Overflow);
            }
            let next = (self.slots.capacity * 2).min(Self::MAX_CAPACITY);
            self.slots.grow(next, self.len)?;
        }
        unsafe {
            self.slots.data.add(self.len).write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Pop the most recently pushed value, transferring ownership to the
    /// caller. Capacity is retained; the stack never shrinks.
    pub fn pop(&mut self) -> Result<Text, Error> {
        if self.len == 0 {
            return Err(Error::Underflow);
        }
        self.len -= 1;
        // Reading the slot moves the value out; it is no longer part of
        // the initialized prefix and will not be dropped by the stack.
        Ok(unsafe { self.slots.data.add(self.len).read() })
    }

    /// Borrow the top value without removing it.
    pub fn peek(&self) -> Option<&Text> {
        if self.len == 0 {
            return None;
        }
        Some(unsafe { &*self.slots.data.add(self.len - 1) })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Currently allocated slot count, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.capacity
    }

    /// Drop every live value. Capacity is retained.
    pub fn clear(&mut self) {
        let live = std::ptr::slice_from_raw_parts_mut(self.slots.data, self.len);
        self.len = 0;
        unsafe {
            std::ptr::drop_in_place(live);
        }
    }
}

impl Drop for BoundedStack {
    fn drop(&mut self) {
        // Live values first, then `Slots` frees the array itself.
        self.clear();
    }
}
