//! `RingDeque`: a growable ring buffer deque with power-of-two capacity.
//!
//! Elements live in a `Vec` of `MaybeUninit` slots whose length is always the
//! capacity. Two masked indices delimit the live range:
//!
//! ```text
//!   tail            head
//!    v               v
//! [ . | a | b | c | d | . | . | . ]      contiguous: [tail, head)
//!
//!           head        tail
//!            v           v
//! [ e | f | . | . | . | a | b | c ]      wrapped: [tail, cap) ++ [0, head)
//! ```
//!
//! One slot is never filled, so `head == tail` always means empty and the
//! deque is full at `capacity - 1` elements. Growth doubles the buffer and, if
//! the live range was wrapped, moves whichever of the two runs is shorter, so
//! a sequence of `n` pushes copies `O(n)` elements in total.
//!
//! Every popped element is moved out to the caller; the deque never holds a
//! second copy of it.

use crate::collections::Optional;
use crate::error::DequeError;
use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;
use std::vec::Vec;

/// Capacity of a freshly created deque: one usable slot plus the sentinel.
pub const MINIMUM_CAPACITY: usize = 2;

/// A double-ended queue backed by a power-of-two ring buffer.
pub struct RingDeque<T> {
    /// Backing storage. `buffer.len()` is the capacity; only the slots in the
    /// live range are initialized.
    buffer: Vec<MaybeUninit<T>>,
    /// Index of the front element.
    tail: usize,
    /// Index of the next free slot at the back.
    head: usize,
}

/// Smallest power-of-two capacity holding `usable` elements plus the sentinel.
fn capacity_for(usable: usize) -> Option<usize> {
    usable
        .checked_add(1)
        .and_then(usize::checked_next_power_of_two)
        .map(|capacity| capacity.max(MINIMUM_CAPACITY))
}

impl<T> RingDeque<T> {
    /// Creates an empty deque with the minimum capacity.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty deque, reporting allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if the buffer cannot be allocated.
    pub fn try_new() -> Result<Self, DequeError> {
        Self::try_with_capacity(0)
    }

    /// Creates an empty deque that holds at least `usable` elements before growing.
    ///
    /// # Panics
    /// Panics if the rounded capacity overflows `usize`.
    pub fn with_capacity(usable: usize) -> Self {
        let Some(capacity) = capacity_for(usable) else {
            panic!("capacity overflow");
        };
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, MaybeUninit::uninit);
        Self {
            buffer,
            tail: 0,
            head: 0,
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if the capacity overflows or the
    /// buffer cannot be allocated.
    pub fn try_with_capacity(usable: usize) -> Result<Self, DequeError> {
        let capacity = capacity_for(usable).ok_or(DequeError::Allocation {
            requested: usize::MAX,
        })?;
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| DequeError::Allocation {
                requested: capacity,
            })?;
        buffer.resize_with(capacity, MaybeUninit::uninit);
        Ok(Self {
            buffer,
            tail: 0,
            head: 0,
        })
    }

    /// Total number of slots, including the sentinel. Always a power of two.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.capacity() - 1
    }

    /// Number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.head.wrapping_sub(self.tail) & self.mask()
    }

    /// Returns `true` if empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns `true` if the next push will grow the buffer.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len() == self.mask()
    }

    /// Pushes an element to the back, growing first if full.
    ///
    /// # Panics
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn push_back(&mut self, item: T) {
        if self.is_full() {
            self.grow();
        }
        self.write_back(item);
    }

    /// Pushes an element to the front, growing first if full.
    ///
    /// # Panics
    /// Panics on capacity overflow; aborts if the allocator fails.
    pub fn push_front(&mut self, item: T) {
        if self.is_full() {
            self.grow();
        }
        self.write_front(item);
    }

    /// Pushes an element to the back, returning allocation failure to the caller.
    ///
    /// On error the deque is unchanged and `item` is dropped. Use
    /// [`try_reserve_one`](Self::try_reserve_one) first to keep the item.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if growth fails.
    pub fn try_push_back(&mut self, item: T) -> Result<(), DequeError> {
        self.try_reserve_one()?;
        self.write_back(item);
        Ok(())
    }

    /// Pushes an element to the front, returning allocation failure to the caller.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if growth fails.
    pub fn try_push_front(&mut self, item: T) -> Result<(), DequeError> {
        self.try_reserve_one()?;
        self.write_front(item);
        Ok(())
    }

    /// Makes sure the next push will not need to grow.
    ///
    /// # Errors
    /// Returns [`DequeError::Allocation`] if growth fails; the deque is left
    /// as it was.
    pub fn try_reserve_one(&mut self) -> Result<(), DequeError> {
        if self.is_full() {
            self.try_grow()?;
        }
        Ok(())
    }

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> Optional<T> {
        if self.is_empty() {
            return Optional::Absent;
        }
        self.head = self.head.wrapping_sub(1) & self.mask();
        // SAFETY: the slot was the last live element and is now outside the
        // live range, so it is read exactly once.
        Optional::Present(unsafe { self.buffer[self.head].assume_init_read() })
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> Optional<T> {
        if self.is_empty() {
            return Optional::Absent;
        }
        let tail = self.tail;
        self.tail = (tail + 1) & self.mask();
        // SAFETY: the slot was the first live element and is now outside the
        // live range, so it is read exactly once.
        Optional::Present(unsafe { self.buffer[tail].assume_init_read() })
    }

    /// Borrows the front element.
    pub fn front(&self) -> Optional<&T> {
        if self.is_empty() {
            return Optional::Absent;
        }
        // SAFETY: `tail` is live when the deque is non-empty.
        Optional::Present(unsafe { self.buffer[self.tail].assume_init_ref() })
    }

    /// Borrows the back element.
    pub fn back(&self) -> Optional<&T> {
        if self.is_empty() {
            return Optional::Absent;
        }
        let last = self.head.wrapping_sub(1) & self.mask();
        // SAFETY: the slot before `head` is live when the deque is non-empty.
        Optional::Present(unsafe { self.buffer[last].assume_init_ref() })
    }

    /// Drops every element, keeping the capacity.
    pub fn clear(&mut self) {
        while self.pop_front().is_present() {}
    }

    /// Consumes the deque, dropping the remaining elements and releasing the buffer.
    pub fn free(self) {
        drop(self);
    }

    #[inline]
    fn write_back(&mut self, item: T) {
        debug_assert!(!self.is_full());
        let head = self.head;
        self.buffer[head].write(item);
        self.head = (head + 1) & self.mask();
    }

    #[inline]
    fn write_front(&mut self, item: T) {
        debug_assert!(!self.is_full());
        self.tail = self.tail.wrapping_sub(1) & self.mask();
        self.buffer[self.tail].write(item);
    }

    /// Doubles the buffer, aborting on allocator failure like `Vec` does.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let Some(new_capacity) = old_capacity.checked_mul(2) else {
            panic!("capacity overflow");
        };
        self.buffer.reserve_exact(new_capacity - old_capacity);
        self.buffer.resize_with(new_capacity, MaybeUninit::uninit);
        // SAFETY: the buffer was just doubled from `old_capacity`.
        unsafe { self.handle_capacity_increase(old_capacity) };
    }

    /// Doubles the buffer, reporting allocator failure.
    fn try_grow(&mut self) -> Result<(), DequeError> {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.checked_mul(2).ok_or(DequeError::Allocation {
            requested: usize::MAX,
        })?;
        self.buffer
            .try_reserve_exact(new_capacity - old_capacity)
            .map_err(|_| DequeError::Allocation {
                requested: new_capacity,
            })?;
        self.buffer.resize_with(new_capacity, MaybeUninit::uninit);
        // SAFETY: the buffer was just doubled from `old_capacity`.
        unsafe { self.handle_capacity_increase(old_capacity) };
        Ok(())
    }

    /// Restores a valid layout after the buffer grew from `old_capacity`.
    ///
    /// Reallocation keeps every slot at its old offset, so a contiguous live
    /// range needs no work. A wrapped one is made representable again by moving
    /// the shorter run into the new upper half:
    ///
    /// ```text
    /// head run shorter:   [ A . . T T T ] -> [ . . . T T T A . . . . . ]
    /// tail run shorter:   [ A A A . . T ] -> [ A A A . . . . . . . . T ]
    /// ```
    ///
    /// # Safety
    /// `self.capacity()` must be exactly `2 * old_capacity` and the indices must
    /// still describe the live range under the old capacity.
    unsafe fn handle_capacity_increase(&mut self, old_capacity: usize) {
        let new_capacity = self.capacity();
        debug_assert_eq!(new_capacity, old_capacity * 2);
        debug_assert!(new_capacity.is_power_of_two());

        if self.tail <= self.head {
            return;
        }

        let head_len = self.head;
        let tail_len = old_capacity - self.tail;
        let base = self.buffer.as_mut_ptr();

        if head_len < tail_len {
            // [0, head) -> [old_capacity, old_capacity + head)
            ptr::copy_nonoverlapping(base, base.add(old_capacity), head_len);
            self.head += old_capacity;
        } else {
            // [tail, old_capacity) -> [new_tail, new_capacity)
            let new_tail = new_capacity - tail_len;
            ptr::copy_nonoverlapping(base.add(self.tail), base.add(new_tail), tail_len);
            self.tail = new_tail;
        }
    }
}

impl<T> Default for RingDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RingDeque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for RingDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingDeque")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut deque = Self::with_capacity(iter.size_hint().0);
        deque.extend(iter);
        deque
    }
}
