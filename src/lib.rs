//! # `ringls` - Breadth-First Directory Lister
//!
//! An `ls -1aRl` work-alike whose traversal queue is a hand-rolled ring
//! buffer deque. The queue and its `Optional` return type are the heart of
//! the crate; the listing driver is ordinary sequential I/O on top of them.
//!
//! ## Architecture
//!
//! 1. **`Optional<T>`** ([`collections::optional`]):
//!    - "A `T` or nothing", returned by every query that may be empty
//!    - The payload is only reachable after a presence check
//!
//! 2. **`RingDeque<T>`** ([`collections::vec::ring_deque`]):
//!    - Power-of-two ring buffer, masked `head`/`tail` indices
//!    - One sentinel slot separates "full" from "empty"
//!    - Doubling growth that relocates only the shorter wrapped run
//!    - Amortized O(1) push and pop at both ends
//!
//! 3. **Listing driver** ([`listing`]):
//!    - Pops directories from the front, pushes subdirectories to the back
//!    - Stops when `pop_front` returns [`Optional::Absent`]
//!
//! ## Ownership
//!
//! Popping moves the element out to the caller. The deque never keeps a
//! second copy, so each element is dropped exactly once: by whoever popped
//! it, or by the deque itself on `clear`, `free` or drop.
//!
//! ## Example
//!
//! ```rust
//! use ringls::{Optional, RingDeque};
//!
//! let mut queue = RingDeque::new();
//! queue.push_back("src");
//! queue.push_back("tests");
//!
//! assert_eq!(queue.pop_front(), Optional::Present("src"));
//! assert_eq!(queue.pop_front(), Optional::Present("tests"));
//! assert!(queue.pop_front().is_absent());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod listing;

pub use collections::{Optional, RingDeque};
pub use error::{DequeError, ListError};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // `Optional` of a non-null pointer uses the niche, like `Option`.
    assert!(mem::size_of::<Optional<Box<u8>>>() == mem::size_of::<Box<u8>>());
    assert!(mem::size_of::<Optional<&u8>>() == mem::size_of::<Option<&u8>>());

    // Buffer plus two indices; no separate length or capacity field.
    assert!(mem::size_of::<RingDeque<u64>>() <= mem::size_of::<Vec<u64>>() + 2 * mem::size_of::<usize>());
};
