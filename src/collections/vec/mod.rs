//! Vector-backed collections.
//!
//! Storage here is a single contiguous `Vec` whose growth timing is driven by
//! the collection itself rather than by `Vec`'s own amortization.

pub mod ring_deque;

pub use ring_deque::{RingDeque, MINIMUM_CAPACITY};
