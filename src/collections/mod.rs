//! Collections backing the directory traversal.
//!
//! - `optional`: the `Optional` wrapper returned by every query that may be empty
//! - `vec`: vector-backed collections (the `RingDeque` work queue)

pub mod optional;
pub mod vec;

pub use optional::Optional;
pub use vec::{RingDeque, MINIMUM_CAPACITY};
