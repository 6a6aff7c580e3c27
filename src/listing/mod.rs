//! Directory listing driver.
//!
//! - `config`: command-line flags and runtime configuration
//! - `scan`: reading and ordering one directory
//! - `format`: permission, owner and timestamp rendering for `-l`
//! - `walker`: the breadth-first traversal over a `RingDeque` work queue

pub mod config;
pub mod format;
pub mod scan;
pub mod walker;

pub use config::{CliArgs, ListConfig, ListOptions};
pub use scan::{scan_dir, ScannedEntry};
pub use walker::{ListStats, Lister};
