//! Breadth-first directory lister
//!
//! A single `RingDeque<PathBuf>` is the work queue for a traversal:
//!
//! ```text
//! operands ──push_back──▶ [ d0 | d1 | ... ] ──pop_front──▶ scan + print
//!                               ▲                               │
//!                               └───── push_back(subdirs) ◀─────┘  (-R only)
//! ```
//!
//! Popping from the front while appending discovered directories at the back
//! yields breadth-first order. The loop ends when `pop_front` comes back absent.

use crate::collections::{Optional, RingDeque};
use crate::error::Result;
use crate::listing::config::ListOptions;
use crate::listing::format::{format_long, local_offset};
use crate::listing::scan::{scan_dir, ScannedEntry};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use time::UtcOffset;
use tracing::{debug, trace, warn};

/// Counters from one call to [`Lister::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStats {
    /// Directories popped from the queue and successfully read.
    pub dirs: u64,
    /// Entries printed.
    pub entries: u64,
    /// Directories or entries that could not be read.
    pub errors: u64,
    /// Largest number of directories waiting at once.
    pub peak_queue: usize,
}

/// Writes directory listings to `out`.
pub struct Lister<W: Write> {
    options: ListOptions,
    out: W,
    offset: UtcOffset,
    stats: ListStats,
}

impl<W: Write> Lister<W> {
    /// Creates a lister using the local UTC offset for timestamps.
    pub fn new(options: ListOptions, out: W) -> Self {
        Self {
            options,
            out,
            offset: local_offset(),
            stats: ListStats::default(),
        }
    }

    /// Uses a fixed UTC offset for `-l` timestamps instead of the local one.
    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> ListStats {
        self.stats
    }

    /// Returns the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Lists every path in `paths`.
    ///
    /// With `-R` each operand is traversed to completion before the next one
    /// is queued; otherwise all operands are queued up front and listed in
    /// order.
    ///
    /// # Errors
    /// Fails if the output cannot be written or the queue cannot grow.
    /// Unreadable directories are logged and skipped.
    pub fn run(&mut self, paths: &[PathBuf]) -> Result<ListStats> {
        let mut queue = RingDeque::try_new()?;

        if self.options.recursive {
            for path in paths {
                self.enqueue(&mut queue, path.clone())?;
                self.drain(&mut queue)?;
            }
        } else {
            for path in paths {
                self.enqueue(&mut queue, path.clone())?;
            }
            self.drain(&mut queue)?;
        }

        debug_assert!(queue.is_empty());
        queue.free();
        self.out.flush()?;

        debug!(
            dirs = self.stats.dirs,
            entries = self.stats.entries,
            errors = self.stats.errors,
            peak_queue = self.stats.peak_queue,
            "listing complete"
        );
        Ok(self.stats)
    }

    fn enqueue(&mut self, queue: &mut RingDeque<PathBuf>, path: PathBuf) -> Result<()> {
        let capacity = queue.capacity();
        trace!(path = %path.display(), "queueing directory");
        queue.try_push_back(path)?;

        if queue.capacity() != capacity {
            trace!(from = capacity, to = queue.capacity(), "work queue grew");
        }
        self.stats.peak_queue = self.stats.peak_queue.max(queue.len());
        Ok(())
    }

    fn drain(&mut self, queue: &mut RingDeque<PathBuf>) -> Result<()> {
        while let Optional::Present(dir) = queue.pop_front() {
            debug!(path = %dir.display(), pending = queue.len(), "listing directory");

            if self.options.recursive {
                writeln!(self.out, "{}:", dir.display())?;
            }

            let entries = match scan_dir(&dir, self.options.all) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %dir.display(), error = %err, "cannot open directory");
                    self.stats.errors += 1;
                    if !queue.is_empty() {
                        writeln!(self.out)?;
                    }
                    continue;
                }
            };
            self.stats.dirs += 1;

            for entry in &entries {
                if self.options.recursive && entry.is_dir && !entry.is_dot() {
                    self.enqueue(queue, dir.join(&entry.name))?;
                }
                self.write_entry(&dir, entry)?;
            }

            if !(self.options.one_per_line || self.options.long) {
                writeln!(self.out)?;
            }
            if self.options.recursive && !queue.is_empty() {
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn write_entry(&mut self, dir: &Path, entry: &ScannedEntry) -> Result<()> {
        let name = entry.name.to_string_lossy();
        self.stats.entries += 1;

        if self.options.long {
            let path = dir.join(&entry.name);
            // stat(2) first, so symlinks show their target; dangling ones fall back to lstat(2).
            match fs::metadata(&path).or_else(|_| fs::symlink_metadata(&path)) {
                Ok(metadata) => writeln!(self.out, "{}", format_long(&name, &metadata, self.offset))?,
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "cannot stat entry");
                    self.stats.errors += 1;
                    writeln!(self.out, "{name}")?;
                }
            }
        } else if self.options.one_per_line {
            writeln!(self.out, "{name}")?;
        } else {
            write!(self.out, "{name}  ")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run(options: ListOptions, paths: &[PathBuf]) -> (String, ListStats) {
        let mut lister = Lister::new(options, Vec::new()).with_offset(UtcOffset::UTC);
        let stats = lister.run(paths).unwrap();
        (String::from_utf8(lister.into_inner()).unwrap(), stats)
    }

    #[test]
    fn test_inline_listing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b"), b"").unwrap();
        fs::write(dir.path().join("a"), b"").unwrap();

        let (out, stats) = run(ListOptions::default(), &[dir.path().to_path_buf()]);
        assert_eq!(out, "a  b  \n");
        assert_eq!(stats.dirs, 1);
        assert_eq!(stats.entries, 2);
    }

    #[test]
    fn test_recursive_is_breadth_first() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/deep")).unwrap();
        fs::create_dir(root.join("b")).unwrap();
        fs::write(root.join("b/file"), b"").unwrap();

        let options = ListOptions {
            recursive: true,
            one_per_line: true,
            ..ListOptions::default()
        };
        let (out, stats) = run(options, &[root.to_path_buf()]);

        let r = root.display();
        let expected = format!(
            "{r}:\na\nb\n\n{r}/a:\ndeep\n\n{r}/b:\nfile\n\n{r}/a/deep:\n"
        );
        assert_eq!(out, expected);
        assert_eq!(stats.dirs, 4);
        assert_eq!(stats.peak_queue, 2);
    }

    #[test]
    fn test_unreadable_directory_is_skipped() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        fs::write(dir.path().join("present"), b"").unwrap();

        let options = ListOptions {
            one_per_line: true,
            ..ListOptions::default()
        };
        let (out, stats) = run(options, &[missing, dir.path().to_path_buf()]);
        assert_eq!(out, "\npresent\n");
        assert_eq!(stats.errors, 1);
        assert_eq!(stats.dirs, 1);
    }
}
