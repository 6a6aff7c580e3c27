//! Reading a single directory into a sorted entry list.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// One name inside a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedEntry {
    /// File name within the scanned directory.
    pub name: OsString,
    /// Directory according to the entry's own type; symlinks are not followed.
    pub is_dir: bool,
}

impl ScannedEntry {
    fn dot(name: &str) -> Self {
        Self {
            name: OsString::from(name),
            is_dir: true,
        }
    }

    /// `.` or `..`, which are never descended into.
    pub fn is_dot(&self) -> bool {
        matches!(self.name.as_bytes(), b"." | b"..")
    }

    /// Names starting with `.`.
    pub fn is_hidden(&self) -> bool {
        is_hidden(&self.name)
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}

/// ASCII case-insensitive byte order, falling back to raw bytes on ties.
pub fn compare_names(a: &OsStr, b: &OsStr) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    a.iter()
        .map(u8::to_ascii_lowercase)
        .cmp(b.iter().map(u8::to_ascii_lowercase))
        .then_with(|| a.cmp(b))
}

/// Reads `path`, dropping hidden names unless `all` is set.
///
/// With `all`, `.` and `..` are included the way `readdir(3)` reports them.
///
/// # Errors
/// Returns the I/O error if the directory cannot be opened or read.
pub fn scan_dir(path: &Path, all: bool) -> io::Result<Vec<ScannedEntry>> {
    let mut entries = Vec::new();
    if all {
        entries.push(ScannedEntry::dot("."));
        entries.push(ScannedEntry::dot(".."));
    }

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let name = entry.file_name();
        if !all && is_hidden(&name) {
            continue;
        }
        let is_dir = entry.file_type().is_ok_and(|kind| kind.is_dir());
        entries.push(ScannedEntry { name, is_dir });
    }

    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
    Ok(entries)
}
