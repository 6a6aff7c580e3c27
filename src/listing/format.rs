//! Rendering entries for the long listing format.

use nix::unistd::{Gid, Group, Uid, User};
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::time::SystemTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Timestamp format used by `-l`, e.g. `Mar 07 14:05`.
pub const MTIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day] [hour]:[minute]");

const UNKNOWN_MTIME: &str = "??? ?? ??:??";

const FILE_TYPES: [(libc::mode_t, char); 7] = [
    (libc::S_IFREG, '-'),
    (libc::S_IFDIR, 'd'),
    (libc::S_IFCHR, 'c'),
    (libc::S_IFBLK, 'b'),
    (libc::S_IFIFO, 'p'),
    (libc::S_IFSOCK, 's'),
    (libc::S_IFLNK, 'l'),
];

/// Read, write, execute and the special bit sharing the execute column,
/// with the characters shown for special+exec and special alone.
const PERMISSION_CLASSES: [(libc::mode_t, libc::mode_t, libc::mode_t, libc::mode_t, char, char); 3] = [
    (libc::S_IRUSR, libc::S_IWUSR, libc::S_IXUSR, libc::S_ISUID, 's', 'S'),
    (libc::S_IRGRP, libc::S_IWGRP, libc::S_IXGRP, libc::S_ISGID, 's', 'S'),
    (libc::S_IROTH, libc::S_IWOTH, libc::S_IXOTH, libc::S_ISVTX, 't', 'T'),
];

#[inline]
fn has(mode: u32, bit: libc::mode_t) -> bool {
    mode & u32::from(bit) != 0
}

/// Renders `st_mode` as the ten-character `drwxr-xr-x` string.
pub fn format_mode(mode: u32) -> String {
    let file_type = mode & u32::from(libc::S_IFMT);
    let type_char = FILE_TYPES
        .iter()
        .find(|(bits, _)| u32::from(*bits) == file_type)
        .map_or('?', |&(_, c)| c);

    let mut out = String::with_capacity(10);
    out.push(type_char);
    for (read, write, exec, special, both, special_only) in PERMISSION_CLASSES {
        out.push(if has(mode, read) { 'r' } else { '-' });
        out.push(if has(mode, write) { 'w' } else { '-' });
        out.push(match (has(mode, exec), has(mode, special)) {
            (true, true) => both,
            (true, false) => 'x',
            (false, true) => special_only,
            (false, false) => '-',
        });
    }
    out
}

/// The local UTC offset, or UTC when it cannot be determined.
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

/// Renders a modification time in `offset`.
pub fn format_mtime(modified: SystemTime, offset: UtcOffset) -> String {
    OffsetDateTime::from(modified)
        .to_offset(offset)
        .format(MTIME_FORMAT)
        .unwrap_or_else(|_| UNKNOWN_MTIME.to_string())
}

/// User name for `uid`, or the number itself.
pub fn user_name(uid: u32) -> String {
    User::from_uid(Uid::from_raw(uid))
        .ok()
        .flatten()
        .map_or_else(|| uid.to_string(), |user| user.name)
}

/// Group name for `gid`, or the number itself.
pub fn group_name(gid: u32) -> String {
    Group::from_gid(Gid::from_raw(gid))
        .ok()
        .flatten()
        .map_or_else(|| gid.to_string(), |group| group.name)
}

/// `mode nlink owner group size mtime name`
pub fn format_long(name: &str, metadata: &Metadata, offset: UtcOffset) -> String {
    let mtime = metadata
        .modified()
        .map_or_else(|_| UNKNOWN_MTIME.to_string(), |t| format_mtime(t, offset));

    format!(
        "{} {} {} {} {} {} {}",
        format_mode(metadata.mode()),
        metadata.nlink(),
        user_name(metadata.uid()),
        group_name(metadata.gid()),
        metadata.size(),
        mtime,
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_mode_types() {
        assert_eq!(format_mode(0o100644), "-rw-r--r--");
        assert_eq!(format_mode(0o040755), "drwxr-xr-x");
        assert_eq!(format_mode(0o120777), "lrwxrwxrwx");
        assert_eq!(format_mode(0o010600), "prw-------");
        assert_eq!(format_mode(0o000644), "?rw-r--r--");
    }

    #[test]
    fn test_format_mode_special_bits() {
        assert_eq!(format_mode(0o104755), "-rwsr-xr-x");
        assert_eq!(format_mode(0o104644), "-rwSr--r--");
        assert_eq!(format_mode(0o102755), "-rwxr-sr-x");
        assert_eq!(format_mode(0o102745), "-rwxr-Sr-x");
        assert_eq!(format_mode(0o041777), "drwxrwxrwt");
        assert_eq!(format_mode(0o041776), "drwxrwxrwT");
    }

    #[test]
    fn test_format_mtime_utc() {
        // 2024-03-07 14:05:09 UTC
        let t = SystemTime::UNIX_EPOCH + Duration::from_secs(1_709_820_309);
        assert_eq!(format_mtime(t, UtcOffset::UTC), "Mar 07 14:05");
    }

    #[test]
    fn test_unknown_ids_fall_back_to_numbers() {
        assert_eq!(user_name(u32::MAX - 7), (u32::MAX - 7).to_string());
        assert_eq!(group_name(u32::MAX - 7), (u32::MAX - 7).to_string());
    }

    #[test]
    fn test_format_long_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, [0u8; 42]).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();

        let line = format_long("data.bin", &metadata, UtcOffset::UTC);
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert!(fields[0].starts_with('-'));
        assert_eq!(fields[1], "1");
        assert_eq!(fields[4], "42");
        assert_eq!(fields.last(), Some(&"data.bin"));
    }
}
