//! The per-path metadata record.

use std::path::PathBuf;

use chrono::{Local, LocalResult, TimeZone};
use serde::Serialize;

use crate::kind::FileKind;
use crate::schema::FIELD_COUNT;

/// Sentinel for checksum fields of non-regular entries.
pub const CHECKSUM_NA: &str = "N/A";
/// Sentinel for checksum fields of a regular file that could not be read.
pub const CHECKSUM_UNREADABLE: &str = "-";

/// The three content checksums of a record, as a single tagged value.
///
/// Modelling the set as one enum enforces the output contract that the
/// cksum, MD5, and SHA-256 fields are either all digests or all the same
/// sentinel, never a mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ChecksumSet {
    /// Digests computed from the file content.
    Computed {
        /// POSIX cksum CRC, rendered as an unsigned decimal string.
        cksum: String,
        /// MD5 digest, 32 lowercase hex characters.
        md5: String,
        /// SHA-256 digest, 64 lowercase hex characters.
        sha256: String,
    },
    /// The entry is not a regular file; digests do not apply.
    NotApplicable,
    /// The entry is a regular file whose content could not be read.
    Unreadable,
}

impl ChecksumSet {
    /// The cksum field value, or the applicable sentinel.
    pub fn cksum(&self) -> &str {
        match self {
            ChecksumSet::Computed { cksum, .. } => cksum,
            ChecksumSet::NotApplicable => CHECKSUM_NA,
            ChecksumSet::Unreadable => CHECKSUM_UNREADABLE,
        }
    }

    /// The MD5 field value, or the applicable sentinel.
    pub fn md5(&self) -> &str {
        match self {
            ChecksumSet::Computed { md5, .. } => md5,
            ChecksumSet::NotApplicable => CHECKSUM_NA,
            ChecksumSet::Unreadable => CHECKSUM_UNREADABLE,
        }
    }

    /// The SHA-256 field value, or the applicable sentinel.
    pub fn sha256(&self) -> &str {
        match self {
            ChecksumSet::Computed { sha256, .. } => sha256,
            ChecksumSet::NotApplicable => CHECKSUM_NA,
            ChecksumSet::Unreadable => CHECKSUM_UNREADABLE,
        }
    }

    /// Check if digests were actually computed.
    pub fn is_computed(&self) -> bool {
        matches!(self, ChecksumSet::Computed { .. })
    }
}

/// A (seconds, nanoseconds) filesystem timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileTime {
    /// Seconds since the epoch.
    pub secs: i64,
    /// Nanoseconds within the second.
    pub nanos: i64,
}

impl FileTime {
    /// Create a timestamp from a (seconds, nanoseconds) pair.
    pub fn new(secs: i64, nanos: i64) -> Self {
        Self { secs, nanos }
    }
}

impl std::fmt::Display for FileTime {
    /// Render as `YYYY-MM-DD HH:MM:SS.` plus nine zero-padded nanosecond
    /// digits, in the local time zone.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Local.timestamp_opt(self.secs, self.nanos as u32) {
            LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S.%f"))
            }
            LocalResult::None => write!(f, "{}.{:09}", self.secs, self.nanos),
        }
    }
}

/// A resolved user or group identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Owner {
    /// Name from the directory service.
    pub name: String,
    /// Numeric uid or gid.
    pub id: u32,
}

impl Owner {
    /// Create a resolved identity.
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id,
        }
    }
}

/// One fully populated metadata record for a visited path.
///
/// Records are transient: built by the extractor, handed to a formatter,
/// and dropped. They are never persisted across invocations.
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    /// Path as given by the caller.
    pub name: String,
    /// Canonicalized absolute path.
    pub full_path: PathBuf,
    /// Size in bytes.
    pub size: u64,
    /// Owning user.
    pub owner: Owner,
    /// Owning group.
    pub group: Owner,
    /// Classified entry type.
    pub kind: FileKind,
    /// 10-character permission string (type glyph plus rwx triplets).
    pub permissions: String,
    /// Raw st_mode value, rendered in octal.
    pub mode: u32,
    /// Note for whichever of setuid/setgid/sticky is set, or empty.
    pub sticky: &'static str,
    /// Time of last access.
    pub atime: FileTime,
    /// Time of last data modification.
    pub mtime: FileTime,
    /// Time of last status change.
    pub ctime: FileTime,
    /// Device ID.
    pub device: u64,
    /// Inode number.
    pub inode: u64,
    /// Hard link count.
    pub links: u64,
    /// Preferred I/O block size.
    pub block_size: u64,
    /// Number of 512-byte blocks allocated.
    pub blocks: u64,
    /// Content checksums or sentinel.
    pub checksums: ChecksumSet,
}

impl FileRecord {
    /// Field values in the fixed 22-column schema order.
    ///
    /// Every columnar format (tab, csv, html, xml) renders from this one
    /// method so the order cannot drift between representations.
    pub fn schema_values(&self) -> [String; FIELD_COUNT] {
        [
            self.name.clone(),
            self.full_path.display().to_string(),
            self.size.to_string(),
            self.owner.name.clone(),
            self.owner.id.to_string(),
            self.group.name.clone(),
            self.group.id.to_string(),
            self.kind.description().to_string(),
            self.permissions.clone(),
            format!("{:o}", self.mode),
            self.sticky.to_string(),
            self.atime.to_string(),
            self.mtime.to_string(),
            self.ctime.to_string(),
            self.device.to_string(),
            self.inode.to_string(),
            self.links.to_string(),
            self.block_size.to_string(),
            self.blocks.to_string(),
            self.checksums.cksum().to_string(),
            self.checksums.md5().to_string(),
            self.checksums.sha256().to_string(),
        ]
    }
}
