//! Metadata extraction: one path in, one record out.

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use filestat_core::{
    permission_string, ChecksumSet, ExtractError, FileKind, FileRecord, FileTime, Owner,
};
use filestat_digest::digest_file;

use crate::owner;

/// Build a [`FileRecord`] for one path.
///
/// Canonicalization failure is the only fatal error
/// ([`ExtractError::is_fatal`]); stat and name-lookup failures are meant to
/// be reported and skipped by the caller. The metadata snapshot follows
/// symlinks, so records describe link targets, not the links themselves.
pub fn extract(path: &Path) -> Result<FileRecord, ExtractError> {
    let full_path = path
        .canonicalize()
        .map_err(|source| ExtractError::Canonicalize {
            path: path.to_path_buf(),
            source,
        })?;

    let meta = fs::metadata(path).map_err(|source| ExtractError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    let uid = meta.uid();
    let gid = meta.gid();
    let user = owner::user_name(uid).ok_or_else(|| ExtractError::UnknownUser {
        path: path.to_path_buf(),
        uid,
    })?;
    let group = owner::group_name(gid).ok_or_else(|| ExtractError::UnknownGroup {
        path: path.to_path_buf(),
        gid,
    })?;

    let mode = meta.mode();
    let kind = FileKind::from_mode(mode);
    let (permissions, sticky) = permission_string(kind, mode);

    let checksums = if kind.is_regular() {
        digest_file(path)
    } else {
        ChecksumSet::NotApplicable
    };

    Ok(FileRecord {
        name: path.display().to_string(),
        full_path,
        size: meta.size(),
        owner: Owner::new(user, uid),
        group: Owner::new(group, gid),
        kind,
        permissions,
        mode,
        sticky,
        atime: FileTime::new(meta.atime(), meta.atime_nsec()),
        mtime: FileTime::new(meta.mtime(), meta.mtime_nsec()),
        ctime: FileTime::new(meta.ctime(), meta.ctime_nsec()),
        device: meta.dev(),
        inode: meta.ino(),
        links: meta.nlink(),
        block_size: meta.blksize(),
        blocks: meta.blocks(),
        checksums,
    })
}
