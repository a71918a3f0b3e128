//! Streaming content digest engine for filestat.
//!
//! Computes the three checksums of the output contract — the POSIX cksum
//! CRC, MD5, and SHA-256 — from a single bounded-buffer pass over the file
//! content. Digests apply only to regular files; open or read failures are
//! reported and collapse to the `-` sentinel without aborting the run.

mod crc;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use md5::Md5;
use sha2::{Digest, Sha256};

use filestat_core::ChecksumSet;

pub use crc::Cksum;

/// Read buffer size for the digest pass.
const BUF_LEN: usize = 64 * 1024;

/// Compute all three checksums of a regular file.
///
/// Open and read failures are non-fatal: the OS reason is reported on the
/// diagnostic channel and [`ChecksumSet::Unreadable`] is returned for this
/// record only.
pub fn digest_file(path: &Path) -> ChecksumSet {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "cannot open file for digesting");
            return ChecksumSet::Unreadable;
        }
    };
    match digest_reader(file) {
        Ok(set) => set,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "read failed while digesting");
            ChecksumSet::Unreadable
        }
    }
}

/// Stream a reader once, feeding all three digest algorithms from the same
/// bytes.
pub fn digest_reader<R: Read>(mut reader: R) -> io::Result<ChecksumSet> {
    let mut cksum = Cksum::new();
    let mut md5 = Md5::new();
    let mut sha256 = Sha256::new();

    let mut buf = vec![0u8; BUF_LEN];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        cksum.update(&buf[..n]);
        md5.update(&buf[..n]);
        sha256.update(&buf[..n]);
    }

    Ok(ChecksumSet::Computed {
        cksum: cksum.finalize().to_string(),
        md5: to_hex(md5.finalize().as_slice()),
        sha256: to_hex(sha256.finalize().as_slice()),
    })
}

/// Render a digest as lowercase hex.
fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
