//! Plain-text block renderer (the `raw`/`txt` formats).

use std::io::{self, Write};

use filestat_core::FileRecord;

use crate::RecordFormatter;

/// Renders each record as a fixed block of labeled lines, bracketed by a
/// banner header. No footer.
pub struct TextFormatter;

impl RecordFormatter for TextFormatter {
    fn header(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "F i l e   S t a t i s t i c s")
    }

    fn record(&self, out: &mut dyn Write, r: &FileRecord) -> io::Result<()> {
        writeln!(out, "File Name  : {}", r.name)?;
        writeln!(out, "Full Path  : {}", r.full_path.display())?;
        writeln!(out, "File Size  : {} bytes", r.size)?;
        writeln!(out, "File User  : {} [uid {}]", r.owner.name, r.owner.id)?;
        writeln!(out, "File Group : {} [gid {}]", r.group.name, r.group.id)?;
        writeln!(out, "File Type  : {}", r.kind)?;
        writeln!(
            out,
            "File Access: {} [octal {:o}] {}",
            r.permissions, r.mode, r.sticky
        )?;
        writeln!(out, "Access Time: {} [time of last access]", r.atime)?;
        writeln!(out, "Modify Time: {} [time of last data modification]", r.mtime)?;
        writeln!(out, "Change Time: {} [time of last file status change]", r.ctime)?;
        writeln!(out, "Device ID  : {}", r.device)?;
        writeln!(out, "File i-Node: {}", r.inode)?;
        writeln!(out, "Links      : {}", r.links)?;
        writeln!(out, "Block Size : {}", r.block_size)?;
        writeln!(out, "Blocks     : {}", r.blocks)?;
        writeln!(out, "Checksum   : {}", r.checksums.cksum())?;
        writeln!(out, "MD5 Digest : {}", r.checksums.md5())?;
        writeln!(out, "SHA256 SUM : {}", r.checksums.sha256())?;
        writeln!(out)
    }

    fn footer(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
