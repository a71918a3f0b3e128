//! XML renderer.

use std::io::{self, Write};

use filestat_core::{FileRecord, FIELD_COUNT};

use crate::{escape_markup, RecordFormatter};

/// Element names for each schema field, in schema order.
const TAGS: [&str; FIELD_COUNT] = [
    "filename",
    "path",
    "size",
    "user",
    "uid",
    "group",
    "gid",
    "type",
    "perm",
    "octalperm",
    "sticky",
    "atime",
    "mtime",
    "ctime",
    "devid",
    "inode",
    "links",
    "blocksize",
    "blocks",
    "cksum",
    "md5sum",
    "sha256sum",
];

/// Renders the record stream as a `<fileset>` document with one `<file>`
/// element per record, each holding 22 child elements in schema order.
pub struct XmlFormatter;

impl RecordFormatter for XmlFormatter {
    fn header(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<fileset>\n")
    }

    fn record(&self, out: &mut dyn Write, record: &FileRecord) -> io::Result<()> {
        writeln!(out, "\t<file>")?;
        for (tag, value) in TAGS.iter().zip(record.schema_values()) {
            writeln!(out, "\t\t<{tag}>{}</{tag}>", escape_markup(&value))?;
        }
        writeln!(out, "\t</file>")
    }

    fn footer(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "</fileset>")
    }
}
