//! Tab- and comma-separated renderers.

use std::io::{self, Write};

use filestat_core::{FileRecord, COLUMNS};

use crate::RecordFormatter;

/// Renders one CRLF-terminated line per record, fields joined by a single
/// delimiter character. The header line carries the 22 column names. The
/// two path fields (File Name, Full Path) are double-quoted; everything
/// else is written bare. No footer.
pub struct DelimitedFormatter {
    sep: char,
}

impl DelimitedFormatter {
    /// Tab-separated variant.
    pub fn tab() -> Self {
        Self { sep: '\t' }
    }

    /// Comma-separated variant.
    pub fn csv() -> Self {
        Self { sep: ',' }
    }
}

impl RecordFormatter for DelimitedFormatter {
    fn header(&self, out: &mut dyn Write) -> io::Result<()> {
        for (i, name) in COLUMNS.iter().enumerate() {
            if i > 0 {
                write!(out, "{}", self.sep)?;
            }
            write!(out, "{name}")?;
        }
        write!(out, "\r\n")
    }

    fn record(&self, out: &mut dyn Write, record: &FileRecord) -> io::Result<()> {
        for (i, value) in record.schema_values().iter().enumerate() {
            if i > 0 {
                write!(out, "{}", self.sep)?;
            }
            if i < 2 {
                write!(out, "\"{value}\"")?;
            } else {
                write!(out, "{value}")?;
            }
        }
        write!(out, "\r\n")
    }

    fn footer(&self, _out: &mut dyn Write) -> io::Result<()> {
        Ok(())
    }
}
