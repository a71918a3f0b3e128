//! HTML table renderer.

use std::io::{self, Write};

use filestat_core::{FileRecord, COLUMNS};

use crate::{escape_markup, RecordFormatter};

/// Renders the record stream as one HTML 4.0 document holding a single
/// table: a header row of 22 `<th>` cells, one `<tr>` of 22 `<td>` cells
/// per record, and a footer that closes table, body, and document.
pub struct HtmlFormatter;

impl RecordFormatter for HtmlFormatter {
    fn header(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(
            out,
            "<!doctype html public \"-//W3C//DTD HTML 4.0 Final//EN\">\n\
             <html>\n\
             <head>\n\
             \t<title>File Statistics</title>\n\
             </head>\n\
             <body>\n\
             \t<table align='left' border='1' cellspacing='0' cellpadding='2' width='100%' style='border-collapse: collapse'>\n\
             \t\t<tr align='left' valign='middle'>\n"
        )?;
        for name in COLUMNS {
            writeln!(out, "\t\t\t<th>{name}</th>")?;
        }
        writeln!(out, "\t\t</tr>")
    }

    fn record(&self, out: &mut dyn Write, record: &FileRecord) -> io::Result<()> {
        writeln!(out, "\t\t<tr align='left' valign='middle'>")?;
        for value in record.schema_values() {
            writeln!(out, "\t\t\t<td>{}</td>", escape_markup(&value))?;
        }
        writeln!(out, "\t\t</tr>")
    }

    fn footer(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "\t</table>\n</body>\n</html>\n")
    }
}
