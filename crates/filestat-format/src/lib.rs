//! Output renderers for filestat records.
//!
//! Every renderer implements [`RecordFormatter`]: a header and footer that
//! bracket the whole run, and one render call per record. All columnar
//! variants draw their values from `FileRecord::schema_values`, so the
//! 22-field order is identical in every representation.

mod delimited;
mod html;
mod text;
mod xml;

use std::borrow::Cow;
use std::io::{self, Write};

use filestat_core::{FileRecord, OutputFormat};

pub use delimited::DelimitedFormatter;
pub use html::HtmlFormatter;
pub use text::TextFormatter;
pub use xml::XmlFormatter;

/// A renderer for one output representation.
pub trait RecordFormatter {
    /// Write whatever opens the run (banner, column header, prologue).
    fn header(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Render one record.
    fn record(&self, out: &mut dyn Write, record: &FileRecord) -> io::Result<()>;

    /// Write whatever closes the run. Most variants write nothing.
    fn footer(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Select the renderer for an output format.
pub fn formatter_for(format: OutputFormat) -> Box<dyn RecordFormatter> {
    match format {
        OutputFormat::Raw | OutputFormat::Txt => Box::new(TextFormatter),
        OutputFormat::Tab => Box::new(DelimitedFormatter::tab()),
        OutputFormat::Csv => Box::new(DelimitedFormatter::csv()),
        OutputFormat::Htm => Box::new(HtmlFormatter),
        OutputFormat::Xml => Box::new(XmlFormatter),
    }
}

/// Escape text content for the markup formats.
pub(crate) fn escape_markup(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>']) {
        return Cow::Borrowed(s);
    }
    let mut escaped = String::with_capacity(s.len() + 8);
    for ch in s.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_passthrough() {
        assert_eq!(escape_markup("plain/path.txt"), "plain/path.txt");
    }

    #[test]
    fn test_escape_markup_entities() {
        assert_eq!(escape_markup("a<b>&c"), "a&lt;b&gt;&amp;c");
    }
}
