//! Report orchestration: roots -> paths -> records -> serialized text.

use std::io::Write;
use std::path::PathBuf;

use color_eyre::eyre::Result;

use filestat_core::ReportConfig;
use filestat_format::formatter_for;
use filestat_scan::{extract, Walk};

/// Drive the walk/extract/render pipeline for every root path, writing to
/// one sink in record order.
///
/// The header and footer bracket the whole run and are emitted only when at
/// least one explicit path argument was supplied. Recoverable extraction
/// failures are reported on the diagnostic channel and skipped; a fatal one
/// (unresolvable canonical path) aborts the run.
pub fn write_report(
    out: &mut dyn Write,
    config: &ReportConfig,
    paths: &[PathBuf],
) -> Result<()> {
    if paths.is_empty() {
        return Ok(());
    }

    let formatter = formatter_for(config.format);
    formatter.header(out)?;
    for root in paths {
        for path in Walk::new(root, config.recursive) {
            match extract(&path) {
                Ok(record) => formatter.record(out, &record)?,
                Err(err) if err.is_fatal() => return Err(err.into()),
                Err(err) => {
                    tracing::warn!(program = %config.program, error = %err, "skipping entry");
                }
            }
        }
    }
    formatter.footer(out)?;
    Ok(())
}
