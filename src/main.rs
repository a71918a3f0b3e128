//! filestat - auditable per-file metadata and checksum reports.
//!
//! Usage:
//!   filestat [-hrv] [-t type] [-o output-file] file_or_dir ...
//!
//! Walks the given paths (recursively with -r), extracts a normalized
//! metadata record per entry plus cksum/MD5/SHA-256 digests for regular
//! files, and renders the records as txt (default), tab, csv, htm, or xml.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use filestat_core::{OutputFormat, ReportConfig, UnknownFormat};

mod report;

#[derive(Parser)]
#[command(
    name = "filestat",
    version,
    disable_version_flag = true,
    about = "Report file metadata and content checksums",
    long_about = "filestat gives various stats about files: ownership, type, \
                  permissions, timestamps, size and inode fields, and three \
                  content checksums (cksum CRC, MD5, SHA-256) for regular files."
)]
struct Cli {
    /// Recursively traverse any input directory
    #[arg(short, long)]
    recursive: bool,

    /// Type of the output: raw, txt, tab, csv, htm, xml
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value = "txt",
        value_parser = parse_format
    )]
    format: OutputFormat,

    /// Output file; '-' or omitted writes to standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Display version number
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Files or directories to report on
    paths: Vec<PathBuf>,
}

fn parse_format(s: &str) -> Result<OutputFormat, UnknownFormat> {
    s.parse()
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Bad arguments exit 1; help and version display exit 0.
            let code = i32::from(err.use_stderr());
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // An invocation with no path arguments is a help request: show usage,
    // emit no record stream.
    if cli.paths.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = ReportConfig::builder()
        .recursive(cli.recursive)
        .format(cli.format)
        .program("filestat")
        .build()?;

    let mut sink = open_sink(cli.output.as_deref())?;
    report::write_report(&mut *sink, &config, &cli.paths)?;
    sink.flush()?;

    Ok(())
}

/// Open the output sink. Absent or `-` means standard output.
fn open_sink(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        None => Ok(Box::new(io::stdout())),
        Some(p) if p.as_os_str() == "-" => Ok(Box::new(io::stdout())),
        Some(p) => {
            let file = File::create(p)
                .wrap_err_with(|| format!("cannot open output file {}", p.display()))?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
    }
}
