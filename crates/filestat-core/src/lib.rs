//! Core types for filestat.
//!
//! This crate provides the record model shared by the scanner, the digest
//! engine, and the output formatters: the per-path [`FileRecord`], file type
//! classification, permission rendering, the checksum value model, and the
//! fixed 22-column output schema.

mod config;
mod error;
mod kind;
mod record;
mod schema;

pub use config::{OutputFormat, ReportConfig, ReportConfigBuilder};
pub use error::{ExtractError, UnknownFormat};
pub use kind::{
    FileKind, permission_string, STICKY_SETGID, STICKY_SETUID, STICKY_VTX,
};
pub use record::{ChecksumSet, FileRecord, FileTime, Owner, CHECKSUM_NA, CHECKSUM_UNREADABLE};
pub use schema::{COLUMNS, FIELD_COUNT};
