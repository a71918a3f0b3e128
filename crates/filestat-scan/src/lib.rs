//! Path traversal and metadata extraction for filestat.
//!
//! This crate walks the file/directory arguments of a run and turns each
//! visited path into a fully populated [`filestat_core::FileRecord`]:
//!
//! - [`Walk`] enumerates paths depth-first in pre-order, lazily, using an
//!   explicit work stack rather than call recursion.
//! - [`extract`] resolves the canonical path, takes the metadata snapshot,
//!   resolves owner and group names, classifies the entry, and (for regular
//!   files) runs the digest engine.
//!
//! # Example
//!
//! ```rust,no_run
//! use filestat_scan::{extract, Walk};
//!
//! for path in Walk::new("/etc", true) {
//!     match extract(&path) {
//!         Ok(record) => println!("{} {}", record.permissions, record.name),
//!         Err(err) => eprintln!("{err}"),
//!     }
//! }
//! ```

mod extract;
mod owner;
mod walker;

pub use extract::extract;
pub use owner::{group_name, user_name};
pub use walker::Walk;

// Re-export core types for convenience
pub use filestat_core::{ExtractError, FileKind, FileRecord};
