//! Error types for record extraction and format selection.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from turning a path into a [`crate::FileRecord`].
///
/// Only [`ExtractError::Canonicalize`] is fatal to a run; every other
/// variant is reported and the affected record skipped.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The canonical absolute path could not be resolved.
    #[error("cannot resolve canonical path for {path}: {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata snapshot could not be retrieved.
    #[error("cannot stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The owning uid has no entry in the directory service.
    #[error("no user name for uid {uid} ({path})")]
    UnknownUser { path: PathBuf, uid: u32 },

    /// The owning gid has no entry in the directory service.
    #[error("no group name for gid {gid} ({path})")]
    UnknownGroup { path: PathBuf, gid: u32 },
}

impl ExtractError {
    /// Whether this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ExtractError::Canonicalize { .. })
    }
}

/// An output format name that is not one of the known six.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid output type '{0}'; expected one of raw, txt, tab, csv, htm, xml")]
pub struct UnknownFormat(pub String);
