//! Report configuration types.

use std::str::FromStr;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::UnknownFormat;

/// The output representation for a report.
///
/// `Raw` and `Txt` render identically; both names are accepted on the
/// command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Raw,
    #[default]
    Txt,
    Tab,
    Csv,
    Htm,
    Xml,
}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(OutputFormat::Raw),
            "txt" => Ok(OutputFormat::Txt),
            "tab" => Ok(OutputFormat::Tab),
            "csv" => Ok(OutputFormat::Csv),
            "htm" => Ok(OutputFormat::Htm),
            "xml" => Ok(OutputFormat::Xml),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Raw => "raw",
            OutputFormat::Txt => "txt",
            OutputFormat::Tab => "tab",
            OutputFormat::Csv => "csv",
            OutputFormat::Htm => "htm",
            OutputFormat::Xml => "xml",
        };
        f.write_str(name)
    }
}

/// Configuration for one report run.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct ReportConfig {
    /// Recursively traverse directory arguments.
    #[builder(default = "false")]
    #[serde(default)]
    pub recursive: bool,

    /// Output representation.
    #[builder(default)]
    #[serde(default)]
    pub format: OutputFormat,

    /// Program name used in diagnostic messages.
    #[builder(default = "\"filestat\".to_string()")]
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_program() -> String {
    "filestat".to_string()
}

impl ReportConfig {
    /// Create a new config builder.
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::default()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recursive: false,
            format: OutputFormat::default(),
            program: default_program(),
        }
    }
}
