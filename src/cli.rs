//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Export format options
//!
//! [`OutputFormat`] converts into the library's
//! [`ExportFormat`](crate::format::ExportFormat):
//!
//! ```rust
//! use fichepack::cli::OutputFormat;
//! use fichepack::format::ExportFormat;
//!
//! let format: ExportFormat = OutputFormat::Blocks.into();
//! assert_eq!(format, ExportFormat::Blocks);
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_EXPORT_SIZE;
use crate::format::ExportFormat;

/// Extract contact fiches from messy exports, look them up by phone
/// number and export them.
#[derive(Parser, Debug, Clone)]
#[command(name = "fichepack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    fichepack data/input --num 0612345678
    fichepack export.txt contacts.jsonl -o fiches.csv
    fichepack data/input -o fiches.txt -f blocks --size 100
    fichepack data/input --num '+33 7 11 22 33 44' --limit 3")]
pub struct Args {
    /// Input files or directories (directory entries are read, not recursed)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Look up a phone number (repeatable)
    #[arg(long = "num", value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Export path (nothing is exported without it)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Export format (default: from the output extension, else csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of fiches to export
    #[arg(long, value_name = "N", default_value_t = DEFAULT_EXPORT_SIZE.to_string())]
    pub size: String,

    /// Maximum number of lookup results per query
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Keep landline numbers in the `fixe` field
    #[arg(long)]
    pub keep_landline: bool,

    /// Omit the CSV header line
    #[arg(long)]
    pub no_header: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Semicolon CSV (default)
    #[default]
    Csv,

    /// `nomPrenom|mobile` lines
    Txt,

    /// Labelled text blocks
    Blocks,

    /// JSON Lines, one fiche per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ExportFormat::from(*self).fmt(f)
    }
}

impl From<OutputFormat> for ExportFormat {
    fn from(format: OutputFormat) -> ExportFormat {
        match format {
            OutputFormat::Csv => ExportFormat::Csv,
            OutputFormat::Txt => ExportFormat::Txt,
            OutputFormat::Blocks => ExportFormat::Blocks,
            OutputFormat::Jsonl => ExportFormat::Jsonl,
        }
    }
}
