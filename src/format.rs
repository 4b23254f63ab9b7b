//! Export format types for the fichepack library.
//!
//! These types don't depend on the CLI framework and can be used from
//! library code directly.
//!
//! # Example
//!
//! ```rust
//! # fn example() -> fichepack::Result<()> {
//! use fichepack::Fiche;
//! use fichepack::core::models::OutputConfig;
//! use fichepack::format::{ExportFormat, to_format_string};
//!
//! let fiches = vec![Fiche::new("Dupont Jean", "+33612345678")];
//!
//! let txt = to_format_string(&fiches, ExportFormat::Txt, &OutputConfig::new())?;
//! assert_eq!(txt, "Dupont Jean|+33612345678\n");
//!
//! // Or use format detection from extension
//! let format = ExportFormat::from_path("fiches.jsonl")?;
//! assert_eq!(format, ExportFormat::Jsonl);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::Fiche;
use crate::core::models::OutputConfig;
use crate::error::{FicheError, Result};

/// Export format for stored fiches.
///
/// ```rust
/// use fichepack::format::ExportFormat;
/// use std::str::FromStr;
///
/// let format = ExportFormat::from_str("blocks").unwrap();
/// assert_eq!(format, ExportFormat::Blocks);
/// assert_eq!(format.extension(), "txt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// Semicolon CSV with a `Nom Prénom;Numéro (+33)` header
    #[default]
    Csv,

    /// `nomPrenom|mobile` lines
    Txt,

    /// Labelled text blocks separated by dashes
    Blocks,

    /// One JSON object per fiche, one per line
    Jsonl,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Txt | ExportFormat::Blocks => "txt",
            ExportFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "txt", "blocks", "jsonl", "ndjson"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ExportFormat] {
        &[
            ExportFormat::Csv,
            ExportFormat::Txt,
            ExportFormat::Blocks,
            ExportFormat::Jsonl,
        ]
    }

    /// Detects format from a file path based on extension.
    ///
    /// `.txt` maps to [`Txt`](ExportFormat::Txt); blocks must be asked for
    /// explicitly.
    ///
    /// ```rust
    /// use fichepack::format::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::from_path("out/fiches.CSV").unwrap(), ExportFormat::Csv);
    /// assert!(ExportFormat::from_path("fiches.xlsx").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "txt" => Ok(ExportFormat::Txt),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(FicheError::invalid_format(
                "export",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, txt, jsonl"),
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Txt => write!(f, "TXT"),
            ExportFormat::Blocks => write!(f, "Blocks"),
            ExportFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "txt" => Ok(ExportFormat::Txt),
            "blocks" => Ok(ExportFormat::Blocks),
            "jsonl" | "ndjson" => Ok(ExportFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes fiches to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    fiches: &[Fiche],
    path: &str,
    format: ExportFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::write_csv(fiches, path, config),
        ExportFormat::Txt => crate::core::output::write_txt(fiches, path),
        ExportFormat::Blocks => crate::core::output::write_blocks(fiches, path),
        ExportFormat::Jsonl => crate::core::output::write_jsonl(fiches, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts fiches to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(fiches: &[Fiche], format: ExportFormat, config: &OutputConfig) -> Result<String> {
    match format {
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => crate::core::output::to_csv(fiches, config),
        ExportFormat::Txt => Ok(crate::core::output::to_txt(fiches)),
        ExportFormat::Blocks => Ok(crate::core::output::to_blocks(fiches)),
        ExportFormat::Jsonl => crate::core::output::to_jsonl(fiches),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: ExportFormat) -> FicheError {
    FicheError::invalid_format(
        "export",
        format!("Export format {format:?} requires the 'csv-output' feature to be enabled"),
    )
}
