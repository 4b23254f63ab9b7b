//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Fiche;
use crate::core::export::shape_rows;
use crate::core::models::OutputConfig;
use crate::error::{FicheError, Result};

/// Header of the two-column export.
pub const CSV_HEADER: [&str; 2] = ["Nom Prénom", "Numéro (+33)"];

/// Writes fiches to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Nom Prénom`, `Numéro (+33)`
/// - Encoding: UTF-8
pub fn write_csv(fiches: &[Fiche], output_path: &str, config: &OutputConfig) -> Result<()> {
    let csv = to_csv(fiches, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Converts fiches to a CSV string.
///
/// Same format as [`write_csv`], but returns a `String`.
pub fn to_csv(fiches: &[Fiche], config: &OutputConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    if config.include_header {
        writer.write_record(CSV_HEADER)?;
    }

    for row in shape_rows(fiches) {
        writer.write_record([row.nom_prenom, row.mobile])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| FicheError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
