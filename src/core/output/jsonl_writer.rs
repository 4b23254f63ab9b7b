//! JSON Lines (JSONL) output writer.
//!
//! Each line is one serialized [`Fiche`], so the output can be fed straight
//! back to the JSON Lines parser.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Fiche;
use crate::error::Result;

/// Writes fiches to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"civilite":"","prenom":"Jean","nom":"Dupont","nomPrenom":"Dupont Jean","mobile":"+33612345678",...}
/// ```
pub fn write_jsonl(fiches: &[Fiche], output_path: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);

    for fiche in fiches {
        let line = serde_json::to_string(fiche)?;
        writeln!(writer, "{line}")?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts fiches to a JSONL string.
pub fn to_jsonl(fiches: &[Fiche]) -> Result<String> {
    let mut out = String::new();
    for fiche in fiches {
        out.push_str(&serde_json::to_string(fiche)?);
        out.push('\n');
    }
    Ok(out)
}
