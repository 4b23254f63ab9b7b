//! Plain text output writers.
//!
//! Two layouts:
//! - [`to_txt`]: one `nomPrenom|mobile` line per fiche
//! - [`to_blocks`]: labelled blocks separated by dashes, which the block
//!   extractor reads back

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Fiche;
use crate::core::export::{shape_blocks, shape_rows};
use crate::error::Result;

/// Writes fiches as `nomPrenom|mobile` lines.
pub fn write_txt(fiches: &[Fiche], output_path: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(to_txt(fiches).as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Converts fiches to `nomPrenom|mobile` lines.
///
/// ```rust
/// use fichepack::Fiche;
/// use fichepack::core::output::to_txt;
///
/// let txt = to_txt(&[Fiche::new("Dupont Jean", "+33612345678")]);
/// assert_eq!(txt, "Dupont Jean|+33612345678\n");
/// ```
pub fn to_txt(fiches: &[Fiche]) -> String {
    shape_rows(fiches)
        .iter()
        .map(|row| format!("{}|{}\n", row.nom_prenom, row.mobile))
        .collect()
}

/// Writes fiches as labelled text blocks.
pub fn write_blocks(fiches: &[Fiche], output_path: &str) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    for block in shape_blocks(fiches) {
        writer.write_all(block.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Converts fiches to labelled text blocks.
pub fn to_blocks(fiches: &[Fiche]) -> String {
    shape_blocks(fiches).concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::FICHE_SEPARATOR;
    use tempfile::NamedTempFile;

    #[test]
    fn test_to_txt() {
        let fiches = vec![
            Fiche::new("Dupont Jean", "+33612345678"),
            Fiche::new("Martin Luc", "+33711223344"),
        ];
        assert_eq!(
            to_txt(&fiches),
            "Dupont Jean|+33612345678\nMartin Luc|+33711223344\n"
        );
        assert_eq!(to_txt(&[]), "");
    }

    #[test]
    fn test_to_blocks() {
        let fiches = vec![Fiche::new("A", "+33612345678"), Fiche::new("B", "+33711223344")];
        let blocks = to_blocks(&fiches);
        assert_eq!(blocks.matches(FICHE_SEPARATOR).count(), 2);
        assert!(blocks.ends_with(&format!("{FICHE_SEPARATOR}\n")));
    }

    #[test]
    fn test_write_txt_and_blocks() {
        let fiches = vec![Fiche::new("A", "+33612345678")];

        let txt_file = NamedTempFile::new().unwrap();
        write_txt(&fiches, txt_file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            std::fs::read_to_string(txt_file.path()).unwrap(),
            "A|+33612345678\n"
        );

        let blocks_file = NamedTempFile::new().unwrap();
        write_blocks(&fiches, blocks_file.path().to_str().unwrap()).unwrap();
        let content = std::fs::read_to_string(blocks_file.path()).unwrap();
        assert!(content.contains("Mobile: +33612345678"));
    }
}
