//! Export shaping.
//!
//! Projects stored fiches into the two export shapes: a two-column
//! [`ExportRow`] and a labelled text block. Writing them out is the job of
//! [`core::output`](crate::core::output).

use std::fmt::Write;

use serde::Serialize;

use crate::Fiche;

/// Line written after each text block (40 dashes).
pub const FICHE_SEPARATOR: &str = "----------------------------------------";

/// Display label and mobile number of one fiche.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow<'a> {
    /// Combined display label
    #[serde(rename = "nomPrenom")]
    pub nom_prenom: &'a str,
    /// Canonical mobile number
    pub mobile: &'a str,
}

impl<'a> From<&'a Fiche> for ExportRow<'a> {
    fn from(fiche: &'a Fiche) -> Self {
        Self {
            nom_prenom: &fiche.nom_prenom,
            mobile: &fiche.mobile,
        }
    }
}

/// Projects fiches into two-column rows.
pub fn shape_rows(fiches: &[Fiche]) -> Vec<ExportRow<'_>> {
    fiches.iter().map(ExportRow::from).collect()
}

/// Labelled fields of a text block, in output order.
///
/// The labels are chosen so that an exported block parses back into the
/// same fiche.
pub fn block_fields(fiche: &Fiche) -> [(&'static str, &str); 12] {
    [
        ("Civilité", fiche.civilite.as_str()),
        ("Prénom", fiche.prenom.as_str()),
        ("Nom", fiche.nom.as_str()),
        ("Date de naissance", fiche.date_naissance.as_str()),
        ("Email", fiche.email.as_str()),
        ("Mobile", fiche.mobile.as_str()),
        ("Fixe", fiche.fixe.as_str()),
        ("Code postal", fiche.code_postal.as_str()),
        ("Ville", fiche.ville.as_str()),
        ("Adresse", fiche.adresse.as_str()),
        ("IBAN", fiche.iban.as_str()),
        ("BIC", fiche.bic.as_str()),
    ]
}

/// Renders one fiche as a labelled text block followed by
/// [`FICHE_SEPARATOR`].
///
/// ```rust
/// use fichepack::Fiche;
/// use fichepack::core::export::to_text_block;
///
/// let fiche = Fiche::new("Martin Luc", "+33711223344").with_names("Martin", "Luc");
/// let block = to_text_block(&fiche);
///
/// assert!(block.starts_with("Civilité: \nPrénom: Luc\nNom: Martin\n"));
/// assert!(block.contains("Mobile: +33711223344\n"));
/// assert!(block.ends_with("----------------------------------------\n"));
/// ```
pub fn to_text_block(fiche: &Fiche) -> String {
    let mut block = String::new();
    for (label, value) in block_fields(fiche) {
        let _ = writeln!(block, "{label}: {value}");
    }
    block.push_str(FICHE_SEPARATOR);
    block.push('\n');
    block
}

/// Renders fiches as consecutive text blocks.
pub fn shape_blocks(fiches: &[Fiche]) -> Vec<String> {
    fiches.iter().map(to_text_block).collect()
}
