//! Record assembly: raw labelled fields → canonical [`Fiche`].

use crate::Fiche;
use crate::config::FicheConfig;
use crate::phone::canonicalize;

use super::aliases::Field;
use super::name::clean_name;
use super::record::RawRecord;

/// Builds [`Fiche`]s from [`RawRecord`]s.
///
/// Assembly never fails. A record with nothing recognizable produces a blank
/// fiche with an empty mobile, which the store refuses to admit.
///
/// # Phone resolution
///
/// The mobile-aliased value is canonicalized first; if that fails the
/// landline-aliased value is tried. Whichever succeeds becomes
/// [`Fiche::mobile`]. The landline itself is dropped unless
/// [`FicheConfig::retain_landline`] is set.
///
/// # Display label
///
/// `nom_prenom` is the combined label when one was supplied and neither a
/// first nor a last name was; otherwise `nom prenom`, trimmed.
///
/// ```
/// use fichepack::parsing::{Assembler, RawRecord};
///
/// let record = RawRecord::from_pairs([("nom", "dupont"), ("prénom", "jean"), ("gsm", "06 12 34 56 78")]);
/// let fiche = Assembler::new().assemble(&record);
///
/// assert_eq!(fiche.nom_prenom, "Dupont Jean");
/// assert_eq!(fiche.mobile, "+33612345678");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    retain_landline: bool,
}

impl Assembler {
    /// Creates an assembler with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an assembler following `config`.
    pub fn with_config(config: &FicheConfig) -> Self {
        Self {
            retain_landline: config.retain_landline,
        }
    }

    /// Assembles one fiche.
    pub fn assemble(&self, record: &RawRecord) -> Fiche {
        let text = |field: Field| record.resolve(field).unwrap_or_default().to_string();

        let prenom = clean_name(record.resolve(Field::FirstName).unwrap_or_default());
        let nom = clean_name(record.resolve(Field::LastName).unwrap_or_default());

        let has_split_name = record.has(Field::FirstName) || record.has(Field::LastName);
        let nom_prenom = match record.resolve(Field::FullName) {
            Some(label) if !has_split_name => label.trim().to_string(),
            _ => format!("{nom} {prenom}").trim().to_string(),
        };

        let mobile_candidate = record.resolve(Field::Mobile).and_then(canonicalize);
        let landline_raw = record.resolve(Field::Landline);
        let landline_candidate = landline_raw.and_then(canonicalize);

        let mobile = mobile_candidate
            .or_else(|| landline_candidate.clone())
            .unwrap_or_default();

        // A landline promoted to mobile is not repeated in `fixe`.
        let fixe = if self.retain_landline {
            landline_candidate
                .or_else(|| landline_raw.map(ToString::to_string))
                .filter(|fixe| *fixe != mobile)
                .unwrap_or_default()
        } else {
            String::new()
        };

        Fiche {
            civilite: text(Field::Civility),
            prenom,
            nom,
            nom_prenom,
            email: text(Field::Email),
            mobile,
            fixe,
            code_postal: text(Field::PostalCode),
            ville: clean_name(record.resolve(Field::City).unwrap_or_default()),
            adresse: text(Field::Address),
            iban: text(Field::Iban),
            bic: text(Field::Bic),
            date_naissance: text(Field::BirthDate),
        }
    }
}
