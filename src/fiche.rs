//! Canonical contact record.
//!
//! This module provides [`Fiche`], the normalized representation of one
//! contact. Every extractor hands its raw fields to the
//! [`Assembler`](crate::parsing::Assembler), which produces a `Fiche`; the
//! store, the lookup matcher and the export writers only ever see this type.
//!
//! # Examples
//!
//! ```
//! use fichepack::Fiche;
//!
//! let fiche = Fiche::new("Dupont Jean", "+33612345678")
//!     .with_email("jean.dupont@example.fr")
//!     .with_ville("Lyon");
//!
//! assert_eq!(fiche.nom_prenom(), "Dupont Jean");
//! assert!(fiche.has_mobile());
//! ```
//!
//! ## Serialization
//!
//! ```
//! use fichepack::Fiche;
//!
//! let fiche = Fiche::new("Martin Luc", "+33711223344");
//! let json = serde_json::to_string(&fiche)?;
//! assert!(json.contains(r#""nomPrenom":"Martin Luc""#));
//!
//! let parsed: Fiche = serde_json::from_str(&json)?;
//! assert_eq!(fiche, parsed);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// One canonical contact record.
///
/// All fields are plain strings; an empty string means the field was not
/// present in the source. Only `mobile` is validated: it is either empty or
/// a canonical French number (`+33` followed by nine digits).
///
/// | Field | Source |
/// |-------|--------|
/// | `civilite` | civility / title, verbatim |
/// | `prenom`, `nom` | first and last name, title-cased |
/// | `nom_prenom` | display label, see [`Assembler`](crate::parsing::Assembler) |
/// | `mobile` | canonical phone number |
/// | `fixe` | landline, only kept when retention is enabled |
/// | `ville` | city, title-cased |
/// | everything else | verbatim (trimmed) |
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Fiche {
    /// Civility (M., Mme, ...).
    pub civilite: String,

    /// First name.
    pub prenom: String,

    /// Last name.
    pub nom: String,

    /// Combined display label, usually `nom prenom`.
    #[serde(rename = "nomPrenom")]
    pub nom_prenom: String,

    /// Email address, not validated.
    pub email: String,

    /// Canonical mobile number, or empty.
    pub mobile: String,

    /// Landline number. Empty unless landline retention is enabled.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub fixe: String,

    /// Postal code.
    pub code_postal: String,

    /// City.
    pub ville: String,

    /// Street address.
    pub adresse: String,

    /// IBAN, not validated.
    pub iban: String,

    /// BIC, not validated.
    pub bic: String,

    /// Birth date as written in the source.
    pub date_naissance: String,
}

impl Fiche {
    /// Creates a fiche with only a display label and a mobile number.
    ///
    /// The number is stored as given; use
    /// [`canonicalize`](crate::phone::canonicalize) first when it comes from
    /// untrusted input.
    pub fn new(nom_prenom: impl Into<String>, mobile: impl Into<String>) -> Self {
        Self {
            nom_prenom: nom_prenom.into(),
            mobile: mobile.into(),
            ..Self::default()
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    /// Sets first and last name.
    #[must_use]
    pub fn with_names(mut self, nom: impl Into<String>, prenom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self.prenom = prenom.into();
        self
    }

    #[must_use]
    pub fn with_civilite(mut self, civilite: impl Into<String>) -> Self {
        self.civilite = civilite.into();
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    #[must_use]
    pub fn with_fixe(mut self, fixe: impl Into<String>) -> Self {
        self.fixe = fixe.into();
        self
    }

    #[must_use]
    pub fn with_code_postal(mut self, code_postal: impl Into<String>) -> Self {
        self.code_postal = code_postal.into();
        self
    }

    #[must_use]
    pub fn with_ville(mut self, ville: impl Into<String>) -> Self {
        self.ville = ville.into();
        self
    }

    #[must_use]
    pub fn with_adresse(mut self, adresse: impl Into<String>) -> Self {
        self.adresse = adresse.into();
        self
    }

    /// Sets IBAN and BIC together; they always travel as a pair in exports.
    #[must_use]
    pub fn with_bank(mut self, iban: impl Into<String>, bic: impl Into<String>) -> Self {
        self.iban = iban.into();
        self.bic = bic.into();
        self
    }

    #[must_use]
    pub fn with_date_naissance(mut self, date: impl Into<String>) -> Self {
        self.date_naissance = date.into();
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the display label.
    pub fn nom_prenom(&self) -> &str {
        &self.nom_prenom
    }

    /// Returns the canonical mobile number (may be empty).
    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    /// Returns `true` if the fiche carries a phone number and may be stored.
    pub fn has_mobile(&self) -> bool {
        !self.mobile.is_empty()
    }

    /// Returns `true` if no field at all was resolved.
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}
