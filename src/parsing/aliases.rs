//! Field alias table.
//!
//! Contact exports name the same column in dozens of ways: `Mobile`,
//! `Portable`, `Téléphone`, `GSM`, `phone`... [`Field::aliases`] maps each
//! canonical field to its accepted spellings, in priority order. Lookups go
//! through [`normalize_key`] first, so aliases are stored lowercase with
//! single spaces.

/// Canonical fiche field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Civility,
    FirstName,
    LastName,
    /// Pre-combined `nom prénom` label.
    FullName,
    Email,
    Mobile,
    Landline,
    PostalCode,
    City,
    Address,
    Iban,
    Bic,
    BirthDate,
}

impl Field {
    /// Accepted spellings for this field, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Civility => &["civilite", "civilité", "civility", "titre", "title", "genre"],
            Field::FirstName => &[
                "prenom",
                "prénom",
                "firstname",
                "first_name",
                "first name",
                "given_name",
            ],
            Field::LastName => &[
                "nom",
                "lastname",
                "last_name",
                "last name",
                "nom de famille",
                "surname",
                "family_name",
            ],
            Field::FullName => &[
                "nom_prenom",
                "nomprenom",
                "nom prenom",
                "nom prénom",
                "nom complet",
                "full_name",
                "fullname",
                "name",
            ],
            Field::Email => &["email", "e-mail", "mail", "courriel", "adresse mail"],
            Field::Mobile => &[
                "mobile",
                "portable",
                "tel portable",
                "tél portable",
                "téléphone portable",
                "telephone portable",
                "phone",
                "telephone",
                "téléphone",
                "telephones",
                "téléphones",
                "tel",
                "tél",
                "gsm",
                "cell",
                "numero",
                "numéro",
            ],
            Field::Landline => &[
                "fixe",
                "landline",
                "tel fixe",
                "tél fixe",
                "téléphone fixe",
                "telephone fixe",
                "domicile",
            ],
            Field::PostalCode => &[
                "code postal",
                "code_postal",
                "codepostal",
                "cp",
                "postal_code",
                "zip",
                "zipcode",
            ],
            Field::City => &["ville", "city", "commune", "localité", "localite"],
            Field::Address => &["adresse", "address", "adresse postale", "rue"],
            Field::Iban => &["iban"],
            Field::Bic => &["bic", "swift"],
            Field::BirthDate => &[
                "date de naissance",
                "date_naissance",
                "date_de_naissance",
                "naissance",
                "ddn",
                "birthdate",
                "birth_date",
                "dob",
            ],
        }
    }
}

/// Normalizes a label for alias lookup: lowercase, trimmed, single spaces.
pub fn normalize_key(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_FIELDS: [Field; 13] = [
        Field::Civility,
        Field::FirstName,
        Field::LastName,
        Field::FullName,
        Field::Email,
        Field::Mobile,
        Field::Landline,
        Field::PostalCode,
        Field::City,
        Field::Address,
        Field::Iban,
        Field::Bic,
        Field::BirthDate,
    ];

    fn field_of(label: &str) -> Option<Field> {
        let key = normalize_key(label);
        ALL_FIELDS.into_iter().find(|field| field.aliases().contains(&key.as_str()))
    }

    #[test]
    fn test_aliases_are_normalized() {
        for field in ALL_FIELDS {
            for alias in field.aliases() {
                assert_eq!(normalize_key(alias), *alias, "{field:?} alias {alias:?}");
            }
        }
    }

    #[test]
    fn test_aliases_are_unique_across_fields() {
        let mut seen = HashSet::new();
        for field in ALL_FIELDS {
            for alias in field.aliases() {
                assert!(seen.insert(*alias), "duplicate alias {alias:?}");
            }
        }
    }

    #[test]
    fn test_phone_label_variants() {
        for label in ["Mobile", "PORTABLE", "téléphones", "Tel", "gsm", "Numéro"] {
            assert_eq!(field_of(label), Some(Field::Mobile), "{label}");
        }
        assert_eq!(field_of("Tél  fixe"), Some(Field::Landline));
    }

    #[test]
    fn test_name_label_variants() {
        assert_eq!(field_of("Prénom"), Some(Field::FirstName));
        assert_eq!(field_of("NOM"), Some(Field::LastName));
        assert_eq!(field_of("Nom Prénom"), Some(Field::FullName));
        assert_eq!(field_of("first_name"), Some(Field::FirstName));
    }
}
