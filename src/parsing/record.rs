//! Label → value mapping handed to the assembler.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::aliases::{Field, normalize_key};

/// Raw fields of one contact, keyed by normalized label.
///
/// Every extractor produces a `RawRecord`; the
/// [`Assembler`](super::Assembler) turns it into a [`Fiche`](crate::Fiche).
/// Empty values are never stored, and the first non-empty value for a label
/// wins, so repeated labels in a block keep their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: HashMap<String, String>,
}

impl RawRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from label/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            record.insert(key.as_ref(), value.as_ref());
        }
        record
    }

    /// Builds a record from a JSON object.
    ///
    /// Strings are taken as-is and numbers keep their textual form (so a
    /// phone stored as `612345678` still resolves). Nulls, booleans, arrays
    /// and nested objects are ignored.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let mut record = Self::new();
        for (key, value) in object {
            match value {
                Value::String(s) => record.insert(key, s),
                Value::Number(n) => record.insert(key, &n.to_string()),
                _ => {}
            }
        }
        record
    }

    /// Inserts a value unless it is blank or the label is already set.
    pub fn insert(&mut self, label: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        self.fields
            .entry(normalize_key(label))
            .or_insert_with(|| value.to_string());
    }

    /// Returns the value stored under a label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(&normalize_key(label)).map(String::as_str)
    }

    /// Returns the value of the highest-priority alias present for `field`.
    pub fn resolve(&self, field: Field) -> Option<&str> {
        field
            .aliases()
            .iter()
            .find_map(|alias| self.fields.get(*alias))
            .map(String::as_str)
    }

    /// Returns `true` if `field` resolves to a value.
    pub fn has(&self, field: Field) -> bool {
        self.resolve(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_skips_blank_and_keeps_first() {
        let mut record = RawRecord::new();
        record.insert("Tel", "   ");
        assert!(record.is_empty());

        record.insert("Tel", " 0612345678 ");
        record.insert("TEL", "0711223344");
        assert_eq!(record.get("tel"), Some("0612345678"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_resolve_follows_alias_priority() {
        let record = RawRecord::from_pairs([("telephone", "0711223344"), ("mobile", "0612345678")]);
        assert_eq!(record.resolve(Field::Mobile), Some("0612345678"));
        assert!(!record.has(Field::Landline));
    }

    #[test]
    fn test_from_json_object_converts_scalars() {
        let value = json!({
            "Nom": "Dupont",
            "phone": 612345678,
            "fixe": null,
            "vip": true,
            "tags": ["a", "b"]
        });
        let record = RawRecord::from_json_object(value.as_object().unwrap());

        assert_eq!(record.resolve(Field::LastName), Some("Dupont"));
        assert_eq!(record.resolve(Field::Mobile), Some("612345678"));
        assert_eq!(record.len(), 2);
    }
}
