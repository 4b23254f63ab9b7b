//! JSON Lines contact parser.
//!
//! Each line is an independent JSON object; a bad line never affects its
//! neighbours.

use serde_json::Value;
use tracing::debug;

use crate::Fiche;
use crate::config::FicheConfig;
use crate::parser::{InputKind, Parser};
use crate::parsing::{Assembler, RawRecord};

/// Parser for `.jsonl` exports.
///
/// # Example
///
/// ```rust
/// use fichepack::parser::Parser;
/// use fichepack::parsers::JsonLinesParser;
///
/// let content = r#"{"prenom": "Luc", "nom": "Martin", "mobile": "07 11 22 33 44"}
/// not json at all
/// {"nom": "Dupont", "phone": 612345678}"#;
///
/// let fiches = JsonLinesParser::new().parse_str(content);
/// assert_eq!(fiches.len(), 2);
/// assert_eq!(fiches[1].mobile, "+33612345678");
/// ```
pub struct JsonLinesParser {
    assembler: Assembler,
}

impl JsonLinesParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            assembler: Assembler::new(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: &FicheConfig) -> Self {
        Self {
            assembler: Assembler::with_config(config),
        }
    }
}

impl Default for JsonLinesParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for JsonLinesParser {
    fn name(&self) -> &'static str {
        "JSON Lines"
    }

    fn kind(&self) -> InputKind {
        InputKind::JsonLines
    }

    fn parse_str(&self, content: &str) -> Vec<Fiche> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(index, line)| match serde_json::from_str::<Value>(line) {
                Ok(Value::Object(object)) => Some(RawRecord::from_json_object(&object)),
                Ok(_) => {
                    debug!(line = index + 1, "JSON line is not an object, skipping");
                    None
                }
                Err(e) => {
                    debug!(line = index + 1, error = %e, "invalid JSON line, skipping");
                    None
                }
            })
            .map(|record| self.assembler.assemble(&record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jsonl_basic() {
        let content = r#"{"nom": "Dupont", "prenom": "Jean", "mobile": "0612345678"}
{"nom": "Martin", "prenom": "Luc", "telephone": "+33 7 11 22 33 44"}"#;
        let fiches = JsonLinesParser::new().parse_str(content);
        assert_eq!(fiches.len(), 2);
        assert_eq!(fiches[0].nom_prenom, "Dupont Jean");
        assert_eq!(fiches[1].mobile, "+33711223344");
    }

    #[test]
    fn test_parse_jsonl_skips_bad_lines() {
        let content = "{\"nom\": \"A\", \"mobile\": \"0612345678\"}\n{broken\n[1,2]\n\"text\"\n\n{\"nom\": \"B\", \"mobile\": \"0711223344\"}\n";
        let fiches = JsonLinesParser::new().parse_str(content);
        assert_eq!(fiches.len(), 2);
        assert_eq!(fiches[0].nom, "A");
        assert_eq!(fiches[1].nom, "B");
    }

    #[test]
    fn test_parse_jsonl_keeps_phoneless_objects() {
        // Filtering happens at ingestion, not here.
        let fiches = JsonLinesParser::new().parse_str(r#"{"nom": "Sans", "mobile": "n/a"}"#);
        assert_eq!(fiches.len(), 1);
        assert!(!fiches[0].has_mobile());
    }

    #[test]
    fn test_parse_jsonl_landline_fallback() {
        let fiches = JsonLinesParser::new().parse_str(r#"{"nom": "Fixe", "landline": "01 40 00 00 00"}"#);
        assert_eq!(fiches[0].mobile, "+33140000000");
    }

    #[test]
    fn test_parser_metadata() {
        let parser = JsonLinesParser::default();
        assert_eq!(parser.name(), "JSON Lines");
        assert_eq!(parser.kind(), InputKind::JsonLines);
    }
}
