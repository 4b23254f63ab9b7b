//! Single-line contact extractor.
//!
//! Used when the input has no block structure. Each non-blank line is tried
//! against [`LINE_MATCHERS`] in order; the first matcher that recognizes the
//! line wins and lines nobody recognizes are skipped.
//!
//! | Order | Matcher | Example |
//! |-------|---------|---------|
//! | 1 | [`match_json_object`] | `{"nom": "Dupont", "mobile": "0612345678"}` |
//! | 2 | [`match_semicolon`] | `Dupont;Jean;0612345678` |
//! | 3 | [`match_colon`] | `Dupont Jean: 0612345678` |
//! | 4 | [`match_pipe`] | `Dupont Jean\|+33612345678` |

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::Extractor;
use crate::Fiche;
use crate::config::FicheConfig;
use crate::parsing::{Assembler, RawRecord};

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{6,}").unwrap());

static PLUS_DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+?[0-9]{6,}").unwrap());

/// A line-level heuristic: recognizes a line or declines it.
pub type LineMatcher = fn(&str) -> Option<RawRecord>;

/// Line heuristics in priority order.
pub const LINE_MATCHERS: &[(&str, LineMatcher)] = &[
    ("json", match_json_object),
    ("semicolon", match_semicolon),
    ("colon", match_colon),
    ("pipe", match_pipe),
];

/// Extractor for one-contact-per-line inputs.
pub struct LineExtractor {
    assembler: Assembler,
}

impl LineExtractor {
    /// Creates a new extractor with default configuration.
    pub fn new() -> Self {
        Self {
            assembler: Assembler::new(),
        }
    }

    /// Creates an extractor with custom configuration.
    pub fn with_config(config: &FicheConfig) -> Self {
        Self {
            assembler: Assembler::with_config(config),
        }
    }
}

impl Default for LineExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for LineExtractor {
    fn name(&self) -> &'static str {
        "lines"
    }

    fn extract(&self, content: &str) -> Vec<Fiche> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let record = match_line(line);
                if record.is_none() {
                    debug!(line, "no line heuristic matched, skipping");
                }
                record
            })
            .map(|record| self.assembler.assemble(&record))
            .collect()
    }
}

/// Runs [`LINE_MATCHERS`] in order and returns the first match.
pub fn match_line(line: &str) -> Option<RawRecord> {
    LINE_MATCHERS
        .iter()
        .find_map(|(_, matcher)| matcher(line))
}

/// `{...}` holding a JSON object: its fields are used as-is.
///
/// ```
/// use fichepack::parsers::lines::match_json_object;
///
/// assert!(match_json_object(r#"{"nom": "Dupont", "tel": "0612345678"}"#).is_some());
/// assert!(match_json_object(r#"{"nom": "Dupont", oops}"#).is_none());
/// assert!(match_json_object("Dupont;Jean;0612345678").is_none());
/// ```
pub fn match_json_object(line: &str) -> Option<RawRecord> {
    let line = line.trim();
    if !(line.starts_with('{') && line.ends_with('}')) {
        return None;
    }
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(object)) => Some(RawRecord::from_json_object(&object)),
        _ => None,
    }
}

/// `nom;prenom;phone[;...]`: needs at least two semicolons.
///
/// ```
/// use fichepack::parsers::lines::match_semicolon;
/// use fichepack::parsing::Field;
///
/// let record = match_semicolon("Dupont;Jean;0612345678").unwrap();
/// assert_eq!(record.resolve(Field::LastName), Some("Dupont"));
/// assert_eq!(record.resolve(Field::FirstName), Some("Jean"));
/// assert_eq!(record.resolve(Field::Mobile), Some("0612345678"));
///
/// assert!(match_semicolon("Dupont;0612345678").is_none());
/// ```
pub fn match_semicolon(line: &str) -> Option<RawRecord> {
    let parts: Vec<&str> = line.split(';').map(str::trim).collect();
    if parts.len() < 3 {
        return None;
    }
    Some(RawRecord::from_pairs([
        ("nom", parts[0]),
        ("prenom", parts[1]),
        ("phone", parts[2]),
    ]))
}

/// `label: phone`: the part after the first colon must hold six or more
/// consecutive digits.
///
/// ```
/// use fichepack::parsers::lines::match_colon;
/// use fichepack::parsing::Field;
///
/// let record = match_colon("Dupont Jean: 0612345678").unwrap();
/// assert_eq!(record.resolve(Field::FullName), Some("Dupont Jean"));
///
/// assert!(match_colon("Dupont Jean: 06 12 34 56 78").is_none());
/// ```
pub fn match_colon(line: &str) -> Option<RawRecord> {
    let (label, value) = line.split_once(':')?;
    if !DIGIT_RUN.is_match(value) {
        return None;
    }
    Some(RawRecord::from_pairs([("nom_prenom", label), ("phone", value)]))
}

/// `label|phone`: the part after the first pipe must hold six or more
/// consecutive digits, optionally `+`-prefixed.
///
/// ```
/// use fichepack::parsers::lines::match_pipe;
/// use fichepack::parsing::Field;
///
/// let record = match_pipe("Dupont Jean|+33612345678").unwrap();
/// assert_eq!(record.resolve(Field::Mobile), Some("+33612345678"));
///
/// assert!(match_pipe("Dupont Jean|inconnu").is_none());
/// ```
pub fn match_pipe(line: &str) -> Option<RawRecord> {
    let (label, value) = line.split_once('|')?;
    if !PLUS_DIGIT_RUN.is_match(value) {
        return None;
    }
    Some(RawRecord::from_pairs([("nom_prenom", label), ("phone", value)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::Field;

    #[test]
    fn test_matcher_order() {
        let names: Vec<&str> = LINE_MATCHERS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["json", "semicolon", "colon", "pipe"]);
    }

    #[test]
    fn test_json_wins_over_colon() {
        // A JSON line also contains a colon and digits; JSON must win.
        let record = match_line(r#"{"prenom": "Luc", "mobile": "0711223344"}"#).unwrap();
        assert_eq!(record.resolve(Field::FirstName), Some("Luc"));
        assert!(!record.has(Field::FullName));
    }

    #[test]
    fn test_invalid_json_falls_through() {
        // Not valid JSON, but the colon heuristic still applies.
        let record = match_line("{Dupont: 0612345678}").unwrap();
        assert_eq!(record.resolve(Field::FullName), Some("{Dupont"));
    }

    #[test]
    fn test_json_array_is_not_an_object() {
        assert!(match_json_object("[1, 2, 3]").is_none());
        assert!(match_json_object("{}").unwrap().is_empty());
    }

    #[test]
    fn test_semicolon_wins_over_colon() {
        let record = match_line("Dupont;Jean;0612345678;note: 123456").unwrap();
        assert_eq!(record.resolve(Field::LastName), Some("Dupont"));
        assert_eq!(record.resolve(Field::Mobile), Some("0612345678"));
    }

    #[test]
    fn test_semicolon_trims_parts() {
        let record = match_semicolon("  Martin ;  Luc ; 07 11 22 33 44 ").unwrap();
        assert_eq!(record.resolve(Field::LastName), Some("Martin"));
        assert_eq!(record.resolve(Field::Mobile), Some("07 11 22 33 44"));
    }

    #[test]
    fn test_colon_checks_value_only() {
        assert!(match_colon("Agent 123456: inconnu").is_none());
        assert!(match_colon("sans separateur 0612345678").is_none());
    }

    #[test]
    fn test_pipe_line() {
        let record = match_line("Durand Anne | 0698765432").unwrap();
        assert_eq!(record.resolve(Field::FullName), Some("Durand Anne"));
        assert_eq!(record.resolve(Field::Mobile), Some("0698765432"));
    }

    #[test]
    fn test_unmatched_lines_are_skipped() {
        assert!(match_line("juste du texte").is_none());
        assert!(match_line("a;b").is_none());

        let fiches = LineExtractor::new().extract("juste du texte\n\nDupont;Jean;0612345678\n");
        assert_eq!(fiches.len(), 1);
    }

    #[test]
    fn test_extract_example_line() {
        let fiches = LineExtractor::new().extract("Dupont;Jean;0612345678");
        let fiche = &fiches[0];
        assert_eq!(fiche.nom, "Dupont");
        assert_eq!(fiche.prenom, "Jean");
        assert_eq!(fiche.mobile, "+33612345678");
        assert_eq!(fiche.nom_prenom, "Dupont Jean");
    }
}
