//! Labelled block extractor.
//!
//! Handles exports where each contact is a group of `label: value` lines
//! followed by a visual separator:
//!
//! ```text
//! Nom: Martin
//! Prénom: Luc
//! Mobile: 07 11 22 33 44
//! ----------------------------------------
//! Nom: Durand
//! ...
//! ```
//!
//! A separator is a line made of five or more `-`, `_` or `=`. The last
//! block is kept even without a trailing separator, but an input with no
//! separator at all is not block-structured and yields nothing, leaving it
//! to the [line extractor](super::lines).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::Extractor;
use crate::Fiche;
use crate::config::FicheConfig;
use crate::parsing::{Assembler, Field, RawRecord};
use crate::phone::{canonicalize, find_phone};

static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*[-_=]{5,}\s*$").unwrap());

static LABEL_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^:]*[^:\s][^:]*?)\s*:\s*(.*?)\s*$").unwrap());

/// Label under which a phone found in the block text is recorded.
const SCANNED_MOBILE_LABEL: &str = "mobile";

/// Extractor for separator-delimited `label: value` blocks.
pub struct BlockExtractor {
    assembler: Assembler,
}

impl BlockExtractor {
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

impl Default for BlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor for BlockExtractor {
    fn name(&self) -> &'static str {
        "blocks"
    }

    fn extract(&self, content: &str) -> Vec<Fiche> {
        let blocks = split_blocks(content);
        debug!(blocks = blocks.len(), "split input into blocks");

        blocks
            .iter()
            .filter_map(|block| block_record(block))
            .map(|record| self.assembler.assemble(&record))
            .collect()
    }
}

/// Returns `true` for separator lines (`-----`, `_____`, `=====`, ...).
pub fn is_separator(line: &str) -> bool {
    SEPARATOR.is_match(line)
}

/// Splits content into separator-delimited blocks of lines.
///
/// Returns no blocks at all when the content has no separator line. Empty
/// blocks (consecutive separators) are dropped.
///
/// ```
/// use fichepack::parsers::blocks::split_blocks;
///
/// let blocks = split_blocks("Nom: A\n-----\nNom: B\n");
/// assert_eq!(blocks, vec![vec!["Nom: A"], vec!["Nom: B"]]);
///
/// assert!(split_blocks("Nom: A\nNom: B\n").is_empty());
/// ```
pub fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    let mut saw_separator = false;

    for line in content.lines() {
        if is_separator(line) {
            saw_separator = true;
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else if !line.trim().is_empty() {
            current.push(line);
        }
    }

    if !saw_separator {
        return Vec::new();
    }

    // The last block needs no trailing separator.
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Splits a `label: value` line at its first colon.
///
/// The label comes back lowercased and trimmed.
///
/// ```
/// use fichepack::parsers::blocks::parse_label_line;
///
/// assert_eq!(parse_label_line("  Prénom : Luc "), Some(("prénom".to_string(), "Luc")));
/// assert_eq!(parse_label_line("Site: https://x.fr"), Some(("site".to_string(), "https://x.fr")));
/// assert_eq!(parse_label_line("no label here"), None);
/// ```
pub fn parse_label_line(line: &str) -> Option<(String, &str)> {
    let caps = LABEL_LINE.captures(line)?;
    let label = caps.get(1)?.as_str().trim().to_lowercase();
    let value = caps.get(2).map_or("", |m| m.as_str());
    Some((label, value))
}

/// Collects the fields of one block.
///
/// Without a labelled mobile, the block text is scanned for a French phone
/// number. Returns `None` when the block holds neither a label nor a phone.
pub fn block_record(lines: &[&str]) -> Option<RawRecord> {
    let mut record = RawRecord::new();
    for line in lines {
        if let Some((label, value)) = parse_label_line(line) {
            record.insert(&label, value);
        }
    }

    if !record.has(Field::Mobile) {
        let text = lines.join("\n");
        if let Some(found) = find_phone(&text) {
            let mobile = canonicalize(found).unwrap_or_else(|| found.to_string());
            debug!(%mobile, "no labelled mobile, using phone found in block text");
            record.insert(SCANNED_MOBILE_LABEL, &mobile);
        }
    }

    if record.is_empty() { None } else { Some(record) }
}
