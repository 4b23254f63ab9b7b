//! Contact export parsers.
//!
//! # Available Parsers
//!
//! - [`TextParser`] - Free text: labelled blocks, falling back to single lines
//! - [`JsonLinesParser`] - One JSON object per line
//!
//! Text input goes through a cascade of [`Extractor`]s. The first one that
//! produces anything wins; later ones are not consulted:
//!
//! 1. [`BlockExtractor`] - `label: value` blocks between separator lines
//! 2. [`LineExtractor`] - one contact per line (JSON, `;`, `:`, `|`)
//!
//! # Example
//!
//! ```rust
//! use fichepack::parser::Parser;
//! use fichepack::parsers::TextParser;
//!
//! let parser = TextParser::new();
//!
//! let blocks = parser.parse_str("Nom: martin\nPrénom: luc\nMobile: 07 11 22 33 44\n-----");
//! assert_eq!(blocks[0].mobile, "+33711223344");
//!
//! let lines = parser.parse_str("Dupont;Jean;0612345678");
//! assert_eq!(lines[0].nom_prenom, "Dupont Jean");
//! ```

pub mod blocks;
pub mod jsonl;
pub mod lines;

pub use blocks::BlockExtractor;
pub use jsonl::JsonLinesParser;
pub use lines::LineExtractor;

use tracing::debug;

use crate::Fiche;
use crate::config::FicheConfig;
use crate::parser::{InputKind, Parser};

/// One strategy for pulling fiches out of free text.
///
/// An extractor returns an empty vector when the content does not have the
/// shape it understands.
pub trait Extractor: Send + Sync {
    /// Returns the name of the extractor (e.g., "blocks", "lines").
    fn name(&self) -> &'static str;

    /// Extracts fiches from text content.
    fn extract(&self, content: &str) -> Vec<Fiche>;
}

/// Parser for free-text exports.
///
/// Runs its extractors in order and keeps the output of the first one that
/// yields at least one fiche.
pub struct TextParser {
    cascade: Vec<Box<dyn Extractor>>,
}

impl TextParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(&FicheConfig::default())
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: &FicheConfig) -> Self {
        Self {
            cascade: vec![
                Box::new(BlockExtractor::with_config(config)),
                Box::new(LineExtractor::with_config(config)),
            ],
        }
    }

    /// Creates a parser with an explicit extractor cascade.
    pub fn with_cascade(cascade: Vec<Box<dyn Extractor>>) -> Self {
        Self { cascade }
    }

    /// Returns the extractor names in cascade order.
    pub fn cascade(&self) -> Vec<&'static str> {
        self.cascade.iter().map(|e| e.name()).collect()
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for TextParser {
    fn name(&self) -> &'static str {
        "Text"
    }

    fn kind(&self) -> InputKind {
        InputKind::Text
    }

    fn parse_str(&self, content: &str) -> Vec<Fiche> {
        for extractor in &self.cascade {
            let fiches = extractor.extract(content);
            if !fiches.is_empty() {
                debug!(extractor = extractor.name(), count = fiches.len(), "extractor matched");
                return fiches;
            }
            debug!(extractor = extractor.name(), "extractor found nothing, falling back");
        }
        Vec::new()
    }
}
