//! Unified parser API for contact exports.
//!
//! This module provides a single entry point for turning raw input into
//! fiches. Which parser runs is decided by the [`InputKind`] of a
//! [`RawUnit`], normally derived from the file name.
//!
//! # Example
//!
//! ```rust
//! use fichepack::config::FicheConfig;
//! use fichepack::parser::{InputKind, Parser, create_parser};
//!
//! let parser = create_parser(InputKind::Text, &FicheConfig::default());
//! let fiches = parser.parse_str("Dupont;Jean;0612345678\n");
//!
//! assert_eq!(fiches.len(), 1);
//! assert_eq!(fiches[0].mobile, "+33612345678");
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Fiche;
use crate::config::FicheConfig;
use crate::error::{FicheError, Result};

/// How the content of an input file is interpreted.
///
/// ```rust
/// use fichepack::parser::InputKind;
///
/// assert_eq!(InputKind::from_path("export.jsonl"), InputKind::JsonLines);
/// assert_eq!(InputKind::from_path("EXPORT.NDJSON"), InputKind::JsonLines);
/// assert_eq!(InputKind::from_path("fiches.txt"), InputKind::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum InputKind {
    /// Free text: labelled blocks, falling back to delimited lines
    #[default]
    Text,

    /// One JSON object per line
    #[serde(alias = "jsonl", alias = "ndjson")]
    JsonLines,
}

impl InputKind {
    /// Selects the kind from a file name: `.jsonl` / `.ndjson` are JSON
    /// lines, everything else is text.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext.eq_ignore_ascii_case("jsonl") || ext.eq_ignore_ascii_case("ndjson") => {
                InputKind::JsonLines
            }
            _ => InputKind::Text,
        }
    }

    /// Returns all input kind names including aliases.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "jsonl", "ndjson", "json-lines"]
    }
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Text => write!(f, "Text"),
            InputKind::JsonLines => write!(f, "JSON Lines"),
        }
    }
}

impl std::str::FromStr for InputKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(InputKind::Text),
            "jsonl" | "ndjson" | "json-lines" => Ok(InputKind::JsonLines),
            _ => Err(format!(
                "Unknown input kind: '{}'. Expected one of: {}",
                s,
                InputKind::all_names().join(", ")
            )),
        }
    }
}

/// One input file, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawUnit {
    /// File name (or any label) used in logs
    pub name: String,
    /// How `content` is parsed
    pub kind: InputKind,
    /// Decoded content
    pub content: String,
}

impl RawUnit {
    /// Creates a unit with an explicit kind.
    pub fn new(name: impl Into<String>, kind: InputKind, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            content: content.into(),
        }
    }

    /// Creates a unit from raw bytes.
    ///
    /// The kind comes from the name's extension and invalid UTF-8 sequences
    /// are replaced rather than rejected.
    ///
    /// ```rust
    /// use fichepack::parser::{InputKind, RawUnit};
    ///
    /// let unit = RawUnit::from_bytes("contacts.txt", b"Dupont;Jean;06 12 34 56 78\xff\n");
    /// assert_eq!(unit.kind, InputKind::Text);
    /// assert!(unit.content.starts_with("Dupont;Jean;"));
    /// ```
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let name = name.into();
        let kind = InputKind::from_path(&name);
        Self {
            content: String::from_utf8_lossy(bytes).into_owned(),
            name,
            kind,
        }
    }

    /// Reads a file into a unit.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| FicheError::read(path, e))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::from_bytes(name, &bytes))
    }
}

/// Unified trait for turning contact exports into fiches.
///
/// Parsing is infallible at the content level: lines, blocks and JSON
/// objects that cannot be understood are skipped. Only I/O can fail.
pub trait Parser: Send + Sync {
    /// Returns the human-readable name of this parser.
    fn name(&self) -> &'static str;

    /// Returns the input kind this parser handles.
    fn kind(&self) -> InputKind;

    /// Parses content already in memory.
    fn parse_str(&self, content: &str) -> Vec<Fiche>;

    /// Parses a file, decoding it leniently.
    fn parse(&self, path: &Path) -> Result<Vec<Fiche>> {
        let bytes = fs::read(path).map_err(|e| FicheError::read(path, e))?;
        Ok(self.parse_str(&String::from_utf8_lossy(&bytes)))
    }

    /// Parses a file (convenience method accepting &str path).
    fn parse_file(&self, path: &str) -> Result<Vec<Fiche>> {
        self.parse(Path::new(path))
    }
}

/// Creates a parser for the specified input kind.
///
/// ```rust
/// use fichepack::config::FicheConfig;
/// use fichepack::parser::{InputKind, create_parser};
///
/// let parser = create_parser(InputKind::JsonLines, &FicheConfig::default());
/// assert_eq!(parser.name(), "JSON Lines");
/// ```
pub fn create_parser(kind: InputKind, config: &FicheConfig) -> Box<dyn Parser> {
    match kind {
        InputKind::Text => Box::new(crate::parsers::TextParser::with_config(config)),
        InputKind::JsonLines => Box::new(crate::parsers::JsonLinesParser::with_config(config)),
    }
}
