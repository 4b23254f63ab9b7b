//! # Fichepack
//!
//! A Rust library for extracting contact records ("fiches") from loosely
//! structured exports, normalizing their French phone numbers, and looking
//! them up or exporting them in bulk.
//!
//! ## Overview
//!
//! Fichepack reads three kinds of input:
//! - **Labelled blocks** — `Nom: ...` / `Mobile: ...` lines separated by
//!   `-----` style lines
//! - **Delimited lines** — `nom;prenom;phone`, `label: phone`,
//!   `label|phone` or an inline JSON object per line
//! - **JSON Lines** — `.jsonl` / `.ndjson` files, one object per line
//!
//! Field names are matched against a table of aliases (`portable`, `GSM`,
//! `téléphone`, ...), names are title-cased and every phone number is
//! rewritten to `+33XXXXXXXXX`. Records without a usable number are dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use fichepack::prelude::*;
//!
//! let config = FicheConfig::default();
//! let mut store = FicheStore::new();
//!
//! let units = vec![
//!     RawUnit::new("a.txt", InputKind::Text, "Dupont;Jean;0612345678\n"),
//!     RawUnit::new("b.txt", InputKind::Text, "Nom: martin\nPrénom: luc\nMobile: 07 11 22 33 44\n-----"),
//! ];
//! let stats = ingest(&mut store, &units, &config);
//! assert_eq!(stats.added, 2);
//!
//! let found = lookup(&store, "06 12 34 56 78", config.lookup_limit);
//! assert_eq!(found[0].nom_prenom, "Dupont Jean");
//!
//! let txt = to_txt(store.head(config.export_size));
//! assert_eq!(txt, "Dupont Jean|+33612345678\nMartin Luc|+33711223344\n");
//! ```
//!
//! ## Module Structure
//!
//! - [`phone`] — French phone canonicalization and suffix matching
//! - [`parsing`] — Alias table, raw records, name cleanup, record assembly
//! - [`parsers`] — Block, line and JSON Lines extractors
//! - [`parser`] — [`Parser`](parser::Parser) trait, [`InputKind`](parser::InputKind),
//!   [`RawUnit`](parser::RawUnit), [`create_parser`](parser::create_parser)
//! - [`core`] — [`FicheStore`](core::FicheStore), [`ingest`](core::ingest),
//!   [`lookup`](core::lookup()), export shaping and writers
//! - [`format`] — [`ExportFormat`](format::ExportFormat) and format dispatch
//! - [`config`] — [`FicheConfig`](config::FicheConfig)
//! - [`error`] — Unified error types ([`FicheError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fiche;
pub mod format;
pub mod parser;
pub mod parsers;
pub mod parsing;
pub mod phone;

// Re-export the main types at the crate root for convenience
pub use error::{FicheError, Result};
pub use fiche::Fiche;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use fichepack::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Fiche;

    pub use crate::error::{FicheError, Result};

    pub use crate::config::FicheConfig;

    pub use crate::parser::{InputKind, Parser, RawUnit, create_parser};
    pub use crate::parsers::{JsonLinesParser, TextParser};

    pub use crate::core::{FicheStore, IngestStats, OutputConfig, ingest, lookup};
    pub use crate::core::{ExportRow, shape_rows, to_text_block};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::output::{to_blocks, to_jsonl, to_txt, write_blocks, write_jsonl, write_txt};

    pub use crate::format::{ExportFormat, to_format_string, write_to_format};

    pub use crate::phone::canonicalize;
}
