//! Core processing logic for fichepack.
//!
//! This module contains:
//! - [`store`] - The in-memory [`FicheStore`]
//! - [`processor`] - Batch ingestion of raw input units
//! - [`lookup`](mod@lookup) - Phone number lookup by nine-digit suffix
//! - [`export`] - Row and text-block shaping
//! - [`models`] - Writer configuration
//! - [`output`] - Format writers (CSV, TXT, blocks, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use fichepack::config::FicheConfig;
//! use fichepack::core::{FicheStore, ingest, lookup, shape_rows};
//! use fichepack::parser::{InputKind, RawUnit};
//!
//! let config = FicheConfig::default();
//! let mut store = FicheStore::new();
//!
//! let units = [RawUnit::new(
//!     "export.txt",
//!     InputKind::Text,
//!     "Nom: martin\nPrénom: luc\nMobile: 07 11 22 33 44\n-----",
//! )];
//! ingest(&mut store, &units, &config);
//!
//! let found = lookup(&store, "07.11.22.33.44", config.lookup_limit);
//! assert_eq!(found[0].nom_prenom, "Martin Luc");
//!
//! let rows = shape_rows(store.head(config.export_size));
//! assert_eq!(rows[0].mobile, "+33711223344");
//! ```

pub mod export;
pub mod lookup;
pub mod models;
pub mod output;
pub mod processor;
pub mod store;

pub use export::{ExportRow, FICHE_SEPARATOR, shape_blocks, shape_rows, to_text_block};
pub use lookup::lookup;
pub use models::OutputConfig;
pub use processor::{IngestStats, ingest};
pub use store::FicheStore;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
pub use output::{to_blocks, to_jsonl, to_txt, write_blocks, write_jsonl, write_txt};
