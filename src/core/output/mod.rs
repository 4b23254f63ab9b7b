//! Export writers.
//!
//! This module provides writers for the export formats:
//! - [`write_csv`] / [`to_csv`] - semicolon CSV, `Nom Prénom;Numéro (+33)` - requires `csv-output` feature
//! - [`write_txt`] / [`to_txt`] - `nomPrenom|mobile` lines
//! - [`write_blocks`] / [`to_blocks`] - labelled text blocks, re-ingestible
//! - [`write_jsonl`] / [`to_jsonl`] - one serialized fiche per line
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> fichepack::Result<()> {
//! use fichepack::Fiche;
//! use fichepack::core::models::OutputConfig;
//! use fichepack::core::output::{to_txt, write_blocks, write_csv};
//!
//! let fiches = vec![Fiche::new("Dupont Jean", "+33612345678")];
//!
//! write_csv(&fiches, "fiches.csv", &OutputConfig::new())?;
//! write_blocks(&fiches, "fiches.txt")?;
//!
//! let txt = to_txt(&fiches);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod jsonl_writer;
mod txt_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use txt_writer::{to_blocks, to_txt, write_blocks, write_txt};
