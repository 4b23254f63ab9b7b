//! Shared parsing utilities for all extractors.
//!
//! This module contains the pieces every extractor relies on, so the
//! block, line and JSON-lines parsers only have to find labels and values:
//!
//! - [`aliases`] — the static field alias table
//! - [`record`] — [`RawRecord`], the label → value mapping
//! - [`name`] — [`clean_name`] for names and cities
//! - [`assemble`] — [`Assembler`], which builds a [`Fiche`](crate::Fiche)

pub mod aliases;
pub mod assemble;
pub mod name;
pub mod record;

// Re-export commonly used items
pub use aliases::{Field, normalize_key};
pub use assemble::Assembler;
pub use name::clean_name;
pub use record::RawRecord;
