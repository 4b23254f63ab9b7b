//! Configuration for ingestion, lookup and export.
//!
//! Contact exports seen in the wild disagree on two policies that used to be
//! hard-coded: how many matches a phone lookup shows, and whether a landline
//! is kept next to the mobile number. Both are explicit here.
//!
//! # Example
//!
//! ```rust
//! use fichepack::config::FicheConfig;
//!
//! let config = FicheConfig::new()
//!     .with_lookup_limit(3)
//!     .with_retain_landline(true);
//!
//! assert_eq!(config.lookup_limit, 3);
//! assert!(config.retain_landline);
//! ```

use serde::{Deserialize, Serialize};

/// Default number of fiches returned by a phone lookup.
pub const DEFAULT_LOOKUP_LIMIT: usize = 10;

/// Default number of fiches written by an export.
pub const DEFAULT_EXPORT_SIZE: usize = 500;

/// Configuration shared by the assembler, the lookup matcher and exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FicheConfig {
    /// Maximum number of fiches returned by a lookup (default: 10)
    pub lookup_limit: usize,

    /// Keep the landline in [`Fiche::fixe`](crate::Fiche::fixe) instead of
    /// discarding it once the mobile is resolved (default: false)
    pub retain_landline: bool,

    /// Number of fiches an export takes from the head of the store
    /// (default: 500)
    pub export_size: usize,
}

impl Default for FicheConfig {
    fn default() -> Self {
        Self {
            lookup_limit: DEFAULT_LOOKUP_LIMIT,
            retain_landline: false,
            export_size: DEFAULT_EXPORT_SIZE,
        }
    }
}

impl FicheConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the lookup result bound.
    #[must_use]
    pub fn with_lookup_limit(mut self, limit: usize) -> Self {
        self.lookup_limit = limit;
        self
    }

    /// Sets whether landlines are kept on the fiche.
    #[must_use]
    pub fn with_retain_landline(mut self, retain: bool) -> Self {
        self.retain_landline = retain;
        self
    }

    /// Sets the export size.
    #[must_use]
    pub fn with_export_size(mut self, size: usize) -> Self {
        self.export_size = size;
        self
    }
}
