//! Batch ingestion into a [`FicheStore`].

use tracing::{debug, info};

use super::store::FicheStore;
use crate::config::FicheConfig;
use crate::parser::{RawUnit, create_parser};

/// Counters describing one ingestion batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Input units processed
    pub units: usize,
    /// Fiches produced by the extractors
    pub extracted: usize,
    /// Fiches appended to the store
    pub added: usize,
    /// Fiches dropped for lack of a mobile number
    pub rejected: usize,
}

impl IngestStats {
    /// Share of extracted fiches that made it into the store, in percent.
    pub fn acceptance_rate(&self) -> f64 {
        if self.extracted == 0 {
            return 0.0;
        }
        (self.added as f64 / self.extracted as f64) * 100.0
    }
}

/// Parses every unit with the parser for its kind and appends the fiches
/// that carry a mobile number to `store`.
///
/// Never fails: content that nothing recognizes simply contributes zero
/// fiches.
///
/// # Example
///
/// ```rust
/// use fichepack::config::FicheConfig;
/// use fichepack::core::{FicheStore, ingest};
/// use fichepack::parser::{InputKind, RawUnit};
///
/// let mut store = FicheStore::new();
/// let units = vec![
///     RawUnit::new("a.txt", InputKind::Text, "Dupont;Jean;0612345678\n"),
///     RawUnit::new("b.jsonl", InputKind::JsonLines, "not json\n"),
/// ];
///
/// let stats = ingest(&mut store, &units, &FicheConfig::default());
/// assert_eq!(stats.added, 1);
/// assert_eq!(store.len(), 1);
/// ```
pub fn ingest(store: &mut FicheStore, units: &[RawUnit], config: &FicheConfig) -> IngestStats {
    let mut stats = IngestStats::default();

    for unit in units {
        let parser = create_parser(unit.kind, config);
        let fiches = parser.parse_str(&unit.content);
        let extracted = fiches.len();
        let added = store.append_batch(fiches);

        debug!(
            unit = %unit.name,
            parser = parser.name(),
            extracted,
            added,
            "processed input unit"
        );

        stats.units += 1;
        stats.extracted += extracted;
        stats.added += added;
        stats.rejected += extracted - added;
    }

    info!(
        units = stats.units,
        added = stats.added,
        rejected = stats.rejected,
        total = store.len(),
        "ingestion complete"
    );

    stats
}
