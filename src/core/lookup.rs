//! Phone number lookup.

use tracing::debug;

use super::store::FicheStore;
use crate::Fiche;
use crate::phone::{MATCH_DIGITS, match_key, tail_digits};

/// Finds stored fiches whose mobile number matches `query`.
///
/// The query is canonicalized when possible and both sides are compared on
/// their last nine digits, so `0612345678`, `06 12 34 56 78` and
/// `+33612345678` all find the same fiche. A query with no digits matches
/// nothing. Results keep insertion order and are truncated to `limit`.
///
/// # Example
///
/// ```rust
/// use fichepack::Fiche;
/// use fichepack::core::{FicheStore, lookup};
///
/// let mut store = FicheStore::new();
/// store.append_batch(vec![Fiche::new("Dupont Jean", "+33612345678")]);
///
/// let found = lookup(&store, "0612345678", 10);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].nom_prenom, "Dupont Jean");
///
/// store.clear();
/// assert!(lookup(&store, "0612345678", 10).is_empty());
/// ```
pub fn lookup<'a>(store: &'a FicheStore, query: &str, limit: usize) -> Vec<&'a Fiche> {
    let key = match_key(query);
    if key.is_empty() {
        debug!(query, "lookup query has no digits");
        return Vec::new();
    }

    store
        .iter()
        .filter(|fiche| tail_digits(&fiche.mobile, MATCH_DIGITS) == key)
        .take(limit)
        .collect()
}
