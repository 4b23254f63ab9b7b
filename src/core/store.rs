//! In-memory fiche store.

use crate::Fiche;

/// Append-only, insertion-ordered collection of fiches.
///
/// Only fiches with a mobile number are ever admitted. There is no update
/// and no per-record delete; [`clear`](FicheStore::clear) empties the whole
/// store.
///
/// # Example
///
/// ```rust
/// use fichepack::Fiche;
/// use fichepack::core::FicheStore;
///
/// let mut store = FicheStore::new();
/// let added = store.append_batch(vec![
///     Fiche::new("Dupont Jean", "+33612345678"),
///     Fiche::new("Sans Numero", ""),
/// ]);
///
/// assert_eq!(added, 1);
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FicheStore {
    fiches: Vec<Fiche>,
}

impl FicheStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every fiche that has a mobile number and returns how many
    /// were added.
    pub fn append_batch(&mut self, fiches: impl IntoIterator<Item = Fiche>) -> usize {
        let before = self.fiches.len();
        self.fiches
            .extend(fiches.into_iter().filter(Fiche::has_mobile));
        self.fiches.len() - before
    }

    /// Number of stored fiches.
    pub fn len(&self) -> usize {
        self.fiches.len()
    }

    /// Returns `true` if the store holds no fiche.
    pub fn is_empty(&self) -> bool {
        self.fiches.is_empty()
    }

    /// The first `limit` fiches in insertion order.
    pub fn head(&self, limit: usize) -> &[Fiche] {
        &self.fiches[..limit.min(self.fiches.len())]
    }

    /// Iterates over all fiches in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fiche> {
        self.fiches.iter()
    }

    /// Removes every fiche.
    pub fn clear(&mut self) {
        self.fiches.clear();
    }
}

impl<'a> IntoIterator for &'a FicheStore {
    type Item = &'a Fiche;
    type IntoIter = std::slice::Iter<'a, Fiche>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
