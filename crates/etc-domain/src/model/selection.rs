//! Multi-select state over a finite key domain

use std::collections::BTreeSet;

/// Either every key, or an explicit set of keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<K: Ord> {
    All,
    Keys(BTreeSet<K>),
}

impl<K: Ord> Default for Selection<K> {
    fn default() -> Self {
        Selection::All
    }
}

impl<K: Ord + Clone> Selection<K> {
    /// Explicit selection from any iterator of keys
    pub fn keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        Selection::Keys(keys.into_iter().collect())
    }

    /// An empty explicit selection
    pub fn none() -> Self {
        Selection::Keys(BTreeSet::new())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn contains(&self, key: &K) -> bool {
        match self {
            Selection::All => true,
            Selection::Keys(keys) => keys.contains(key),
        }
    }

    /// Whether this selection narrows `domain`.
    ///
    /// An explicit set naming every domain key does not; keys outside the
    /// domain never widen it.
    pub fn restricts(&self, domain: &[K]) -> bool {
        match self {
            Selection::All => false,
            Selection::Keys(keys) => !domain.iter().all(|k| keys.contains(k)),
        }
    }

    /// Number of selected keys out of `total`
    pub fn count(&self, total: usize) -> usize {
        match self {
            Selection::All => total,
            Selection::Keys(keys) => keys.len(),
        }
    }

    /// Flip one key. `All` expands to `domain` before flipping.
    pub fn toggle(self, key: &K, domain: &[K]) -> Self {
        let mut keys = match self {
            Selection::All => domain.iter().cloned().collect(),
            Selection::Keys(keys) => keys,
        };
        if !keys.remove(key) {
            keys.insert(key.clone());
        }
        Selection::Keys(keys)
    }
}
