//! Lazily populated page cache.
//!
//! Entries are created the first time an index appears and are only ever
//! dropped together, on reload.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::list::ListContent;

/// Map from page index to the page materialized for it.
#[derive(Default)]
pub struct ListRegistry {
    lists: FxHashMap<usize, Box<dyn ListContent>>,
}

impl ListRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the page at `index`, if it was materialized.
    pub fn get(&self, index: usize) -> Option<&dyn ListContent> {
        self.lists.get(&index).map(|list| list.as_ref())
    }

    /// Returns the page at `index`, building it with `factory` when absent.
    ///
    /// The second element is `true` when `factory` ran.
    pub fn get_or_create(
        &mut self,
        index: usize,
        factory: impl FnOnce(usize) -> Box<dyn ListContent>,
    ) -> (&dyn ListContent, bool) {
        let mut created = false;
        let list = self.lists.entry(index).or_insert_with(|| {
            created = true;
            factory(index)
        });
        if created {
            trace!(index, "materialized list");
        }
        (&**list, created)
    }

    /// Stores `list` at `index`, returning the page it replaced.
    pub fn insert(
        &mut self,
        index: usize,
        list: Box<dyn ListContent>,
    ) -> Option<Box<dyn ListContent>> {
        self.lists.insert(index, list)
    }

    /// Returns `true` when a page exists at `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.lists.contains_key(&index)
    }

    /// Number of materialized pages.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` when nothing has been materialized.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Materialized indices in ascending order.
    pub fn indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.lists.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Iterates over materialized pages in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &dyn ListContent)> + '_ {
        self.lists.iter().map(|(&index, list)| (index, list.as_ref()))
    }

    /// Detaches every page view from its superview and forgets all pages.
    pub fn remove_all(&mut self) {
        for list in self.lists.values() {
            list.list_view().remove_from_superview();
        }
        self.lists.clear();
    }
}
