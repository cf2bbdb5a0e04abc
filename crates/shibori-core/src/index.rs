//! Build-once per-container item cache.

use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::item::NormalizedItem;
use crate::reading::ReadingDictionary;
use crate::variants::VariantRules;

/// Stable identifier for a dropdown container, assigned by the host.
/// Cache entries are keyed by this rather than any live reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(pub u64);

/// Cache of [`NormalizedItem`] sequences, one per container.
///
/// Built on first search and deliberately never refreshed when the
/// container's children change afterwards: dropdown contents are assumed
/// static once opened. Hosts that do mutate item lists must call
/// [`ItemIndex::invalidate`]; there is no automatic staleness detection.
#[derive(Default)]
pub struct ItemIndex {
    cache: HashMap<ContainerId, Vec<NormalizedItem>>,
}

impl ItemIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, container: ContainerId) -> bool {
        self.cache.contains_key(&container)
    }

    pub fn get(&self, container: ContainerId) -> Option<&[NormalizedItem]> {
        self.cache.get(&container).map(Vec::as_slice)
    }

    /// Return the cached sequence for `container`, building it from
    /// `texts()` on first use. `texts` is only invoked on a cache miss.
    pub fn get_or_build<F>(
        &mut self,
        container: ContainerId,
        readings: &ReadingDictionary,
        rules: &VariantRules,
        texts: F,
    ) -> &[NormalizedItem]
    where
        F: FnOnce() -> Vec<String>,
    {
        self.cache.entry(container).or_insert_with(|| {
            let _span = debug_span!("build_index", container = container.0).entered();
            let items: Vec<NormalizedItem> = texts()
                .iter()
                .enumerate()
                .map(|(i, text)| NormalizedItem::build(i, text, readings, rules))
                .collect();
            debug!(item_count = items.len());
            items
        })
    }

    /// Explicit invalidation hook for hosts that know the container's
    /// items changed. The next search rebuilds from scratch.
    pub fn invalidate(&mut self, container: ContainerId) {
        self.cache.remove(&container);
    }
}
