//! Stateful search session over many independent dropdown containers.
//!
//! `SearchSession` owns the normalization engine's configuration, the
//! per-container item cache, and per-container debounce/navigation state.
//! The page side is reached only through the [`Host`] trait; all DOM
//! selection heuristics and styling stay on that side of the boundary.
//!
//! Everything runs single-threaded and event-driven: the host forwards
//! input edits, key events, visibility changes, and clock ticks, and the
//! session answers with host calls.

mod debounce;
mod filter;
mod host;
mod navigation;
mod types;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use shibori_core::index::{ContainerId, ItemIndex};
use shibori_core::reading::ReadingDictionary;
use shibori_core::variants::VariantRules;

pub use host::Host;
pub use types::{FilterSummary, NavKey, DEFAULT_DEBOUNCE_WINDOW};

use types::ContainerState;

pub struct SearchSession {
    readings: Arc<ReadingDictionary>,
    rules: Arc<VariantRules>,
    index: ItemIndex,
    containers: HashMap<ContainerId, ContainerState>,
    debounce_window: Duration,
}

impl SearchSession {
    pub fn new(readings: Arc<ReadingDictionary>, rules: Arc<VariantRules>) -> Self {
        Self::with_debounce_window(readings, rules, DEFAULT_DEBOUNCE_WINDOW)
    }

    pub fn with_debounce_window(
        readings: Arc<ReadingDictionary>,
        rules: Arc<VariantRules>,
        debounce_window: Duration,
    ) -> Self {
        Self {
            readings,
            rules,
            index: ItemIndex::new(),
            containers: HashMap::new(),
            debounce_window,
        }
    }

    /// Register a container discovered by the host (mutation notification
    /// or periodic re-scan). Idempotent; returns true if it was new.
    pub fn attach(&mut self, container: ContainerId) -> bool {
        if self.containers.contains_key(&container) {
            return false;
        }
        self.containers.insert(container, ContainerState::default());
        true
    }

    pub fn is_attached(&self, container: ContainerId) -> bool {
        self.containers.contains_key(&container)
    }

    /// Drop the cached items for a container whose children changed.
    /// The next filter pass rebuilds from the host.
    pub fn invalidate(&mut self, container: ContainerId) {
        self.index.invalidate(container);
    }

    pub(crate) fn state_mut(&mut self, container: ContainerId) -> &mut ContainerState {
        self.containers.entry(container).or_default()
    }
}
