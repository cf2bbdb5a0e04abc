//! The filter pass: pattern set × item index → visibility and highlights.

use tracing::{debug, debug_span};

use shibori_core::index::ContainerId;
use shibori_core::matcher::{highlight_range, item_matches};
use shibori_core::query::search_patterns;

use super::types::FilterSummary;
use super::{Host, SearchSession};

impl SearchSession {
    /// Apply `raw_query` to a container immediately, superseding any
    /// pending debounced pass. An empty (or whitespace-only) query is the
    /// terminal no-filter state: everything visible, highlights cleared,
    /// active marker dropped.
    ///
    /// Idempotent for a fixed query: each matching item's highlight is
    /// cleared and re-applied from the durable original text, so repeated
    /// passes converge on the same end state.
    pub fn filter_now(
        &mut self,
        container: ContainerId,
        raw_query: &str,
        host: &mut dyn Host,
    ) -> FilterSummary {
        let _span = debug_span!("filter_now", container = container.0, raw_query).entered();

        self.state_mut(container).pending = None;

        let trimmed = raw_query.trim();
        if trimmed.is_empty() {
            return self.reset(container, host);
        }

        let patterns = search_patterns(trimmed, &self.rules);
        if !self.index.contains(container) {
            let texts = collect_texts(container, host);
            self.index
                .get_or_build(container, &self.readings, &self.rules, move || texts);
        }
        let items = self.index.get(container).unwrap_or(&[]);

        let query_lower = trimmed.to_lowercase();
        let mut visible = Vec::new();
        for item in items {
            if item_matches(item, &patterns) {
                host.set_visible(container, item.index, true);
                host.clear_highlight(container, item.index);
                // Descending node order: a wrap can split its node into
                // siblings, which would shift the indices of later nodes.
                let nodes = host.text_nodes(container, item.index);
                for (node, text) in nodes.iter().enumerate().rev() {
                    if let Some(range) = highlight_range(text, &query_lower) {
                        host.highlight(container, item.index, node, range);
                    }
                }
                visible.push(item.index);
            } else {
                host.set_visible(container, item.index, false);
                host.clear_highlight(container, item.index);
                host.set_active(container, item.index, false);
            }
        }
        let total = items.len();

        let state = self.state_mut(container);
        if let Some(active) = state.active {
            if !visible.contains(&active) {
                state.active = None;
            }
        }
        state.visible = Some(visible.clone());
        state.last_query = trimmed.to_string();

        let summary = FilterSummary {
            total,
            visible: visible.len(),
        };
        debug!(total = summary.total, visible = summary.visible);
        summary
    }

    /// The no-filter state: every item visible, no highlight, no active
    /// marker. Safe when the container vanished (zero items → no-op).
    pub(crate) fn reset(&mut self, container: ContainerId, host: &mut dyn Host) -> FilterSummary {
        let count = host.item_count(container);
        for item in 0..count {
            host.set_visible(container, item, true);
            host.clear_highlight(container, item);
            host.set_active(container, item, false);
        }

        let state = self.state_mut(container);
        state.visible = None;
        state.active = None;
        state.last_query.clear();

        FilterSummary {
            total: count,
            visible: count,
        }
    }

    /// Visibility-change notification: a hidden container cancels any
    /// in-flight debounce and resets its visual state.
    pub fn container_hidden(&mut self, container: ContainerId, host: &mut dyn Host) {
        self.state_mut(container).pending = None;
        self.reset(container, host);
    }
}

fn collect_texts(container: ContainerId, host: &mut dyn Host) -> Vec<String> {
    (0..host.item_count(container))
        .map(|i| host.original_text(container, i).unwrap_or_default())
        .collect()
}
