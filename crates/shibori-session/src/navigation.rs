//! Keyboard navigation over the visible items of a container.

use tracing::debug_span;

use shibori_core::index::ContainerId;

use super::types::{cyclic_index, NavKey};
use super::{Host, SearchSession};

impl SearchSession {
    /// Handle a directional or cancel key.
    ///
    /// Next/Prev move the active marker cyclically over the items left
    /// visible by the last filter pass (all items when unfiltered),
    /// marking exactly one item active and scrolling it into view. Before
    /// any navigation input there is no active item; the first Next lands
    /// on the first visible item, the first Prev on the last.
    pub fn handle_nav(&mut self, container: ContainerId, key: NavKey, host: &mut dyn Host) {
        let _span = debug_span!("handle_nav", container = container.0, ?key).entered();

        let delta = match key {
            NavKey::Next => 1,
            NavKey::Prev => -1,
            NavKey::Cancel => {
                self.cancel(container, host);
                return;
            }
        };

        let visible = match &self.state_mut(container).visible {
            Some(v) => v.clone(),
            None => (0..host.item_count(container)).collect(),
        };
        if visible.is_empty() {
            return;
        }

        let state = self.state_mut(container);
        let position = state
            .active
            .and_then(|active| visible.iter().position(|&i| i == active));
        let next_position = match position {
            Some(p) => cyclic_index(p, delta, visible.len()),
            // No active item yet: Next starts at the top, Prev at the end
            None if delta > 0 => 0,
            None => visible.len() - 1,
        };
        let target = visible[next_position];

        if let Some(previous) = state.active.take() {
            host.set_active(container, previous, false);
        }
        host.set_active(container, target, true);
        host.scroll_into_view(container, target);
        self.state_mut(container).active = Some(target);
    }

    /// The clear/cancel input: drop any pending debounce, reset the filter
    /// to the no-filter state, and drop the active marker.
    pub fn cancel(&mut self, container: ContainerId, host: &mut dyn Host) {
        self.state_mut(container).pending = None;
        self.reset(container, host);
    }
}
