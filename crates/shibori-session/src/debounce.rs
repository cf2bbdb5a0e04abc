//! Input coalescing: at most one filter pass per quiet period.

use std::time::Instant;

use tracing::debug;

use shibori_core::index::ContainerId;

use super::types::PendingFilter;
use super::{Host, SearchSession};

impl SearchSession {
    /// Record an input edit. The filter pass is deferred until input has
    /// been quiet for the debounce window; any pass still pending for this
    /// container is superseded, so only the most recent query can run.
    pub fn note_input(&mut self, container: ContainerId, query: &str, now: Instant) {
        let window = self.debounce_window;
        let state = self.state_mut(container);
        state.pending = Some(PendingFilter {
            query: query.to_string(),
            due: now + window,
        });
        debug!(container = container.0, query, "input noted");
    }

    /// Cancel a pending pass without running it.
    pub fn cancel_pending(&mut self, container: ContainerId) {
        self.state_mut(container).pending = None;
    }

    /// The earliest pending deadline across all containers, for hosts that
    /// schedule a wakeup instead of polling on a fixed tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.containers
            .values()
            .filter_map(|s| s.pending.as_ref().map(|p| p.due))
            .min()
    }

    /// Run every filter pass whose quiet window has elapsed. Returns the
    /// number of passes executed.
    pub fn poll(&mut self, now: Instant, host: &mut dyn Host) -> usize {
        let due: Vec<(ContainerId, String)> = self
            .containers
            .iter_mut()
            .filter_map(|(&id, state)| match &state.pending {
                Some(p) if p.due <= now => {
                    let query = p.query.clone();
                    state.pending = None;
                    Some((id, query))
                }
                _ => None,
            })
            .collect();

        let count = due.len();
        for (id, query) in due {
            self.filter_now(id, &query, host);
        }
        count
    }
}
