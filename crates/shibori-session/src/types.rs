use std::time::{Duration, Instant};

/// Quiet window between the last input event and the filter pass it
/// coalesces into.
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(150);

/// Directional or cancel input from the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Move the active marker to the next visible item (wraps).
    Next,
    /// Move the active marker to the previous visible item (wraps).
    Prev,
    /// Clear the query: reset the filter and drop the active marker.
    Cancel,
}

/// What a filter pass did, for callers that want to log or assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    pub total: usize,
    pub visible: usize,
}

/// A not-yet-fired filter pass. Replaced wholesale by newer input, so only
/// the most recent query can ever run.
#[derive(Debug, Clone)]
pub(crate) struct PendingFilter {
    pub query: String,
    pub due: Instant,
}

/// Per-container session state. Containers are independent: nothing here is
/// shared or observed across containers.
#[derive(Debug, Default)]
pub(crate) struct ContainerState {
    pub pending: Option<PendingFilter>,
    pub last_query: String,
    /// Indices visible after the last filter pass; `None` means no filter
    /// has been applied (everything visible).
    pub visible: Option<Vec<usize>>,
    /// Currently active item index, if navigation marked one.
    pub active: Option<usize>,
}

pub(crate) fn cyclic_index(current: usize, delta: i32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let c = current as i32;
    let n = count as i32;
    ((c + delta + n) % n) as usize
}
