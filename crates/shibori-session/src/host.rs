//! The collaborator contract toward the page.
//!
//! The session never touches a document directly; everything it needs from
//! the DOM side goes through this trait. Implementations must tolerate a
//! container that disappeared mid-operation: report zero items, answer
//! `None`, and swallow writes. The session treats those as silent no-ops.

use std::ops::Range;

use shibori_core::index::ContainerId;

pub trait Host {
    /// Number of candidate items currently under the container. Which
    /// elements count as candidates is the host's selection heuristic.
    fn item_count(&self, container: ContainerId) -> usize;

    /// The item's durable original-text marker. On the first call the host
    /// captures the displayed text and stashes it; later calls return the
    /// stashed copy even after highlighting fragmented the display.
    fn original_text(&mut self, container: ContainerId, item: usize) -> Option<String>;

    /// The item's current display text, one string per source text node.
    /// Node identity is positional: index `n` here is the `node` argument
    /// a subsequent [`Host::highlight`] call refers to.
    fn text_nodes(&self, container: ContainerId, item: usize) -> Vec<String>;

    fn set_visible(&mut self, container: ContainerId, item: usize, visible: bool);

    fn set_active(&mut self, container: ContainerId, item: usize, active: bool);

    /// Wrap a highlight span around `range` (byte offsets into the node's
    /// text). `node` indexes the list the preceding [`Host::text_nodes`]
    /// call returned; the session wraps at most one span per node and
    /// issues the calls in descending node order, so hosts whose wrapping
    /// fragments the node list never see an index shifted by an earlier
    /// split. The wrapped characters must be preserved verbatim.
    fn highlight(&mut self, container: ContainerId, item: usize, node: usize, range: Range<usize>);

    /// Unwrap every highlight span on the item and merge only the
    /// fragments wrapping created, restoring each source node's exact
    /// pre-highlight text. Distinct source nodes stay distinct.
    fn clear_highlight(&mut self, container: ContainerId, item: usize);

    fn scroll_into_view(&mut self, container: ContainerId, item: usize);
}
