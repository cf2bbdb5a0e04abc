mod debounce;

use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;

use shibori_core::index::ContainerId;
use shibori_core::reading::ReadingDictionary;
use shibori_core::variants::VariantRules;

use super::{Host, SearchSession};

pub(super) fn make_session() -> SearchSession {
    let readings = ReadingDictionary::from_toml(
        r#"
[[words]]
text = "数学"
reading = "すうがく"

[[words]]
text = "英語"
reading = "えいご"

[[words]]
text = "国語"
reading = "こくご"
"#,
    )
    .unwrap();
    let rules = VariantRules::from_toml(
        r#"
[[rules]]
from = "uu"
to = "u"

[[rules]]
from = "ou"
to = "o"
"#,
    )
    .unwrap();
    SearchSession::new(Arc::new(readings), Arc::new(rules))
}

/// The four items most tests run against.
pub(super) const ITEMS: [&str; 4] = ["数学", "英語", "国語", "Worksheet_2024"];

pub(super) const C: ContainerId = ContainerId(1);

// --- Fake host ---

#[derive(Debug, Clone)]
struct Fragment {
    text: String,
    highlighted: bool,
}

/// A fake item holds one fragment list per source text node, so wrapping
/// fragments a node without losing the node boundaries.
#[derive(Debug, Clone)]
pub(super) struct FakeItem {
    nodes: Vec<Vec<Fragment>>,
    original_marker: Option<String>,
    pub visible: bool,
    pub active: bool,
}

impl FakeItem {
    fn new(text: &str) -> Self {
        Self::with_nodes(&[text])
    }

    fn with_nodes(node_texts: &[&str]) -> Self {
        Self {
            nodes: node_texts
                .iter()
                .map(|t| {
                    vec![Fragment {
                        text: t.to_string(),
                        highlighted: false,
                    }]
                })
                .collect(),
            original_marker: None,
            visible: true,
            active: false,
        }
    }

    /// Full display text, node boundaries and highlight wrappers
    /// transparent.
    pub fn display_text(&self) -> String {
        self.nodes
            .iter()
            .flat_map(|n| n.iter())
            .map(|f| f.text.as_str())
            .collect()
    }

    /// Concatenation of the highlighted spans only.
    pub fn highlighted_text(&self) -> String {
        self.nodes
            .iter()
            .flat_map(|n| n.iter())
            .filter(|f| f.highlighted)
            .map(|f| f.text.as_str())
            .collect()
    }

    pub fn highlight_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|n| n.iter())
            .filter(|f| f.highlighted)
            .count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Current text per source node, fragments merged.
    pub fn node_texts(&self) -> Vec<String> {
        self.nodes
            .iter()
            .map(|n| n.iter().map(|f| f.text.as_str()).collect())
            .collect()
    }
}

#[derive(Default)]
pub(super) struct FakeHost {
    containers: HashMap<ContainerId, Vec<FakeItem>>,
    pub scrolled: Vec<(ContainerId, usize)>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(container: ContainerId, texts: &[&str]) -> Self {
        let mut host = Self::new();
        host.add_container(container, texts);
        host
    }

    pub fn add_container(&mut self, container: ContainerId, texts: &[&str]) {
        self.containers
            .insert(container, texts.iter().map(|t| FakeItem::new(t)).collect());
    }

    /// Like `add_container`, but each item is given as its list of source
    /// text nodes.
    pub fn add_container_nodes(&mut self, container: ContainerId, items: &[&[&str]]) {
        self.containers.insert(
            container,
            items.iter().map(|n| FakeItem::with_nodes(n)).collect(),
        );
    }

    pub fn item(&self, container: ContainerId, item: usize) -> &FakeItem {
        &self.containers[&container][item]
    }

    pub fn visible_flags(&self, container: ContainerId) -> Vec<bool> {
        self.containers[&container]
            .iter()
            .map(|i| i.visible)
            .collect()
    }

    pub fn active_index(&self, container: ContainerId) -> Option<usize> {
        self.containers[&container].iter().position(|i| i.active)
    }

    /// Overwrite an item's displayed text without touching its durable
    /// original-text marker, simulating a late DOM mutation.
    pub fn mutate_text(&mut self, container: ContainerId, item: usize, text: &str) {
        let it = &mut self.containers.get_mut(&container).unwrap()[item];
        it.nodes = vec![vec![Fragment {
            text: text.to_string(),
            highlighted: false,
        }]];
    }
}

impl Host for FakeHost {
    fn item_count(&self, container: ContainerId) -> usize {
        self.containers.get(&container).map_or(0, Vec::len)
    }

    fn original_text(&mut self, container: ContainerId, item: usize) -> Option<String> {
        let it = self.containers.get_mut(&container)?.get_mut(item)?;
        if it.original_marker.is_none() {
            it.original_marker = Some(it.display_text());
        }
        it.original_marker.clone()
    }

    fn text_nodes(&self, container: ContainerId, item: usize) -> Vec<String> {
        self.containers
            .get(&container)
            .and_then(|c| c.get(item))
            .map(FakeItem::node_texts)
            .unwrap_or_default()
    }

    fn set_visible(&mut self, container: ContainerId, item: usize, visible: bool) {
        if let Some(it) = self.containers.get_mut(&container).and_then(|c| c.get_mut(item)) {
            it.visible = visible;
        }
    }

    fn set_active(&mut self, container: ContainerId, item: usize, active: bool) {
        if let Some(it) = self.containers.get_mut(&container).and_then(|c| c.get_mut(item)) {
            it.active = active;
        }
    }

    fn highlight(&mut self, container: ContainerId, item: usize, node: usize, range: Range<usize>) {
        let Some(it) = self.containers.get_mut(&container).and_then(|c| c.get_mut(item)) else {
            return;
        };
        let Some(fragments) = it.nodes.get_mut(node) else {
            return;
        };
        // One span per node; the session clears before re-wrapping, so a
        // still-fragmented node means a contract violation upstream.
        if fragments.iter().any(|f| f.highlighted) {
            return;
        }
        let text: String = fragments.iter().map(|f| f.text.as_str()).collect();
        if range.end > text.len() {
            return;
        }
        let mut replacement = Vec::new();
        if range.start > 0 {
            replacement.push(Fragment {
                text: text[..range.start].to_string(),
                highlighted: false,
            });
        }
        replacement.push(Fragment {
            text: text[range.clone()].to_string(),
            highlighted: true,
        });
        if range.end < text.len() {
            replacement.push(Fragment {
                text: text[range.end..].to_string(),
                highlighted: false,
            });
        }
        *fragments = replacement;
    }

    fn clear_highlight(&mut self, container: ContainerId, item: usize) {
        let Some(it) = self.containers.get_mut(&container).and_then(|c| c.get_mut(item)) else {
            return;
        };
        // Unwrap each node's spans and merge that node's fragments back,
        // the per-node Node.normalize() analog. Node boundaries survive.
        for fragments in &mut it.nodes {
            let merged: String = fragments.iter().map(|f| f.text.as_str()).collect();
            *fragments = vec![Fragment {
                text: merged,
                highlighted: false,
            }];
        }
    }

    fn scroll_into_view(&mut self, container: ContainerId, item: usize) {
        self.scrolled.push((container, item));
    }
}
