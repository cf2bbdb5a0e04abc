//! Match decision and highlight placement.
//!
//! Matching is plain case-insensitive substring containment across every
//! representation of an item; there is no edit-distance component.

use std::ops::Range;

use tracing::{debug, debug_span};

use crate::item::NormalizedItem;

/// An item matches iff any pattern is a substring of any representation:
/// the NFKC-lowercased text, the raw text lowercased, the hiragana reading,
/// the romaji, or any romaji variant.
pub fn item_matches(item: &NormalizedItem, patterns: &[String]) -> bool {
    let original_lower = item.original_text.to_lowercase();
    patterns.iter().any(|p| {
        item.normalized_lowercase.contains(p.as_str())
            || original_lower.contains(p.as_str())
            || item.hiragana_reading.contains(p.as_str())
            || item.romaji.contains(p.as_str())
            || item
                .romaji_variants
                .iter()
                .any(|v| v.contains(p.as_str()))
    })
}

/// Decide visibility for every item in a container.
pub fn filter_items(items: &[NormalizedItem], patterns: &[String]) -> Vec<bool> {
    let _span = debug_span!("filter_items", item_count = items.len()).entered();
    let decisions: Vec<bool> = items.iter().map(|i| item_matches(i, patterns)).collect();
    debug!(visible = decisions.iter().filter(|&&v| v).count());
    decisions
}

/// Byte range of the first case-insensitive occurrence of `query_lower`
/// (already lowercased) within one display text node.
///
/// The returned range always falls on character boundaries of `text`, so a
/// host can wrap exactly that span without corrupting surrounding bytes.
/// Lowercasing can change a character's byte length, hence the explicit
/// offset map instead of searching `text.to_lowercase()` directly.
pub fn highlight_range(text: &str, query_lower: &str) -> Option<Range<usize>> {
    if query_lower.is_empty() || text.is_empty() {
        return None;
    }

    let mut lowered = String::with_capacity(text.len());
    // Source-range per byte of `lowered`
    let mut starts = Vec::with_capacity(text.len());
    let mut ends = Vec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        for lower_ch in ch.to_lowercase() {
            let len_before = lowered.len();
            lowered.push(lower_ch);
            for _ in len_before..lowered.len() {
                starts.push(offset);
                ends.push(offset + ch.len_utf8());
            }
        }
    }

    let at = lowered.find(query_lower)?;
    let last = at + query_lower.len() - 1;
    Some(starts[at]..ends[last])
}
