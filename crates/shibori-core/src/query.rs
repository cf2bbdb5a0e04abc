//! Query normalization and multi-script pattern generation.

use tracing::{debug, debug_span};
use unicode_normalization::UnicodeNormalization;

use crate::script;
use crate::unicode;
use crate::variants::VariantRules;

/// NFKC-normalize, lowercase, trim. Deterministic and idempotent:
/// `normalize_query(normalize_query(q)) == normalize_query(q)`.
pub fn normalize_query(raw: &str) -> String {
    raw.nfkc()
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Generate the comparable pattern set for one query.
///
/// Sources, in order: the normalized query; the raw query lowercased
/// (un-normalized, to keep forms NFKC would fold away); hiragana and
/// katakana conversions of the normalized query; lowercased romaji of the
/// hiragana form plus its spelling variants; and hiragana/katakana
/// conversions of every maximal Latin run in the normalized query (mixed-
/// script queries). Duplicates collapse, empty strings are discarded, and a
/// source that fails to convert is omitted rather than aborting the set.
pub fn search_patterns(raw: &str, rules: &VariantRules) -> Vec<String> {
    let _span = debug_span!("search_patterns", raw).entered();

    let mut patterns: Vec<String> = Vec::new();
    let normalized = normalize_query(raw);

    push(&mut patterns, normalized.clone());
    push(&mut patterns, raw.to_lowercase());

    let hiragana = script::to_hiragana(&normalized);
    if let Some(h) = &hiragana {
        push(&mut patterns, h.clone());
    }
    if let Some(k) = script::to_katakana(&normalized) {
        push(&mut patterns, k);
    }

    if let Some(h) = &hiragana {
        if let Some(romaji) = script::to_romaji(h) {
            for variant in rules.expand(&romaji) {
                push(&mut patterns, variant);
            }
        }
    }

    for run in unicode::latin_runs(&normalized) {
        if let Some(h) = script::to_hiragana(run) {
            push(&mut patterns, h);
        }
        if let Some(k) = script::to_katakana(run) {
            push(&mut patterns, k);
        }
    }

    debug!(count = patterns.len());
    patterns
}

fn push(patterns: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !patterns.contains(&candidate) {
        patterns.push(candidate);
    }
}
