//! Per-item multi-representation record.

use crate::reading::ReadingDictionary;
use crate::script;
use crate::unicode;
use crate::variants::VariantRules;

/// The comparable representations of one dropdown item, built once and
/// immutable afterwards. `original_text` is the pristine displayed text
/// captured before any highlighting touched the item; it is the source of
/// truth for every future match and must never be rebuilt from mutated
/// display state.
#[derive(Debug, Clone)]
pub struct NormalizedItem {
    /// Position within the container's candidate sequence.
    pub index: usize,
    pub original_text: String,
    pub normalized_lowercase: String,
    pub hiragana_reading: String,
    pub romaji: String,
    /// Spelling variants of `romaji`; the identity is always element 0.
    pub romaji_variants: Vec<String>,
}

impl NormalizedItem {
    pub fn build(
        index: usize,
        original_text: &str,
        readings: &ReadingDictionary,
        rules: &VariantRules,
    ) -> Self {
        let normalized = unicode::nfkc_trim(original_text);
        let resolved = readings.resolve(&normalized);

        // Prefer the kana actually present in the resolved text (kana-biased
        // conversion, hiragana characters only): for compounds where only a
        // sub-phrase resolved, this keeps the known kana without romanizing
        // the leftover ASCII. Fall back to the full conversion when nothing
        // survives extraction.
        let converted = script::to_hiragana(&resolved).unwrap_or_default();
        let extracted = script::to_hiragana_kana_only(&resolved)
            .map(|s| unicode::extract_hiragana(&s))
            .unwrap_or_default();
        let hiragana_reading = if extracted.is_empty() {
            converted
        } else {
            extracted
        };

        let romaji = script::to_romaji(&hiragana_reading).unwrap_or_default();
        let romaji_variants = rules.expand(&romaji);

        Self {
            index,
            original_text: original_text.to_string(),
            normalized_lowercase: normalized.to_lowercase(),
            hiragana_reading,
            romaji,
            romaji_variants,
        }
    }
}
