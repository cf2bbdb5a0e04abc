//! Script conversion boundary over `wana_kana`.
//!
//! Conversions are best-effort and must never abort a filter pass: a call
//! that produces nothing yields `None` and the caller simply drops that
//! pattern or representation.

use wana_kana::to_hiragana::to_hiragana_with_opt;
use wana_kana::ConvertJapanese;
use wana_kana::Options;

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Convert romaji/katakana input to hiragana. Characters outside the
/// converter's reach pass through unchanged.
pub fn to_hiragana(text: &str) -> Option<String> {
    non_empty(text.to_hiragana())
}

/// Convert romaji/hiragana input to katakana.
pub fn to_katakana(text: &str) -> Option<String> {
    non_empty(text.to_katakana())
}

/// Romanize kana, lowercased. Kanji and other unconvertible characters pass
/// through, so callers that need pure romaji should feed kana-only input.
pub fn to_romaji(text: &str) -> Option<String> {
    non_empty(text.to_romaji().to_lowercase())
}

/// Kana-biased hiragana conversion: latin text is left alone instead of
/// being interpreted as romaji. Used when extracting the kana already
/// present in a resolved reading, where an aggressive romaji pass would
/// invent kana out of incidental ASCII.
pub fn to_hiragana_kana_only(text: &str) -> Option<String> {
    let options = Options {
        pass_romaji: true,
        ..Options::default()
    };
    non_empty(to_hiragana_with_opt(text, options))
}
