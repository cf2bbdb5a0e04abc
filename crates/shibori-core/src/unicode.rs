//! Character-level Unicode classification and query-side normalization.

use unicode_normalization::UnicodeNormalization;

/// Check the full Hiragana block (U+3040..U+309F). Includes a few unassigned
/// codepoints but those never appear in dropdown text or readings, so the
/// block-level check is preferred over an exact range for clarity.
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF), which also covers the
/// prolonged sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana plus the prolonged sound mark ー (technically katakana)
/// which commonly appears in readings like "らーめん".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

/// NFKC-normalize and trim, preserving case. This is the item-side and
/// resolver-side normalization; queries additionally lowercase, see
/// [`crate::query::normalize_query`].
pub fn nfkc_trim(s: &str) -> String {
    s.nfkc().collect::<String>().trim().to_string()
}

/// Keep only hiragana-block characters, dropping everything else.
pub fn extract_hiragana(s: &str) -> String {
    s.chars().filter(|&c| is_hiragana(c)).collect()
}

/// Maximal runs of ASCII letters within `s`, in order of appearance.
/// Used to pick romanized fragments out of a mixed-script query.
pub fn latin_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, c) in s.char_indices() {
        match (start, is_latin(c)) {
            (None, true) => start = Some(i),
            (Some(b), false) => {
                runs.push(&s[b..i]);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(b) = start {
        runs.push(&s[b..]);
    }
    runs
}
