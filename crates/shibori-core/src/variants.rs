//! Romaji spelling-variant expansion.
//!
//! One romanization of a reading is rarely the one the user types:
//! Hepburn "shi" vs Kunrei "si", "suugaku" vs "sugaku". The generator
//! expands a base romanization into the set of plausible alternates using
//! an ordered substitution-rule table.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, debug_span};

pub const DEFAULT_VARIANTS_TOML: &str = include_str!("default_variants.toml");

#[derive(Deserialize)]
struct VariantConfig {
    rules: Vec<RuleEntry>,
}

#[derive(Deserialize)]
struct RuleEntry {
    from: String,
    to: String,
}

#[derive(Debug, thiserror::Error)]
pub enum VariantConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[[rules]] list is empty")]
    Empty,
    #[error("empty `from` in rule {0}")]
    EmptyFrom(usize),
    #[error("non-ASCII rule: {0:?} -> {1:?}")]
    NonAscii(String, String),
}

/// Ordered `(from, to)` substitution rules over lowercase romaji.
#[derive(Debug)]
pub struct VariantRules {
    rules: Vec<(String, String)>,
}

impl VariantRules {
    pub fn from_toml(toml_str: &str) -> Result<Self, VariantConfigError> {
        let config: VariantConfig =
            toml::from_str(toml_str).map_err(|e| VariantConfigError::Parse(e.to_string()))?;

        if config.rules.is_empty() {
            return Err(VariantConfigError::Empty);
        }
        for (i, rule) in config.rules.iter().enumerate() {
            if rule.from.is_empty() {
                return Err(VariantConfigError::EmptyFrom(i));
            }
            if !rule.from.is_ascii() || !rule.to.is_ascii() {
                return Err(VariantConfigError::NonAscii(
                    rule.from.clone(),
                    rule.to.clone(),
                ));
            }
        }

        Ok(Self {
            rules: config
                .rules
                .into_iter()
                .map(|r| (r.from, r.to))
                .collect(),
        })
    }

    /// A rule-less table. `expand` degrades to the identity singleton.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Expand `base` into its spelling variants, identity first.
    ///
    /// A single sweep: each rule in table order scans the set produced so
    /// far (snapshot taken per rule), and every occurrence of `from` yields
    /// one new string with just that occurrence replaced. Originals are
    /// retained. Because each rule runs once, termination does not depend
    /// on rule contents.
    pub fn expand(&self, base: &str) -> Vec<String> {
        let _span = debug_span!("expand_variants", base).entered();

        let mut variants = vec![base.to_string()];
        let mut seen: HashSet<String> = variants.iter().cloned().collect();

        for (from, to) in &self.rules {
            let snapshot = variants.clone();
            for s in &snapshot {
                let mut search_from = 0;
                while let Some(pos) = s[search_from..].find(from.as_str()) {
                    let at = search_from + pos;
                    let mut replaced = String::with_capacity(s.len() + to.len());
                    replaced.push_str(&s[..at]);
                    replaced.push_str(to);
                    replaced.push_str(&s[at + from.len()..]);
                    if seen.insert(replaced.clone()) {
                        variants.push(replaced);
                    }
                    search_from = at + from.len();
                }
            }
        }

        debug!(count = variants.len());
        variants
    }
}

impl Default for VariantRules {
    fn default() -> Self {
        Self::from_toml(DEFAULT_VARIANTS_TOML).expect("embedded variants TOML must be valid")
    }
}
