//! Word pool normalization
//!
//! Raw pools arrive as a mapping from declared length to an arbitrary
//! sequence of entries (embedded defaults or injected JSON). Every entry is
//! coerced, trimmed, uppercased and validated; anything malformed is dropped
//! entry by entry, never as an error.

use crate::core::{WORD_LENGTHS, Word, is_supported_length};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Text shown for foreign words that were supplied without a definition
pub const MISSING_DEFINITION: &str = "Brak definicji dla tego hasła.";

/// Ordered, de-duplicated words per supported length
///
/// Always holds a (possibly empty) bucket for each of 4, 5, 6 and 7.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordPool {
    buckets: BTreeMap<usize, Vec<Word>>,
}

impl Default for WordPool {
    fn default() -> Self {
        Self {
            buckets: WORD_LENGTHS.iter().map(|&length| (length, Vec::new())).collect(),
        }
    }
}

impl WordPool {
    /// Build a pool from (declared length, raw entries) pairs
    ///
    /// # Examples
    /// ```
    /// use slowko::wordlists::WordPool;
    ///
    /// let pool = WordPool::from_entries(&[(4, &["woda", "WODA", "kot"][..])]);
    /// assert_eq!(pool.words(4).len(), 1);
    /// assert_eq!(pool.words(4)[0].text(), "WODA");
    /// ```
    #[must_use]
    pub fn from_entries(entries: &[(usize, &[&str])]) -> Self {
        let mut pool = Self::default();
        for &(length, raw_words) in entries {
            pool.extend_bucket(length, raw_words.iter().map(|&raw| raw.to_string()));
        }
        pool
    }

    /// Normalize an injected pool given as JSON
    ///
    /// Expects an object whose keys are lengths and whose values are arrays.
    /// Keys outside 4-7 and non-array values are skipped. Array entries are
    /// coerced to text (`null` becomes empty, numbers and booleans their
    /// textual form) before validation.
    #[must_use]
    pub fn normalize(raw: &Value) -> Self {
        let mut pool = Self::default();
        let Some(object) = raw.as_object() else {
            return pool;
        };

        for (raw_length, raw_words) in object {
            let Ok(length) = raw_length.trim().parse::<usize>() else {
                continue;
            };
            let Some(raw_words) = raw_words.as_array() else {
                continue;
            };
            pool.extend_bucket(length, raw_words.iter().map(coerce_to_string));
        }

        pool
    }

    fn extend_bucket(&mut self, length: usize, raw_words: impl Iterator<Item = String>) {
        if !is_supported_length(length) {
            return;
        }
        let bucket = self.buckets.entry(length).or_default();
        let mut seen: FxHashSet<String> =
            bucket.iter().map(|word| word.text().to_string()).collect();

        for raw in raw_words {
            let Ok(word) = Word::with_length(&raw, length) else {
                continue;
            };
            if seen.insert(word.text().to_string()) {
                bucket.push(word);
            }
        }
    }

    /// Words of the given length in insertion order
    #[must_use]
    pub fn words(&self, length: usize) -> &[Word] {
        self.buckets.get(&length).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_words() == 0
    }

    /// Set view of one length bucket for O(1) membership checks
    #[must_use]
    pub fn membership_set(&self, length: usize) -> FxHashSet<Word> {
        self.words(length).iter().cloned().collect()
    }
}

/// Foreign word → definition text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionMap(FxHashMap<String, String>);

impl DefinitionMap {
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&str> {
        self.0.get(word.text()).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Normalized foreign word pool with a definition for every word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignDictionary {
    pub pool: WordPool,
    pub definitions: DefinitionMap,
}

impl ForeignDictionary {
    /// Normalize an injected `{wordsByLength, definitionsByWord}` dataset
    ///
    /// Returns `None` when the source is not an object or its pool normalizes
    /// to zero words. Definitions are also read from `definitions` or
    /// `definitionByWord` when `definitionsByWord` is absent.
    #[must_use]
    pub fn normalize(source: &Value) -> Option<Self> {
        let object = source.as_object()?;

        let pool = WordPool::normalize(object.get("wordsByLength").unwrap_or(&Value::Null));
        if pool.is_empty() {
            return None;
        }

        let pool_sets: FxHashMap<usize, FxHashSet<Word>> = WORD_LENGTHS
            .iter()
            .map(|&length| (length, pool.membership_set(length)))
            .collect();

        let raw_definitions = ["definitionsByWord", "definitions", "definitionByWord"]
            .iter()
            .find_map(|key| object.get(*key).filter(|value| !value.is_null()));

        let mut definitions: FxHashMap<String, String> = FxHashMap::default();
        if let Some(raw_definitions) = raw_definitions.and_then(Value::as_object) {
            for (raw_word, raw_definition) in raw_definitions {
                let Ok(word) = Word::new(raw_word) else {
                    continue;
                };
                let in_pool = pool_sets
                    .get(&word.length())
                    .is_some_and(|set| set.contains(&word));
                if !in_pool {
                    continue;
                }

                let definition = raw_definition
                    .as_str()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())
                    .unwrap_or(MISSING_DEFINITION);
                definitions.insert(word.text().to_string(), definition.to_string());
            }
        }

        for length in WORD_LENGTHS {
            for word in pool.words(length) {
                definitions
                    .entry(word.text().to_string())
                    .or_insert_with(|| MISSING_DEFINITION.to_string());
            }
        }

        Some(Self {
            pool,
            definitions: DefinitionMap(definitions),
        })
    }
}

/// Coerce an arbitrary JSON entry to text the way loosely-typed data expects
pub(crate) fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn normalize_filters_and_dedups() {
        let raw = json!({
            "4": [" woda ", "WODA", "Domy", "kot", "ko1y", null, 1234, "żaba"],
            "5": ["radia", "RADIA", "radio"],
        });
        let pool = WordPool::normalize(&raw);

        assert_eq!(texts(pool.words(4)), vec!["WODA", "DOMY", "ŻABA"]);
        assert_eq!(texts(pool.words(5)), vec!["RADIA", "RADIO"]);
        assert!(pool.words(6).is_empty());
        assert_eq!(pool.total_words(), 5);
    }

    #[test]
    fn normalize_drops_unsupported_lengths_and_non_arrays() {
        let raw = json!({
            "3": ["KOT"],
            "8": ["JABŁONIE"],
            "abc": ["WODA"],
            "6": "SZKOŁA",
            "7": ["wakacje"],
        });
        let pool = WordPool::normalize(&raw);

        assert_eq!(pool.total_words(), 1);
        assert_eq!(texts(pool.words(7)), vec!["WAKACJE"]);
        assert!(pool.words(3).is_empty());
    }

    #[test]
    fn normalize_word_must_match_declared_length() {
        let raw = json!({ "5": ["WODA", "OCEANY", "OCEAN"] });
        let pool = WordPool::normalize(&raw);
        assert_eq!(texts(pool.words(5)), vec!["OCEAN"]);
    }

    #[test]
    fn normalize_non_object_is_empty() {
        assert!(WordPool::normalize(&json!(["WODA"])).is_empty());
        assert!(WordPool::normalize(&Value::Null).is_empty());
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = json!({
            "4": ["łąka", "ŁĄKA", "rowy", "x"],
            "6": ["jesień", "Słońce", "bad!!!"],
            "9": ["ignored"],
        });
        let once = WordPool::normalize(&raw);
        let twice = WordPool::normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn from_entries_matches_normalize() {
        let from_entries = WordPool::from_entries(&[(4, &["woda", "jabłonie"][..]), (9, &["x"][..])]);
        let normalized = WordPool::normalize(&json!({ "4": ["woda", "jabłonie"] }));
        assert_eq!(from_entries, normalized);
    }

    #[test]
    fn foreign_dictionary_builds_definitions() {
        let source = json!({
            "wordsByLength": { "5": ["kebab", "sushi"], "6": ["brunch"] },
            "definitionsByWord": {
                "kebab": "  danie z mięsa  ",
                "SUSHI": "",
                "pizza": "not in the pool",
                "brunch": 42,
            },
        });
        let foreign = ForeignDictionary::normalize(&source).unwrap();

        assert_eq!(foreign.pool.total_words(), 3);
        let get = |text: &str| {
            foreign
                .definitions
                .get(&Word::new(text).unwrap())
                .map(str::to_string)
        };
        assert_eq!(get("KEBAB").as_deref(), Some("danie z mięsa"));
        assert_eq!(get("SUSHI").as_deref(), Some(MISSING_DEFINITION));
        assert_eq!(get("BRUNCH").as_deref(), Some(MISSING_DEFINITION));
        assert_eq!(get("PIZZA"), None);
        assert_eq!(foreign.definitions.len(), 3);
    }

    #[test]
    fn foreign_dictionary_alternate_definition_key() {
        let source = json!({
            "wordsByLength": { "4": ["taco"] },
            "definitions": { "taco": "placek" },
        });
        let foreign = ForeignDictionary::normalize(&source).unwrap();
        assert_eq!(
            foreign.definitions.get(&Word::new("TACO").unwrap()),
            Some("placek")
        );
    }

    #[test]
    fn foreign_dictionary_absent_when_empty() {
        assert!(ForeignDictionary::normalize(&Value::Null).is_none());
        assert!(ForeignDictionary::normalize(&json!("text")).is_none());
        assert!(ForeignDictionary::normalize(&json!({ "wordsByLength": { "4": ["x"] } })).is_none());
        assert!(ForeignDictionary::normalize(&json!({ "definitionsByWord": {} })).is_none());
    }
}
