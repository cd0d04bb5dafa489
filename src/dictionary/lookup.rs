//! Length-indexed dictionary lookup
//!
//! Built either from an injected bundled word list or from a Hunspell-style
//! `.dic` file encoded in ISO-8859-2:
//!
//! ```text
//! 3
//! # comment
//! woda/MN
//! Kraków/MNS  po:nazwa
//! ```
//!
//! An optional purely numeric first line (the entry count) is skipped, as are
//! empty and `#` lines. Only the first token before `/` is used.

use super::DictionaryCheck;
use crate::core::{WORD_LENGTHS, is_alphabetic_word, is_supported_length, normalize_text};
use crate::wordlists::pool::coerce_to_string;
use encoding_rs::ISO_8859_2;
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryLookup {
    available: bool,
    words_by_length: FxHashMap<usize, FxHashSet<String>>,
}

impl DictionaryLookup {
    /// Lookup for a source that could not be loaded
    #[must_use]
    pub fn unavailable() -> Self {
        Self::default()
    }

    fn empty_available() -> Self {
        Self {
            available: true,
            words_by_length: WORD_LENGTHS
                .iter()
                .map(|&length| (length, FxHashSet::default()))
                .collect(),
        }
    }

    fn insert(&mut self, normalized: String) {
        let length = normalized.chars().count();
        if !is_supported_length(length) || !is_alphabetic_word(&normalized) {
            return;
        }
        self.words_by_length
            .entry(length)
            .or_default()
            .insert(normalized);
    }

    /// Build from an injected bundled dictionary (`{"4": [...], "5": [...]}`)
    ///
    /// Entries must match their declared length. A dataset with no usable
    /// words yields an unavailable lookup.
    #[must_use]
    pub fn from_bundled(source: &Value) -> Self {
        let Some(object) = source.as_object() else {
            return Self::unavailable();
        };

        let mut lookup = Self::empty_available();
        for length in WORD_LENGTHS {
            let Some(raw_words) = object.get(&length.to_string()).and_then(Value::as_array)
            else {
                continue;
            };
            for raw in raw_words {
                let word = normalize_text(&coerce_to_string(raw));
                if word.chars().count() == length {
                    lookup.insert(word);
                }
            }
        }

        if lookup.word_count() == 0 {
            Self::unavailable()
        } else {
            lookup
        }
    }

    /// Decode an ISO-8859-2 `.dic` file and parse it
    #[must_use]
    pub fn from_dic_bytes(bytes: &[u8]) -> Self {
        let (content, _had_errors) = ISO_8859_2.decode_without_bom_handling(bytes);
        Self::parse_dic(&content)
    }

    /// Parse already-decoded `.dic` content
    #[must_use]
    pub fn parse_dic(content: &str) -> Self {
        let mut lookup = Self::empty_available();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if index == 0 && line.bytes().all(|b| b.is_ascii_digit()) {
                continue;
            }

            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            let raw_word = token.split('/').next().unwrap_or_default();
            if raw_word.is_empty() {
                continue;
            }

            lookup.insert(raw_word.to_uppercase());
        }

        lookup
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words_by_length.values().map(FxHashSet::len).sum()
    }

    /// Check a word against the length bucket
    ///
    /// Tries the word as given, fully lowercased, and with only the first
    /// letter kept as is, since source dictionaries store mixed case.
    #[must_use]
    pub fn check_word(&self, word: &str) -> DictionaryCheck {
        if !self.available {
            return DictionaryCheck::UNAVAILABLE;
        }

        let Some(entries) = self.words_by_length.get(&word.chars().count()) else {
            return DictionaryCheck::checked(false);
        };

        let lowercase = word.to_lowercase();
        let mut chars = word.chars();
        let title_case = chars
            .next()
            .map(|first| format!("{first}{}", chars.as_str().to_lowercase()))
            .unwrap_or_default();

        let valid = [word, lowercase.as_str(), title_case.as_str()]
            .iter()
            .any(|candidate| entries.contains(*candidate));
        DictionaryCheck::checked(valid)
    }
}
