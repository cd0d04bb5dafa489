//! Pool registry shared by every round
//!
//! Holds the native and foreign pools, their membership sets and the foreign
//! definitions. Built once at startup and immutable afterwards.

use super::embedded::NATIVE_POOL;
use super::pool::{DefinitionMap, ForeignDictionary, WordPool};
use crate::core::{Mode, WORD_LENGTHS, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use serde_json::Value;
use tracing::debug;

/// A pool together with one membership set per length
#[derive(Debug, Clone)]
struct IndexedPool {
    pool: WordPool,
    sets: FxHashMap<usize, FxHashSet<Word>>,
}

impl IndexedPool {
    fn new(pool: WordPool) -> Self {
        let sets = WORD_LENGTHS
            .iter()
            .map(|&length| (length, pool.membership_set(length)))
            .collect();
        Self { pool, sets }
    }
}

#[derive(Debug, Clone)]
pub struct PoolRegistry {
    native: IndexedPool,
    foreign: IndexedPool,
    definitions: DefinitionMap,
}

impl PoolRegistry {
    #[must_use]
    pub fn new(native: WordPool, foreign: Option<ForeignDictionary>) -> Self {
        let (foreign_pool, definitions) = foreign
            .map(|dictionary| (dictionary.pool, dictionary.definitions))
            .unwrap_or_default();

        debug!(
            native_words = native.total_words(),
            foreign_words = foreign_pool.total_words(),
            "built word pool registry"
        );

        Self {
            native: IndexedPool::new(native),
            foreign: IndexedPool::new(foreign_pool),
            definitions,
        }
    }

    /// Registry with the embedded native pool and no foreign words
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(Self::default_native_pool(), None)
    }

    /// Build from optional injected JSON data
    ///
    /// A native override replaces the embedded pool entirely, even when it
    /// normalizes to nothing; a JSON `null` counts as no override. A foreign
    /// dataset that normalizes to no words leaves the foreign pool empty.
    #[must_use]
    pub fn from_injected(native_override: Option<&Value>, foreign: Option<&Value>) -> Self {
        let native = native_override
            .filter(|value| !value.is_null())
            .map_or_else(Self::default_native_pool, WordPool::normalize);
        let foreign = foreign.and_then(ForeignDictionary::normalize);
        Self::new(native, foreign)
    }

    #[must_use]
    pub fn default_native_pool() -> WordPool {
        WordPool::from_entries(NATIVE_POOL)
    }

    fn indexed(&self, mode: Mode) -> &IndexedPool {
        match mode {
            Mode::Native => &self.native,
            Mode::Foreign => &self.foreign,
        }
    }

    /// Pool words for a mode and length, in insertion order
    #[must_use]
    pub fn pool(&self, mode: Mode, length: usize) -> &[Word] {
        self.indexed(mode).pool.words(length)
    }

    #[must_use]
    pub fn membership_set(&self, mode: Mode, length: usize) -> Option<&FxHashSet<Word>> {
        self.indexed(mode).sets.get(&length)
    }

    /// O(1) check whether `word` is a pool word for the mode at `length`
    #[must_use]
    pub fn contains(&self, mode: Mode, length: usize, word: &Word) -> bool {
        self.membership_set(mode, length)
            .is_some_and(|set| set.contains(word))
    }

    /// Definition of a foreign word
    #[must_use]
    pub fn definition(&self, word: &Word) -> Option<&str> {
        self.definitions.get(word)
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
