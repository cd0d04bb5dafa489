//! Memoized local dictionary
//!
//! The dictionary is loaded at most once per [`LocalDictionary`]. Callers that
//! arrive while the load is in flight wait for the same result, and both
//! success and failure are kept for the lifetime of the cache.

use super::{DictionaryCheck, DictionaryLookup, DictionarySource};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

/// Observable state of the cache
#[derive(Debug, Clone)]
pub enum CacheState {
    Unloaded,
    Loading,
    Ready(Arc<DictionaryLookup>),
    Failed,
}

/// Marks a fetch as in flight until dropped, including when the load
/// future is cancelled
struct LoadingFlag<'a>(&'a AtomicBool);

impl<'a> LoadingFlag<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct LocalDictionary {
    bundled: Option<Arc<DictionaryLookup>>,
    source: Box<dyn DictionarySource>,
    lookup: OnceCell<Arc<DictionaryLookup>>,
    loading: AtomicBool,
}

impl LocalDictionary {
    pub fn new(source: Box<dyn DictionarySource>) -> Self {
        Self {
            bundled: None,
            source,
            lookup: OnceCell::new(),
            loading: AtomicBool::new(false),
        }
    }

    /// Prefer an injected bundled dictionary over the external resource
    ///
    /// Ignored when the data normalizes to no words, in which case the
    /// external resource is fetched as usual.
    #[must_use]
    pub fn with_bundled(mut self, raw: &Value) -> Self {
        let lookup = DictionaryLookup::from_bundled(raw);
        if lookup.is_available() {
            debug!(words = lookup.word_count(), "using bundled dictionary");
            self.bundled = Some(Arc::new(lookup));
        }
        self
    }

    /// Get the lookup, loading it on first use
    pub async fn load(&self) -> Arc<DictionaryLookup> {
        self.lookup.get_or_init(|| self.resolve()).await.clone()
    }

    async fn resolve(&self) -> Arc<DictionaryLookup> {
        if let Some(bundled) = &self.bundled {
            return Arc::clone(bundled);
        }

        let _loading = LoadingFlag::raise(&self.loading);
        let lookup = match self.source.fetch().await {
            Ok(bytes) => {
                let lookup = DictionaryLookup::from_dic_bytes(&bytes);
                debug!(
                    location = %self.source.location(),
                    words = lookup.word_count(),
                    "loaded local dictionary"
                );
                lookup
            }
            Err(err) => {
                warn!(
                    location = %self.source.location(),
                    error = %err,
                    "local dictionary unavailable"
                );
                DictionaryLookup::unavailable()
            }
        };

        Arc::new(lookup)
    }

    #[must_use]
    pub fn state(&self) -> CacheState {
        match self.lookup.get() {
            Some(lookup) if lookup.is_available() => CacheState::Ready(Arc::clone(lookup)),
            Some(_) => CacheState::Failed,
            None if self.loading.load(Ordering::Acquire) => CacheState::Loading,
            None => CacheState::Unloaded,
        }
    }

    /// Check a word, loading the dictionary if needed
    pub async fn check_word(&self, word: &str) -> DictionaryCheck {
        self.load().await.check_word(word)
    }
}
