use crate::error::Result;
use crate::patterns::{PreservePattern, Replacer, TrimPattern};
use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};
use std::sync::{Arc, Mutex, PoisonError};

/// Storage behind the lock: an append-only arena of compiled patterns plus
/// an index from canonical key to arena slot.
struct CacheInner<T> {
    entries: SlotMap<DefaultKey, Arc<T>>,
    index: HashMap<String, DefaultKey>,
}

/// Grow-only memo of compiled patterns keyed by a canonical string.
///
/// Entries are never evicted or mutated once built. Builds run under the
/// lock, so each key is compiled at most once per cache.
pub(crate) struct PatternCache<T> {
    kind: &'static str,
    inner: Mutex<CacheInner<T>>,
}

impl<T> PatternCache<T> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            inner: Mutex::new(CacheInner {
                entries: SlotMap::new(),
                index: HashMap::new(),
            }),
        }
    }

    /// Returns the pattern cached under `key`, building it first if absent.
    ///
    /// A failed build caches nothing.
    pub(crate) fn get_or_build<F>(&self, key: &str, build: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        // Entries are immutable, so a poisoned lock still guards valid data.
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(&slot) = inner.index.get(key) {
            return Ok(Arc::clone(&inner.entries[slot]));
        }

        let pattern = Arc::new(build()?);
        let slot = inner.entries.insert(Arc::clone(&pattern));
        inner.index.insert(key.to_string(), slot);
        log::debug!("compiled {} pattern for key {:?}", self.kind, key);

        Ok(pattern)
    }

    /// Number of compiled entries.
    pub(crate) fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

/// The three independent caches owned by one slugifier.
pub(crate) struct PatternCaches {
    pub preserve: PatternCache<PreservePattern>,
    pub trim: PatternCache<TrimPattern>,
    pub replacers: PatternCache<Replacer>,
}

impl PatternCaches {
    pub(crate) fn new() -> Self {
        Self {
            preserve: PatternCache::new("preserve"),
            trim: PatternCache::new("trim"),
            replacers: PatternCache::new("replacer"),
        }
    }
}
