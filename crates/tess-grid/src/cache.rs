//! Bounded least-recently-used memo for formatted display strings.

use std::num::NonZeroUsize;

use lru::LruCache;
use tess_core::field::DateFormatting;
use tess_core::value::CellValue;

/// Entries kept unless a capacity is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Key → display string store with LRU eviction and no expiry.
#[derive(Debug)]
pub struct DisplayValueCache {
    entries: LruCache<String, String>,
}

impl Default for DisplayValueCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl DisplayValueCache {
    /// A capacity of zero is raised to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership check that does not count as a use.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains(key)
    }

    /// Look up a value and mark it most recently used.
    pub fn get(&mut self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    /// Insert or replace a value, evicting the least recently used entry
    /// when a new key would exceed capacity.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if self.entries.contains(&key) {
            self.entries.put(key, value.into());
            return;
        }
        if let Some((evicted, _)) = self.entries.push(key, value.into()) {
            tracing::debug!(key = %evicted, "display cache evicted least recently used entry");
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Cache key for a formatted date: field id, raw value and every
/// formatting option that changes the output.
#[must_use]
pub fn date_cache_key(
    field_id: &str,
    value: Option<&CellValue>,
    formatting: &DateFormatting,
) -> String {
    let raw = value.map_or_else(|| "null".to_string(), CellValue::key_fragment);
    format!(
        "{field_id}-{raw}-{}-{}-{}",
        formatting.date, formatting.time, formatting.time_zone
    )
}
