// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bounded memo of chi-square scores (Tier 2: DYNAMIC).
//!
//! The Vigenère search frequently produces the same candidate plaintext from
//! different keys (for example, key `AA` decodes identically to key `A`).
//! The cache maps an exact plaintext string to its previously computed
//! chi-square value so those repeats skip recomputation.
//!
//! Entries are write-once: never updated, never evicted, stored in
//! first-seen order. Once [`MAX_CACHE_ENTRIES`] entries are live, inserts
//! silently no-op and new plaintexts fall back to full recomputation on
//! every lookup. Lookup is a linear scan with exact string equality; the
//! bounded size keeps that acceptable.
//!
//! The cache is owned by a single cracking run and never shared across runs.

/// Maximum number of live cache entries.
pub const MAX_CACHE_ENTRIES: usize = 1000;

/// Write-once, insertion-ordered chi-square memo.
#[derive(Debug, Default)]
pub struct ScoreCache {
    entries: Vec<(String, f64)>,
}

impl ScoreCache {
    pub fn new() -> Self {
        ScoreCache::default()
    }

    /// Look up the cached chi-square for an exact plaintext string.
    ///
    /// First match wins; only one entry per distinct string is ever stored,
    /// so this is unambiguous.
    pub fn lookup(&self, text: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(cached, _)| cached == text)
            .map(|&(_, score)| score)
    }

    /// Record a freshly computed chi-square.
    ///
    /// Appends while the cache has capacity; silently no-ops once full.
    /// Callers check [`lookup`](Self::lookup) first, so duplicates are never
    /// stored.
    pub fn insert(&mut self, text: &str, score: f64) {
        if self.entries.len() < MAX_CACHE_ENTRIES {
            self.entries.push((text.to_owned(), score));
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once inserts have become no-ops.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_CACHE_ENTRIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_inserted_value() {
        let mut cache = ScoreCache::new();
        assert_eq!(cache.lookup("HELLO"), None);

        cache.insert("HELLO", 42.5);
        assert_eq!(cache.lookup("HELLO"), Some(42.5));
        assert_eq!(cache.len(), 1);

        // A second lookup is side-effect free.
        assert_eq!(cache.lookup("HELLO"), Some(42.5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let mut cache = ScoreCache::new();
        cache.insert("HELLO", 1.0);
        assert_eq!(cache.lookup("hello"), None);
        assert_eq!(cache.lookup("HELLO "), None);
    }

    #[test]
    fn test_insert_no_ops_when_full() {
        let mut cache = ScoreCache::new();
        for i in 0..MAX_CACHE_ENTRIES {
            cache.insert(&format!("text-{}", i), i as f64);
        }
        assert!(cache.is_full());
        assert_eq!(cache.len(), MAX_CACHE_ENTRIES);

        cache.insert("overflow", 99.0);
        assert_eq!(cache.len(), MAX_CACHE_ENTRIES);
        assert_eq!(cache.lookup("overflow"), None);

        // Existing entries still answer.
        assert_eq!(cache.lookup("text-0"), Some(0.0));
        assert_eq!(
            cache.lookup(&format!("text-{}", MAX_CACHE_ENTRIES - 1)),
            Some((MAX_CACHE_ENTRIES - 1) as f64)
        );
    }
}
