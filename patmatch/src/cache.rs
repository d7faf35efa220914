use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::metrics::SearchMetrics;
use crate::search::engine::build_matcher;
use crate::search::matcher::{Algorithm, PatternMatcher};

/// Capacity of the process-wide matcher cache
pub const MAX_CACHED_MATCHERS: usize = 1024;

static MATCHER_CACHE: Lazy<MatcherCache> =
    Lazy::new(|| MatcherCache::with_capacity(MAX_CACHED_MATCHERS));

/// Preprocessed matchers keyed by algorithm and pattern.
///
/// Holds at most `capacity` entries. A miss on a full cache drops every entry
/// before inserting the new one; matchers already handed out stay valid.
#[derive(Debug)]
pub struct MatcherCache {
    entries: DashMap<(Algorithm, String), Arc<dyn PatternMatcher>>,
    capacity: usize,
}

impl MatcherCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Returns the matcher for `pattern`, preprocessing it only on first use.
    ///
    /// Matchers are immutable, so handing the same instance to every caller
    /// cannot change any search result.
    pub fn get_or_build(
        &self,
        algorithm: Algorithm,
        pattern: &str,
        metrics: &SearchMetrics,
    ) -> Arc<dyn PatternMatcher> {
        let key = (algorithm, pattern.to_string());
        if let Some(entry) = self.entries.get(&key) {
            metrics.record_cache_operation(true);
            return Arc::clone(entry.value());
        }

        metrics.record_cache_operation(false);
        trace!("Matcher cache miss for {} on {:?}", algorithm, pattern);
        if self.entries.len() >= self.capacity {
            debug!("Matcher cache reached {} entries, clearing", self.capacity);
            self.entries.clear();
        }

        // Another thread may have raced us here; keep whichever landed first
        let matcher = self
            .entries
            .entry(key)
            .or_insert_with(|| build_matcher(algorithm, pattern));
        Arc::clone(matcher.value())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

/// Looks `pattern` up in the process-wide cache, see [`MatcherCache::get_or_build`]
pub fn cached_matcher(
    algorithm: Algorithm,
    pattern: &str,
    metrics: &SearchMetrics,
) -> Arc<dyn PatternMatcher> {
    MATCHER_CACHE.get_or_build(algorithm, pattern, metrics)
}

/// Number of matchers in the process-wide cache
pub fn len() -> usize {
    MATCHER_CACHE.len()
}

/// Drops every matcher in the process-wide cache
pub fn clear() {
    MATCHER_CACHE.clear();
}
