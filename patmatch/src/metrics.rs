use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::search::matcher::SearchStats;

/// Aggregates search work and cache behaviour across many searches.
///
/// Matchers never touch this; the engine records each call's
/// [`SearchStats`] after the call returns. Cloning shares the counters.
#[derive(Debug, Clone)]
pub struct SearchMetrics {
    searches: Arc<AtomicU64>,
    comparisons: Arc<AtomicU64>,
    alignments: Arc<AtomicU64>,
    hash_matches: Arc<AtomicU64>,
    spurious_hits: Arc<AtomicU64>,

    // Matcher cache
    cache_hits: Arc<AtomicU64>,
    cache_misses: Arc<AtomicU64>,
}

impl SearchMetrics {
    /// Creates a new SearchMetrics instance
    pub fn new() -> Self {
        Self {
            searches: Arc::new(AtomicU64::new(0)),
            comparisons: Arc::new(AtomicU64::new(0)),
            alignments: Arc::new(AtomicU64::new(0)),
            hash_matches: Arc::new(AtomicU64::new(0)),
            spurious_hits: Arc::new(AtomicU64::new(0)),
            cache_hits: Arc::new(AtomicU64::new(0)),
            cache_misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records the work done by one search call
    pub fn record_search(&self, stats: &SearchStats) {
        let searches = self.searches.fetch_add(1, Ordering::Relaxed) + 1;
        self.comparisons
            .fetch_add(stats.comparisons, Ordering::Relaxed);
        self.alignments
            .fetch_add(stats.alignments, Ordering::Relaxed);
        self.hash_matches
            .fetch_add(stats.hash_matches, Ordering::Relaxed);
        self.spurious_hits
            .fetch_add(stats.spurious_hits, Ordering::Relaxed);
        debug!(
            "Search {} recorded: {} comparisons over {} alignments",
            searches, stats.comparisons, stats.alignments
        );
    }

    /// Records a matcher cache lookup
    pub fn record_cache_operation(&self, hit: bool) {
        if hit {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.cache_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> u64 {
        self.cache_misses.load(Ordering::Relaxed)
    }

    /// Gets a snapshot of all counters
    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            comparisons: self.comparisons.load(Ordering::Relaxed),
            alignments: self.alignments.load(Ordering::Relaxed),
            hash_matches: self.hash_matches.load(Ordering::Relaxed),
            spurious_hits: self.spurious_hits.load(Ordering::Relaxed),
            cache_hits: self.cache_hits(),
            cache_misses: self.cache_misses(),
        }
    }

    /// Logs a summary of all counters
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Search stats:\n\
             Searches: {}\n\
             Comparisons: {}\n\
             Alignments: {}\n\
             Hash matches/spurious: {}/{}\n\
             Matcher cache hits/misses: {}/{}",
            stats.searches,
            stats.comparisons,
            stats.alignments,
            stats.hash_matches,
            stats.spurious_hits,
            stats.cache_hits,
            stats.cache_misses
        );
    }
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of [`SearchMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub searches: u64,
    pub comparisons: u64,
    pub alignments: u64,
    pub hash_matches: u64,
    pub spurious_hits: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
}
