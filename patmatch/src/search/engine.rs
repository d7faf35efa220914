use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::boyer_moore::BoyerMooreMatcher;
use super::brute_force::BruteForceMatcher;
use super::kmp::KmpMatcher;
use super::matcher::{to_symbols, Algorithm, PatternMatcher, SearchStats};
use super::rabin_karp::RabinKarpMatcher;
use crate::cache::cached_matcher;
use crate::config::SearchConfig;
use crate::errors::SearchResult;
use crate::metrics::SearchMetrics;
use crate::results::{AlgorithmOutcome, SearchReport};

/// Preprocesses `pattern` for `algorithm`
pub fn build_matcher(algorithm: Algorithm, pattern: &str) -> Arc<dyn PatternMatcher> {
    match algorithm {
        Algorithm::BruteForce => Arc::new(BruteForceMatcher::new(pattern)),
        Algorithm::Kmp => Arc::new(KmpMatcher::new(pattern)),
        Algorithm::BoyerMoore => Arc::new(BoyerMooreMatcher::new(pattern)),
        Algorithm::RabinKarp => Arc::new(RabinKarpMatcher::new(pattern)),
    }
}

fn thread_pool(thread_count: NonZeroUsize) -> SearchResult<ThreadPool> {
    Ok(ThreadPoolBuilder::new()
        .num_threads(thread_count.get())
        .build()?)
}

/// Runs every configured algorithm on the configured pattern and text
pub fn search(config: &SearchConfig) -> SearchResult<SearchReport> {
    search_with_metrics(config, &SearchMetrics::new())
}

/// Same as [`search`], recording work and cache use into `metrics`
pub fn search_with_metrics(
    config: &SearchConfig,
    metrics: &SearchMetrics,
) -> SearchResult<SearchReport> {
    info!(
        "Searching for {:?} with {} algorithm(s)",
        config.pattern,
        config.algorithms.len()
    );

    let mut report = SearchReport::new(config.pattern.as_str(), config.text.as_str());
    if config.algorithms.is_empty() {
        debug!("No algorithms configured, returning empty report");
        return Ok(report);
    }

    // Decode once, every matcher reads the same symbols
    let text = to_symbols(&config.text);
    let pool = thread_pool(config.thread_count)?;

    let outcomes: Vec<AlgorithmOutcome> = pool.install(|| {
        config
            .algorithms
            .par_iter()
            .map(|&algorithm| {
                let matcher = cached_matcher(algorithm, &config.pattern, metrics);
                let mut stats = SearchStats::default();
                let index = matcher.find_symbols(&text, &mut stats);
                metrics.record_search(&stats);
                AlgorithmOutcome {
                    algorithm,
                    index,
                    stats,
                }
            })
            .collect()
    });

    for outcome in outcomes {
        report.add_outcome(outcome);
    }

    if let Some(reference) = report.reference() {
        for outcome in report.disagreements() {
            warn!(
                "{} reported {:?} but {} reported {:?}",
                outcome.algorithm, outcome.index, reference.algorithm, reference.index
            );
        }

        info!(
            "Search complete. First occurrence: {:?}",
            reference.index
        );
    }

    metrics.log_stats();

    Ok(report)
}

/// Searches many texts with one matcher, results in input order.
///
/// The matcher is shared by reference across the pool's threads.
pub fn search_many<S>(
    matcher: &dyn PatternMatcher,
    texts: &[S],
    thread_count: NonZeroUsize,
) -> SearchResult<Vec<Option<usize>>>
where
    S: AsRef<str> + Sync,
{
    debug!(
        "Searching {} texts with {} on {} thread(s)",
        texts.len(),
        matcher.algorithm(),
        thread_count
    );

    let pool = thread_pool(thread_count)?;
    let chunk_size = (texts.len() / thread_count.get()).clamp(16, 256);

    Ok(pool.install(|| {
        texts
            .par_chunks(chunk_size)
            .flat_map_iter(move |chunk| {
                chunk.iter().map(move |text| matcher.search(text.as_ref()))
            })
            .collect()
    }))
}
