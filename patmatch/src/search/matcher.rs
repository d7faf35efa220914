use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{SearchError, SearchResult};

/// The four first-occurrence search algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[serde(alias = "brute")]
    BruteForce,
    Kmp,
    #[serde(alias = "bm")]
    BoyerMoore,
    #[serde(alias = "rk")]
    RabinKarp,
}

impl Algorithm {
    /// Every algorithm, brute force (the oracle) first
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BruteForce,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::RabinKarp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute-force",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::RabinKarp => "rabin-karp",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brute-force" | "brute" => Ok(Algorithm::BruteForce),
            "kmp" => Ok(Algorithm::Kmp),
            "boyer-moore" | "bm" => Ok(Algorithm::BoyerMoore),
            "rabin-karp" | "rk" => Ok(Algorithm::RabinKarp),
            _ => Err(SearchError::unknown_algorithm(s)),
        }
    }
}

/// Work counters for a single search call.
///
/// Stats are owned by the caller of [`PatternMatcher::find_symbols`], so a
/// matcher never carries them from one search to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Symbol equality tests between pattern and text
    pub comparisons: u64,
    /// Window positions examined
    pub alignments: u64,
    /// Windows whose rolling hash equalled the pattern hash
    pub hash_matches: u64,
    /// Hash matches rejected by literal verification
    pub spurious_hits: u64,
}

/// Decodes a string into the symbol sequence every matcher works on
pub fn to_symbols(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Preprocess a pattern once, then report its first occurrence in any text.
///
/// Implementations are immutable after construction. All mutable state of a
/// search (cursors, rolling hashes, counters) lives in the call, which is what
/// makes the `Send + Sync` bound free: one matcher can serve any number of
/// threads without locking.
///
/// The empty pattern matches at index 0 in every text, the empty text
/// included. Indices count symbols (`char`s), not bytes.
pub trait PatternMatcher: Send + Sync + fmt::Debug {
    /// Preprocesses `pattern`
    fn new(pattern: &str) -> Self
    where
        Self: Sized;

    /// Preprocesses a pattern given as raw bytes, rejecting invalid UTF-8
    fn from_utf8(bytes: &[u8]) -> SearchResult<Self>
    where
        Self: Sized,
    {
        let pattern = std::str::from_utf8(bytes)
            .map_err(|e| SearchError::invalid_pattern(e.to_string()))?;
        Ok(Self::new(pattern))
    }

    /// Which algorithm this matcher runs
    fn algorithm(&self) -> Algorithm;

    /// The preprocessed pattern
    fn pattern(&self) -> &[char];

    /// Runs the algorithm over `text`, counting its work into `stats`
    fn find_symbols(&self, text: &[char], stats: &mut SearchStats) -> Option<usize>;

    /// Index of the first occurrence of the pattern in `text`
    fn search(&self, text: &str) -> Option<usize> {
        self.search_symbols(&to_symbols(text))
    }

    /// Same as [`search`](Self::search) for an already decoded text
    fn search_symbols(&self, text: &[char]) -> Option<usize> {
        self.find_symbols(text, &mut SearchStats::default())
    }

    /// Searches `text` and returns the work it took alongside the result
    fn search_with_stats(&self, text: &str) -> (Option<usize>, SearchStats) {
        let mut stats = SearchStats::default();
        let found = self.find_symbols(&to_symbols(text), &mut stats);
        (found, stats)
    }
}

/// Compares `pattern` against the window of `text` starting at `start`.
///
/// Callers guarantee that the window fits inside `text`.
pub(crate) fn window_matches(
    pattern: &[char],
    text: &[char],
    start: usize,
    stats: &mut SearchStats,
) -> bool {
    for (j, &symbol) in pattern.iter().enumerate() {
        stats.comparisons += 1;
        if text[start + j] != symbol {
            return false;
        }
    }
    true
}
