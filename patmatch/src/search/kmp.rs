use tracing::trace;

use super::matcher::{to_symbols, Algorithm, PatternMatcher, SearchStats};

/// Knuth-Morris-Pratt search.
///
/// The overlap table lets the pattern cursor fall back after a mismatch
/// without ever moving the text cursor backwards, so a search examines each
/// text symbol a bounded number of times: O(N + M) overall.
#[derive(Debug, Clone)]
pub struct KmpMatcher {
    pattern: Vec<char>,
    overlap: Vec<usize>,
}

impl KmpMatcher {
    /// The overlap (failure) table: entry `k` is the length of the longest
    /// proper prefix of `pattern[..=k]` that is also a suffix of it.
    pub fn overlap_table(&self) -> &[usize] {
        &self.overlap
    }
}

/// Builds the overlap table with the prefix-function recurrence
fn build_overlap_table(pattern: &[char]) -> Vec<usize> {
    let mut table = vec![0; pattern.len()];

    // table[0] is always zero, start from 1
    for pos in 1..pattern.len() {
        let mut overlap = table[pos - 1];
        // Try to extend a shorter border until one fits or none is left
        while overlap > 0 && pattern[pos] != pattern[overlap] {
            overlap = table[overlap - 1];
        }
        if pattern[pos] == pattern[overlap] {
            overlap += 1;
        }
        table[pos] = overlap;
    }

    table
}

impl PatternMatcher for KmpMatcher {
    fn new(pattern: &str) -> Self {
        let pattern = to_symbols(pattern);
        let overlap = build_overlap_table(&pattern);
        trace!("Built overlap table {:?}", overlap);
        Self { pattern, overlap }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::Kmp
    }

    fn pattern(&self) -> &[char] {
        &self.pattern
    }

    fn find_symbols(&self, text: &[char], stats: &mut SearchStats) -> Option<usize> {
        let m = self.pattern.len();
        let n = text.len();
        if m == 0 {
            return Some(0);
        }

        let mut i = 0; // text cursor
        let mut j = 0; // pattern cursor

        while i < n {
            stats.alignments += 1;
            while j < m && i < n {
                stats.comparisons += 1;
                if text[i] != self.pattern[j] {
                    break;
                }
                i += 1;
                j += 1;
            }
            if j == m {
                return Some(i - m);
            }

            if j == 0 {
                i += 1;
            } else {
                j = self.overlap[j - 1];
            }
        }

        None
    }
}
