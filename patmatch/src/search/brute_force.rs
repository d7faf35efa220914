use tracing::trace;

use super::matcher::{to_symbols, window_matches, Algorithm, PatternMatcher, SearchStats};

/// Tries every alignment, comparing left to right.
///
/// O(N·M) comparisons in the worst case. Slow, but obviously correct, which
/// is why the other matchers are tested against it.
#[derive(Debug, Clone)]
pub struct BruteForceMatcher {
    pattern: Vec<char>,
}

impl PatternMatcher for BruteForceMatcher {
    fn new(pattern: &str) -> Self {
        let pattern = to_symbols(pattern);
        trace!("Brute force matcher for pattern of {} symbols", pattern.len());
        Self { pattern }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::BruteForce
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
        if m > n {
            return None;
        }

        for i in 0..=n - m {
            stats.alignments += 1;
            if window_matches(&self.pattern, text, i, stats) {
                return Some(i);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_occurrence() {
        let matcher = BruteForceMatcher::new("abc");
        assert_eq!(matcher.search("xxabcxx"), Some(2));
        assert_eq!(matcher.search("abcabc"), Some(0));
        assert_eq!(matcher.search("xxxxxxx"), None);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let matcher = BruteForceMatcher::new("zzz");
        assert_eq!(matcher.search(""), None);
        assert_eq!(matcher.search("zz"), None);
    }

    #[test]
    fn test_empty_pattern() {
        let matcher = BruteForceMatcher::new("");
        assert_eq!(matcher.search(""), Some(0));
        assert_eq!(matcher.search("abc"), Some(0));
    }

    #[test]
    fn test_worst_case_comparisons() {
        // Every alignment matches all but the last symbol
        let matcher = BruteForceMatcher::new("aaab");
        let (found, stats) = matcher.search_with_stats("aaaaaaa");
        assert_eq!(found, None);
        assert_eq!(stats.alignments, 4);
        assert_eq!(stats.comparisons, 16);
    }

    #[test]
    fn test_indices_count_chars() {
        let matcher = BruteForceMatcher::new("él");
        assert_eq!(matcher.search("caféél"), Some(4));
    }
}
