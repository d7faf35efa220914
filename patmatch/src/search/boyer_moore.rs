//! Boyer-Moore search with the bad-character rule only.
//!
//! The window slides left to right but is compared right to left. On a
//! mismatch the bad-character table says how far the window can jump: if the
//! offending symbol does not occur in the pattern at all, the window moves past
//! the mismatch entirely, otherwise it moves so that the rightmost occurrence
//! of that symbol lines up with it. The strong good-suffix rule is not
//! implemented.
//!
//! Which text symbol is looked up in the table is selectable through
//! [`BadCharacterRule`]:
//!
//! ```rust,ignore
//! let matcher = BoyerMooreMatcher::new("abc");
//! assert_eq!(matcher.search("xxabcxx"), Some(2));
//!
//! let legacy = BoyerMooreMatcher::with_rule("abc", BadCharacterRule::WindowStart);
//! assert_eq!(legacy.search("xxabcxx"), None); // skipped past the match
//! ```
use std::collections::HashMap;
use tracing::trace;

use super::matcher::{to_symbols, Algorithm, PatternMatcher, SearchStats};

/// Text symbol used as the bad-character table key after a mismatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadCharacterRule {
    /// The text symbol that failed to match. Never skips an occurrence.
    #[default]
    Mismatch,
    /// The text symbol at the start of the current window.
    ///
    /// Kept for reproducing older output. It can jump over real occurrences,
    /// e.g. it reports no match for "abc" in "xxabcxx".
    WindowStart,
}

#[derive(Debug, Clone)]
pub struct BoyerMooreMatcher {
    pattern: Vec<char>,
    /// Rightmost index of each symbol in the pattern
    right: HashMap<char, usize>,
    rule: BadCharacterRule,
}

impl BoyerMooreMatcher {
    /// Preprocesses `pattern` for the given bad-character rule
    pub fn with_rule(pattern: &str, rule: BadCharacterRule) -> Self {
        let pattern = to_symbols(pattern);
        let right = build_bad_char_table(&pattern);
        trace!(
            "Built bad-character table with {} distinct symbols ({:?} rule)",
            right.len(),
            rule
        );
        Self {
            pattern,
            right,
            rule,
        }
    }

    pub fn rule(&self) -> BadCharacterRule {
        self.rule
    }

    /// Index of the rightmost occurrence of `symbol` in the pattern
    pub fn rightmost(&self, symbol: char) -> Option<usize> {
        self.right.get(&symbol).copied()
    }

    fn skip(&self, key: char, j: usize) -> usize {
        match self.right.get(&key) {
            // No such symbol in the pattern: move past the mismatch
            None => j + 1,
            Some(&rightmost) => j.saturating_sub(rightmost).max(1),
        }
    }
}

/// Scans the pattern backwards, keeping the first index seen for each symbol
fn build_bad_char_table(pattern: &[char]) -> HashMap<char, usize> {
    let mut right = HashMap::with_capacity(pattern.len());
    for (i, &symbol) in pattern.iter().enumerate().rev() {
        right.entry(symbol).or_insert(i);
    }
    right
}

impl PatternMatcher for BoyerMooreMatcher {
    fn new(pattern: &str) -> Self {
        Self::with_rule(pattern, BadCharacterRule::default())
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::BoyerMoore
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

        let mut i = 0;
        while i <= n - m {
            stats.alignments += 1;
            let mut skip = 0;
            for j in (0..m).rev() {
                stats.comparisons += 1;
                if self.pattern[j] != text[i + j] {
                    let key = match self.rule {
                        BadCharacterRule::Mismatch => text[i + j],
                        BadCharacterRule::WindowStart => text[i],
                    };
                    skip = self.skip(key, j);
                    break;
                }
            }
            if skip == 0 {
                return Some(i);
            }
            i += skip;
        }

        None
    }
}
