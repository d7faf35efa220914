//! Rabin-Karp search without a modulus.
//!
//! The pattern and every text window are hashed as base-31 polynomials over
//! the symbols' code points. The arithmetic is plain `u64` with explicit
//! wrapping operations: nothing reduces the hash, so long windows overflow and
//! wrap silently. That is acceptable because a hash match is only ever a
//! candidate. Each one is verified symbol by symbol before it is reported, so
//! collisions (from wraparound or otherwise) cost extra work but can never
//! produce a wrong answer.
//!
//! Do not replace the wrapping operations with checked or saturating ones:
//! the rolling update relies on the removal coefficient being computed with
//! exactly the same wraparound as the hash itself.
use tracing::trace;

use super::matcher::{to_symbols, window_matches, Algorithm, PatternMatcher, SearchStats};

/// Base of the hashing polynomial
pub const POLY_BASE: u64 = 31;

#[derive(Debug, Clone)]
pub struct RabinKarpMatcher {
    pattern: Vec<char>,
    pattern_hash: u64,
    /// POLY_BASE^(M-1), removes the leading symbol when the window rolls
    first_coef: u64,
}

/// Polynomial hash of `symbols`, wrapping on overflow
pub fn polynomial_hash(symbols: &[char]) -> u64 {
    symbols.iter().fold(0u64, |h, &symbol| {
        h.wrapping_mul(POLY_BASE).wrapping_add(u64::from(symbol))
    })
}

impl RabinKarpMatcher {
    pub fn pattern_hash(&self) -> u64 {
        self.pattern_hash
    }

    pub fn first_coef(&self) -> u64 {
        self.first_coef
    }

    /// Las Vegas check: a hash match only counts if the window really matches
    fn verify(&self, text: &[char], start: usize, stats: &mut SearchStats) -> bool {
        stats.hash_matches += 1;
        let matched = window_matches(&self.pattern, text, start, stats);
        if !matched {
            stats.spurious_hits += 1;
        }
        matched
    }
}

impl PatternMatcher for RabinKarpMatcher {
    fn new(pattern: &str) -> Self {
        let pattern = to_symbols(pattern);
        let first_coef = (1..pattern.len()).fold(1u64, |c, _| c.wrapping_mul(POLY_BASE));
        let pattern_hash = polynomial_hash(&pattern);
        trace!(
            "Hashed pattern of {} symbols to {:#x}",
            pattern.len(),
            pattern_hash
        );
        Self {
            pattern,
            pattern_hash,
            first_coef,
        }
    }

    fn algorithm(&self) -> Algorithm {
        Algorithm::RabinKarp
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
        if n < m {
            return None;
        }

        let mut text_hash = polynomial_hash(&text[..m]);
        stats.alignments += 1;
        if text_hash == self.pattern_hash && self.verify(text, 0, stats) {
            return Some(0);
        }

        for i in m..n {
            // Remove the leading symbol, shift, add the trailing one
            text_hash = text_hash
                .wrapping_sub(self.first_coef.wrapping_mul(u64::from(text[i - m])))
                .wrapping_mul(POLY_BASE)
                .wrapping_add(u64::from(text[i]));

            let start = i - m + 1;
            stats.alignments += 1;
            if text_hash == self.pattern_hash && self.verify(text, start, stats) {
                return Some(start);
            }
        }

        None
    }
}
