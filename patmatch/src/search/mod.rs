//! First-occurrence substring search.
//!
//! Four algorithms implement one capability, [`PatternMatcher`]: preprocess a
//! pattern once, then report where it first occurs in any number of texts.
//!
//! | Matcher               | Preprocessing             | Search (worst case) |
//! |-----------------------|---------------------------|---------------------|
//! | [`BruteForceMatcher`] | none                      | O(N·M)              |
//! | [`KmpMatcher`]        | overlap table, O(M)       | O(N + M)            |
//! | [`BoyerMooreMatcher`] | bad-character table, O(M) | O(N·M), sublinear typical |
//! | [`RabinKarpMatcher`]  | pattern hash, O(M)        | O(N + M) expected   |
//!
//! None of them depends on another and none keeps state between searches, so
//! a matcher can be built once and shared:
//!
//! ```rust,ignore
//! let matcher = KmpMatcher::new("abracadabra");
//! let found: Vec<_> = texts.par_iter().map(|t| matcher.search(t)).collect();
//! ```
//!
//! Brute force is the reference the others are tested against. The engine
//! runs several of them side by side on one input and reports whether they
//! agree.
pub mod boyer_moore;
pub mod brute_force;
pub mod engine;
pub mod kmp;
pub mod matcher;
pub mod rabin_karp;

pub use boyer_moore::{BadCharacterRule, BoyerMooreMatcher};
pub use brute_force::BruteForceMatcher;
pub use engine::{build_matcher, search, search_many, search_with_metrics};
pub use kmp::KmpMatcher;
pub use matcher::{Algorithm, PatternMatcher, SearchStats};
pub use rabin_karp::RabinKarpMatcher;
