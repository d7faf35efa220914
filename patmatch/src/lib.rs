pub mod cache;
pub mod config;
pub mod errors;
pub mod metrics;
pub mod results;
pub mod search;

pub use config::SearchConfig;
pub use errors::{SearchError, SearchResult};
pub use results::{AlgorithmOutcome, SearchReport};
pub use search::{
    search, Algorithm, BadCharacterRule, BoyerMooreMatcher, BruteForceMatcher, KmpMatcher,
    PatternMatcher, RabinKarpMatcher, SearchStats,
};
