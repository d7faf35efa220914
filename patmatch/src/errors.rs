//! Error types for patmatch.
//!
//! Not finding a pattern is never an error: every matcher reports that as
//! `None`. Errors only come from the edges of the crate, where patterns arrive
//! as raw bytes, algorithm names arrive as strings, configuration is loaded
//! from disk, or a thread pool has to be built.
//!
//! ```rust,ignore
//! match BoyerMooreMatcher::from_utf8(bytes) {
//!     Ok(matcher) => matcher.search(text),
//!     Err(SearchError::InvalidPattern(msg)) => // Handle bad input,
//!     Err(e) => // Handle other errors
//! }
//! ```
use thiserror::Error;

/// Result type for fallible patmatch operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while building matchers or running searches
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Thread pool error: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SearchError {
    pub fn invalid_pattern(msg: impl Into<String>) -> Self {
        Self::InvalidPattern(msg.into())
    }

    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm(name.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<config::ConfigError> for SearchError {
    fn from(err: config::ConfigError) -> Self {
        Self::config_error(err.to_string())
    }
}
