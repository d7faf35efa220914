//! Search outcomes and the aligned two-line rendering the CLI prints.
//!
//! A report holds one outcome per algorithm that ran. Outcomes are plain
//! owned data, so a report can be built on worker threads, moved back to the
//! caller and serialized without borrowing from any matcher.
//!
//! ```text
//! text:       THETHEYTHYTHEMEM
//! pattern:              THEM
//! ```
use serde::{Deserialize, Serialize};

use crate::errors::SearchResult;
use crate::search::matcher::{Algorithm, SearchStats};

const TEXT_LABEL: &str = "text:       ";
const PATTERN_LABEL: &str = "pattern:    ";

/// What one algorithm found for the report's pattern and text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmOutcome {
    pub algorithm: Algorithm,
    /// First occurrence in symbols, `None` if the pattern does not occur
    pub index: Option<usize>,
    pub stats: SearchStats,
}

/// Results of running several algorithms on the same pattern and text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub pattern: String,
    pub text: String,
    pub outcomes: Vec<AlgorithmOutcome>,
}

impl SearchReport {
    pub fn new(pattern: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            text: text.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn add_outcome(&mut self, outcome: AlgorithmOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcome(&self, algorithm: Algorithm) -> Option<&AlgorithmOutcome> {
        self.outcomes.iter().find(|o| o.algorithm == algorithm)
    }

    /// The index every algorithm reported, or `None` if they disagree or
    /// nothing ran. The inner option is the search result itself.
    pub fn agreed_index(&self) -> Option<Option<usize>> {
        let first = self.outcomes.first()?.index;
        self.outcomes
            .iter()
            .all(|o| o.index == first)
            .then_some(first)
    }

    /// The outcome others are judged against: brute force when it ran,
    /// otherwise the first outcome
    pub fn reference(&self) -> Option<&AlgorithmOutcome> {
        self.outcome(Algorithm::BruteForce)
            .or_else(|| self.outcomes.first())
    }

    /// Outcomes that differ from the [`reference`](Self::reference)
    pub fn disagreements(&self) -> Vec<&AlgorithmOutcome> {
        match self.reference() {
            Some(reference) => self
                .outcomes
                .iter()
                .filter(|o| o.index != reference.index)
                .collect(),
            None => Vec::new(),
        }
    }

    /// The two aligned lines for one outcome
    pub fn render(&self, outcome: &AlgorithmOutcome) -> String {
        render_alignment(&self.text, &self.pattern, outcome.index)
    }

    pub fn to_json_pretty(&self) -> SearchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Renders the text with the pattern indented beneath its first occurrence.
///
/// A missing match gets no indentation at all, so the pattern is printed
/// flush with the start of the text.
pub fn render_alignment(text: &str, pattern: &str, index: Option<usize>) -> String {
    let indent = " ".repeat(index.unwrap_or(0));
    format!("{TEXT_LABEL}{text}\n{PATTERN_LABEL}{indent}{pattern}\n")
}
