//! Analysis text and phrase-table scanning
//!
//! Every analyzer in the system works the same way: lowercase the input once,
//! then walk an ordered, immutable table of phrase groups and test each phrase
//! as a plain substring. The helpers here keep that walk in one place so the
//! iteration order of the tables is the only thing that decides ties.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A non-blank piece of text submitted for analysis
///
/// The analyzers themselves accept any `&str`, including the empty string.
/// Callers at the edge of the system construct an `AnalysisText` to reject
/// blank submissions before any analysis runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnalysisText(String);

impl AnalysisText {
    /// Creates analysis text, rejecting empty or whitespace-only input
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CoreError::validation("text must not be empty"));
        }
        Ok(Self(text))
    }

    /// Returns the original text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AnalysisText {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnalysisText> for String {
    fn from(text: AnalysisText) -> String {
        text.0
    }
}

impl AsRef<str> for AnalysisText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered list of substring triggers tied to one outcome
#[derive(Debug, Clone, Copy)]
pub struct PhraseGroup<T: 'static> {
    /// Outcome selected when any phrase matches
    pub outcome: T,
    /// Lowercase trigger phrases, in definition order
    pub phrases: &'static [&'static str],
}

impl<T> PhraseGroup<T> {
    /// Returns true when any phrase of the group occurs in `lowered`
    pub fn matches(&self, lowered: &str) -> bool {
        contains_any(lowered, self.phrases)
    }
}

/// Returns true when any of `phrases` occurs as a substring of `lowered`
///
/// `lowered` must already be lowercased; phrases are stored lowercase.
pub fn contains_any(lowered: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| lowered.contains(phrase))
}

/// Returns the phrases found in `lowered`, in the order they are listed
pub fn matched_phrases(lowered: &str, phrases: &[&'static str]) -> Vec<&'static str> {
    phrases
        .iter()
        .copied()
        .filter(|phrase| lowered.contains(phrase))
        .collect()
}

/// Returns the outcome of the first group with a hit, or `default`
///
/// Groups are tried strictly in slice order, so earlier groups win whenever
/// the text triggers more than one.
pub fn first_match<T: Copy>(groups: &[PhraseGroup<T>], lowered: &str, default: T) -> T {
    groups
        .iter()
        .find(|group| group.matches(lowered))
        .map(|group| group.outcome)
        .unwrap_or(default)
}

/// Returns the first `max_chars` characters of `text`
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
