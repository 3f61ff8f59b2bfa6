//! Configuration options for column profiling.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Tokens treated as missing by the default profile run.
pub const DEFAULT_MISSING_TOKENS: &[&str] = &["", "na", "n/a", "null", "none"];

/// Number of ranked values kept per column by default.
pub const DEFAULT_TOP_N: usize = 3;

/// Set of string tokens that denote missing data.
///
/// Tokens are stored trimmed and lower-cased, so lookups only need to
/// normalize the probe value. The null sentinel is always missing and is
/// not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MissingTokenSet {
    tokens: BTreeSet<String>,
}

impl MissingTokenSet {
    /// Creates a set from arbitrary tokens, normalizing each one.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|token| normalize_token(token.as_ref()))
                .collect(),
        }
    }

    /// Null-or-empty semantics: only blank strings count as missing.
    pub fn strict() -> Self {
        Self::from_tokens([""])
    }

    /// Creates a set with no tokens; only null cells are missing.
    pub fn empty() -> Self {
        Self {
            tokens: BTreeSet::new(),
        }
    }

    /// Adds a token (normalized).
    pub fn insert(&mut self, token: &str) -> bool {
        self.tokens.insert(normalize_token(token))
    }

    /// Checks membership of a value that is already trimmed and lower-cased.
    pub fn contains_normalized(&self, normalized: &str) -> bool {
        self.tokens.contains(normalized)
    }

    /// Checks membership of a raw string value.
    pub fn matches(&self, raw: &str) -> bool {
        self.contains_normalized(&normalize_token(raw))
    }

    /// Stored tokens in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for MissingTokenSet {
    fn default() -> Self {
        Self::from_tokens(DEFAULT_MISSING_TOKENS.iter().copied())
    }
}

impl From<Vec<String>> for MissingTokenSet {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl From<MissingTokenSet> for Vec<String> {
    fn from(set: MissingTokenSet) -> Self {
        set.tokens.into_iter().collect()
    }
}

/// Trim and lower-case, the canonical form used for token comparison.
fn normalize_token(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Options controlling a profiling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOptions {
    /// Tokens classified as missing.
    pub missing_tokens: MissingTokenSet,
    /// Maximum number of ranked values per column.
    pub top_n: usize,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            missing_tokens: MissingTokenSet::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ProfileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_missing_tokens(mut self, tokens: MissingTokenSet) -> Self {
        self.missing_tokens = tokens;
        self
    }

    #[must_use]
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }
}
