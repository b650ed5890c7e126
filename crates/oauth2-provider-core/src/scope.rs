// ABOUTME: Scope set parsed from whitespace-delimited scope strings
// ABOUTME: Provides the subset containment check every scope authorization goes through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::btree_set::Iter;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Set of opaque scope names
///
/// Equal regardless of input order or duplicates. Matching is exact and
/// case-sensitive; there are no wildcard or hierarchy semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ScopeSet(BTreeSet<String>);

impl ScopeSet {
    /// Parse a space-delimited scope string, discarding empty entries
    ///
    /// Malformed input is never an error: `"write  write"` is `{write}`.
    #[must_use]
    pub fn parse(scope: &str) -> Self {
        Self(scope.split_whitespace().map(str::to_owned).collect())
    }

    /// Build a set from individually requested scope names
    #[must_use]
    pub fn from_requested<I, S>(requested: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            requested
                .into_iter()
                .filter(|scope| !scope.as_ref().is_empty())
                .map(|scope| scope.as_ref().to_owned())
                .collect(),
        )
    }

    /// True iff every requested scope is present in this set
    ///
    /// An empty request is always satisfied.
    #[must_use]
    pub fn contains(&self, requested: &Self) -> bool {
        requested.0.is_subset(&self.0)
    }

    /// True if a single scope name is present
    #[must_use]
    pub fn contains_scope(&self, scope: &str) -> bool {
        self.0.contains(scope)
    }

    /// Number of distinct scopes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no scopes are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate scopes in sorted order
    pub fn iter(&self) -> Iter<'_, String> {
        self.0.iter()
    }
}

impl Display for ScopeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for scope in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(scope)?;
            first = false;
        }
        Ok(())
    }
}

impl From<String> for ScopeSet {
    fn from(scope: String) -> Self {
        Self::parse(&scope)
    }
}

impl From<&str> for ScopeSet {
    fn from(scope: &str) -> Self {
        Self::parse(scope)
    }
}

impl From<ScopeSet> for String {
    fn from(scopes: ScopeSet) -> Self {
        scopes.to_string()
    }
}

impl<'a> IntoIterator for &'a ScopeSet {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
