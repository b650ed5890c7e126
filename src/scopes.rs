// ABOUTME: Scope dictionary mapping scope names to human-readable descriptions
// ABOUTME: Used for descriptive lookups and known-scope checks, never for token authorization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use oauth2_provider_core::constants::oauth::DEFAULT_SCOPES;
use oauth2_provider_core::ScopeSet;
use serde::{Deserialize, Serialize};

use crate::errors::{ProviderError, ProviderResult};

/// Scope name to description mapping supplied by configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeCatalog(BTreeMap<String, String>);

impl Default for ScopeCatalog {
    fn default() -> Self {
        DEFAULT_SCOPES.iter().copied().collect()
    }
}

impl ScopeCatalog {
    /// Catalog with no scopes
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Add or replace a scope description
    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.0.insert(name.into(), description.into());
    }

    /// Description for a single scope
    #[must_use]
    pub fn describe(&self, scope: &str) -> Option<&str> {
        self.0.get(scope).map(String::as_str)
    }

    /// Descriptions for every scope in `scopes` that the catalog knows
    ///
    /// Unknown scopes are omitted rather than reported.
    #[must_use]
    pub fn describe_all(&self, scopes: &ScopeSet) -> BTreeMap<String, String> {
        scopes
            .iter()
            .filter_map(|scope| {
                self.describe(scope)
                    .map(|description| (scope.clone(), description.to_owned()))
            })
            .collect()
    }

    /// True if every requested scope is defined in the catalog
    #[must_use]
    pub fn validate_scopes(&self, requested: &ScopeSet) -> bool {
        requested.iter().all(|scope| self.0.contains_key(scope))
    }

    /// Like `validate_scopes`, naming the first unknown scope
    ///
    /// # Errors
    ///
    /// Returns `UnknownScope` for the first requested scope the catalog lacks.
    pub fn require_known(&self, requested: &ScopeSet) -> ProviderResult<()> {
        match requested.iter().find(|scope| !self.0.contains_key(*scope)) {
            Some(scope) => Err(ProviderError::UnknownScope {
                scope: scope.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Number of defined scopes
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no scope is defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ScopeCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, description)| (name.into(), description.into()))
                .collect(),
        )
    }
}
