// ABOUTME: Two-part qualified identifier naming a registered model implementation
// ABOUTME: Parsing is the only string-based step of model resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use oauth2_provider_core::constants::models::{BUILTIN_NAMESPACE, IDENTIFIER_SEPARATOR};
use oauth2_provider_core::{ModelRole, ResolutionFailure};

/// `namespace.TypeName`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelIdentifier {
    namespace: String,
    type_name: String,
}

impl ModelIdentifier {
    /// Parse a configured identifier for `role`
    ///
    /// Exactly one separator with non-empty parts on both sides; whitespace is
    /// not allowed anywhere.
    ///
    /// # Errors
    ///
    /// Returns `MalformedIdentifier` when the value does not have that shape.
    pub fn parse(role: ModelRole, raw: &str) -> Result<Self, ResolutionFailure> {
        let malformed = || ResolutionFailure::MalformedIdentifier {
            role,
            identifier: raw.to_owned(),
        };

        let (namespace, type_name) = raw.split_once(IDENTIFIER_SEPARATOR).ok_or_else(malformed)?;

        let well_formed = |part: &str| {
            !part.is_empty()
                && !part.contains(IDENTIFIER_SEPARATOR)
                && !part.chars().any(char::is_whitespace)
        };
        if !well_formed(namespace) || !well_formed(type_name) {
            return Err(malformed());
        }

        Ok(Self {
            namespace: namespace.to_owned(),
            type_name: type_name.to_owned(),
        })
    }

    /// Identifier of a built-in implementation
    pub(crate) fn builtin(type_name: &str) -> Self {
        Self {
            namespace: BUILTIN_NAMESPACE.to_owned(),
            type_name: type_name.to_owned(),
        }
    }

    /// Namespace part
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Type name part
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl Display for ModelIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{IDENTIFIER_SEPARATOR}{}", self.namespace, self.type_name)
    }
}
