// ABOUTME: Model resolution failures for swappable entity implementations
// ABOUTME: Treated as fatal misconfiguration that aborts process startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::ModelRole;

/// A configured model identifier could not be turned into an implementation
///
/// These reflect a deployment error, not a transient condition, and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionFailure {
    /// The identifier is not of the form `namespace.TypeName`
    #[error("{} must be of the form 'namespace.TypeName', got '{identifier}'", .role.setting_name())]
    MalformedIdentifier {
        /// Role whose setting was malformed
        role: ModelRole,
        /// The configured value
        identifier: String,
    },

    /// No implementation is registered under the identifier
    #[error("{} refers to model '{identifier}' that has not been registered", .role.setting_name())]
    NotRegistered {
        /// Role whose setting could not be located
        role: ModelRole,
        /// The configured value
        identifier: String,
    },
}

impl ResolutionFailure {
    /// Role the failure concerns
    #[must_use]
    pub const fn role(&self) -> ModelRole {
        match self {
            Self::MalformedIdentifier { role, .. } | Self::NotRegistered { role, .. } => *role,
        }
    }
}
