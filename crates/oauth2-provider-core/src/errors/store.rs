// ABOUTME: Storage collaborator errors for the provider store contract
// ABOUTME: Covers lookup misses, single-use grant redemption, and rotation guarantees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::validation::ValidationFailure;

/// Errors returned by storage collaborators
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record exists under the key
    #[error("{entity} '{key}' not found")]
    NotFound {
        /// Entity kind (`application`, `grant`, ...)
        entity: &'static str,
        /// Lookup key
        key: String,
    },

    /// A record already exists under the key
    #[error("{entity} '{key}' already exists")]
    Duplicate {
        /// Entity kind
        entity: &'static str,
        /// Conflicting key
        key: String,
    },

    /// The grant was already redeemed or never existed
    #[error("Authorization code is invalid or already redeemed")]
    GrantUnavailable,

    /// The refresh token was revoked before this operation
    #[error("Refresh token '{token}' has been revoked")]
    RefreshTokenRevoked {
        /// The revoked token
        token: String,
    },

    /// A token is tied to a different application or user than the record it pairs with
    #[error("{entity} '{key}' belongs to a different application or user")]
    Mismatch {
        /// Entity kind
        entity: &'static str,
        /// Offending key
        key: String,
    },

    /// The access token is already paired with a live refresh token
    #[error("Access token '{token}' is already paired with a live refresh token")]
    AlreadyPaired {
        /// The contested access token
        token: String,
    },

    /// A refreshed token asked for scopes the replaced token never had
    #[error("Scope '{scope}' exceeds the scope being refreshed")]
    ScopeExceeded {
        /// The requested scope
        scope: String,
    },

    /// The application failed validation and was not committed
    #[error("Application failed validation: {0}")]
    Validation(#[from] ValidationFailure),
}
