// ABOUTME: Application validation failures raised before a registration is committed
// ABOUTME: Includes the secure-random collaborator error surfaced during credential assignment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::AuthorizationGrantType;

/// The secure-random collaborator could not produce a value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Secure random generator failed while producing {purpose}")]
pub struct GenerationError {
    /// What the value was being generated for (`client_id`, `token`, ...)
    pub purpose: &'static str,
}

impl GenerationError {
    /// Create a generation error for the given purpose
    #[must_use]
    pub const fn new(purpose: &'static str) -> Self {
        Self { purpose }
    }
}

/// Field-level failure raised by `Application::validate`
///
/// Recoverable: the caller rejects the write and reports the field to the registrant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// The grant type requires at least one registered redirect URI
    #[error("Redirect URIs are required for the {grant_type} grant type")]
    MissingRedirectUris {
        /// Grant type the application declared
        grant_type: AuthorizationGrantType,
    },

    /// A registered redirect URI is structurally unacceptable
    #[error("Invalid redirect URI '{uri}': {reason}")]
    InvalidRedirectUri {
        /// The offending URI as registered
        uri: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Credentials could not be assigned at first validation
    #[error("Could not assign client credentials")]
    CredentialGeneration(#[from] GenerationError),
}

impl ValidationFailure {
    /// Name of the field the failure should be reported against
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingRedirectUris { .. } | Self::InvalidRedirectUri { .. } => "redirect_uris",
            Self::CredentialGeneration(_) => "client_secret",
        }
    }
}
