// ABOUTME: Provider-level error type unifying validation, resolution, storage, and config failures
// ABOUTME: Maps every failure onto an RFC 6749 error code for the protocol layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Each component reports its own typed error (re-exported from the core
//! crate). `ProviderError` wraps all of them for callers that drive several
//! components and need a single `?`-able type, and `ErrorCode` names the
//! OAuth 2.0 error a protocol endpoint would return for it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use oauth2_provider_core::errors::{
    ConfigError, GenerationError, ResolutionFailure, StoreError, ValidationFailure,
};

/// OAuth 2.0 error codes (RFC 6749 section 5.2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Malformed or unacceptable request parameters
    InvalidRequest,
    /// Client authentication failed or the client is unknown
    InvalidClient,
    /// Grant or refresh token is invalid, expired, revoked, or not owned by the client
    InvalidGrant,
    /// Requested scope is unknown or exceeds what was granted
    InvalidScope,
    /// Provider misconfiguration or internal failure
    ServerError,
}

impl ErrorCode {
    /// HTTP status a token endpoint responds with
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidClient => 401,
            Self::InvalidRequest | Self::InvalidGrant | Self::InvalidScope => 400,
            Self::ServerError => 500,
        }
    }

    /// Wire value of the code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::InvalidScope => "invalid_scope",
            Self::ServerError => "server_error",
        }
    }
}

/// Error body as sent to OAuth 2.0 clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub error: ErrorCode,
    /// Human-readable detail
    pub error_description: String,
}

/// Any failure raised by the provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Application registration was rejected
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// A swappable model could not be resolved
    #[error(transparent)]
    Resolution(#[from] ResolutionFailure),

    /// A storage operation failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A credential could not be generated
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// Settings could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A requested scope is not in the scope dictionary
    #[error("Unknown scope '{scope}'")]
    UnknownScope {
        /// Offending scope name
        scope: String,
    },
}

impl ProviderError {
    /// OAuth 2.0 error code for this failure
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(ValidationFailure::CredentialGeneration(_))
            | Self::Store(StoreError::Validation(ValidationFailure::CredentialGeneration(_)))
            | Self::Resolution(_)
            | Self::Generation(_)
            | Self::Config(_) => ErrorCode::ServerError,
            Self::Validation(_)
            | Self::Store(
                StoreError::Validation(_)
                | StoreError::Duplicate { .. }
                | StoreError::AlreadyPaired { .. },
            ) => ErrorCode::InvalidRequest,
            Self::Store(StoreError::NotFound { entity, .. }) => {
                if *entity == "application" {
                    ErrorCode::InvalidClient
                } else {
                    ErrorCode::InvalidGrant
                }
            }
            Self::Store(
                StoreError::GrantUnavailable
                | StoreError::RefreshTokenRevoked { .. }
                | StoreError::Mismatch { .. },
            ) => ErrorCode::InvalidGrant,
            Self::UnknownScope { .. } | Self::Store(StoreError::ScopeExceeded { .. }) => {
                ErrorCode::InvalidScope
            }
        }
    }

    /// Client-facing error body
    ///
    /// Server-side failures are described generically so internal detail does
    /// not reach the client.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        let error = self.code();
        let error_description = match error {
            ErrorCode::ServerError => "The authorization server encountered an internal error".to_owned(),
            _ => self.to_string(),
        };
        ErrorResponse {
            error,
            error_description,
        }
    }
}

/// Result alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use oauth2_provider_core::{AuthorizationGrantType, ModelRole};

    #[test]
    fn test_codes_for_component_failures() {
        let missing = ProviderError::from(ValidationFailure::MissingRedirectUris {
            grant_type: AuthorizationGrantType::AuthorizationCode,
        });
        assert_eq!(missing.code(), ErrorCode::InvalidRequest);

        let unavailable = ProviderError::from(StoreError::GrantUnavailable);
        assert_eq!(unavailable.code(), ErrorCode::InvalidGrant);
        assert_eq!(unavailable.code().http_status(), 400);

        let unknown_client = ProviderError::from(StoreError::NotFound {
            entity: "application",
            key: "abc".to_owned(),
        });
        assert_eq!(unknown_client.code(), ErrorCode::InvalidClient);

        let widened = ProviderError::from(StoreError::ScopeExceeded {
            scope: "admin read".to_owned(),
        });
        assert_eq!(widened.code(), ErrorCode::InvalidScope);

        let foreign = ProviderError::from(StoreError::Mismatch {
            entity: "access token",
            key: "abc".to_owned(),
        });
        assert_eq!(foreign.code(), ErrorCode::InvalidGrant);
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let err = ProviderError::from(ResolutionFailure::NotRegistered {
            role: ModelRole::Grant,
            identifier: "tests.Missing".to_owned(),
        });
        let response = err.to_response();
        assert_eq!(response.error, ErrorCode::ServerError);
        assert!(!response.error_description.contains("tests.Missing"));
        assert_eq!(
            serde_json::to_value(&response).unwrap()["error"],
            "server_error"
        );
    }
}
