// ABOUTME: Client type and authorization grant type for application registration
// ABOUTME: Grant type decides whether redirect URIs are mandatory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Whether a client can keep a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    /// Server-side client able to hold a secret
    Confidential,
    /// Browser or native client that cannot hold a secret
    Public,
}

impl ClientType {
    /// Storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Confidential => "confidential",
            Self::Public => "public",
        }
    }
}

impl Display for ClientType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Authorization grant type an application is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationGrantType {
    /// Authorization code grant (RFC 6749 Section 4.1)
    AuthorizationCode,
    /// Implicit grant (RFC 6749 Section 4.2)
    Implicit,
    /// Resource owner password credentials grant
    Password,
    /// Client credentials grant
    ClientCredentials,
    /// OpenID Connect hybrid flow
    OpenidHybrid,
}

impl AuthorizationGrantType {
    /// Storage representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AuthorizationCode => "authorization-code",
            Self::Implicit => "implicit",
            Self::Password => "password",
            Self::ClientCredentials => "client-credentials",
            Self::OpenidHybrid => "openid-hybrid",
        }
    }

    /// Whether an application with this grant type must register redirect URIs
    ///
    /// Only the redirect-based flows need a callback address.
    #[must_use]
    pub const fn requires_redirect_uris(&self) -> bool {
        matches!(self, Self::AuthorizationCode | Self::Implicit)
    }
}

impl Display for AuthorizationGrantType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_requirement_by_grant_type() {
        assert!(AuthorizationGrantType::AuthorizationCode.requires_redirect_uris());
        assert!(AuthorizationGrantType::Implicit.requires_redirect_uris());
        assert!(!AuthorizationGrantType::Password.requires_redirect_uris());
        assert!(!AuthorizationGrantType::ClientCredentials.requires_redirect_uris());
        assert!(!AuthorizationGrantType::OpenidHybrid.requires_redirect_uris());
    }

    #[test]
    fn test_grant_type_serde_matches_storage_form() {
        let json = serde_json::to_string(&AuthorizationGrantType::ClientCredentials).unwrap();
        assert_eq!(json, "\"client-credentials\"");
        let parsed: ClientType = serde_json::from_str("\"public\"").unwrap();
        assert_eq!(parsed, ClientType::Public);
    }
}
