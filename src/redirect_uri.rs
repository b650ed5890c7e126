// ABOUTME: Redirect URI policy for application registration and the authorization step
// ABOUTME: Enforces grant-type cardinality, structural checks, and normalized URI matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use oauth2_provider_core::constants::oauth::{
    DEFAULT_ALLOWED_REDIRECT_URI_SCHEMES, OOB_REDIRECT_URI,
};
use oauth2_provider_core::{AuthorizationGrantType, ValidationFailure};
use serde::{Deserialize, Serialize};
use url::Url;

/// Redirect URI rules applied before an application is persisted
///
/// Registration rules (RFC 6749 Section 3.1.2):
/// - redirect-based grant types need at least one URI
/// - every URI is absolute and carries no fragment
/// - the scheme is on the allow-list
/// - wildcards are never accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRedirectUriPolicy")]
pub struct RedirectUriPolicy {
    allowed_schemes: Vec<String>,
}

/// Deserialized form, normalized through `RedirectUriPolicy::new`
#[derive(Deserialize)]
struct RawRedirectUriPolicy {
    allowed_schemes: Vec<String>,
}

impl From<RawRedirectUriPolicy> for RedirectUriPolicy {
    fn from(raw: RawRedirectUriPolicy) -> Self {
        Self::new(raw.allowed_schemes)
    }
}

impl Default for RedirectUriPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_REDIRECT_URI_SCHEMES.iter().copied())
    }
}

impl RedirectUriPolicy {
    /// Policy accepting the given schemes (compared case-insensitively)
    #[must_use]
    pub fn new<I, S>(allowed_schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_schemes: allowed_schemes
                .into_iter()
                .map(|scheme| scheme.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Schemes a registered redirect URI may use
    #[must_use]
    pub fn allowed_schemes(&self) -> &[String] {
        &self.allowed_schemes
    }

    /// Validate the redirect URIs an application registers for its grant type
    ///
    /// # Errors
    ///
    /// Returns `MissingRedirectUris` when the grant type is redirect-based and no URI
    /// is registered, or `InvalidRedirectUri` for the first structurally invalid URI.
    pub fn check_registration(
        &self,
        grant_type: AuthorizationGrantType,
        redirect_uris: &[String],
    ) -> Result<(), ValidationFailure> {
        if grant_type.requires_redirect_uris() && redirect_uris.is_empty() {
            return Err(ValidationFailure::MissingRedirectUris { grant_type });
        }

        redirect_uris
            .iter()
            .try_for_each(|uri| self.validate_uri(uri))
    }

    /// Structural check of a single redirect URI
    ///
    /// # Errors
    ///
    /// Returns `InvalidRedirectUri` naming the violated rule.
    pub fn validate_uri(&self, uri: &str) -> Result<(), ValidationFailure> {
        let invalid = |reason: &'static str| ValidationFailure::InvalidRedirectUri {
            uri: uri.to_owned(),
            reason,
        };

        if uri == OOB_REDIRECT_URI {
            return Ok(());
        }

        // Subdomain and path wildcards allow open redirects
        if uri.contains('*') {
            return Err(invalid("wildcards are not allowed"));
        }

        let parsed = Url::parse(uri).map_err(|_| invalid("must be an absolute URI"))?;

        if parsed.fragment().is_some() || uri.contains('#') {
            return Err(invalid("must not contain a fragment"));
        }

        if !self
            .allowed_schemes
            .iter()
            .any(|scheme| scheme == parsed.scheme())
        {
            return Err(invalid("scheme is not allowed"));
        }

        Ok(())
    }

    /// Comparison primitive for the authorization step
    ///
    /// Both URIs are normalized (scheme and host lowercased, default port dropped,
    /// empty path made `/`) and then compared for exact equality. A candidate that
    /// carries a fragment or does not parse never matches.
    #[must_use]
    pub fn uri_matches(registered: &str, candidate: &str) -> bool {
        match (normalize(registered), normalize(candidate)) {
            (Some(registered), Some(candidate)) => registered == candidate,
            _ => false,
        }
    }

    /// True if `candidate` matches any registered URI
    #[must_use]
    pub fn is_registered<S: AsRef<str>>(registered: &[S], candidate: &str) -> bool {
        registered
            .iter()
            .any(|uri| Self::uri_matches(uri.as_ref(), candidate))
    }
}

fn normalize(uri: &str) -> Option<String> {
    if uri.contains('#') {
        return None;
    }
    Url::parse(uri).ok().map(String::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn uris(values: &[&str]) -> Vec<String> {
        values.iter().map(|uri| (*uri).to_owned()).collect()
    }

    #[test]
    fn test_redirect_grants_require_uris() {
        let policy = RedirectUriPolicy::default();
        let result = policy.check_registration(AuthorizationGrantType::Implicit, &[]);
        assert_eq!(
            result,
            Err(ValidationFailure::MissingRedirectUris {
                grant_type: AuthorizationGrantType::Implicit
            })
        );
        assert!(policy
            .check_registration(AuthorizationGrantType::ClientCredentials, &[])
            .is_ok());
    }

    #[test]
    fn test_structural_rules() {
        let policy = RedirectUriPolicy::default();
        assert!(policy.validate_uri("http://localhost").is_ok());
        assert!(policy.validate_uri("https://example.com/cb?x=1").is_ok());
        assert!(policy.validate_uri(OOB_REDIRECT_URI).is_ok());
        assert!(policy.validate_uri("/relative/callback").is_err());
        assert!(policy.validate_uri("https://example.com/cb#frag").is_err());
        assert!(policy.validate_uri("https://*.example.com/cb").is_err());
        assert!(policy.validate_uri("ftp://example.com/cb").is_err());
    }

    #[test]
    fn test_custom_scheme_allow_list() {
        let policy = RedirectUriPolicy::new(["https", "com.example.app"]);
        assert!(policy.validate_uri("com.example.app:/callback").is_ok());
        assert!(policy.validate_uri("http://localhost").is_err());
    }

    #[test]
    fn test_deserialized_schemes_are_lowercased() {
        let policy: RedirectUriPolicy =
            serde_json::from_str(r#"{"allowed_schemes": ["HTTPS", "Com.Example.App"]}"#)
                .unwrap();
        assert_eq!(policy.allowed_schemes(), ["https", "com.example.app"]);
        assert!(policy.validate_uri("https://example.com/cb").is_ok());
        assert!(policy.validate_uri("com.example.app:/callback").is_ok());
    }

    #[test]
    fn test_matching_normalizes_then_compares_exactly() {
        assert!(RedirectUriPolicy::uri_matches(
            "http://example.com",
            "HTTP://Example.COM:80/"
        ));
        assert!(!RedirectUriPolicy::uri_matches(
            "https://example.com/cb",
            "https://example.com/cb/other"
        ));
        assert!(!RedirectUriPolicy::uri_matches(
            "https://example.com/cb",
            "https://example.com/cb#token"
        ));
        assert!(RedirectUriPolicy::is_registered(
            &uris(&["http://localhost", "http://example.it"]),
            "http://example.it/"
        ));
    }
}
