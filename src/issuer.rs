// ABOUTME: Issues authorization codes, access tokens, and refresh tokens for an application
// ABOUTME: Applies configured lifetimes against an injectable clock and secret generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use oauth2_provider_core::{Clock, Expiry, GenerationError, ScopeSet, StoreError, SystemClock};
use tracing::debug;
use uuid::Uuid;

use crate::config::TokenLifetimes;
use crate::errors::ProviderResult;
use crate::generators::{SecretGenerator, SystemSecretGenerator};
use crate::models::{AccessToken, Application, Grant, RefreshToken};

/// Freshly issued access token with its refresh partner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Bearer token
    pub access_token: AccessToken,
    /// Refresh token pointing at `access_token`
    pub refresh_token: RefreshToken,
}

/// Builds new grant and token records
///
/// The issuer only constructs records; persisting them and consuming the
/// grant they were exchanged for is the store's job.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    generator: Arc<dyn SecretGenerator>,
    clock: Arc<dyn Clock>,
    lifetimes: TokenLifetimes,
}

impl TokenIssuer {
    /// Issuer with explicit collaborators
    #[must_use]
    pub fn new(
        generator: Arc<dyn SecretGenerator>,
        clock: Arc<dyn Clock>,
        lifetimes: TokenLifetimes,
    ) -> Self {
        Self {
            generator,
            clock,
            lifetimes,
        }
    }

    /// Issuer using the system random source and wall clock
    #[must_use]
    pub fn with_lifetimes(lifetimes: TokenLifetimes) -> Self {
        Self::new(
            Arc::new(SystemSecretGenerator::new()),
            Arc::new(SystemClock),
            lifetimes,
        )
    }

    /// Clock expiries are computed against
    #[must_use]
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Lifetimes in effect
    #[must_use]
    pub const fn lifetimes(&self) -> TokenLifetimes {
        self.lifetimes
    }

    /// Authorization code approved by `user` for `application`
    ///
    /// # Errors
    ///
    /// Returns an error if the code cannot be generated.
    pub fn issue_grant(
        &self,
        application: &Application,
        user: Uuid,
        redirect_uri: &str,
        scope: ScopeSet,
    ) -> Result<Grant, GenerationError> {
        let grant = Grant {
            code: self.generator.generate_token()?,
            application: application.client_id.clone(),
            user,
            expires: Expiry::after(self.clock(), self.lifetimes.authorization_code_secs),
            redirect_uri: redirect_uri.to_owned(),
            scope,
        };
        debug!(client_id = %grant.application, scope = %grant.scope, "Issued authorization code");
        Ok(grant)
    }

    /// Access token for `application`; `user` is `None` for machine tokens
    ///
    /// # Errors
    ///
    /// Returns an error if the token value cannot be generated.
    pub fn issue_access_token(
        &self,
        application: &Application,
        user: Option<Uuid>,
        scope: ScopeSet,
    ) -> Result<AccessToken, GenerationError> {
        let token = AccessToken {
            token: self.generator.generate_token()?,
            user,
            application: application.client_id.clone(),
            expires: Expiry::after(self.clock(), self.lifetimes.access_token_secs),
            scope,
            source_refresh_token: None,
        };
        debug!(client_id = %token.application, scope = %token.scope, "Issued access token");
        Ok(token)
    }

    /// Access token plus paired refresh token
    ///
    /// # Errors
    ///
    /// Returns an error if either value cannot be generated.
    pub fn issue_token_pair(
        &self,
        application: &Application,
        user: Uuid,
        scope: ScopeSet,
    ) -> Result<TokenPair, GenerationError> {
        let access_token = self.issue_access_token(application, Some(user), scope)?;
        let refresh_token = RefreshToken {
            token: self.generator.generate_token()?,
            user,
            application: application.client_id.clone(),
            access_token: Some(access_token.token.clone()),
            revoked: None,
        };
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// Exchange a redeemed grant for a token pair carrying the grant's scope
    ///
    /// # Errors
    ///
    /// Returns an error if either value cannot be generated.
    pub fn exchange_grant(
        &self,
        application: &Application,
        grant: &Grant,
    ) -> Result<TokenPair, GenerationError> {
        self.issue_token_pair(application, grant.user, grant.scope.clone())
    }

    /// Replacement pair for a refresh token being rotated
    ///
    /// `previous_access` is the access token currently paired with `previous`.
    /// The new pair keeps the old owner, and its scope defaults to the old
    /// access token's scope; a requested scope may only narrow it. The new
    /// access token records `previous` as its source.
    ///
    /// # Errors
    ///
    /// Returns an error if either token belongs to another application or the
    /// two are not paired, if the requested scope widens the old one, or if a
    /// value cannot be generated.
    pub fn rotate(
        &self,
        application: &Application,
        previous: &RefreshToken,
        previous_access: &AccessToken,
        requested: Option<ScopeSet>,
    ) -> ProviderResult<TokenPair> {
        if previous.application != application.client_id {
            return Err(StoreError::Mismatch {
                entity: "refresh token",
                key: previous.token.clone(),
            }
            .into());
        }
        let paired = previous.access_token.as_deref() == Some(previous_access.token.as_str());
        if !paired
            || previous_access.application != previous.application
            || previous_access.user != Some(previous.user)
        {
            return Err(StoreError::Mismatch {
                entity: "access token",
                key: previous_access.token.clone(),
            }
            .into());
        }

        let scope = match requested {
            Some(scope) if !previous_access.scope.contains(&scope) => {
                return Err(StoreError::ScopeExceeded {
                    scope: scope.to_string(),
                }
                .into());
            }
            Some(scope) => scope,
            None => previous_access.scope.clone(),
        };

        let mut pair = self.issue_token_pair(application, previous.user, scope)?;
        pair.access_token.source_refresh_token = Some(previous.token.clone());
        Ok(pair)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use oauth2_provider_core::{AuthorizationGrantType, ClientType, FixedClock};

    use super::*;
    use crate::errors::ProviderError;
    use crate::models::{AccessTokenModel, GrantModel};

    fn issuer(clock: FixedClock) -> TokenIssuer {
        TokenIssuer::new(
            Arc::new(SystemSecretGenerator::new()),
            Arc::new(clock),
            TokenLifetimes::default(),
        )
    }

    fn application() -> Application {
        let mut app = Application::new(ClientType::Public, AuthorizationGrantType::AuthorizationCode);
        app.client_id = "client".to_owned();
        app
    }

    #[test]
    fn test_grant_expires_after_code_lifetime() {
        let now = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let grant = issuer(now)
            .issue_grant(&application(), Uuid::new_v4(), "https://app.example/cb", ScopeSet::parse("read"))
            .unwrap();

        assert_eq!(grant.application, "client");
        assert!(!grant.is_expired_with(&now.advanced_by(Duration::seconds(59))));
        assert!(grant.is_expired_with(&now.advanced_by(Duration::seconds(60))));
    }

    #[test]
    fn test_token_pair_is_linked() {
        let now = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let pair = issuer(now)
            .issue_token_pair(&application(), Uuid::new_v4(), ScopeSet::parse("read write"))
            .unwrap();

        assert_eq!(pair.refresh_token.access_token.as_deref(), Some(pair.access_token.token.as_str()));
        assert_ne!(pair.refresh_token.token, pair.access_token.token);
        assert!(pair.access_token.is_valid_with(&now, &["read"]));
    }

    #[test]
    fn test_rotation_records_source() {
        let now = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let issuer = issuer(now);
        let first = issuer
            .issue_token_pair(&application(), Uuid::new_v4(), ScopeSet::parse("read write"))
            .unwrap();
        let second = issuer
            .rotate(&application(), &first.refresh_token, &first.access_token, None)
            .unwrap();

        assert_eq!(
            second.access_token.source_refresh_token.as_deref(),
            Some(first.refresh_token.token.as_str())
        );
        assert_eq!(second.refresh_token.user, first.refresh_token.user);
        assert_eq!(second.access_token.scope, first.access_token.scope);
    }

    #[test]
    fn test_rotation_may_narrow_but_not_widen_scope() {
        let now = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let issuer = issuer(now);
        let first = issuer
            .issue_token_pair(&application(), Uuid::new_v4(), ScopeSet::parse("read write"))
            .unwrap();

        let narrowed = issuer
            .rotate(
                &application(),
                &first.refresh_token,
                &first.access_token,
                Some(ScopeSet::parse("read")),
            )
            .unwrap();
        assert_eq!(narrowed.access_token.scope, ScopeSet::parse("read"));

        let err = issuer
            .rotate(
                &application(),
                &first.refresh_token,
                &first.access_token,
                Some(ScopeSet::parse("read admin")),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Store(StoreError::ScopeExceeded { ref scope }) if scope == "admin read"
        ));
    }

    #[test]
    fn test_rotation_for_other_application_rejected() {
        let now = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let issuer = issuer(now);
        let first = issuer
            .issue_token_pair(&application(), Uuid::new_v4(), ScopeSet::parse("read"))
            .unwrap();
        let mut other = application();
        other.client_id = "ghost-client".to_owned();

        let err = issuer
            .rotate(&other, &first.refresh_token, &first.access_token, None)
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Store(StoreError::Mismatch { entity: "refresh token", .. })
        ));
    }

    #[test]
    fn test_rotation_requires_the_paired_access_token() {
        let now = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        let issuer = issuer(now);
        let first = issuer
            .issue_token_pair(&application(), Uuid::new_v4(), ScopeSet::parse("read"))
            .unwrap();
        let unrelated = issuer
            .issue_access_token(&application(), Some(first.refresh_token.user), ScopeSet::parse("read"))
            .unwrap();

        let err = issuer
            .rotate(&application(), &first.refresh_token, &unrelated, None)
            .unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Store(StoreError::Mismatch { entity: "access token", .. })
        ));
    }
}
