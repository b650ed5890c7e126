// ABOUTME: Client application registration record and its validation rules
// ABOUTME: Assigns credentials once and enforces the redirect URI policy before persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use oauth2_provider_core::{
    AuthorizationGrantType, ClientType, SigningAlgorithm, ValidationFailure,
};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use uuid::Uuid;

use crate::generators::SecretGenerator;
use crate::redirect_uri::RedirectUriPolicy;

/// Split the space-delimited storage form of `redirect_uris`
#[must_use]
pub fn parse_redirect_uris(storage: &str) -> Vec<String> {
    storage.split_whitespace().map(str::to_owned).collect()
}

/// Registered OAuth 2.0 client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    /// Public identifier; empty until first validation assigns one
    pub client_id: String,
    /// Shared secret, assigned to confidential clients at first validation
    pub client_secret: Option<String>,
    /// Human-readable label, may be empty
    pub name: String,
    /// Registered callback addresses, in registration order
    pub redirect_uris: Vec<String>,
    /// Whether the client can hold a secret
    pub client_type: ClientType,
    /// Grant type the client is registered for
    pub authorization_grant_type: AuthorizationGrantType,
    /// Owning principal; machine clients may have none
    pub user: Option<Uuid>,
    /// Token signing algorithm
    pub algorithm: Option<SigningAlgorithm>,
}

impl Application {
    /// Unvalidated registration with no credentials, name, or redirect URIs
    #[must_use]
    pub const fn new(
        client_type: ClientType,
        authorization_grant_type: AuthorizationGrantType,
    ) -> Self {
        Self {
            client_id: String::new(),
            client_secret: None,
            name: String::new(),
            redirect_uris: Vec::new(),
            client_type,
            authorization_grant_type,
            user: None,
            algorithm: None,
        }
    }

    /// Set the display name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the registered redirect URIs
    #[must_use]
    pub fn with_redirect_uris<I, S>(mut self, uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redirect_uris = uris.into_iter().map(Into::into).collect();
        self
    }

    /// Set the redirect URIs from their space-delimited storage form
    #[must_use]
    pub fn with_redirect_uris_str(mut self, storage: &str) -> Self {
        self.redirect_uris = parse_redirect_uris(storage);
        self
    }

    /// Set the owning user
    #[must_use]
    pub fn with_user(mut self, user: Uuid) -> Self {
        self.user = Some(user);
        self
    }

    /// Set the signing algorithm
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: SigningAlgorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Use pre-assigned credentials instead of generated ones
    #[must_use]
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: Option<String>,
    ) -> Self {
        self.client_id = client_id.into();
        self.client_secret = client_secret;
        self
    }

    /// Space-delimited storage form of `redirect_uris`
    #[must_use]
    pub fn redirect_uris_storage(&self) -> String {
        self.redirect_uris.join(" ")
    }
}

impl Display for Application {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.display_label())
    }
}

/// Capability contract of the application role
///
/// Implementors expose the base record; every rule below is provided.
pub trait ApplicationModel: Debug + Send + Sync {
    /// Base registration record
    fn application(&self) -> &Application;

    /// Mutable base registration record
    fn application_mut(&mut self) -> &mut Application;

    /// Assign missing credentials, then run the redirect URI policy
    ///
    /// Storage collaborators must call this before committing a create or update.
    /// Credentials are generated only when unset and never regenerated afterwards.
    ///
    /// # Errors
    ///
    /// Returns `MissingRedirectUris` or `InvalidRedirectUri` from the policy, or
    /// `CredentialGeneration` when the random source fails.
    fn validate(
        &mut self,
        policy: &RedirectUriPolicy,
        generator: &dyn SecretGenerator,
    ) -> Result<(), ValidationFailure> {
        let app = self.application_mut();
        if app.client_id.is_empty() {
            app.client_id = generator.generate_client_id()?;
        }
        if app.client_type == ClientType::Confidential && app.client_secret.is_none() {
            app.client_secret = Some(generator.generate_client_secret()?);
        }
        policy.check_registration(app.authorization_grant_type, &app.redirect_uris)
    }

    /// `name` when non-empty, otherwise `client_id`
    fn display_label(&self) -> String {
        let app = self.application();
        if app.name.is_empty() {
            app.client_id.clone()
        } else {
            app.name.clone()
        }
    }

    /// Public client identifier
    fn client_id(&self) -> &str {
        &self.application().client_id
    }

    /// True for confidential clients
    fn is_confidential(&self) -> bool {
        self.application().client_type == ClientType::Confidential
    }

    /// First registered redirect URI, used when a request names none
    fn default_redirect_uri(&self) -> Option<&str> {
        self.application().redirect_uris.first().map(String::as_str)
    }

    /// True if `uri` matches a registered redirect URI after normalization
    fn redirect_uri_allowed(&self, uri: &str) -> bool {
        RedirectUriPolicy::is_registered(&self.application().redirect_uris, uri)
    }

    /// Constant-time comparison against the stored secret
    ///
    /// Always false when no secret is stored.
    fn client_secret_matches(&self, candidate: &str) -> bool {
        self.application()
            .client_secret
            .as_deref()
            .is_some_and(|secret| bool::from(secret.as_bytes().ct_eq(candidate.as_bytes())))
    }
}

impl ApplicationModel for Application {
    fn application(&self) -> &Application {
        self
    }

    fn application_mut(&mut self) -> &mut Application {
        self
    }
}
