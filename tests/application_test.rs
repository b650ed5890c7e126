// ABOUTME: Tests for application registration validation and credential assignment
// ABOUTME: Covers the redirect URI requirement per grant type, display labels, and secrets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use oauth2_provider::errors::{GenerationError, ValidationFailure};
use oauth2_provider::generators::{SecretGenerator, SystemSecretGenerator};
use oauth2_provider::models::{Application, ApplicationModel};
use oauth2_provider::redirect_uri::RedirectUriPolicy;
use oauth2_provider::{AuthorizationGrantType, ClientType};

/// Generator whose random source is broken
#[derive(Debug)]
struct FailingGenerator;

impl SecretGenerator for FailingGenerator {
    fn generate_client_id(&self) -> Result<String, GenerationError> {
        Err(GenerationError::new("client_id"))
    }

    fn generate_client_secret(&self) -> Result<String, GenerationError> {
        Err(GenerationError::new("client_secret"))
    }

    fn generate_token(&self) -> Result<String, GenerationError> {
        Err(GenerationError::new("token"))
    }
}

fn validate(app: &mut Application) -> Result<(), ValidationFailure> {
    app.validate(&RedirectUriPolicy::default(), &SystemSecretGenerator::new())
}

#[test]
fn test_authorization_code_requires_redirect_uris() {
    let mut app = Application::new(
        ClientType::Confidential,
        AuthorizationGrantType::AuthorizationCode,
    );
    let err = validate(&mut app).unwrap_err();
    assert_eq!(
        err,
        ValidationFailure::MissingRedirectUris {
            grant_type: AuthorizationGrantType::AuthorizationCode
        }
    );
    assert_eq!(err.field(), "redirect_uris");

    let mut app = app.with_redirect_uris(["https://client.example.com/callback"]);
    validate(&mut app).unwrap();
}

#[test]
fn test_implicit_requires_redirect_uris() {
    let mut app = Application::new(ClientType::Public, AuthorizationGrantType::Implicit);
    assert!(matches!(
        validate(&mut app),
        Err(ValidationFailure::MissingRedirectUris { .. })
    ));
}

#[test]
fn test_other_grant_types_need_no_redirect_uris() {
    for grant_type in [
        AuthorizationGrantType::Password,
        AuthorizationGrantType::ClientCredentials,
        AuthorizationGrantType::OpenidHybrid,
    ] {
        let mut app = Application::new(ClientType::Confidential, grant_type);
        validate(&mut app).unwrap();
    }
}

#[test]
fn test_display_label_falls_back_to_client_id() {
    let mut app = common::machine_application();
    validate(&mut app).unwrap();
    assert!(!app.client_id.is_empty());
    assert_eq!(app.display_label(), app.client_id);

    let mut named = common::web_application();
    validate(&mut named).unwrap();
    assert_eq!(named.display_label(), "test_app");
    assert_eq!(named.to_string(), "test_app");
}

#[test]
fn test_credentials_generated_once() {
    let mut app = common::web_application();
    validate(&mut app).unwrap();
    let client_id = app.client_id.clone();
    let client_secret = app.client_secret.clone();
    assert!(client_secret.is_some());

    validate(&mut app).unwrap();
    assert_eq!(app.client_id, client_id);
    assert_eq!(app.client_secret, client_secret);
}

#[test]
fn test_preassigned_credentials_are_kept() {
    let mut app = common::machine_application()
        .with_credentials("my-client", Some("my-secret".to_owned()));
    validate(&mut app).unwrap();
    assert_eq!(app.client_id, "my-client");
    assert!(app.client_secret_matches("my-secret"));
    assert!(!app.client_secret_matches("my-secreT"));
}

#[test]
fn test_public_clients_get_no_secret() {
    let mut app = Application::new(ClientType::Public, AuthorizationGrantType::Password);
    validate(&mut app).unwrap();
    assert!(app.client_secret.is_none());
    assert!(!app.is_confidential());
    assert!(!app.client_secret_matches(""));
}

#[test]
fn test_generator_failure_surfaces_as_validation_failure() {
    let mut app = common::web_application();
    let err = app
        .validate(&RedirectUriPolicy::default(), &FailingGenerator)
        .unwrap_err();
    assert_eq!(err.field(), "client_secret");
    assert!(matches!(err, ValidationFailure::CredentialGeneration(_)));
}

#[test]
fn test_invalid_redirect_uris_rejected() {
    for uri in [
        "https://client.example.com/callback#fragment",
        "https://*.example.com/callback",
        "/relative/callback",
        "ftp://client.example.com/callback",
    ] {
        let mut app = common::web_application().with_redirect_uris([uri]);
        assert!(
            matches!(
                validate(&mut app),
                Err(ValidationFailure::InvalidRedirectUri { .. })
            ),
            "{uri} should be rejected"
        );
    }
}

#[test]
fn test_custom_scheme_policy() {
    let policy = RedirectUriPolicy::new(["https", "com.example.app"]);
    let mut app = Application::new(ClientType::Public, AuthorizationGrantType::AuthorizationCode)
        .with_redirect_uris_str("com.example.app:/oauth2redirect https://client.example.com/cb");
    app.validate(&policy, &SystemSecretGenerator::new()).unwrap();
    assert_eq!(app.default_redirect_uri(), Some("com.example.app:/oauth2redirect"));
    assert_eq!(
        app.redirect_uris_storage(),
        "com.example.app:/oauth2redirect https://client.example.com/cb"
    );
}

#[test]
fn test_redirect_uri_matching_normalizes() {
    let app = common::web_application();
    assert!(app.redirect_uri_allowed("https://client.example.com/callback"));
    assert!(app.redirect_uri_allowed("HTTPS://Client.Example.com:443/callback"));
    assert!(!app.redirect_uri_allowed("https://client.example.com/callback/evil"));
    assert!(!app.redirect_uri_allowed("https://client.example.com/callback#x"));
    assert!(!app.redirect_uri_allowed("https://evil.example.com/callback"));
}
