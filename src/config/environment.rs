// ABOUTME: Provider-wide settings: scope dictionary, lifetimes, redirect policy, and models
// ABOUTME: Loaded from OAUTH2_PROVIDER_* environment variables with built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use oauth2_provider_core::constants::oauth::{
    DEFAULT_ACCESS_TOKEN_EXPIRE_SECONDS, DEFAULT_AUTHORIZATION_CODE_EXPIRE_SECONDS,
    ENV_ACCESS_TOKEN_EXPIRE_SECONDS, ENV_ALLOWED_REDIRECT_URI_SCHEMES,
    ENV_AUTHORIZATION_CODE_EXPIRE_SECONDS, ENV_SCOPES, MAX_EXPIRE_SECONDS,
};
use oauth2_provider_core::ConfigError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::models::ModelSettings;
use crate::redirect_uri::RedirectUriPolicy;
use crate::scopes::ScopeCatalog;

/// Lifetimes applied when grants and tokens are issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLifetimes {
    /// Seconds an authorization code stays redeemable
    pub authorization_code_secs: i64,
    /// Seconds an access token stays valid
    pub access_token_secs: i64,
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            authorization_code_secs: DEFAULT_AUTHORIZATION_CODE_EXPIRE_SECONDS,
            access_token_secs: DEFAULT_ACCESS_TOKEN_EXPIRE_SECONDS,
        }
    }
}

/// All provider settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Swappable model identifiers
    pub models: ModelSettings,
    /// Scope dictionary
    pub scopes: ScopeCatalog,
    /// Grant and token lifetimes
    pub lifetimes: TokenLifetimes,
    /// Redirect URI registration rules
    pub redirect: RedirectUriPolicy,
}

impl ProviderSettings {
    /// Load settings from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a lifetime is not an integer in `1..=MAX_EXPIRE_SECONDS`, the scope dictionary is not
    /// a JSON object of strings, or the scheme allow-list is empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading OAuth2 provider settings from environment");

        let settings = Self {
            models: ModelSettings::from_env(),
            scopes: load_scopes()?,
            lifetimes: TokenLifetimes {
                authorization_code_secs: seconds_or(
                    ENV_AUTHORIZATION_CODE_EXPIRE_SECONDS,
                    DEFAULT_AUTHORIZATION_CODE_EXPIRE_SECONDS,
                )?,
                access_token_secs: seconds_or(
                    ENV_ACCESS_TOKEN_EXPIRE_SECONDS,
                    DEFAULT_ACCESS_TOKEN_EXPIRE_SECONDS,
                )?,
            },
            redirect: load_redirect_policy()?,
        };

        debug!(
            scopes = settings.scopes.len(),
            authorization_code_secs = settings.lifetimes.authorization_code_secs,
            access_token_secs = settings.lifetimes.access_token_secs,
            schemes = ?settings.redirect.allowed_schemes(),
            "OAuth2 provider settings loaded"
        );

        Ok(settings)
    }
}

fn seconds_or(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    let Ok(value) = env::var(key) else {
        return Ok(default);
    };

    match value.trim().parse::<i64>() {
        Ok(secs) if (1..=MAX_EXPIRE_SECONDS).contains(&secs) => Ok(secs),
        _ => Err(ConfigError::InvalidSeconds {
            key,
            value,
            max: MAX_EXPIRE_SECONDS,
        }),
    }
}

fn load_scopes() -> Result<ScopeCatalog, ConfigError> {
    env::var(ENV_SCOPES).map_or_else(
        |_| Ok(ScopeCatalog::default()),
        |raw| {
            serde_json::from_str(&raw).map_err(|source| ConfigError::InvalidScopes {
                key: ENV_SCOPES,
                source,
            })
        },
    )
}

fn load_redirect_policy() -> Result<RedirectUriPolicy, ConfigError> {
    let Ok(raw) = env::var(ENV_ALLOWED_REDIRECT_URI_SCHEMES) else {
        return Ok(RedirectUriPolicy::default());
    };

    let schemes = parse_list(&raw);
    if schemes.is_empty() {
        return Err(ConfigError::EmptyList {
            key: ENV_ALLOWED_REDIRECT_URI_SCHEMES,
        });
    }
    Ok(RedirectUriPolicy::new(schemes))
}

/// Parse a comma-separated list, dropping blanks
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("https, com.example.app ,,"), vec!["https", "com.example.app"]);
        assert!(parse_list(" , ").is_empty());
    }

    #[test]
    fn test_defaults() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.lifetimes.authorization_code_secs, 60);
        assert_eq!(settings.lifetimes.access_token_secs, 36_000);
        assert_eq!(settings.redirect.allowed_schemes(), ["http", "https"]);
        assert_eq!(settings.scopes.describe("read"), Some("Reading scope"));
    }
}
