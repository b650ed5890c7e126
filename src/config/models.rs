// ABOUTME: Configured identifiers selecting the implementation of each entity role
// ABOUTME: Absent values fall back to the built-in model for that role
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use oauth2_provider_core::constants::oauth::ENV_PREFIX;
use oauth2_provider_core::ModelRole;
use serde::{Deserialize, Serialize};

/// `APPLICATION_MODEL`, `GRANT_MODEL`, `ACCESS_TOKEN_MODEL`, `REFRESH_TOKEN_MODEL`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Qualified identifier of the application model
    pub application_model: Option<String>,
    /// Qualified identifier of the grant model
    pub grant_model: Option<String>,
    /// Qualified identifier of the access token model
    pub access_token_model: Option<String>,
    /// Qualified identifier of the refresh token model
    pub refresh_token_model: Option<String>,
}

impl ModelSettings {
    /// Load from `OAUTH2_PROVIDER_<SETTING>` environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let read = |role: ModelRole| {
            env::var(format!("{ENV_PREFIX}{}", role.setting_name()))
                .ok()
                .filter(|value| !value.is_empty())
        };

        Self {
            application_model: read(ModelRole::Application),
            grant_model: read(ModelRole::Grant),
            access_token_model: read(ModelRole::AccessToken),
            refresh_token_model: read(ModelRole::RefreshToken),
        }
    }

    /// Configured value for a role, if any
    #[must_use]
    pub fn configured(&self, role: ModelRole) -> Option<&str> {
        match role {
            ModelRole::Application => self.application_model.as_deref(),
            ModelRole::Grant => self.grant_model.as_deref(),
            ModelRole::AccessToken => self.access_token_model.as_deref(),
            ModelRole::RefreshToken => self.refresh_token_model.as_deref(),
        }
    }

    /// Identifier to resolve for a role: the configured one or the built-in default
    #[must_use]
    pub fn identifier(&self, role: ModelRole) -> &str {
        self.configured(role)
            .unwrap_or_else(|| role.default_identifier())
    }

    /// Override the identifier for one role
    #[must_use]
    pub fn with_model(mut self, role: ModelRole, identifier: impl Into<String>) -> Self {
        let slot = match role {
            ModelRole::Application => &mut self.application_model,
            ModelRole::Grant => &mut self.grant_model,
            ModelRole::AccessToken => &mut self.access_token_model,
            ModelRole::RefreshToken => &mut self.refresh_token_model,
        };
        *slot = Some(identifier.into());
        self
    }
}
