// ABOUTME: The four entity roles whose implementation a deployment may swap
// ABOUTME: Maps each role to its setting name and built-in default identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::constants::models;

/// Entity role resolved through the model resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelRole {
    /// Client registration
    Application,
    /// Authorization code
    Grant,
    /// Bearer access token
    AccessToken,
    /// Refresh token
    RefreshToken,
}

impl ModelRole {
    /// All roles, in the order they are resolved at startup
    pub const ALL: [Self; 4] = [
        Self::Application,
        Self::Grant,
        Self::AccessToken,
        Self::RefreshToken,
    ];

    /// Name of the setting that selects the implementation for this role
    #[must_use]
    pub const fn setting_name(&self) -> &'static str {
        match self {
            Self::Application => models::APPLICATION_MODEL,
            Self::Grant => models::GRANT_MODEL,
            Self::AccessToken => models::ACCESS_TOKEN_MODEL,
            Self::RefreshToken => models::REFRESH_TOKEN_MODEL,
        }
    }

    /// Identifier of the built-in implementation used when the setting is absent
    #[must_use]
    pub const fn default_identifier(&self) -> &'static str {
        match self {
            Self::Application => models::DEFAULT_APPLICATION_MODEL,
            Self::Grant => models::DEFAULT_GRANT_MODEL,
            Self::AccessToken => models::DEFAULT_ACCESS_TOKEN_MODEL,
            Self::RefreshToken => models::DEFAULT_REFRESH_TOKEN_MODEL,
        }
    }
}

impl Display for ModelRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Application => "application",
            Self::Grant => "grant",
            Self::AccessToken => "access token",
            Self::RefreshToken => "refresh token",
        };
        f.write_str(name)
    }
}
