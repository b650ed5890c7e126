// ABOUTME: Setting names and default identifiers for swappable entity models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Setting selecting the application model
pub const APPLICATION_MODEL: &str = "APPLICATION_MODEL";
/// Setting selecting the grant model
pub const GRANT_MODEL: &str = "GRANT_MODEL";
/// Setting selecting the access token model
pub const ACCESS_TOKEN_MODEL: &str = "ACCESS_TOKEN_MODEL";
/// Setting selecting the refresh token model
pub const REFRESH_TOKEN_MODEL: &str = "REFRESH_TOKEN_MODEL";

/// Namespace the built-in implementations are registered under
pub const BUILTIN_NAMESPACE: &str = "oauth2_provider";

/// Built-in application model
pub const DEFAULT_APPLICATION_MODEL: &str = "oauth2_provider.Application";
/// Built-in grant model
pub const DEFAULT_GRANT_MODEL: &str = "oauth2_provider.Grant";
/// Built-in access token model
pub const DEFAULT_ACCESS_TOKEN_MODEL: &str = "oauth2_provider.AccessToken";
/// Built-in refresh token model
pub const DEFAULT_REFRESH_TOKEN_MODEL: &str = "oauth2_provider.RefreshToken";

/// Separator between namespace and type name
pub const IDENTIFIER_SEPARATOR: char = '.';
