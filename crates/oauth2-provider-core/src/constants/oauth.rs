// ABOUTME: OAuth 2.0 credential sizes, default lifetimes, and environment variable names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Prefix shared by every provider environment variable
pub const ENV_PREFIX: &str = "OAUTH2_PROVIDER_";

/// Environment variable holding the scope dictionary as a JSON object
pub const ENV_SCOPES: &str = "OAUTH2_PROVIDER_SCOPES";
/// Environment variable for authorization code lifetime
pub const ENV_AUTHORIZATION_CODE_EXPIRE_SECONDS: &str =
    "OAUTH2_PROVIDER_AUTHORIZATION_CODE_EXPIRE_SECONDS";
/// Environment variable for access token lifetime
pub const ENV_ACCESS_TOKEN_EXPIRE_SECONDS: &str = "OAUTH2_PROVIDER_ACCESS_TOKEN_EXPIRE_SECONDS";
/// Environment variable for the comma-separated redirect URI scheme allow-list
pub const ENV_ALLOWED_REDIRECT_URI_SCHEMES: &str =
    "OAUTH2_PROVIDER_ALLOWED_REDIRECT_URI_SCHEMES";

/// Authorization codes are exchanged almost immediately
pub const DEFAULT_AUTHORIZATION_CODE_EXPIRE_SECONDS: i64 = 60;
/// Ten hours
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_SECONDS: i64 = 36_000;
/// Upper bound for any configured lifetime (ten years)
pub const MAX_EXPIRE_SECONDS: i64 = 315_360_000;

/// Redirect URI schemes accepted when nothing is configured
pub const DEFAULT_ALLOWED_REDIRECT_URI_SCHEMES: &[&str] = &["http", "https"];

/// Scopes known when nothing is configured
pub const DEFAULT_SCOPES: &[(&str, &str)] = &[("read", "Reading scope"), ("write", "Writing scope")];

/// Length of a generated client identifier
pub const CLIENT_ID_LENGTH: usize = 40;
/// Length of a generated client secret
pub const CLIENT_SECRET_LENGTH: usize = 128;
/// Length of a generated grant code or token value
pub const TOKEN_LENGTH: usize = 30;

/// Alphabet for generated credentials (RFC 6749 Appendix A unreserved subset)
pub const CREDENTIAL_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Out-of-band redirect URI accepted for native apps (RFC 8252)
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";
