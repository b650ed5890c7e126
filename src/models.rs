// ABOUTME: Entity roles and built-in implementations for clients, grants, and tokens
// ABOUTME: Protocol rules live on the role traits so swapped-in models inherit them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Entity Models
//!
//! Each of the four roles is a trait whose provided methods carry the protocol
//! rules. A role implementation only has to expose the base record; the built-in
//! structs implement their own role trivially. Deployments wrap the base record
//! in their own type to add fields and register it with the model resolver.
//!
//! - `ApplicationModel` / `Application`: client registration and validation
//! - `GrantModel` / `Grant`: short-lived authorization code
//! - `AccessTokenModel` / `AccessToken`: bearer token and the scope check
//! - `RefreshTokenModel` / `RefreshToken`: rotation partner of an access token

/// Bearer access token
pub mod access_token;
/// Client application registration
pub mod application;
/// Authorization code grant
pub mod grant;
/// Refresh token
pub mod refresh_token;

pub use access_token::{AccessToken, AccessTokenModel};
pub use application::{parse_redirect_uris, Application, ApplicationModel};
pub use grant::{Grant, GrantModel};
pub use refresh_token::{RefreshToken, RefreshTokenModel};
