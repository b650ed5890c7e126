// ABOUTME: Main library entry point for the OAuth 2.0 authorization server domain core
// ABOUTME: Entity models, model resolution, issuance, storage contract, and settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # OAuth2 Provider
//!
//! Domain core of an OAuth 2.0 authorization server: the records for client
//! applications, authorization codes, access tokens and refresh tokens, the
//! rules attached to them, and the resolver that lets a deployment swap in its
//! own implementation of each entity.
//!
//! ## Architecture
//!
//! - **Models**: Role traits carrying validation, expiry, and scope rules
//! - **Resolver**: Lazily resolves and memoizes the configured model per role
//! - **Issuer**: Builds grants and token pairs with configured lifetimes
//! - **Store**: Async persistence contract plus an in-memory implementation
//! - **Config**: `OAUTH2_PROVIDER_*` settings with built-in defaults
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use oauth2_provider::config::ProviderSettings;
//! use oauth2_provider::errors::ProviderResult;
//! use oauth2_provider::resolver::global_resolver;
//!
//! fn main() -> ProviderResult<()> {
//!     let settings = ProviderSettings::from_env()?;
//!     let models = global_resolver().resolve_all()?;
//!
//!     println!(
//!         "{} scopes, application model {}",
//!         settings.scopes.len(),
//!         models.application.identifier()
//!     );
//!     Ok(())
//! }
//! ```

/// Provider settings loaded from the environment
pub mod config;

/// Provider error type and OAuth 2.0 error codes
pub mod errors;

/// Secure random credential generation
pub mod generators;

/// Grant and token issuance
pub mod issuer;

/// Structured logging setup
pub mod logging;

/// Entity records and role traits
pub mod models;

/// Redirect URI registration policy and matching
pub mod redirect_uri;

/// Swappable model resolution
pub mod resolver;

/// Scope dictionary
pub mod scopes;

/// Persistence contract and in-memory store
pub mod store;

pub use oauth2_provider_core::{
    AuthorizationGrantType, Clock, ClientType, Expiry, FixedClock, ModelRole, ScopeSet,
    SigningAlgorithm, SystemClock,
};
