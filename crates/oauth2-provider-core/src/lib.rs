// ABOUTME: Core types and constants for the OAuth 2.0 provider domain
// ABOUTME: Foundation crate with error handling, scope sets, expiry semantics, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # OAuth2 Provider Core
//!
//! Foundation crate providing the pure value logic shared by every entity of the
//! OAuth 2.0 provider. Nothing in here performs I/O; every check is a total
//! function over already-loaded state.
//!
//! ## Modules
//!
//! - **errors**: `ValidationFailure`, `ResolutionFailure` and the collaborator error types
//! - **constants**: Setting names, default model identifiers, and lifetimes
//! - **scope**: Whitespace-delimited scope sets and the containment check
//! - **expiry**: Fail-closed expiry semantics and the injectable clock
//! - **models**: Client type and authorization grant type enumerations

/// Unified error taxonomy for validation, model resolution, and collaborators
pub mod errors;

/// Setting names, default identifiers, and default lifetimes
pub mod constants;

/// Scope parsing and subset containment
pub mod scope;

/// Expiry predicate and clock abstraction
pub mod expiry;

/// Client and grant type enumerations
pub mod models;

pub use errors::{
    ConfigError, GenerationError, ResolutionFailure, StoreError, ValidationFailure,
};
pub use expiry::{Clock, Expiry, FixedClock, SystemClock};
pub use models::{AuthorizationGrantType, ClientType, ModelRole, SigningAlgorithm};
pub use scope::ScopeSet;
