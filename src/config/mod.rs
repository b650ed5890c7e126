// ABOUTME: Configuration management for the OAuth 2.0 provider core
// ABOUTME: Explicit settings structs loaded from the environment and passed to constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Settings are plain values handed to the components that need them. Nothing
//! reads a mutable global; tests build a fresh struct per case.
//!
//! - **environment**: `ProviderSettings` and `TokenLifetimes` from `OAUTH2_PROVIDER_*`
//! - **models**: `ModelSettings`, the four swappable model identifiers

/// Provider-wide settings loaded from environment variables
pub mod environment;
/// Swappable model identifiers
pub mod models;

pub use environment::{ProviderSettings, TokenLifetimes};
pub use models::ModelSettings;
