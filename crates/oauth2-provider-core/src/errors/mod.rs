// ABOUTME: Error taxonomy for the OAuth 2.0 provider domain core
// ABOUTME: Validation, model resolution, configuration, generation, and storage errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! Expiry and scope checks never fail, so nothing here covers them. Every error
//! is surfaced to the immediate caller; no retries happen inside the core because
//! every operation is deterministic given its inputs.

/// Configuration parsing errors
pub mod config;
/// Model resolution errors (fatal misconfiguration)
pub mod resolution;
/// Storage collaborator errors
pub mod store;
/// Application validation and credential generation errors
pub mod validation;

pub use config::ConfigError;
pub use resolution::ResolutionFailure;
pub use store::StoreError;
pub use validation::{GenerationError, ValidationFailure};

