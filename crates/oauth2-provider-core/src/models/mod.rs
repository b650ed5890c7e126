// ABOUTME: Core enumerations shared by entity implementations and the model resolver
// ABOUTME: Client type, authorization grant type, and swappable model roles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Token signing algorithms
pub mod algorithm;
/// Client type and grant type enumerations
pub mod grant_type;
/// The four swappable entity roles
pub mod role;

pub use algorithm::SigningAlgorithm;
pub use grant_type::{AuthorizationGrantType, ClientType};
pub use role::ModelRole;
