// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Model setting names, credential sizes, lifetimes, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

/// Swappable model setting names and built-in identifiers
pub mod models;
/// OAuth 2.0 credential sizes, lifetimes, and environment keys
pub mod oauth;
