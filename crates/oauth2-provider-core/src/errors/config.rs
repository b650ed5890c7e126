// ABOUTME: Configuration errors for environment-driven provider settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// An environment value could not be parsed into a setting
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Value was not a positive integer number of seconds within bounds
    #[error("Invalid value for {key}: expected seconds between 1 and {max}, got '{value}'")]
    InvalidSeconds {
        /// Environment variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// Largest accepted lifetime
        max: i64,
    },

    /// Scope dictionary was not a JSON object of strings
    #[error("Invalid scope dictionary in {key}")]
    InvalidScopes {
        /// Environment variable name
        key: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A list setting was present but empty
    #[error("{key} must not be empty")]
    EmptyList {
        /// Environment variable name
        key: &'static str,
    },
}
