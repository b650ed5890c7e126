// ABOUTME: Secure random generation of client credentials, grant codes, and token values
// ABOUTME: Default implementation draws from the system CSPRNG via ring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Debug;

use oauth2_provider_core::constants::oauth::{
    CLIENT_ID_LENGTH, CLIENT_SECRET_LENGTH, CREDENTIAL_ALPHABET, TOKEN_LENGTH,
};
use oauth2_provider_core::GenerationError;
use ring::rand::{SecureRandom, SystemRandom};

/// Produces unguessable opaque strings
///
/// The core places no format requirement on generated values beyond uniqueness.
pub trait SecretGenerator: Debug + Send + Sync {
    /// New client identifier
    ///
    /// # Errors
    /// Returns an error if the random source fails
    fn generate_client_id(&self) -> Result<String, GenerationError>;

    /// New client secret
    ///
    /// # Errors
    /// Returns an error if the random source fails
    fn generate_client_secret(&self) -> Result<String, GenerationError>;

    /// New grant code, access token, or refresh token value
    ///
    /// # Errors
    /// Returns an error if the random source fails
    fn generate_token(&self) -> Result<String, GenerationError>;
}

/// Generator backed by the operating system CSPRNG
#[derive(Debug, Clone)]
pub struct SystemSecretGenerator {
    rng: SystemRandom,
}

impl Default for SystemSecretGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSecretGenerator {
    /// Create a generator over the system random source
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Random string of `length` characters from the credential alphabet
    ///
    /// Bytes at or above the largest multiple of the alphabet size are discarded so
    /// every character is equally likely.
    fn random_string(&self, length: usize, purpose: &'static str) -> Result<String, GenerationError> {
        let alphabet_len = CREDENTIAL_ALPHABET.len();
        let limit = 256 - (256 % alphabet_len);
        let mut output = String::with_capacity(length);
        let mut buffer = [0u8; 64];

        while output.len() < length {
            self.rng.fill(&mut buffer).map_err(|e| {
                tracing::error!(error = ?e, purpose, "System RNG failure");
                GenerationError::new(purpose)
            })?;

            for byte in buffer.iter().map(|b| usize::from(*b)) {
                if output.len() == length {
                    break;
                }
                if byte < limit {
                    output.push(char::from(CREDENTIAL_ALPHABET[byte % alphabet_len]));
                }
            }
        }

        Ok(output)
    }
}

impl SecretGenerator for SystemSecretGenerator {
    fn generate_client_id(&self) -> Result<String, GenerationError> {
        self.random_string(CLIENT_ID_LENGTH, "client_id")
    }

    fn generate_client_secret(&self) -> Result<String, GenerationError> {
        self.random_string(CLIENT_SECRET_LENGTH, "client_secret")
    }

    fn generate_token(&self) -> Result<String, GenerationError> {
        self.random_string(TOKEN_LENGTH, "token")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_lengths_and_alphabet() {
        let generator = SystemSecretGenerator::new();
        let client_id = generator.generate_client_id().unwrap();
        let secret = generator.generate_client_secret().unwrap();
        let token = generator.generate_token().unwrap();

        assert_eq!(client_id.len(), CLIENT_ID_LENGTH);
        assert_eq!(secret.len(), CLIENT_SECRET_LENGTH);
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(secret.bytes().all(|b| CREDENTIAL_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_generated_values_differ() {
        let generator = SystemSecretGenerator::new();
        assert_ne!(
            generator.generate_token().unwrap(),
            generator.generate_token().unwrap()
        );
    }
}
