// ABOUTME: Refresh token record paired one-to-one with an access token
// ABOUTME: Liveness is the absence of a revocation timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use chrono::{DateTime, Utc};
use oauth2_provider_core::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Refresh token
///
/// Rotation revokes the old refresh token and its access token together; the
/// storage collaborator owns that transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Opaque token value
    pub token: String,
    /// Resource owner
    pub user: Uuid,
    /// `client_id` of the owning application
    pub application: String,
    /// Value of the currently paired access token
    pub access_token: Option<String>,
    /// When the token was revoked
    pub revoked: Option<DateTime<Utc>>,
}

impl Display for RefreshToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.display_label())
    }
}

/// Capability contract of the refresh token role
pub trait RefreshTokenModel: Debug + Send + Sync {
    /// Base token record
    fn refresh_token(&self) -> &RefreshToken;

    /// Mutable base token record
    fn refresh_token_mut(&mut self) -> &mut RefreshToken;

    /// True once a revocation timestamp is recorded
    fn is_revoked(&self) -> bool {
        self.refresh_token().revoked.is_some()
    }

    /// Record revocation; an existing timestamp is kept
    fn revoke(&mut self, clock: &dyn Clock) {
        let token = self.refresh_token_mut();
        if token.revoked.is_none() {
            token.revoked = Some(clock.now());
        }
    }

    /// The token value
    fn display_label(&self) -> String {
        self.refresh_token().token.clone()
    }
}

impl RefreshTokenModel for RefreshToken {
    fn refresh_token(&self) -> &RefreshToken {
        self
    }

    fn refresh_token_mut(&mut self) -> &mut RefreshToken {
        self
    }
}
