// ABOUTME: Authorization code grant record issued at the authorization step
// ABOUTME: Short-lived and single-use; liveness follows the shared expiry semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use oauth2_provider_core::{Clock, Expiry, ScopeSet, SystemClock};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authorization code
///
/// Redemption is at-most-once; the storage collaborator removes the grant when it
/// is exchanged. Scope is handed wholesale to the access token at exchange time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    /// Single-use code value
    pub code: String,
    /// `client_id` of the owning application
    pub application: String,
    /// Resource owner who approved the request
    pub user: Uuid,
    /// When the code stops being redeemable
    pub expires: Expiry,
    /// Redirect URI the code was issued against
    pub redirect_uri: String,
    /// Approved scopes
    pub scope: ScopeSet,
}

impl Display for Grant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.display_label())
    }
}

/// Capability contract of the grant role
pub trait GrantModel: Debug + Send + Sync {
    /// Base grant record
    fn grant(&self) -> &Grant;

    /// Mutable base grant record
    fn grant_mut(&mut self) -> &mut Grant;

    /// Expiry check against the wall clock
    fn is_expired(&self) -> bool {
        self.is_expired_with(&SystemClock)
    }

    /// Expiry check against an injected clock; an unset expiry counts as expired
    fn is_expired_with(&self, clock: &dyn Clock) -> bool {
        self.grant().expires.is_expired(clock)
    }

    /// The code itself
    fn display_label(&self) -> String {
        self.grant().code.clone()
    }

    /// The code must be redeemed with the exact redirect URI it was issued for
    fn redirect_uri_allowed(&self, uri: &str) -> bool {
        self.grant().redirect_uri == uri
    }
}

impl GrantModel for Grant {
    fn grant(&self) -> &Grant {
        self
    }

    fn grant_mut(&mut self) -> &mut Grant {
        self
    }
}
