// ABOUTME: Bearer access token record and the scope authorization primitive
// ABOUTME: Resource servers authorize through allow_scopes, never by comparing scope strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

use oauth2_provider_core::{Clock, Expiry, ScopeSet, SystemClock};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scopes::ScopeCatalog;

/// Bearer access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Opaque bearer value
    pub token: String,
    /// Resource owner; `None` for client-credentials tokens
    pub user: Option<Uuid>,
    /// `client_id` of the owning application
    pub application: String,
    /// When the token stops authorizing requests
    pub expires: Expiry,
    /// Granted scopes
    pub scope: ScopeSet,
    /// Refresh token that produced this token (lookup only)
    pub source_refresh_token: Option<String>,
}

impl Display for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.display_label())
    }
}

/// Capability contract of the access token role
pub trait AccessTokenModel: Debug + Send + Sync {
    /// Base token record
    fn access_token(&self) -> &AccessToken;

    /// Mutable base token record
    fn access_token_mut(&mut self) -> &mut AccessToken;

    /// Expiry check against the wall clock
    fn is_expired(&self) -> bool {
        self.is_expired_with(&SystemClock)
    }

    /// Expiry check against an injected clock; an unset expiry counts as expired
    fn is_expired_with(&self, clock: &dyn Clock) -> bool {
        self.access_token().expires.is_expired(clock)
    }

    /// True iff every requested scope was granted to this token
    ///
    /// Order and duplicates in `requested` are irrelevant; an empty request is
    /// always allowed.
    fn allow_scopes(&self, requested: &[&str]) -> bool {
        self.allow_scope_set(&ScopeSet::from_requested(requested))
    }

    /// Scope check against an already-built set
    fn allow_scope_set(&self, requested: &ScopeSet) -> bool {
        self.access_token().scope.contains(requested)
    }

    /// Not expired and grants every requested scope
    fn is_valid(&self, requested: &[&str]) -> bool {
        self.is_valid_with(&SystemClock, requested)
    }

    /// `is_valid` against an injected clock
    fn is_valid_with(&self, clock: &dyn Clock, requested: &[&str]) -> bool {
        !self.is_expired_with(clock) && self.allow_scopes(requested)
    }

    /// Descriptions of this token's scopes; scopes missing from the catalog are omitted
    fn scope_descriptions(&self, catalog: &ScopeCatalog) -> BTreeMap<String, String> {
        catalog.describe_all(&self.access_token().scope)
    }

    /// The token value
    fn display_label(&self) -> String {
        self.access_token().token.clone()
    }

    /// True when no resource owner is attached (client-credentials flow)
    fn is_machine_token(&self) -> bool {
        self.access_token().user.is_none()
    }
}

impl AccessTokenModel for AccessToken {
    fn access_token(&self) -> &AccessToken {
        self
    }

    fn access_token_mut(&mut self) -> &mut AccessToken {
        self
    }
}
