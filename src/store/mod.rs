// ABOUTME: Storage abstraction for applications, grants, and tokens
// ABOUTME: Owns the transactional rules: validate before commit, single-use grants, atomic rotation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use oauth2_provider_core::StoreError;

use crate::models::{AccessToken, Application, Grant, RefreshToken};

/// In-memory implementation
pub mod memory;

pub use memory::InMemoryStore;

/// Persistence contract of the provider
///
/// Implementations must run `ApplicationModel::validate` before committing an
/// application and must never hand out a grant twice.
#[async_trait]
pub trait ProviderStore: Send + Sync {
    // ================================
    // Applications
    // ================================

    /// Validate and persist an application, returning the stored record
    ///
    /// Missing credentials are assigned during validation. Saving an existing
    /// `client_id` replaces it.
    async fn save_application(&self, application: Application) -> Result<Application, StoreError>;

    /// Application by `client_id`
    async fn get_application(&self, client_id: &str) -> Result<Option<Application>, StoreError>;

    /// Remove an application together with its grants and tokens
    async fn delete_application(&self, client_id: &str) -> Result<(), StoreError>;

    // ================================
    // Grants
    // ================================

    /// Persist a newly issued grant
    async fn save_grant(&self, grant: Grant) -> Result<(), StoreError>;

    /// Consume the grant `code` issued to `client_id`
    ///
    /// The grant is removed on success. Unknown codes, codes owned by another
    /// client, and expired codes all yield `GrantUnavailable`.
    async fn redeem_grant(&self, client_id: &str, code: &str) -> Result<Grant, StoreError>;

    // ================================
    // Access tokens
    // ================================

    /// Persist a newly issued access token
    async fn save_access_token(&self, token: AccessToken) -> Result<(), StoreError>;

    /// Access token by value
    async fn get_access_token(&self, token: &str) -> Result<Option<AccessToken>, StoreError>;

    /// Delete an access token, unlinking any refresh token paired with it
    async fn revoke_access_token(&self, token: &str) -> Result<(), StoreError>;

    // ================================
    // Refresh tokens
    // ================================

    /// Persist a newly issued refresh token
    ///
    /// A paired access token must already be stored, belong to the same
    /// application and user, and not be held by another live refresh token.
    async fn save_refresh_token(&self, token: RefreshToken) -> Result<(), StoreError>;

    /// Refresh token by value
    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError>;

    /// Revoke a refresh token and delete its paired access token
    async fn revoke_refresh_token(&self, token: &str) -> Result<(), StoreError>;

    /// Replace `old_token` with a new access and refresh token in one step
    ///
    /// Either everything is applied or nothing is: the old refresh token is
    /// revoked, its access token deleted, and the new pair stored. The new pair
    /// must belong to the old token's application and user, and its scope must
    /// fit within the access token being replaced.
    async fn rotate_refresh_token(
        &self,
        old_token: &str,
        access_token: AccessToken,
        refresh_token: RefreshToken,
    ) -> Result<(), StoreError>;

    // ================================
    // Maintenance
    // ================================

    /// Delete expired grants and access tokens, returning how many were removed
    ///
    /// Access tokens still paired with a live refresh token are kept.
    async fn clear_expired(&self) -> Result<usize, StoreError>;
}
