// ABOUTME: In-memory ProviderStore backed by a single tokio RwLock
// ABOUTME: Every operation takes the lock once, so multi-record updates are atomic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use oauth2_provider_core::{Clock, StoreError, SystemClock};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::ProviderStore;
use crate::config::ProviderSettings;
use crate::generators::{SecretGenerator, SystemSecretGenerator};
use crate::models::{
    AccessToken, Application, ApplicationModel, Grant, GrantModel, RefreshToken,
    RefreshTokenModel,
};
use crate::redirect_uri::RedirectUriPolicy;

/// Records keyed by their public value
#[derive(Debug, Default)]
struct StoreState {
    applications: HashMap<String, Application>,
    grants: HashMap<String, Grant>,
    access_tokens: HashMap<String, AccessToken>,
    refresh_tokens: HashMap<String, RefreshToken>,
}

impl StoreState {
    fn require_application(&self, client_id: &str) -> Result<(), StoreError> {
        if self.applications.contains_key(client_id) {
            Ok(())
        } else {
            Err(StoreError::NotFound {
                entity: "application",
                key: client_id.to_owned(),
            })
        }
    }

    /// The paired access token must exist, share the owner, and be unclaimed
    fn check_pairing(&self, refresh: &RefreshToken) -> Result<(), StoreError> {
        let Some(paired) = refresh.access_token.as_deref() else {
            return Ok(());
        };

        let access = self
            .access_tokens
            .get(paired)
            .ok_or_else(|| StoreError::NotFound {
                entity: "access token",
                key: paired.to_owned(),
            })?;
        if access.application != refresh.application || access.user != Some(refresh.user) {
            return Err(StoreError::Mismatch {
                entity: "access token",
                key: paired.to_owned(),
            });
        }

        let claimed = self.refresh_tokens.values().any(|other| {
            other.token != refresh.token
                && !other.is_revoked()
                && other.access_token.as_deref() == Some(paired)
        });
        if claimed {
            return Err(StoreError::AlreadyPaired {
                token: paired.to_owned(),
            });
        }
        Ok(())
    }

    fn unlink_access_token(&mut self, token: &str) {
        for refresh in self.refresh_tokens.values_mut() {
            if refresh.access_token.as_deref() == Some(token) {
                refresh.access_token = None;
            }
        }
    }
}

fn duplicate(entity: &'static str, key: &str) -> StoreError {
    StoreError::Duplicate {
        entity,
        key: key.to_owned(),
    }
}

/// Process-local store, suitable for tests and single-node deployments
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
    policy: RedirectUriPolicy,
    generator: Arc<dyn SecretGenerator>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    /// Empty store with explicit collaborators
    #[must_use]
    pub fn new(
        policy: RedirectUriPolicy,
        generator: Arc<dyn SecretGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            policy,
            generator,
            clock,
        }
    }

    /// Empty store using the configured redirect policy, system RNG, and wall clock
    #[must_use]
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        Self::new(
            settings.redirect.clone(),
            Arc::new(SystemSecretGenerator::new()),
            Arc::new(SystemClock),
        )
    }
}

#[async_trait]
impl ProviderStore for InMemoryStore {
    async fn save_application(&self, mut application: Application) -> Result<Application, StoreError> {
        application.validate(&self.policy, self.generator.as_ref())?;

        let mut state = self.state.write().await;
        state
            .applications
            .insert(application.client_id.clone(), application.clone());
        drop(state);

        debug!(client_id = %application.client_id, "Saved application");
        Ok(application)
    }

    async fn get_application(&self, client_id: &str) -> Result<Option<Application>, StoreError> {
        Ok(self.state.read().await.applications.get(client_id).cloned())
    }

    async fn delete_application(&self, client_id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.applications.remove(client_id).is_none() {
            return Err(StoreError::NotFound {
                entity: "application",
                key: client_id.to_owned(),
            });
        }

        state.grants.retain(|_, grant| grant.application != client_id);
        state
            .access_tokens
            .retain(|_, token| token.application != client_id);
        state
            .refresh_tokens
            .retain(|_, token| token.application != client_id);
        drop(state);

        info!(client_id = %client_id, "Deleted application and its credentials");
        Ok(())
    }

    async fn save_grant(&self, grant: Grant) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.require_application(&grant.application)?;
        if state.grants.contains_key(&grant.code) {
            return Err(duplicate("grant", &grant.code));
        }
        state.grants.insert(grant.code.clone(), grant);
        Ok(())
    }

    async fn redeem_grant(&self, client_id: &str, code: &str) -> Result<Grant, StoreError> {
        let mut state = self.state.write().await;
        let owned = state
            .grants
            .get(code)
            .is_some_and(|grant| grant.application == client_id);
        if !owned {
            debug!(client_id = %client_id, "Grant redemption refused");
            return Err(StoreError::GrantUnavailable);
        }

        let grant = state
            .grants
            .remove(code)
            .ok_or(StoreError::GrantUnavailable)?;
        if grant.is_expired_with(self.clock.as_ref()) {
            debug!(client_id = %client_id, "Expired grant discarded at redemption");
            return Err(StoreError::GrantUnavailable);
        }
        Ok(grant)
    }

    async fn save_access_token(&self, token: AccessToken) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.require_application(&token.application)?;
        if state.access_tokens.contains_key(&token.token) {
            return Err(duplicate("access token", &token.token));
        }
        state.access_tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn get_access_token(&self, token: &str) -> Result<Option<AccessToken>, StoreError> {
        Ok(self.state.read().await.access_tokens.get(token).cloned())
    }

    async fn revoke_access_token(&self, token: &str) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.access_tokens.remove(token).is_none() {
            return Err(StoreError::NotFound {
                entity: "access token",
                key: token.to_owned(),
            });
        }
        state.unlink_access_token(token);
        Ok(())
    }

    async fn save_refresh_token(&self, token: RefreshToken) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.require_application(&token.application)?;
        if state.refresh_tokens.contains_key(&token.token) {
            return Err(duplicate("refresh token", &token.token));
        }
        state.check_pairing(&token)?;
        state.refresh_tokens.insert(token.token.clone(), token);
        Ok(())
    }

    async fn get_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, StoreError> {
        Ok(self.state.read().await.refresh_tokens.get(token).cloned())
    }

    async fn revoke_refresh_token(&self, token: &str) -> Result<(), StoreError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        let refresh = state
            .refresh_tokens
            .get_mut(token)
            .ok_or_else(|| StoreError::NotFound {
                entity: "refresh token",
                key: token.to_owned(),
            })?;

        refresh.revoke(self.clock.as_ref());
        if let Some(paired) = refresh.access_token.take() {
            state.access_tokens.remove(&paired);
        }
        Ok(())
    }

    async fn rotate_refresh_token(
        &self,
        old_token: &str,
        access_token: AccessToken,
        mut refresh_token: RefreshToken,
    ) -> Result<(), StoreError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let previous = state
            .refresh_tokens
            .get(old_token)
            .ok_or_else(|| StoreError::NotFound {
                entity: "refresh token",
                key: old_token.to_owned(),
            })?;
        if previous.is_revoked() {
            return Err(StoreError::RefreshTokenRevoked {
                token: old_token.to_owned(),
            });
        }
        state.require_application(&previous.application)?;

        let owners = [
            (
                "access token",
                &access_token.token,
                &access_token.application,
                access_token.user,
            ),
            (
                "refresh token",
                &refresh_token.token,
                &refresh_token.application,
                Some(refresh_token.user),
            ),
        ];
        for (entity, key, application, user) in owners {
            if *application != previous.application || user != Some(previous.user) {
                return Err(StoreError::Mismatch {
                    entity,
                    key: key.clone(),
                });
            }
        }

        // The replaced access token bounds the scope of its successor
        let paired = previous
            .access_token
            .as_deref()
            .and_then(|token| state.access_tokens.get(token))
            .ok_or_else(|| StoreError::NotFound {
                entity: "paired access token",
                key: old_token.to_owned(),
            })?;
        if !paired.scope.contains(&access_token.scope) {
            return Err(StoreError::ScopeExceeded {
                scope: access_token.scope.to_string(),
            });
        }
        if state.access_tokens.contains_key(&access_token.token) {
            return Err(duplicate("access token", &access_token.token));
        }
        if state.refresh_tokens.contains_key(&refresh_token.token) {
            return Err(duplicate("refresh token", &refresh_token.token));
        }

        // All checks passed; nothing below can fail.
        if let Some(previous) = state.refresh_tokens.get_mut(old_token) {
            previous.revoke(self.clock.as_ref());
            if let Some(paired) = previous.access_token.take() {
                state.access_tokens.remove(&paired);
            }
        }

        refresh_token.access_token = Some(access_token.token.clone());
        state
            .access_tokens
            .insert(access_token.token.clone(), access_token);
        state
            .refresh_tokens
            .insert(refresh_token.token.clone(), refresh_token);
        drop(guard);

        debug!("Rotated refresh token");
        Ok(())
    }

    async fn clear_expired(&self) -> Result<usize, StoreError> {
        let clock = self.clock.as_ref();
        let mut state = self.state.write().await;

        let grants_before = state.grants.len();
        state.grants.retain(|_, grant| !grant.is_expired_with(clock));
        let grants_removed = grants_before - state.grants.len();

        // Expired tokens still paired with a live refresh token bound its next rotation
        let expired: Vec<String> = {
            let held: HashSet<&str> = state
                .refresh_tokens
                .values()
                .filter(|refresh| !refresh.is_revoked())
                .filter_map(|refresh| refresh.access_token.as_deref())
                .collect();
            state
                .access_tokens
                .values()
                .filter(|token| {
                    token.expires.is_expired(clock) && !held.contains(token.token.as_str())
                })
                .map(|token| token.token.clone())
                .collect()
        };
        for token in &expired {
            state.access_tokens.remove(token);
            state.unlink_access_token(token);
        }
        drop(state);

        let removed = grants_removed + expired.len();
        info!(
            grants = grants_removed,
            access_tokens = expired.len(),
            "Cleared expired credentials"
        );
        Ok(removed)
    }
}
