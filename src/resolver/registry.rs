// ABOUTME: Table of model implementations available to the resolver, keyed by identifier
// ABOUTME: Built-in models are pre-registered under the provider's own namespace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use oauth2_provider_core::{ModelRole, ResolutionFailure};
use tracing::debug;

use super::handle::{
    AccessTokenHandle, ApplicationHandle, GrantHandle, ModelHandle, RefreshTokenHandle,
};
use super::identifier::ModelIdentifier;
use crate::models::{
    AccessToken, AccessTokenModel, Application, ApplicationModel, Grant, GrantModel,
    RefreshToken, RefreshTokenModel,
};

/// Implementations registered for a single role
struct RoleTable<B, M: ?Sized> {
    role: ModelRole,
    entries: HashMap<ModelIdentifier, ModelHandle<B, M>>,
}

impl<B, M: ?Sized> RoleTable<B, M> {
    fn new(role: ModelRole) -> Self {
        Self {
            role,
            entries: HashMap::new(),
        }
    }

    fn insert(&mut self, handle: ModelHandle<B, M>) {
        debug!(role = %self.role, model = %handle.identifier(), "Registered model implementation");
        self.entries.insert(handle.identifier().clone(), handle);
    }

    fn lookup(&self, raw: &str) -> Result<ModelHandle<B, M>, ResolutionFailure> {
        let identifier = ModelIdentifier::parse(self.role, raw)?;
        self.entries
            .get(&identifier)
            .cloned()
            .ok_or_else(|| ResolutionFailure::NotRegistered {
                role: self.role,
                identifier: raw.to_owned(),
            })
    }

    fn identifiers(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().map(ToString::to_string).collect();
        names.sort();
        names
    }
}

impl<B, M: ?Sized> Debug for RoleTable<B, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RoleTable")
            .field("role", &self.role)
            .field("entries", &self.identifiers())
            .finish()
    }
}

/// Registry of model implementations, one table per role
///
/// `ModelRegistry::new()` contains the four built-in models; `empty()` contains
/// nothing, which is mostly useful for tests.
#[derive(Debug)]
pub struct ModelRegistry {
    applications: RoleTable<Application, dyn ApplicationModel>,
    grants: RoleTable<Grant, dyn GrantModel>,
    access_tokens: RoleTable<AccessToken, dyn AccessTokenModel>,
    refresh_tokens: RoleTable<RefreshToken, dyn RefreshTokenModel>,
}

impl ModelRegistry {
    /// Registry without any implementation
    #[must_use]
    pub fn empty() -> Self {
        Self {
            applications: RoleTable::new(ModelRole::Application),
            grants: RoleTable::new(ModelRole::Grant),
            access_tokens: RoleTable::new(ModelRole::AccessToken),
            refresh_tokens: RoleTable::new(ModelRole::RefreshToken),
        }
    }

    /// Registry holding the built-in implementations
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.applications.insert(ModelHandle::new(
            ModelIdentifier::builtin("Application"),
            |base: Application| -> Box<dyn ApplicationModel> { Box::new(base) },
        ));
        registry.grants.insert(ModelHandle::new(
            ModelIdentifier::builtin("Grant"),
            |base: Grant| -> Box<dyn GrantModel> { Box::new(base) },
        ));
        registry.access_tokens.insert(ModelHandle::new(
            ModelIdentifier::builtin("AccessToken"),
            |base: AccessToken| -> Box<dyn AccessTokenModel> { Box::new(base) },
        ));
        registry.refresh_tokens.insert(ModelHandle::new(
            ModelIdentifier::builtin("RefreshToken"),
            |base: RefreshToken| -> Box<dyn RefreshTokenModel> { Box::new(base) },
        ));
        registry
    }

    /// Register an application implementation under `identifier`
    ///
    /// Registering the same identifier again replaces the previous entry.
    ///
    /// # Errors
    ///
    /// Returns `MalformedIdentifier` if `identifier` is not `namespace.TypeName`.
    pub fn register_application<M, F>(
        &mut self,
        identifier: &str,
        constructor: F,
    ) -> Result<&mut Self, ResolutionFailure>
    where
        M: ApplicationModel + 'static,
        F: Fn(Application) -> M + Send + Sync + 'static,
    {
        let identifier = ModelIdentifier::parse(ModelRole::Application, identifier)?;
        self.applications.insert(ModelHandle::new(
            identifier,
            move |base: Application| -> Box<dyn ApplicationModel> { Box::new(constructor(base)) },
        ));
        Ok(self)
    }

    /// Register a grant implementation under `identifier`
    ///
    /// # Errors
    ///
    /// Returns `MalformedIdentifier` if `identifier` is not `namespace.TypeName`.
    pub fn register_grant<M, F>(
        &mut self,
        identifier: &str,
        constructor: F,
    ) -> Result<&mut Self, ResolutionFailure>
    where
        M: GrantModel + 'static,
        F: Fn(Grant) -> M + Send + Sync + 'static,
    {
        let identifier = ModelIdentifier::parse(ModelRole::Grant, identifier)?;
        self.grants.insert(ModelHandle::new(
            identifier,
            move |base: Grant| -> Box<dyn GrantModel> { Box::new(constructor(base)) },
        ));
        Ok(self)
    }

    /// Register an access token implementation under `identifier`
    ///
    /// # Errors
    ///
    /// Returns `MalformedIdentifier` if `identifier` is not `namespace.TypeName`.
    pub fn register_access_token<M, F>(
        &mut self,
        identifier: &str,
        constructor: F,
    ) -> Result<&mut Self, ResolutionFailure>
    where
        M: AccessTokenModel + 'static,
        F: Fn(AccessToken) -> M + Send + Sync + 'static,
    {
        let identifier = ModelIdentifier::parse(ModelRole::AccessToken, identifier)?;
        self.access_tokens.insert(ModelHandle::new(
            identifier,
            move |base: AccessToken| -> Box<dyn AccessTokenModel> { Box::new(constructor(base)) },
        ));
        Ok(self)
    }

    /// Register a refresh token implementation under `identifier`
    ///
    /// # Errors
    ///
    /// Returns `MalformedIdentifier` if `identifier` is not `namespace.TypeName`.
    pub fn register_refresh_token<M, F>(
        &mut self,
        identifier: &str,
        constructor: F,
    ) -> Result<&mut Self, ResolutionFailure>
    where
        M: RefreshTokenModel + 'static,
        F: Fn(RefreshToken) -> M + Send + Sync + 'static,
    {
        let identifier = ModelIdentifier::parse(ModelRole::RefreshToken, identifier)?;
        self.refresh_tokens.insert(ModelHandle::new(
            identifier,
            move |base: RefreshToken| -> Box<dyn RefreshTokenModel> {
                Box::new(constructor(base))
            },
        ));
        Ok(self)
    }

    /// Look up the application implementation named by `identifier`
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` for a badly shaped value, `NotRegistered` for an unknown one.
    pub fn lookup_application(&self, identifier: &str) -> Result<ApplicationHandle, ResolutionFailure> {
        self.applications.lookup(identifier)
    }

    /// Look up the grant implementation named by `identifier`
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` for a badly shaped value, `NotRegistered` for an unknown one.
    pub fn lookup_grant(&self, identifier: &str) -> Result<GrantHandle, ResolutionFailure> {
        self.grants.lookup(identifier)
    }

    /// Look up the access token implementation named by `identifier`
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` for a badly shaped value, `NotRegistered` for an unknown one.
    pub fn lookup_access_token(
        &self,
        identifier: &str,
    ) -> Result<AccessTokenHandle, ResolutionFailure> {
        self.access_tokens.lookup(identifier)
    }

    /// Look up the refresh token implementation named by `identifier`
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` for a badly shaped value, `NotRegistered` for an unknown one.
    pub fn lookup_refresh_token(
        &self,
        identifier: &str,
    ) -> Result<RefreshTokenHandle, ResolutionFailure> {
        self.refresh_tokens.lookup(identifier)
    }

    /// Sorted identifiers registered for a role
    #[must_use]
    pub fn registered(&self, role: ModelRole) -> Vec<String> {
        match role {
            ModelRole::Application => self.applications.identifiers(),
            ModelRole::Grant => self.grants.identifiers(),
            ModelRole::AccessToken => self.access_tokens.identifiers(),
            ModelRole::RefreshToken => self.refresh_tokens.identifiers(),
        }
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
