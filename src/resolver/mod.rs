// ABOUTME: Resolves the configured implementation of each entity role exactly once
// ABOUTME: Results, including failures, are memoized for the lifetime of the resolver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Resolver
//!
//! The four entity roles are swappable: a deployment names the implementation
//! it wants through `ModelSettings` and the resolver looks that name up in a
//! `ModelRegistry`. Resolution happens lazily on first use of each role and the
//! outcome is cached, so every later call returns the same handle (or the same
//! error) without consulting the settings again.

/// Resolved handles and their constructors
pub mod handle;
/// `namespace.TypeName` parsing
pub mod identifier;
/// Registered implementations per role
pub mod registry;

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::OnceLock;

use oauth2_provider_core::{ModelRole, ResolutionFailure};
use tracing::info;

pub use handle::{
    AccessTokenHandle, ApplicationHandle, GrantHandle, ModelHandle, RefreshTokenHandle,
};
pub use identifier::ModelIdentifier;
pub use registry::ModelRegistry;

use crate::config::ModelSettings;

type Slot<H> = OnceLock<Result<H, ResolutionFailure>>;

/// Handles for all four roles
#[derive(Debug, Clone)]
pub struct ResolvedModels {
    /// Application implementation
    pub application: ApplicationHandle,
    /// Grant implementation
    pub grant: GrantHandle,
    /// Access token implementation
    pub access_token: AccessTokenHandle,
    /// Refresh token implementation
    pub refresh_token: RefreshTokenHandle,
}

/// Lazily resolving, memoizing lookup of the configured models
pub struct ModelResolver {
    settings: ModelSettings,
    registry: ModelRegistry,
    application: Slot<ApplicationHandle>,
    grant: Slot<GrantHandle>,
    access_token: Slot<AccessTokenHandle>,
    refresh_token: Slot<RefreshTokenHandle>,
}

impl ModelResolver {
    /// Resolver over `settings` looking names up in `registry`
    #[must_use]
    pub const fn new(settings: ModelSettings, registry: ModelRegistry) -> Self {
        Self {
            settings,
            registry,
            application: OnceLock::new(),
            grant: OnceLock::new(),
            access_token: OnceLock::new(),
            refresh_token: OnceLock::new(),
        }
    }

    /// Resolver over `settings` with only the built-in models registered
    #[must_use]
    pub fn with_builtin_models(settings: ModelSettings) -> Self {
        Self::new(settings, ModelRegistry::new())
    }

    /// Settings this resolver reads
    #[must_use]
    pub const fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    /// Configured application implementation
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` or `NotRegistered` for `APPLICATION_MODEL`.
    pub fn resolve_application_model(&self) -> Result<ApplicationHandle, ResolutionFailure> {
        self.memoized(&self.application, ModelRole::Application, |id| {
            self.registry.lookup_application(id)
        })
    }

    /// Configured grant implementation
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` or `NotRegistered` for `GRANT_MODEL`.
    pub fn resolve_grant_model(&self) -> Result<GrantHandle, ResolutionFailure> {
        self.memoized(&self.grant, ModelRole::Grant, |id| self.registry.lookup_grant(id))
    }

    /// Configured access token implementation
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` or `NotRegistered` for `ACCESS_TOKEN_MODEL`.
    pub fn resolve_access_token_model(&self) -> Result<AccessTokenHandle, ResolutionFailure> {
        self.memoized(&self.access_token, ModelRole::AccessToken, |id| {
            self.registry.lookup_access_token(id)
        })
    }

    /// Configured refresh token implementation
    ///
    /// # Errors
    ///
    /// `MalformedIdentifier` or `NotRegistered` for `REFRESH_TOKEN_MODEL`.
    pub fn resolve_refresh_token_model(&self) -> Result<RefreshTokenHandle, ResolutionFailure> {
        self.memoized(&self.refresh_token, ModelRole::RefreshToken, |id| {
            self.registry.lookup_refresh_token(id)
        })
    }

    /// Resolve every role, stopping at the first failure
    ///
    /// Useful at startup to surface configuration mistakes before serving.
    ///
    /// # Errors
    ///
    /// The first `ResolutionFailure` in role order.
    pub fn resolve_all(&self) -> Result<ResolvedModels, ResolutionFailure> {
        Ok(ResolvedModels {
            application: self.resolve_application_model()?,
            grant: self.resolve_grant_model()?,
            access_token: self.resolve_access_token_model()?,
            refresh_token: self.resolve_refresh_token_model()?,
        })
    }

    fn memoized<H, F>(
        &self,
        slot: &Slot<H>,
        role: ModelRole,
        lookup: F,
    ) -> Result<H, ResolutionFailure>
    where
        H: Clone,
        F: FnOnce(&str) -> Result<H, ResolutionFailure>,
    {
        slot.get_or_init(|| {
            let identifier = self.settings.identifier(role);
            let resolved = lookup(identifier);
            if resolved.is_ok() {
                info!(role = %role, model = identifier, "Resolved entity model");
            }
            resolved
        })
        .clone()
    }
}

impl Debug for ModelResolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ModelResolver")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Process-wide resolver
static GLOBAL_RESOLVER: OnceLock<ModelResolver> = OnceLock::new();

/// Install the process-wide resolver
///
/// Must run before the first call to `global_resolver()`; afterwards the
/// resolver is fixed and the rejected one is handed back.
///
/// # Errors
///
/// Returns `resolver` unchanged if a global resolver already exists.
pub fn install_global_resolver(resolver: ModelResolver) -> Result<(), ModelResolver> {
    GLOBAL_RESOLVER.set(resolver)
}

/// Process-wide resolver, built from the environment with the built-in
/// models if none was installed
///
/// Tests should build their own `ModelResolver` instead of using this.
pub fn global_resolver() -> &'static ModelResolver {
    GLOBAL_RESOLVER
        .get_or_init(|| ModelResolver::with_builtin_models(ModelSettings::from_env()))
}
