// ABOUTME: Shareable handle to a resolved model implementation
// ABOUTME: Wraps the constructor that lifts a base record into the role trait object
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use super::identifier::ModelIdentifier;
use crate::models::{
    AccessToken, AccessTokenModel, Application, ApplicationModel, Grant, GrantModel,
    RefreshToken, RefreshTokenModel,
};

type Constructor<B, M> = dyn Fn(B) -> Box<M> + Send + Sync;

/// Resolved implementation of a role
///
/// `B` is the base record every implementation of the role wraps; `M` is the
/// role's trait object.
pub struct ModelHandle<B, M: ?Sized> {
    identifier: ModelIdentifier,
    constructor: Arc<Constructor<B, M>>,
}

impl<B, M: ?Sized> ModelHandle<B, M> {
    /// Handle for `identifier` built by `constructor`
    pub fn new<F>(identifier: ModelIdentifier, constructor: F) -> Self
    where
        F: Fn(B) -> Box<M> + Send + Sync + 'static,
    {
        Self {
            identifier,
            constructor: Arc::new(constructor),
        }
    }

    /// Identifier the implementation is registered under
    #[must_use]
    pub const fn identifier(&self) -> &ModelIdentifier {
        &self.identifier
    }

    /// Instantiate the implementation around a base record
    #[must_use]
    pub fn build(&self, base: B) -> Box<M> {
        (self.constructor)(base)
    }

    /// True if both handles come from the same registration
    #[must_use]
    pub fn same_handle(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.constructor, &other.constructor)
    }
}

impl<B, M: ?Sized> Clone for ModelHandle<B, M> {
    fn clone(&self) -> Self {
        Self {
            identifier: self.identifier.clone(),
            constructor: Arc::clone(&self.constructor),
        }
    }
}

impl<B, M: ?Sized> Debug for ModelHandle<B, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ModelHandle")
            .field("identifier", &self.identifier.to_string())
            .finish_non_exhaustive()
    }
}

/// Resolved application implementation
pub type ApplicationHandle = ModelHandle<Application, dyn ApplicationModel>;
/// Resolved grant implementation
pub type GrantHandle = ModelHandle<Grant, dyn GrantModel>;
/// Resolved access token implementation
pub type AccessTokenHandle = ModelHandle<AccessToken, dyn AccessTokenModel>;
/// Resolved refresh token implementation
pub type RefreshTokenHandle = ModelHandle<RefreshToken, dyn RefreshTokenModel>;
