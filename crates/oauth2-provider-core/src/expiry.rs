// ABOUTME: Expiry semantics shared by grants and access tokens
// ABOUTME: Fail-closed liveness predicate over a nullable timestamp with an injectable clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Debug;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Source of "now" for every expiry comparison
pub trait Clock: Debug + Send + Sync {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant, for deterministic checks
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at `instant`
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// A clock `delta` later than this one
    #[must_use]
    pub fn advanced_by(&self, delta: Duration) -> Self {
        Self::new(self.instant + delta)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Nullable expiry timestamp
///
/// A missing timestamp means the credential was never valid, not that it never
/// expires. Unbounded credentials are treated as expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expiry(Option<DateTime<Utc>>);

impl Expiry {
    /// Expiry at a fixed instant
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self(Some(instant))
    }

    /// No recorded expiry
    #[must_use]
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Expiry `lifetime_secs` after the clock's current instant
    ///
    /// A lifetime that overflows the calendar yields an unset expiry, which is
    /// already expired.
    #[must_use]
    pub fn after(clock: &dyn Clock, lifetime_secs: i64) -> Self {
        Self(
            Duration::try_seconds(lifetime_secs)
                .and_then(|lifetime| clock.now().checked_add_signed(lifetime)),
        )
    }

    /// The recorded instant, if any
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    /// Expired iff unset, or `now >= expiry`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.0.is_none_or(|expires| now >= expires)
    }

    /// Expiry check against an injected clock
    #[must_use]
    pub fn is_expired(&self, clock: &dyn Clock) -> bool {
        self.is_expired_at(clock.now())
    }

    /// Time left before expiry; `None` once expired or when unset
    #[must_use]
    pub fn remaining(&self, clock: &dyn Clock) -> Option<Duration> {
        let now = clock.now();
        self.0
            .filter(|expires| now < *expires)
            .map(|expires| expires - now)
    }
}

impl From<Option<DateTime<Utc>>> for Expiry {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        Self(value)
    }
}

impl From<DateTime<Utc>> for Expiry {
    fn from(value: DateTime<Utc>) -> Self {
        Self::at(value)
    }
}
