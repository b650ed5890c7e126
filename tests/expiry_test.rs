// ABOUTME: Tests for the fail-closed expiry predicate shared by grants and tokens
// ABOUTME: Uses a frozen clock to pin the inclusive expiry boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Duration;
use oauth2_provider::models::{AccessToken, AccessTokenModel, Grant, GrantModel};
use oauth2_provider::{Expiry, ScopeSet};
use uuid::Uuid;

fn grant(expires: Expiry) -> Grant {
    Grant {
        code: "code".to_owned(),
        application: "client".to_owned(),
        user: Uuid::new_v4(),
        expires,
        redirect_uri: "https://client.example.com/callback".to_owned(),
        scope: ScopeSet::parse("read"),
    }
}

fn access_token(expires: Expiry) -> AccessToken {
    AccessToken {
        token: "token".to_owned(),
        user: None,
        application: "client".to_owned(),
        expires,
        scope: ScopeSet::parse("read"),
        source_refresh_token: None,
    }
}

#[test]
fn test_unset_expiry_is_expired() {
    let clock = common::fixed_clock();
    assert!(grant(Expiry::unset()).is_expired_with(&clock));
    assert!(access_token(Expiry::unset()).is_expired_with(&clock));
    assert!(grant(Expiry::unset()).is_expired());
}

#[test]
fn test_expiry_boundary_is_inclusive() {
    let clock = common::fixed_clock();
    let expires = Expiry::at(common::epoch());

    assert!(grant(expires).is_expired_with(&clock));
    assert!(!grant(expires).is_expired_with(&clock.advanced_by(Duration::seconds(-1))));
    assert!(grant(expires).is_expired_with(&clock.advanced_by(Duration::seconds(1))));
}

#[test]
fn test_future_expiry_is_live() {
    let clock = common::fixed_clock();
    let token = access_token(Expiry::after(&clock, 3600));

    assert!(!token.is_expired_with(&clock));
    assert!(token.is_valid_with(&clock, &["read"]));
    assert!(!token.is_valid_with(&clock, &["write"]));
    assert!(!token.is_valid_with(&clock.advanced_by(Duration::hours(1)), &["read"]));
}

#[test]
fn test_remaining_lifetime() {
    let clock = common::fixed_clock();
    let expires = Expiry::after(&clock, 60);

    assert_eq!(expires.remaining(&clock), Some(Duration::seconds(60)));
    assert_eq!(expires.remaining(&clock.advanced_by(Duration::seconds(90))), None);
    assert_eq!(Expiry::unset().remaining(&clock), None);
}
