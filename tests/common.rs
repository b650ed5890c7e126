// ABOUTME: Shared test utilities for the OAuth2 provider integration tests
// ABOUTME: Provides quiet logging, a frozen clock, sample applications, and a seeded store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `oauth2_provider`

use std::env;
use std::sync::{Arc, Once};

use chrono::{DateTime, TimeZone, Utc};
use oauth2_provider::generators::SystemSecretGenerator;
use oauth2_provider::models::Application;
use oauth2_provider::redirect_uri::RedirectUriPolicy;
use oauth2_provider::store::{InMemoryStore, ProviderStore};
use oauth2_provider::{AuthorizationGrantType, ClientType, FixedClock};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed instant every test clock starts from
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

/// Clock frozen at `epoch()`
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(epoch())
}

/// Confidential authorization-code client with one redirect URI
pub fn web_application() -> Application {
    Application::new(ClientType::Confidential, AuthorizationGrantType::AuthorizationCode)
        .with_name("test_app")
        .with_redirect_uris(["https://client.example.com/callback"])
}

/// Confidential client-credentials client with no redirect URIs
pub fn machine_application() -> Application {
    Application::new(ClientType::Confidential, AuthorizationGrantType::ClientCredentials)
}

/// Empty in-memory store on the default policy, system RNG, and `clock`
pub fn create_test_store(clock: FixedClock) -> InMemoryStore {
    init_test_logging();
    InMemoryStore::new(
        RedirectUriPolicy::default(),
        Arc::new(SystemSecretGenerator::new()),
        Arc::new(clock),
    )
}

/// Store seeded with `web_application()`, returning the saved record
pub async fn create_seeded_store(clock: FixedClock) -> (InMemoryStore, Application) {
    let store = create_test_store(clock);
    let application = store.save_application(web_application()).await.unwrap();
    (store, application)
}
