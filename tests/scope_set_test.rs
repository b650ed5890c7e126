// ABOUTME: Tests for scope parsing and the subset containment check
// ABOUTME: Covers ordering, duplicates, empty requests, and case sensitivity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use oauth2_provider::ScopeSet;

#[test]
fn test_parse_discards_empties_and_duplicates() {
    let scopes = ScopeSet::parse("write  write\tread ");
    assert_eq!(scopes.len(), 2);
    assert!(scopes.contains_scope("read"));
    assert!(scopes.contains_scope("write"));
    assert_eq!(scopes.to_string(), "read write");
}

#[test]
fn test_equal_regardless_of_order() {
    assert_eq!(ScopeSet::parse("read write"), ScopeSet::parse("write read read"));
}

#[test]
fn test_contains_is_subset() {
    let granted = ScopeSet::parse("read write");
    assert!(granted.contains(&ScopeSet::parse("read")));
    assert!(granted.contains(&ScopeSet::parse("write read")));
    assert!(!granted.contains(&ScopeSet::parse("read admin")));
}

#[test]
fn test_empty_request_always_contained() {
    assert!(ScopeSet::parse("").contains(&ScopeSet::default()));
    assert!(ScopeSet::parse("read").contains(&ScopeSet::from_requested(Vec::<String>::new())));
}

#[test]
fn test_comparison_is_case_sensitive_and_literal() {
    let granted = ScopeSet::parse("read");
    assert!(!granted.contains(&ScopeSet::parse("READ")));
    assert!(!ScopeSet::parse("read:*").contains(&ScopeSet::parse("read:profile")));
}

#[test]
fn test_from_requested_ignores_blank_entries() {
    let requested = ScopeSet::from_requested(["read", "", "read"]);
    assert_eq!(requested, ScopeSet::parse("read"));
}

#[test]
fn test_serde_uses_space_delimited_string() {
    let scopes = ScopeSet::parse("write read");
    assert_eq!(serde_json::to_string(&scopes).unwrap(), "\"read write\"");
    let back: ScopeSet = serde_json::from_str("\"write  read\"").unwrap();
    assert_eq!(back, scopes);
}
