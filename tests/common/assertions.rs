//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating branch-compare command output and
//! expected placeholder messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for the no-repository placeholder
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
}

/// Creates a predicate that checks for the branch-not-found placeholder
pub fn branch_not_found() -> impl Predicate<str> {
    predicates::str::contains("was not found in this repository")
        .and(predicates::str::contains("Fetch"))
}

/// Creates a predicate that checks for the source/target selector header
pub fn has_selectors() -> impl Predicate<str> {
    predicates::str::contains("Source:").and(predicates::str::contains("Target:"))
}

/// Creates a predicate that checks for the no-changes placeholder
pub fn no_changes() -> impl Predicate<str> {
    predicates::str::contains("No changes between")
}
