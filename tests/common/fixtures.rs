//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific comparison
//! states to test the tree view and diff commands consistently.

#![allow(dead_code)]

use super::repository::*;
use branch_compare::core::error::Result;

/// Scenario: `main` and a `feature` branch that modifies, adds, and deletes
/// files across nested folders. The repository is left checked out on `main`.
///
/// Relative to `main`, the `feature` branch has:
/// - `src/app.txt` modified
/// - `src/util/extra.txt` added
/// - `README.md` deleted
pub fn create_branch_diff_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "README.md", "readme\n")?;
    create_file(&repo.path, "src/app.txt", "app v1\n")?;
    create_file(&repo.path, "src/util/helper.txt", "helper\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    git_create_branch(&repo.path, "feature")?;
    create_file(&repo.path, "src/app.txt", "app v2\n")?;
    create_file(&repo.path, "src/util/extra.txt", "extra\n")?;
    git_rm(&repo.path, "README.md")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Feature work")?;
    git_checkout(&repo.path, "main")?;

    Ok(repo)
}

/// Scenario: a committed `main` plus uncommitted working tree changes:
/// `tracked.txt` modified on disk and `fresh.txt` untracked.
pub fn create_workdir_changes_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "tracked.txt", "original content\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "tracked.txt", "modified content\n")?;
    create_file(&repo.path, "fresh.txt", "untracked content\n")?;

    Ok(repo)
}
