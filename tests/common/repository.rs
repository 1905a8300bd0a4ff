//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various states and configurations for comprehensive testing scenarios.

#![allow(dead_code)]

use branch_compare::core::error::{BranchCompareError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the repository path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository on a
/// deterministic `main` branch, and sets up basic git configuration to avoid
/// user prompts.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new().map_err(BranchCompareError::Io)?;
    let repo_path = temp_dir.path().to_path_buf();

    run_git(&repo_path, &["init", "-b", "main"])?;
    run_git(&repo_path, &["config", "user.name", "Test User"])?;
    run_git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt"
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    git_add(&repo.path, "initial.txt")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file with specified content, creating parent directories on
/// demand so nested paths like "src/sub/b.txt" work directly
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let file_path = repo_path.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).map_err(BranchCompareError::Io)?;
    }
    fs::write(file_path, content).map_err(BranchCompareError::Io)?;
    Ok(())
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename)).map_err(BranchCompareError::Io)?;
    Ok(())
}

/// Adds a file to the git index (or "." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    run_git(repo_path, &["commit", "-m", message])
}

/// Removes a tracked file through git so the deletion is committed next
pub fn git_rm(repo_path: &Path, filename: &str) -> Result<()> {
    run_git(repo_path, &["rm", "-q", filename])
}

/// Creates and checks out a new branch
pub fn git_create_branch(repo_path: &Path, name: &str) -> Result<()> {
    run_git(repo_path, &["checkout", "-q", "-b", name])
}

/// Checks out an existing branch
pub fn git_checkout(repo_path: &Path, name: &str) -> Result<()> {
    run_git(repo_path, &["checkout", "-q", name])
}

fn run_git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(BranchCompareError::Io)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(BranchCompareError::vcs(format!(
            "git {} failed: {}",
            args.join(" "),
            stderr.trim()
        )));
    }
    Ok(())
}
