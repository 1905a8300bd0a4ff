//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`BranchCompareError`] which provides error handling for
//! all branch-compare operations. It uses `thiserror` for ergonomic error
//! definitions and includes specialized constructors for common failure
//! scenarios.
//!
//! # Public API
//! - [`BranchCompareError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, BranchCompareError>`
//!
//! # Error Categories
//! - **Repository discovery**: Repository not found, no working directory
//! - **Collaborator failures**: git2 library errors, unresolvable revisions,
//!   freeform diff failures (classified later by the diff orchestrator)
//! - **File operations**: I/O errors, UTF-8 issues

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for branch-compare
#[derive(Error, Debug)]
pub enum BranchCompareError {
    // Repository discovery errors
    #[error("Not in a git repository")]
    NotInGitRepo,

    #[error("Repository has no working directory")]
    NoWorkingDirectory,

    #[error("Git repository error: {0}")]
    GitRepo(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    // Revision resolution errors. The display text is deliberately the
    // classic git wording so the orchestrator's classifier recognizes it.
    #[error("unknown revision '{name}'")]
    RevisionNotFound { name: String },

    // Comparison errors
    #[error("File '{path}' is not part of the current comparison")]
    FileNotInComparison { path: PathBuf },

    // Freeform collaborator failure surfaced with its original message
    #[error("{message}")]
    Vcs { message: String },

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 in file content: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using BranchCompareError
pub type Result<T> = std::result::Result<T, BranchCompareError>;

impl BranchCompareError {
    /// Create a revision not found error
    pub fn revision_not_found(name: impl Into<String>) -> Self {
        Self::RevisionNotFound { name: name.into() }
    }

    /// Create a freeform collaborator error
    pub fn vcs(message: impl Into<String>) -> Self {
        Self::Vcs {
            message: message.into(),
        }
    }

    /// Create a file not in comparison error
    pub fn file_not_in_comparison(path: impl Into<PathBuf>) -> Self {
        Self::FileNotInComparison { path: path.into() }
    }
}
