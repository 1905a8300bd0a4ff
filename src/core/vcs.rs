//! Version-control collaborator interface and its git2 implementation.
//!
//! This module provides the narrow seam the rest of the system is driven
//! through: [`VcsProvider`] describes everything the comparison core needs
//! from the host's version control (branch enumeration, diffs between refs or
//! against the working tree, file content at a ref), and [`GitVcs`] implements
//! it on top of the `git2` library.
//!
//! Discovery is an explicit two-phase init: [`GitVcs::probe`] answers whether
//! a repository is reachable without binding to it, and [`GitVcs::bind`]
//! produces the working handle. A failed bind is surfaced once as an
//! informational state, never as a fatal error.
//!
//! # Public API
//! - [`VcsProvider`]: Collaborator trait the core calls through
//! - [`GitVcs`]: git2-backed implementation
//! - [`BranchInfo`]: One branch record from enumeration

use crate::core::change::{ChangeStatus, ChangedFile};
use crate::core::error::{BranchCompareError, Result};
use git2::{BranchType, DiffOptions, Repository};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One branch known to the repository
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchInfo {
    pub name: String,
    pub is_remote: bool,
    pub remote_name: Option<String>,
    pub commit_hash: Option<String>,
}

/// Everything the comparison core needs from the version-control collaborator.
///
/// Diff calls fail with a descriptive message; the diff orchestrator
/// classifies those messages, so implementations should keep them close to
/// the underlying tool's wording.
pub trait VcsProvider {
    /// Absolute path of the repository working directory, used to relativize
    /// changed-file paths.
    fn workdir(&self) -> &Path;

    /// Enumerate branches; remote-tracking branches are included on demand.
    fn list_branches(&self, include_remote: bool) -> Result<Vec<BranchInfo>>;

    /// Changes from `base` to the live working tree (base is the old side).
    fn diff_working_tree_against(&self, base: &str) -> Result<Vec<ChangedFile>>;

    /// Changes from `base` to `other` (base is the old side).
    fn diff_between(&self, base: &str, other: &str) -> Result<Vec<ChangedFile>>;

    /// Content of one file at a ref, used to render one side of a diff for
    /// non-working-tree refs.
    fn show_file(&self, reference: &str, relative_path: &str) -> Result<String>;
}

/// git2-backed collaborator bound to one repository
pub struct GitVcs {
    repo: Repository,
    workdir: PathBuf,
}

impl GitVcs {
    /// Probe phase of discovery: is a repository reachable from `path`?
    pub fn probe<P: AsRef<Path>>(path: P) -> bool {
        Repository::discover(path).is_ok()
    }

    /// Bind phase of discovery: open the repository and resolve its working
    /// directory. Call [`GitVcs::probe`] first when absence of a repository
    /// should render as a placeholder instead of an error.
    pub fn bind<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(&path).map_err(|_| BranchCompareError::NotInGitRepo)?;
        let workdir = repo
            .workdir()
            .ok_or(BranchCompareError::NoWorkingDirectory)?
            .to_path_buf();
        log::debug!("bound git repository at {}", workdir.display());
        Ok(GitVcs { repo, workdir })
    }

    fn resolve_tree(&self, reference: &str) -> Result<git2::Tree<'_>> {
        let object = self
            .repo
            .revparse_single(reference)
            .map_err(|_| BranchCompareError::revision_not_found(reference))?;
        let commit = object
            .peel_to_commit()
            .map_err(|_| BranchCompareError::revision_not_found(reference))?;
        Ok(commit.tree()?)
    }

    fn collect_changes(&self, diff: &git2::Diff<'_>) -> Result<Vec<ChangedFile>> {
        let mut changes = Vec::new();
        for delta in diff.deltas() {
            let Some(status) = ChangeStatus::from_delta(delta.status()) else {
                continue;
            };
            // Deletions only carry an old-side path.
            let relative = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .ok_or(BranchCompareError::InvalidUtf8Path)?;
            changes.push(ChangedFile::new(self.workdir.join(relative), status));
        }
        Ok(changes)
    }
}

impl VcsProvider for GitVcs {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn list_branches(&self, include_remote: bool) -> Result<Vec<BranchInfo>> {
        let filter = if include_remote {
            None
        } else {
            Some(BranchType::Local)
        };

        let mut branches = Vec::new();
        for entry in self.repo.branches(filter)? {
            let (branch, branch_type) = entry?;
            let name = branch
                .name()?
                .ok_or(BranchCompareError::InvalidUtf8Path)?
                .to_string();
            let is_remote = branch_type == BranchType::Remote;
            let remote_name = if is_remote {
                name.split('/').next().map(str::to_string)
            } else {
                None
            };
            let commit_hash = branch
                .get()
                .target()
                .map(|oid| oid.to_string()[..7].to_string());
            branches.push(BranchInfo {
                name,
                is_remote,
                remote_name,
                commit_hash,
            });
        }

        // Local branches first, then remotes, each group alphabetical
        branches.sort_by(|a, b| {
            a.is_remote
                .cmp(&b.is_remote)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(branches)
    }

    fn diff_working_tree_against(&self, base: &str) -> Result<Vec<ChangedFile>> {
        let base_tree = self.resolve_tree(base)?;
        let mut opts = DiffOptions::new();
        opts.include_untracked(true).recurse_untracked_dirs(true);
        let diff = self
            .repo
            .diff_tree_to_workdir_with_index(Some(&base_tree), Some(&mut opts))?;
        self.collect_changes(&diff)
    }

    fn diff_between(&self, base: &str, other: &str) -> Result<Vec<ChangedFile>> {
        let base_tree = self.resolve_tree(base)?;
        let other_tree = self.resolve_tree(other)?;
        let mut diff =
            self.repo
                .diff_tree_to_tree(Some(&base_tree), Some(&other_tree), None)?;
        // Pair up additions/deletions so renames classify as such
        diff.find_similar(None)?;
        self.collect_changes(&diff)
    }

    fn show_file(&self, reference: &str, relative_path: &str) -> Result<String> {
        let tree = self.resolve_tree(reference)?;
        let entry = tree
            .get_path(Path::new(relative_path))
            .map_err(|_| BranchCompareError::file_not_in_comparison(relative_path))?;
        let object = entry.to_object(&self.repo)?;
        let blob = object
            .peel_to_blob()
            .map_err(|_| BranchCompareError::file_not_in_comparison(relative_path))?;
        Ok(std::str::from_utf8(blob.content())?.to_string())
    }
}
