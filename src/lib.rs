//! Branch Compare - compare a source (working tree or branch) against a
//! target branch and browse the changed files as a folder tree.
//!
//! This library provides the comparison core: change classification, folder
//! tree construction, lazy tree materialization, diff orchestration with a
//! single-slot cache, and selection state with stale-response guarding. The
//! version control behind it and the surface in front of it are both reached
//! through narrow interfaces ([`core::VcsProvider`] and [`core::DiffViewer`]),
//! so the core stays host-agnostic.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module.

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    build_tree,
    child_items,
    classify_error,
    compare_names,
    render_item,
    root_items,

    BranchCompareError,
    BranchInfo,

    ChangeStatus,
    ChangedFile,
    CompareSession,
    ContentLocator,

    DiffAction,
    DiffErrorKind,
    DiffOrchestrator,
    DiffResult,
    DiffViewer,
    DisplayItem,

    FolderNode,
    GitVcs,

    RefreshNotifier,
    Result,

    SelectionState,
    SourceSelection,
    VcsProvider,
};
