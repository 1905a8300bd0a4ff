//! Core functionality for the branch-compare tool.
//!
//! This module provides the building blocks for comparing a source (working
//! tree or branch) against a target branch: the collaborator interface, the
//! folder tree, its materialization, and the surrounding state management.

pub mod change;
pub mod colors;
pub mod error;
pub mod materialize;
pub mod orchestrator;
pub mod output;
pub mod selection;
pub mod session;
pub mod tree;
pub mod vcs;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{BranchCompareError, Result};

// === Change classification ===
// Type-safe change status enumeration and per-file change records
pub use change::{ChangeStatus, ChangedFile};

// === Collaborator interface ===
// Narrow seam to the host version control, plus the git2 implementation
pub use vcs::{BranchInfo, GitVcs, VcsProvider};

// === Folder tree ===
// Hierarchical view of one comparison's changed files
pub use tree::{build_tree, FolderNode};

// === Materialization ===
// Display items served lazily, one tree level at a time
pub use materialize::{
    child_items, compare_names, render_item, root_items, ContentLocator, DiffAction, DiffViewer,
    DisplayItem,
};

// === Diff orchestration ===
// Single-slot cache and error classification over the collaborator
pub use orchestrator::{classify_error, DiffErrorKind, DiffOrchestrator, DiffResult};

// === Selection state ===
// Source/target selection with generation-tagged invalidation
pub use selection::{InvalidationSignal, RequestTag, SelectionState, SourceSelection};

// === Session ===
// Composition root serving items to the presentation surface
pub use session::{CompareSession, RefreshNotifier, RefreshRequest};

// === Color system ===
// Unified status coloring for tree rendering
pub use colors::{get_colored_marker, get_colored_name, get_status_color_style};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_section_header};
