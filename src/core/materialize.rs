//! Lazy materialization of the folder tree into display items.
//!
//! The tree view asks for one level at a time: [`root_items`] for the top of
//! the tree, [`child_items`] for any folder below it, located by re-walking
//! its path segments from the root on every call (the tree is immutable for
//! the lifetime of one comparison, so the lookup is deterministic).
//!
//! Display items are one tagged variant, [`DisplayItem`], rendered by a single
//! exhaustive match in [`render_item`] instead of a per-type class hierarchy.

use crate::core::change::ChangedFile;
use crate::core::colors::{get_colored_marker, get_colored_name};
use crate::core::selection::SourceSelection;
use crate::core::tree::FolderNode;
use colored::*;
use std::cmp::Ordering;
use std::path::Path;

/// Everything needed to open the diff view for one file later: the file
/// itself plus the comparison it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffAction {
    pub file: ChangedFile,
    pub source: SourceSelection,
    pub target: String,
}

impl DiffAction {
    /// Display title for the diff view
    pub fn title(&self) -> String {
        format!(
            "{} ({} → {})",
            self.file.file_name(),
            self.target,
            self.source.label()
        )
    }

    /// The two content locators for the diff view: old side at the target
    /// ref, new side at the source.
    pub fn locators(&self, repo_root: &Path) -> (ContentLocator, ContentLocator) {
        let relative = crate::core::tree::relative_path(&self.file.absolute_path, repo_root);
        let left = ContentLocator {
            reference: Some(self.target.clone()),
            relative_path: relative.clone(),
        };
        let right = ContentLocator {
            reference: match &self.source {
                SourceSelection::WorkingTree => None,
                SourceSelection::Branch(name) => Some(name.clone()),
            },
            relative_path: relative,
        };
        (left, right)
    }
}

/// Names one side of a diff view: a file at a ref, or in the working tree
/// when `reference` is None.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentLocator {
    pub reference: Option<String>,
    pub relative_path: String,
}

/// Opens a diff view for two content locators. Implemented by the
/// presentation surface; the core only produces the locators.
pub trait DiffViewer {
    fn open_diff(
        &self,
        left: &ContentLocator,
        right: &ContentLocator,
        title: &str,
    ) -> crate::core::error::Result<()>;
}

/// One row of the comparison view
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// The selected source (working tree or branch)
    Source { label: String },
    /// The selected target branch, or a placeholder while unset
    Target { label: String },
    /// Divider between the selectors and the file list
    Separator,
    /// An expandable folder, carrying its relative path for later lookup
    Folder { name: String, path: String },
    /// A changed file with its status marker and diff action payload
    File {
        name: String,
        marker: &'static str,
        action: DiffAction,
    },
    /// Merge conflict notice for the current comparison
    Conflict { message: String },
    /// Informational placeholder (no repository, branch not found, no changes)
    Info { message: String },
}

/// Items for the top level of the tree
pub fn root_items(
    tree: &FolderNode,
    source: &SourceSelection,
    target: &str,
) -> Vec<DisplayItem> {
    folder_items(tree, source, target)
}

/// Items for one folder, located by walking `folder_path` from the root.
/// Returns an empty sequence when any segment is missing.
pub fn child_items(
    tree: &FolderNode,
    folder_path: &str,
    source: &SourceSelection,
    target: &str,
) -> Vec<DisplayItem> {
    match tree.lookup(folder_path) {
        Some(node) => folder_items(node, source, target),
        None => Vec::new(),
    }
}

fn folder_items(node: &FolderNode, source: &SourceSelection, target: &str) -> Vec<DisplayItem> {
    let mut folders: Vec<&FolderNode> = node.children.values().collect();
    folders.sort_by(|a, b| compare_names(&a.name, &b.name));

    let mut files: Vec<&ChangedFile> = node.files.iter().collect();
    files.sort_by(|a, b| compare_names(&a.file_name(), &b.file_name()));

    let mut items = Vec::with_capacity(folders.len() + files.len());
    for folder in folders {
        items.push(DisplayItem::Folder {
            name: folder.name.clone(),
            path: folder.path.clone(),
        });
    }
    for file in files {
        items.push(DisplayItem::File {
            name: file.file_name(),
            marker: file.status.marker(),
            action: DiffAction {
                file: (*file).clone(),
                source: source.clone(),
                target: target.to_string(),
            },
        });
    }
    items
}

/// Case-aware name ordering: case-insensitive first, byte order as tiebreak,
/// so "Readme" and "readme" stay adjacent but distinct.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Render one display item as a terminal line, indented by tree depth.
pub fn render_item(item: &DisplayItem, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    match item {
        DisplayItem::Source { label } => {
            format!("{indent}{} {}", "Source:".white(), label.blue())
        }
        DisplayItem::Target { label } => {
            format!("{indent}{} {}", "Target:".white(), label.blue())
        }
        DisplayItem::Separator => format!("{indent}{}", "────────".bright_black()),
        DisplayItem::Folder { name, .. } => {
            format!("{indent}{}{}", name.bold(), "/".bright_black())
        }
        DisplayItem::File { name, action, .. } => {
            let status = action.file.status;
            format!(
                "{indent}{} {}",
                get_colored_marker(status),
                get_colored_name(status, name)
            )
        }
        DisplayItem::Conflict { message } => format!("{indent}{}", message.red().bold()),
        DisplayItem::Info { message } => format!("{indent}{}", message.white()),
    }
}
