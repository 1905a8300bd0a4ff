//! Folder tree construction from a flat list of changed files.
//!
//! [`build_tree`] turns the changed-file records of one comparison into a
//! hierarchy of [`FolderNode`]s mirroring the filesystem structure of only the
//! changed paths. The tree is a pure function of its inputs, lives in memory
//! for the duration of one comparison, and is rebuilt from scratch whenever
//! the comparison is invalidated.

use crate::core::change::ChangedFile;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One folder in the materialized tree.
///
/// `path` is '/'-joined and relative to the repository root; a child's path is
/// always `parent.path + "/" + child.name` (empty at the root). Child order is
/// irrelevant here, sorting happens at render time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FolderNode {
    pub name: String,
    pub path: String,
    pub children: BTreeMap<String, FolderNode>,
    pub files: Vec<ChangedFile>,
}

impl FolderNode {
    fn child(&mut self, name: &str) -> &mut FolderNode {
        let path = if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", self.path, name)
        };
        self.children
            .entry(name.to_string())
            .or_insert_with(|| FolderNode {
                name: name.to_string(),
                path,
                ..FolderNode::default()
            })
    }

    /// Walk `folder_path` segments down from this node. Returns None when any
    /// segment is missing.
    pub fn lookup(&self, folder_path: &str) -> Option<&FolderNode> {
        let mut node = self;
        for segment in folder_path.split('/').filter(|s| !s.is_empty()) {
            node = node.children.get(segment)?;
        }
        Some(node)
    }

    /// Total number of files in this node and all descendants
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .children
                .values()
                .map(FolderNode::file_count)
                .sum::<usize>()
    }
}

/// Build the folder tree for one comparison.
///
/// Each file's path is relativized against `repo_root` and split into
/// segments; the last segment is the file name, prior segments are folders
/// created on demand. A file directly at the repository root lands in the
/// root node's `files`.
pub fn build_tree(changes: &[ChangedFile], repo_root: &Path) -> FolderNode {
    let mut root = FolderNode::default();

    for change in changes {
        let relative = relative_path(&change.absolute_path, repo_root);
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let Some((_file_name, folders)) = segments.split_last() else {
            continue;
        };

        let mut node = &mut root;
        for folder in folders {
            node = node.child(folder);
        }
        node.files.push(change.clone());
    }

    root
}

/// Relativize `absolute` against `repo_root`, normalizing to '/' separators.
/// A path outside `repo_root` is treated as already relative.
pub(crate) fn relative_path(absolute: &Path, repo_root: &Path) -> String {
    let raw = match absolute.strip_prefix(repo_root) {
        Ok(stripped) => stripped.to_string_lossy().into_owned(),
        Err(_) => absolute.to_string_lossy().into_owned(),
    };
    raw.trim_start_matches(['/', '\\']).replace('\\', "/")
}
