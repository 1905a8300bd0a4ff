//! Comparison session: the composition root behind the view.
//!
//! [`CompareSession`] owns the selection state, the diff orchestrator, and
//! the materialized folder tree for the active comparison, and serves display
//! items to the presentation surface. External change notification does not
//! call in directly: it enqueues refresh messages through a cloneable
//! [`RefreshNotifier`], and the session drains the queue on its own logic
//! thread before serving the next request.
//!
//! Every fetch is tagged with the selection identity at issue time; a result
//! whose tag no longer matches is discarded so a stale response can never
//! clobber a newer selection's display.

use crate::core::materialize::{self, DisplayItem};
use crate::core::orchestrator::{DiffOrchestrator, DiffResult};
use crate::core::selection::{RequestTag, SelectionState, SourceSelection};
use crate::core::tree::{self, FolderNode};
use crate::core::vcs::VcsProvider;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Message enqueued by external change notification
#[derive(Debug, Clone, Copy)]
pub struct RefreshRequest;

/// Cloneable handle for enqueueing a refresh from outside the session
#[derive(Clone)]
pub struct RefreshNotifier {
    tx: Sender<RefreshRequest>,
}

impl RefreshNotifier {
    pub fn notify(&self) {
        // The session may already be gone; a refresh for nobody is fine.
        let _ = self.tx.send(RefreshRequest);
    }
}

/// One active comparison over a version-control collaborator
pub struct CompareSession<V: VcsProvider> {
    state: SelectionState,
    orchestrator: DiffOrchestrator<V>,
    tree: Option<FolderNode>,
    refresh_tx: Sender<RefreshRequest>,
    refresh_rx: Receiver<RefreshRequest>,
}

impl<V: VcsProvider> CompareSession<V> {
    pub fn new(vcs: V) -> Self {
        let (refresh_tx, refresh_rx) = channel();
        CompareSession {
            state: SelectionState::new(),
            orchestrator: DiffOrchestrator::new(vcs),
            tree: None,
            refresh_tx,
            refresh_rx,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SelectionState {
        &mut self.state
    }

    pub fn vcs(&self) -> &V {
        self.orchestrator.vcs()
    }

    /// Handle for external change notification
    pub fn notifier(&self) -> RefreshNotifier {
        RefreshNotifier {
            tx: self.refresh_tx.clone(),
        }
    }

    pub fn set_source(&mut self, source: SourceSelection) {
        self.drop_derived();
        self.state.set_source(source);
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.drop_derived();
        self.state.set_target(target);
    }

    /// Explicit refresh: keep the selection, refetch everything.
    pub fn refresh(&mut self) {
        self.drop_derived();
        self.state.refresh();
    }

    /// Drain refresh messages enqueued since the last request. Coalesces any
    /// number of pending messages into one refetch.
    pub fn pump(&mut self) {
        let mut pending = false;
        while self.refresh_rx.try_recv().is_ok() {
            pending = true;
        }
        if pending {
            log::debug!("external change notification consumed, refreshing");
            self.refresh();
        }
    }

    /// The current comparison outcome, or None while no target is set.
    pub fn diff(&mut self) -> Option<DiffResult> {
        self.pump();
        let tag = self.state.issue_tag()?;
        self.fetch(&tag)
    }

    /// The full item list for the view: source/target selectors first, then
    /// the comparison outcome. With no target set, only the selectors.
    pub fn items(&mut self) -> Vec<DisplayItem> {
        self.pump();

        let mut items = vec![
            DisplayItem::Source {
                label: self.state.source().label(),
            },
            DisplayItem::Target {
                label: self
                    .state
                    .target()
                    .unwrap_or("(not selected)")
                    .to_string(),
            },
            DisplayItem::Separator,
        ];

        let Some(tag) = self.state.issue_tag() else {
            return items;
        };
        let Some(result) = self.fetch(&tag) else {
            return items;
        };

        if result.conflict_detected {
            items.push(DisplayItem::Conflict {
                message: result
                    .error_message
                    .unwrap_or_else(|| "Merge conflict detected.".to_string()),
            });
        } else if let Some(message) = result.error_message {
            items.push(DisplayItem::Info { message });
        } else if result.changes.is_empty() {
            items.push(DisplayItem::Info {
                message: format!(
                    "No changes between '{}' and {}.",
                    tag.target,
                    tag.source.label()
                ),
            });
        } else {
            let root_path = self.orchestrator.vcs().workdir().to_path_buf();
            let tree = self
                .tree
                .get_or_insert_with(|| tree::build_tree(&result.changes, &root_path));
            items.extend(materialize::root_items(tree, &tag.source, &tag.target));
        }
        items
    }

    /// Items for one folder of the current comparison's tree
    pub fn child_items(&mut self, folder_path: &str) -> Vec<DisplayItem> {
        self.pump();

        let Some(tag) = self.state.issue_tag() else {
            return Vec::new();
        };
        let Some(result) = self.fetch(&tag) else {
            return Vec::new();
        };
        if result.is_error() || result.changes.is_empty() {
            return Vec::new();
        }

        let root_path = self.orchestrator.vcs().workdir().to_path_buf();
        let tree = self
            .tree
            .get_or_insert_with(|| tree::build_tree(&result.changes, &root_path));
        materialize::child_items(tree, folder_path, &tag.source, &tag.target)
    }

    /// Locate one changed file of the current comparison by repository-relative
    /// path.
    pub fn find_change(&mut self, relative_path: &str) -> Option<crate::core::change::ChangedFile> {
        let wanted = relative_path.replace('\\', "/");
        let result = self.diff()?;
        let workdir = self.orchestrator.vcs().workdir().to_path_buf();
        result
            .changes
            .iter()
            .find(|change| tree::relative_path(&change.absolute_path, &workdir) == wanted)
            .cloned()
    }

    fn fetch(&mut self, tag: &RequestTag) -> Option<DiffResult> {
        let result = self.orchestrator.get_diff(&tag.source, &tag.target);
        if !self.state.accepts(tag) {
            // Selection moved on while the request was in flight
            log::debug!(
                "discarding stale diff result for generation {}",
                tag.generation
            );
            return None;
        }
        Some(result)
    }

    fn drop_derived(&mut self) {
        self.tree = None;
        self.orchestrator.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::change::{ChangeStatus, ChangedFile};
    use crate::core::vcs::testing::MockVcs;

    fn spec_changes() -> Vec<ChangedFile> {
        vec![
            ChangedFile::new("/repo/src/a.ts", ChangeStatus::Modified),
            ChangedFile::new("/repo/src/sub/b.ts", ChangeStatus::Added),
            ChangedFile::new("/repo/README.md", ChangeStatus::Deleted),
        ]
    }

    fn labels(items: &[DisplayItem]) -> Vec<String> {
        items
            .iter()
            .map(|item| match item {
                DisplayItem::Source { label } => format!("source:{label}"),
                DisplayItem::Target { label } => format!("target:{label}"),
                DisplayItem::Separator => "separator".to_string(),
                DisplayItem::Folder { name, .. } => format!("dir:{name}"),
                DisplayItem::File { name, marker, .. } => format!("{marker}:{name}"),
                DisplayItem::Conflict { .. } => "conflict".to_string(),
                DisplayItem::Info { .. } => "info".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_no_target_serves_selectors_only_without_diff_call() {
        let mut session = CompareSession::new(MockVcs::with_changes(spec_changes()));
        let items = session.items();

        assert_eq!(
            labels(&items),
            vec!["source:Working tree", "target:(not selected)", "separator"]
        );
        assert_eq!(session.vcs().diff_calls(), 0);
        assert!(session.child_items("src").is_empty());
        assert_eq!(session.vcs().diff_calls(), 0);
    }

    #[test]
    fn test_items_render_tree_after_target_set() {
        let mut session = CompareSession::new(MockVcs::with_changes(spec_changes()));
        session.set_target("main");

        let items = session.items();
        assert_eq!(
            labels(&items),
            vec![
                "source:Working tree",
                "target:main",
                "separator",
                "dir:src",
                "D:README.md"
            ]
        );

        assert_eq!(labels(&session.child_items("src")), vec!["dir:sub", "M:a.ts"]);
        assert_eq!(labels(&session.child_items("src/sub")), vec!["A:b.ts"]);
        assert!(session.child_items("src/missing").is_empty());
    }

    #[test]
    fn test_repeat_items_use_cached_diff() {
        let mut session = CompareSession::new(MockVcs::with_changes(spec_changes()));
        session.set_target("main");

        session.items();
        session.items();
        session.child_items("src");

        assert_eq!(session.vcs().diff_calls(), 1);
    }

    #[test]
    fn test_mutation_invalidates_cache_and_tree() {
        let mut session = CompareSession::new(MockVcs::with_changes(spec_changes()));
        session.set_target("main");
        session.items();

        session.set_target("develop");
        session.items();
        assert_eq!(session.vcs().diff_calls(), 2);

        session.set_source(SourceSelection::Branch("feature".to_string()));
        session.items();
        assert_eq!(session.vcs().diff_calls(), 3);
    }

    #[test]
    fn test_external_notification_triggers_refetch() {
        let mut session = CompareSession::new(MockVcs::with_changes(spec_changes()));
        session.set_target("main");
        session.items();

        let notifier = session.notifier();
        notifier.notify();
        notifier.notify();

        // Both pending messages coalesce into one refetch
        session.items();
        assert_eq!(session.vcs().diff_calls(), 2);
    }

    #[test]
    fn test_error_result_renders_info_item() {
        let mut session = CompareSession::new(MockVcs::failing_with("network timeout"));
        session.set_target("main");

        let items = session.items();
        assert_eq!(
            labels(&items),
            vec!["source:Working tree", "target:main", "separator", "info"]
        );
        assert!(session.child_items("src").is_empty());
    }

    #[test]
    fn test_conflict_result_renders_conflict_item() {
        let mut session = CompareSession::new(MockVcs::failing_with("CONFLICT (content)"));
        session.set_target("main");

        let items = session.items();
        assert_eq!(labels(&items).last().map(String::as_str), Some("conflict"));
    }

    #[test]
    fn test_empty_diff_renders_placeholder() {
        let mut session = CompareSession::new(MockVcs::with_changes(Vec::new()));
        session.set_target("main");

        let items = session.items();
        assert_eq!(labels(&items).last().map(String::as_str), Some("info"));
    }

    #[test]
    fn test_find_change_by_relative_path() {
        let mut session = CompareSession::new(MockVcs::with_changes(spec_changes()));
        session.set_target("main");

        let change = session.find_change("src/sub/b.ts").expect("known path");
        assert_eq!(change.status, ChangeStatus::Added);
        assert!(session.find_change("src/unknown.ts").is_none());
        assert_eq!(
            session.find_change("src\\sub\\b.ts").map(|c| c.status),
            Some(ChangeStatus::Added)
        );
    }

    #[test]
    fn test_selection_listener_fires_on_session_mutations() {
        let mut session = CompareSession::new(MockVcs::with_changes(Vec::new()));
        let rx = session.state_mut().subscribe();

        session.set_target("main");
        assert!(rx.try_recv().is_ok());

        session.refresh();
        assert!(rx.try_recv().is_ok());
    }
}
