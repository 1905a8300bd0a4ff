//! Selection state for the active comparison.
//!
//! [`SelectionState`] owns the chosen source (working tree or a named branch)
//! and target branch. Every mutation bumps a generation counter, which is the
//! backbone of the stale-response guard: a diff request is tagged with the
//! (source, target, generation) triple at issue time and its result is applied
//! only while the tag still matches. Mutations also signal subscribed
//! listeners that derived state is gone and the view must re-render.
//!
//! All of this runs on a single logic thread; the channels exist for
//! message-passing between event producers and that thread, not for
//! parallelism.

use serde::Serialize;
use std::fmt;
use std::sync::mpsc::{channel, Receiver, Sender};

/// The comparison point representing "newer" state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SourceSelection {
    /// The uncommitted, on-disk state of the repository
    WorkingTree,
    /// A named branch
    Branch(String),
}

impl SourceSelection {
    pub fn label(&self) -> String {
        match self {
            SourceSelection::WorkingTree => "Working tree".to_string(),
            SourceSelection::Branch(name) => name.clone(),
        }
    }
}

impl fmt::Display for SourceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Sent to listeners whenever the selection changes and cached results are no
/// longer valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidationSignal;

/// Identity of one diff request, captured at issue time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTag {
    pub source: SourceSelection,
    pub target: String,
    pub generation: u64,
}

/// Holder of the current (source, target) selection.
///
/// Initial state: source is the working tree, target is unset. No diff is
/// attempted without an explicit target.
pub struct SelectionState {
    source: SourceSelection,
    target: Option<String>,
    generation: u64,
    listeners: Vec<Sender<InvalidationSignal>>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState {
            source: SourceSelection::WorkingTree,
            target: None,
            generation: 0,
            listeners: Vec::new(),
        }
    }

    pub fn source(&self) -> &SourceSelection {
        &self.source
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set_source(&mut self, source: SourceSelection) {
        self.source = source;
        self.invalidate();
    }

    pub fn set_target(&mut self, target: impl Into<String>) {
        self.target = Some(target.into());
        self.invalidate();
    }

    /// Explicit user-driven refresh: keeps the selection, drops derived state.
    pub fn refresh(&mut self) {
        self.invalidate();
    }

    /// Subscribe to invalidation signals. Dead receivers are pruned on the
    /// next signal.
    pub fn subscribe(&mut self) -> Receiver<InvalidationSignal> {
        let (tx, rx) = channel();
        self.listeners.push(tx);
        rx
    }

    /// Capture the identity of a diff request about to be issued. None while
    /// no target is set.
    pub fn issue_tag(&self) -> Option<RequestTag> {
        let target = self.target.clone()?;
        Some(RequestTag {
            source: self.source.clone(),
            target,
            generation: self.generation,
        })
    }

    /// Does a completed request still correspond to the live selection?
    pub fn accepts(&self, tag: &RequestTag) -> bool {
        tag.generation == self.generation
            && tag.source == self.source
            && Some(tag.target.as_str()) == self.target()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        log::debug!(
            "selection changed: source={}, target={:?}, generation={}",
            self.source,
            self.target,
            self.generation
        );
        self.listeners
            .retain(|listener| listener.send(InvalidationSignal).is_ok());
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
