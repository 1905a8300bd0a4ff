//! Diff orchestration: fetching, caching, and error classification.
//!
//! [`DiffOrchestrator`] sits between the selection state and the
//! version-control collaborator. It issues the right diff request for the
//! current source (working tree or branch), turns collaborator failures into
//! non-throwing [`DiffResult`]s with a classified human-readable message, and
//! keeps exactly one result cached for the active (source, target) pair.
//! There are no retries: collaborator calls are idempotent and the user
//! retries by refreshing.

use crate::core::change::ChangedFile;
use crate::core::selection::SourceSelection;
use crate::core::vcs::VcsProvider;
use serde::Serialize;

/// Outcome of one comparison. Derived and cached; invalidated whenever the
/// selection changes or an explicit refresh is requested.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiffResult {
    pub changes: Vec<ChangedFile>,
    pub conflict_detected: bool,
    pub error_message: Option<String>,
}

impl DiffResult {
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }
}

/// Classification of a freeform collaborator error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffErrorKind {
    /// The named ref does not resolve
    NotFound,
    /// The branches cannot be diffed due to a merge conflict
    Conflict,
    /// Any other collaborator failure
    Generic,
}

const NOT_FOUND_MARKERS: [&str; 3] = [
    "bad revision",
    "unknown revision",
    "not a valid object name",
];
const CONFLICT_MARKERS: [&str; 2] = ["conflict", "both_modified"];

/// Best-effort, case-insensitive substring classification of a collaborator
/// error message. The wording is not guaranteed stable, so anything
/// unrecognized stays Generic rather than guessing a more specific kind.
pub fn classify_error(message: &str) -> DiffErrorKind {
    let lowered = message.to_lowercase();
    if NOT_FOUND_MARKERS.iter().any(|m| lowered.contains(m)) {
        DiffErrorKind::NotFound
    } else if CONFLICT_MARKERS.iter().any(|m| lowered.contains(m)) {
        DiffErrorKind::Conflict
    } else {
        DiffErrorKind::Generic
    }
}

struct CachedDiff {
    source: SourceSelection,
    target: String,
    result: DiffResult,
}

/// Single-slot diff cache over a version-control collaborator
pub struct DiffOrchestrator<V> {
    vcs: V,
    cache: Option<CachedDiff>,
}

impl<V: VcsProvider> DiffOrchestrator<V> {
    pub fn new(vcs: V) -> Self {
        DiffOrchestrator { vcs, cache: None }
    }

    pub fn vcs(&self) -> &V {
        &self.vcs
    }

    /// Drop the cached result. Called on every selection mutation so the next
    /// fetch goes back to the collaborator.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            log::debug!("diff cache invalidated");
        }
    }

    /// Fetch the changes for one comparison, serving the cached result while
    /// the (source, target) pair is unchanged. Collaborator failures are
    /// classified and returned as a result, never raised.
    pub fn get_diff(&mut self, source: &SourceSelection, target: &str) -> DiffResult {
        if let Some(cached) = &self.cache {
            if cached.source == *source && cached.target == target {
                log::debug!("diff cache hit for target '{target}'");
                return cached.result.clone();
            }
        }

        let outcome = match source {
            SourceSelection::WorkingTree => self.vcs.diff_working_tree_against(target),
            SourceSelection::Branch(name) => self.vcs.diff_between(target, name),
        };

        let result = match outcome {
            Ok(changes) => DiffResult {
                changes,
                conflict_detected: false,
                error_message: None,
            },
            Err(err) => classified_result(target, &err.to_string()),
        };

        self.cache = Some(CachedDiff {
            source: source.clone(),
            target: target.to_string(),
            result: result.clone(),
        });
        result
    }
}

fn classified_result(target: &str, message: &str) -> DiffResult {
    let kind = classify_error(message);
    log::debug!("collaborator failure classified as {kind:?}: {message}");
    match kind {
        DiffErrorKind::NotFound => DiffResult {
            changes: Vec::new(),
            conflict_detected: false,
            error_message: Some(format!(
                "Branch '{target}' was not found in this repository. Fetch it or pick another branch, then refresh."
            )),
        },
        DiffErrorKind::Conflict => DiffResult {
            changes: Vec::new(),
            conflict_detected: true,
            error_message: Some(
                "Merge conflict detected between the selected branches.".to_string(),
            ),
        },
        DiffErrorKind::Generic => DiffResult {
            changes: Vec::new(),
            conflict_detected: false,
            error_message: Some(message.to_string()),
        },
    }
}
