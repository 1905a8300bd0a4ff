//! Unified color system for change status visualization.
//!
//! Centralized color mapping so every status marker and file path uses the
//! same color in the tree view and the diff header.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Renamed/Copied**: Blue
//! - **Type changed**: Magenta
//! - **Untracked**: Cyan
//! - **Conflicted**: Red bold

use crate::core::change::ChangeStatus;
use colored::*;

/// Single function to apply color styling based on change status
/// Returns a closure that can be applied to any text to get the appropriate color
pub fn get_status_color_style(status: ChangeStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        ChangeStatus::Modified => Box::new(|text: &str| text.yellow()),
        ChangeStatus::Added => Box::new(|text: &str| text.green()),
        ChangeStatus::Deleted => Box::new(|text: &str| text.red()),
        ChangeStatus::Renamed => Box::new(|text: &str| text.blue()),
        ChangeStatus::Copied => Box::new(|text: &str| text.blue()),
        ChangeStatus::TypeChanged => Box::new(|text: &str| text.magenta()),
        ChangeStatus::Untracked => Box::new(|text: &str| text.cyan()),
        ChangeStatus::Conflicted => Box::new(|text: &str| text.red().bold()),
    }
}

/// Get the colored single-letter marker for a status
pub fn get_colored_marker(status: ChangeStatus) -> ColoredString {
    let color_fn = get_status_color_style(status);
    color_fn(status.marker())
}

/// Get colored file name using the status color
pub fn get_colored_name(status: ChangeStatus, name: &str) -> ColoredString {
    let color_fn = get_status_color_style(status);
    color_fn(name)
}
