//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Standardized formatting functions for all branch-compare output, ensuring
//! consistent colors, spacing, and message structure across commands.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints an informational message with consistent styling
///
/// Used for valid-but-empty states (no repository, no target, no changes)
/// which are rendered as placeholders rather than errors.
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}
