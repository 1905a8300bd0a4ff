use crate::core::{
    change::ChangeStatus,
    colors::get_colored_name,
    error::{BranchCompareError, Result},
    materialize::{ContentLocator, DiffAction, DiffViewer},
    print_info,
    selection::SourceSelection,
    session::CompareSession,
    vcs::{GitVcs, VcsProvider},
};
use colored::*;
use std::env;
use std::path::PathBuf;
use std::process::Command;

pub fn execute_diff(target: &str, path: &str, source: Option<String>) -> Result<()> {
    let current_dir = env::current_dir()?;

    if !GitVcs::probe(&current_dir) {
        print_info("Not in a git repository");
        return Ok(());
    }

    let vcs = GitVcs::bind(&current_dir)?;
    let mut session = CompareSession::new(vcs);
    if let Some(branch) = source {
        session.set_source(SourceSelection::Branch(branch));
    }
    session.set_target(target);

    // Comparison-level failures (branch not found, conflict, ...) surface as
    // placeholders before any per-file work.
    if let Some(result) = session.diff() {
        if let Some(message) = &result.error_message {
            print_info(message);
            return Ok(());
        }
    }

    let Some(change) = session.find_change(path) else {
        print_info(&format!("'{path}' has no changes in this comparison"));
        return Ok(());
    };

    let action = DiffAction {
        file: change.clone(),
        source: session.state().source().clone(),
        target: target.to_string(),
    };
    let workdir = session.vcs().workdir().to_path_buf();
    let (left, right) = action.locators(&workdir);

    match (change.status, right.reference.as_deref()) {
        (ChangeStatus::Untracked, _) => {
            print_title(&action.title());
            println!(
                "File is untracked: {}. Showing working tree content.",
                left.relative_path
            );
            let content = std::fs::read_to_string(workdir.join(&left.relative_path))?;
            print_marked(&content, '+', change.status);
        }
        (ChangeStatus::Added, Some(source_ref)) => {
            // The file exists only on the source branch
            print_title(&action.title());
            let content = session.vcs().show_file(source_ref, &right.relative_path)?;
            print_marked(&content, '+', change.status);
        }
        (ChangeStatus::Deleted, _) => {
            print_title(&action.title());
            let base = left.reference.as_deref().unwrap_or(target);
            let content = session.vcs().show_file(base, &left.relative_path)?;
            print_marked(&content, '-', change.status);
        }
        _ => {
            let viewer = GitCliDiffViewer::new(workdir);
            viewer.open_diff(&left, &right, &action.title())?;
        }
    }

    Ok(())
}

fn print_title(title: &str) {
    println!();
    println!(
        "{}{}{}",
        "═══ ".bright_blue().bold(),
        title.bright_blue().bold(),
        " ═══".bright_blue().bold()
    );
}

fn print_marked(content: &str, sign: char, status: ChangeStatus) {
    for line in content.lines() {
        println!("{}", get_colored_name(status, &format!("{sign}{line}")));
    }
}

/// Diff-view opener for the terminal: delegates rendering to the `git diff`
/// CLI so the comparison itself stays with the version control.
pub struct GitCliDiffViewer {
    workdir: PathBuf,
}

impl GitCliDiffViewer {
    pub fn new(workdir: PathBuf) -> Self {
        GitCliDiffViewer { workdir }
    }
}

impl DiffViewer for GitCliDiffViewer {
    fn open_diff(&self, left: &ContentLocator, right: &ContentLocator, title: &str) -> Result<()> {
        print_title(title);

        let mut cmd = Command::new("git");
        cmd.current_dir(&self.workdir).arg("diff").arg("--color");
        match (left.reference.as_deref(), right.reference.as_deref()) {
            (Some(base), Some(other)) => {
                cmd.arg(base).arg(other);
            }
            (Some(base), None) => {
                cmd.arg(base);
            }
            (None, Some(other)) => {
                cmd.arg("-R").arg(other);
            }
            (None, None) => {}
        }
        cmd.arg("--").arg(&left.relative_path);

        let output = cmd.output().map_err(BranchCompareError::Io)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BranchCompareError::vcs(format!(
                "git diff failed: {}",
                stderr.trim()
            )));
        }

        let diff_output = String::from_utf8_lossy(&output.stdout);
        if diff_output.trim().is_empty() {
            println!("No changes to show for {}", left.relative_path);
        } else {
            println!("{diff_output}");
        }

        Ok(())
    }
}
