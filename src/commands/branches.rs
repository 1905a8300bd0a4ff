use crate::core::{
    error::Result,
    print_info, print_section_header,
    vcs::{GitVcs, VcsProvider},
};
use colored::*;
use std::env;

pub fn execute_branches(remote: bool, json: bool) -> Result<()> {
    let current_dir = env::current_dir()?;

    // Absence of a repository is a valid state, rendered as a placeholder
    if !GitVcs::probe(&current_dir) {
        print_info("Not in a git repository");
        return Ok(());
    }

    let vcs = GitVcs::bind(&current_dir)?;
    let branches = vcs.list_branches(remote)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&branches)?);
        return Ok(());
    }

    if branches.is_empty() {
        print_info("No branches found. Make your first commit to create one.");
        return Ok(());
    }

    print_section_header("Branches");
    for branch in &branches {
        let hash = branch.commit_hash.as_deref().unwrap_or("-------");
        if branch.is_remote {
            println!(
                "  {} {} {}",
                hash.bright_black(),
                branch.name.blue(),
                "(remote)".bright_black()
            );
        } else {
            println!("  {} {}", hash.bright_black(), branch.name.blue());
        }
    }
    println!();

    Ok(())
}
