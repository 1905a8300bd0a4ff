use crate::core::{
    error::Result,
    materialize::{render_item, DisplayItem},
    print_info,
    selection::SourceSelection,
    session::CompareSession,
    vcs::GitVcs,
};
use std::env;

pub fn execute_compare(target: &str, source: Option<String>, json: bool) -> Result<()> {
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

    if json {
        // Target is set above, so a result is always present
        if let Some(result) = session.diff() {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        return Ok(());
    }

    println!();
    for item in session.items() {
        println!("{}", render_item(&item, 0));
        if let DisplayItem::Folder { path, .. } = &item {
            render_subtree(&mut session, path, 1);
        }
    }
    println!();

    Ok(())
}

/// Expand one folder at a time through the lazy child-items walk
fn render_subtree(session: &mut CompareSession<GitVcs>, folder_path: &str, depth: usize) {
    for item in session.child_items(folder_path) {
        println!("{}", render_item(&item, depth));
        if let DisplayItem::Folder { path, .. } = &item {
            render_subtree(session, path, depth + 1);
        }
    }
}
