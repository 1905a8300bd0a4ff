use branch_compare::commands::{execute_branches, execute_compare, execute_diff};
use branch_compare::core::print_error;
use clap::{Parser, Subcommand};
use std::env;

#[derive(Parser)]
#[command(name = "branch-compare")]
#[command(about = "Compare branches or the working tree and browse changed files as a folder tree")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List branches known to the repository
    Branches {
        /// Include remote-tracking branches
        #[arg(short, long)]
        remote: bool,
        /// Print machine-readable JSON instead of the formatted list
        #[arg(long)]
        json: bool,
    },
    /// Compare a source against a target branch and show the changed-file tree
    Compare {
        /// Target branch used as the base of the comparison
        target: String,
        /// Compare a branch instead of the working tree
        #[arg(short, long)]
        source: Option<String>,
        /// Print machine-readable JSON instead of the tree
        #[arg(long)]
        json: bool,
    },
    /// Show the inline diff for one changed file of the comparison
    Diff {
        /// Target branch used as the base of the comparison
        target: String,
        /// Path of the changed file, relative to the repository root
        path: String,
        /// Compare a branch instead of the working tree
        #[arg(short, long)]
        source: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let outcome = match cli.command {
        Commands::Branches { remote, json } => execute_branches(remote, json),
        Commands::Compare {
            target,
            source,
            json,
        } => execute_compare(&target, source, json),
        Commands::Diff {
            target,
            path,
            source,
        } => execute_diff(&target, &path, source),
    };

    if let Err(e) = outcome {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
