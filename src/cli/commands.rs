use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::indexer::index_sessions;
use crate::models::EntryRole;
use crate::parsers::read_session_cwd;
use crate::preview::render_preview;
use crate::selector::{preview_command, run_selector, selected_session_file};
use crate::shell::Shell;
use crate::utils::{format_path_with_tilde, get_sessions_dir};

const FALLBACK_EXECUTABLE: &str = "pi-chat-fzf";

#[derive(Parser)]
#[command(name = "pi-chat-fzf")]
#[command(version)]
#[command(
    about = "Fuzzy find and resume Pi coding agent sessions",
    long_about = "Fuzzy find and resume Pi coding agent sessions.\n\n\
        Without a subcommand, launches fzf over every message of every session and prints \
        `<session file>\\t<working directory>` for the selection. Requires fzf \
        (https://github.com/junegunn/fzf). Sessions are read from \
        $PI_CODING_AGENT_DIR/sessions, or ~/.pi/agent/sessions when unset."
)]
pub struct Cli {
    /// Report skipped session files and index totals on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all entries as TSV: file, role, index, display
    List,
    /// Show a session preview (used by fzf)
    Preview {
        /// Session file
        file: PathBuf,
        /// Entry role: summary, user or assistant
        role: EntryRole,
        /// Message index within the role; unparsable values mean 0, negative ones match nothing
        #[arg(allow_hyphen_values = true)]
        index: String,
    },
    /// Output shell integration (fish, bash, zsh)
    Init {
        /// Target shell
        shell: String,
    },
    /// Show statistics about the session history
    Stats,
    /// Print version
    Version,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => pick(cli.verbose),
        Some(Commands::List) => {
            list(cli.verbose)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Preview { file, role, index }) => {
            println!("{}", render_preview(file, *role, parse_preview_index(index)));
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Init { shell }) => {
            let shell: Shell = shell.parse()?;
            print!("{}", shell.init_script());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Stats) => {
            show_stats(cli.verbose)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Version) => {
            println!("pi-chat-fzf {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Index argument of `preview` as passed by the selector
///
/// Text that is not an integer means 0. A negative integer is a valid request
/// that no message can match.
fn parse_preview_index(raw: &str) -> Option<usize> {
    let index: i64 = raw.trim().parse().unwrap_or(0);
    usize::try_from(index).ok()
}

/// Default command: index sessions, run fzf, print `<file>\t<cwd>` for the selection
fn pick(verbose: bool) -> Result<ExitCode> {
    let sessions_dir = get_sessions_dir()?;
    let entries = index_sessions(&sessions_dir, verbose).entries;
    if entries.is_empty() {
        eprintln!("No Pi sessions found");
        return Ok(ExitCode::FAILURE);
    }

    let executable = env::current_exe()
        .map(|exe| exe.to_string_lossy().into_owned())
        .unwrap_or_else(|_| FALLBACK_EXECUTABLE.to_string());
    let lines: Vec<String> = entries.iter().map(|e| e.to_tsv_line()).collect();

    let Some(selected) = run_selector(&lines, &preview_command(&executable))? else {
        return Ok(ExitCode::SUCCESS);
    };
    let Some(session_file) = selected_session_file(&selected) else {
        return Ok(ExitCode::SUCCESS);
    };

    println!("{}\t{}", session_file.display(), read_session_cwd(&session_file));
    Ok(ExitCode::SUCCESS)
}

fn list(verbose: bool) -> Result<()> {
    let sessions_dir = get_sessions_dir()?;
    for entry in index_sessions(&sessions_dir, verbose).entries {
        println!("{}", entry.to_tsv_line());
    }
    Ok(())
}

fn show_stats(verbose: bool) -> Result<()> {
    let sessions_dir = get_sessions_dir()?;
    let summary = index_sessions(&sessions_dir, verbose);

    let count_role =
        |role: EntryRole| summary.entries.iter().filter(|e| e.role == role).count();
    let user_messages = count_role(EntryRole::User);
    let assistant_messages = count_role(EntryRole::Assistant);

    println!("Pi Session Statistics");
    println!("=====================");
    println!("Sessions: {}", summary.sessions_indexed);
    println!("Total entries: {}", summary.entries.len());
    println!("  User messages: {}", user_messages);
    println!("  Assistant messages: {}", assistant_messages);
    if summary.files_skipped > 0 {
        println!("Skipped files: {}", summary.files_skipped);
    }
    println!();
    println!("Sessions directory: {}", format_path_with_tilde(&sessions_dir));

    // Entries are newest first, so the first and last summaries bound the history
    let session_times: Vec<&str> = summary
        .entries
        .iter()
        .filter(|e| e.role == EntryRole::Summary)
        .map(|e| e.sort_key.timestamp.as_str())
        .collect();
    if let Some(newest) = session_times.first() {
        println!("Newest session: {}", newest);
    }
    if let Some(oldest) = session_times.last() {
        println!("Oldest session: {}", oldest);
    }

    Ok(())
}
