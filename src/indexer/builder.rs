//! Index builder for Pi session history.
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach suitable for CLI tools:
//!
//! - **Missing sessions directory**: Yields an empty index, not an error
//! - **File-level errors**: Unreadable files and files without a valid session header
//!   are skipped and counted in [`IndexSummary::files_skipped`]
//! - **Parse-level errors**: Malformed lines are dropped by the session parser
//! - **User feedback**: With `verbose` set, skipped files and a summary line are
//!   written to stderr. Output is silent by default because `list` feeds the selector.

use std::path::Path;

use crate::indexer::session_discovery::discover_session_files;
use crate::indexer::timestamps::format_session_timestamp;
use crate::models::{Entry, EntryRole, Message, ParsedSession, Role, SortKey};
use crate::parsers::parse_session;
use crate::utils::{flatten_whitespace, format_path_with_tilde, strip_ansi_codes, truncate_chars};

const SUMMARY_TEXT_MAX_CHARS: usize = 120;
const USER_TEXT_MAX_CHARS: usize = 200;
const ASSISTANT_TEXT_MAX_CHARS: usize = 150;

/// Result of indexing a sessions directory
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexSummary {
    /// All entries, newest first
    pub entries: Vec<Entry>,
    /// Files that produced a summary entry
    pub sessions_indexed: usize,
    /// Files that were unreadable or had no valid session header
    pub files_skipped: usize,
}

/// Build the selector index from every session file under `sessions_dir`
///
/// Each session with a valid header contributes one summary entry plus one
/// entry per text-bearing message. The result is sorted newest first.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use pi_chat_fzf::build_index;
///
/// let entries = build_index(Path::new("/Users/alice/.pi/agent/sessions"));
/// for entry in &entries {
///     println!("{}", entry.to_tsv_line());
/// }
/// ```
pub fn build_index(sessions_dir: &Path) -> Vec<Entry> {
    index_sessions(sessions_dir, false).entries
}

/// Same as [`build_index`], also reporting how many files were indexed or skipped
pub fn index_sessions(sessions_dir: &Path, verbose: bool) -> IndexSummary {
    let mut summary = IndexSummary::default();

    for path in discover_session_files(sessions_dir, verbose) {
        match parse_session(&path) {
            Ok(Some(session)) => {
                summary.sessions_indexed += 1;
                summary.entries.extend(session_entries(&path, &session));
            }
            Ok(None) => {
                summary.files_skipped += 1;
                if verbose {
                    eprintln!("Warning: Skipping {}: no valid session header", path.display());
                }
            }
            Err(e) => {
                summary.files_skipped += 1;
                if verbose {
                    eprintln!("Warning: {:#}", e);
                }
            }
        }
    }

    summary.entries.sort_by(Entry::cmp_newest_first);

    if verbose {
        eprintln!(
            "Indexed {} entries from {} sessions ({} files skipped)",
            summary.entries.len(),
            summary.sessions_indexed,
            summary.files_skipped
        );
    }

    summary
}

/// Entries for one parsed session: the summary first, then messages in file order
pub fn session_entries(path: &Path, session: &ParsedSession) -> Vec<Entry> {
    let timestamp = format_session_timestamp(&session.header.timestamp);
    let short_cwd = format_path_with_tilde(Path::new(&session.header.working_directory));
    let prefix = format!("{}  {}  │  ", timestamp.display, short_cwd);

    let mut entries = Vec::with_capacity(session.messages.len() + 1);

    entries.push(Entry {
        source_file: path.to_path_buf(),
        role: EntryRole::Summary,
        index_within_role: 0,
        sort_key: SortKey { timestamp: timestamp.sortable.clone(), is_summary: true },
        display_text: summary_display(&prefix, session),
    });

    for message in &session.messages {
        entries.push(Entry {
            source_file: path.to_path_buf(),
            role: message.role.into(),
            index_within_role: message.index_within_role,
            sort_key: SortKey { timestamp: timestamp.sortable.clone(), is_summary: false },
            display_text: message_display(&prefix, message),
        });
    }

    entries
}

fn summary_display(prefix: &str, session: &ParsedSession) -> String {
    let first_user = display_safe(session.first_user_text().unwrap_or(""));
    format!(
        "{}📋 {} msgs · {}",
        prefix,
        session.user_message_count(),
        truncate_chars(&first_user, SUMMARY_TEXT_MAX_CHARS)
    )
}

fn message_display(prefix: &str, message: &Message) -> String {
    let (tag, max_chars) = match message.role {
        Role::User => ("YOU", USER_TEXT_MAX_CHARS),
        Role::Assistant => ("PI", ASSISTANT_TEXT_MAX_CHARS),
    };
    let text = display_safe(&message.text);
    format!("{}[{}] {}", prefix, tag, truncate_chars(&text, max_chars))
}

/// Single-line text with terminal escapes removed
fn display_safe(text: &str) -> String {
    flatten_whitespace(&strip_ansi_codes(text))
}
