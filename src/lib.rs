//! Pi Chat FZF - Fuzzy find and resume Pi coding agent sessions
//!
//! This library indexes the session transcripts the Pi coding agent stores under
//! `~/.pi/agent/sessions/` (one JSONL file per session) and renders previews of them.
//! It supports:
//!
//! - Parsing session headers and role-tagged text messages from JSONL transcripts
//! - Building a flat, newest-first index with one summary entry per session and one
//!   entry per message, formatted for an external fuzzy selector
//! - Rendering a conversation preview that highlights a selected message
//! - Driving `fzf` and printing shell integration snippets
//!
//! # Example
//!
//! ```no_run
//! use pi_chat_fzf::{build_index, get_sessions_dir};
//!
//! let sessions_dir = get_sessions_dir()?;
//! let index = build_index(&sessions_dir);
//! println!("Indexed {} entries", index.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod preview;
pub mod selector;
pub mod shell;
pub mod utils;

// Re-export commonly used types
pub use indexer::builder::{build_index, index_sessions};
pub use models::{Entry, EntryRole, Message, ParsedSession, Role, SessionHeader};
pub use parsers::{extract_text, parse_session, read_session_cwd};
pub use preview::render_preview;
pub use utils::{format_path_with_tilde, get_sessions_dir};
