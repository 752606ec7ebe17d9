//! Conversation preview for the selector's preview pane
//!
//! The preview re-parses the selected session file and renders every message,
//! marking the one the selected entry points at. It never fails: problems with
//! the file are reported inline as the preview text.

use std::path::Path;

use crate::models::{EntryRole, Message, ParsedSession, Role};
use crate::parsers::parse_session;
use crate::utils::{format_path_with_tilde, strip_ansi_codes, truncate_with_ellipsis};

const HIGHLIGHT_MARKER: &str = "  ← ← ←";
const RULE_WIDTH: usize = 50;
const HIGHLIGHTED_MAX_CHARS: usize = 800;
const MESSAGE_MAX_CHARS: usize = 300;

/// Render the conversation in `path`, highlighting the message at (`role`, `index`)
///
/// A `summary` role always highlights the session's first user message (index 0),
/// whatever `index` is. With `index` of `None` a message role highlights nothing.
pub fn render_preview(path: &Path, role: EntryRole, index: Option<usize>) -> String {
    if !path.exists() {
        return format!("Cannot open: {}", path.display());
    }

    match parse_session(path) {
        Ok(Some(session)) => render_session(&session, role, index),
        Ok(None) => format!("Cannot parse session: {}", path.display()),
        Err(e) => format!("Cannot open: {} ({:#})", path.display(), e),
    }
}

/// Render an already parsed session, see [`render_preview`]
pub fn render_session(session: &ParsedSession, role: EntryRole, index: Option<usize>) -> String {
    let cwd = format_path_with_tilde(Path::new(&session.header.working_directory));

    let mut lines = vec![
        format!("📂 {}", strip_ansi_codes(&cwd)),
        format!("🕐 {}", strip_ansi_codes(&session.header.timestamp)),
        format!("💬 {} messages in session", session.user_message_count()),
        String::new(),
        "─".repeat(RULE_WIDTH),
    ];

    for message in &session.messages {
        let highlighted = is_target(message, role, index);

        let prefix = match message.role {
            Role::User => "▶ YOU",
            Role::Assistant => "◀ PI",
        };
        let marker = if highlighted { HIGHLIGHT_MARKER } else { "" };
        let limit = if highlighted { HIGHLIGHTED_MAX_CHARS } else { MESSAGE_MAX_CHARS };

        lines.push(String::new());
        lines.push(format!("{}{}", prefix, marker));
        lines.push(truncate_with_ellipsis(&strip_ansi_codes(&message.text), limit));
    }

    lines.join("\n")
}

fn is_target(message: &Message, role: EntryRole, index: Option<usize>) -> bool {
    match role.message_role() {
        Some(target_role) => {
            message.role == target_role && Some(message.index_within_role) == index
        }
        None => message.role == Role::User && message.index_within_role == 0,
    }
}
