use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::session::Role;

/// Role tag of an index entry: a message role or the per-session summary pseudo-role
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryRole {
    Summary,
    User,
    Assistant,
}

impl EntryRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryRole::Summary => "summary",
            EntryRole::User => "user",
            EntryRole::Assistant => "assistant",
        }
    }

    /// The message role this entry points at, `None` for summaries
    pub fn message_role(&self) -> Option<Role> {
        match self {
            EntryRole::Summary => None,
            EntryRole::User => Some(Role::User),
            EntryRole::Assistant => Some(Role::Assistant),
        }
    }
}

impl From<Role> for EntryRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => EntryRole::User,
            Role::Assistant => EntryRole::Assistant,
        }
    }
}

impl fmt::Display for EntryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(EntryRole::Summary),
            "user" => Ok(EntryRole::User),
            "assistant" => Ok(EntryRole::Assistant),
            other => Err(format!("unknown role '{}' (expected summary, user or assistant)", other)),
        }
    }
}

/// Sort key of an entry
///
/// `timestamp` is the session's sortable timestamp. `is_summary` replaces a
/// string suffix so the summary outranks its own session's messages without
/// relying on character ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub timestamp: String,
    pub is_summary: bool,
}

/// One selectable line in the selector list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub source_file: PathBuf,
    pub role: EntryRole,
    pub index_within_role: usize,
    pub sort_key: SortKey,
    pub display_text: String,
}

impl Entry {
    /// Tab-separated record handed to the selector: `file, role, index, display`
    pub fn to_tsv_line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.source_file.display(),
            self.role,
            self.index_within_role,
            self.display_text
        )
    }

    /// Newest-first ordering used for the final index
    ///
    /// Ties on timestamp are broken by file so sessions stay contiguous, then the
    /// summary comes ahead of its messages, then messages by descending index.
    pub fn cmp_newest_first(a: &Entry, b: &Entry) -> Ordering {
        fn key(e: &Entry) -> (&str, &Path, bool, usize, EntryRole) {
            (
                e.sort_key.timestamp.as_str(),
                e.source_file.as_path(),
                e.sort_key.is_summary,
                e.index_within_role,
                e.role,
            )
        }
        key(b).cmp(&key(a))
    }
}
