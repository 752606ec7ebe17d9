//! Index building for Pi session history
//!
//! Turns a directory tree of session files into the flat, newest-first list of
//! [`Entry`](crate::models::Entry) values handed to the selector.
//!
//! - [`session_discovery`] walks the tree for `*.jsonl` files
//! - [`timestamps`] derives display and sort forms of header timestamps
//! - [`builder`] parses each file and emits one summary entry plus one entry per message
//!
//! Errors never abort a scan: files that cannot be read or lack a session header are
//! skipped and counted, and a missing directory yields an empty index.

pub mod builder;
pub mod session_discovery;
pub mod timestamps;

pub use builder::{IndexSummary, build_index, index_sessions, session_entries};
pub use session_discovery::discover_session_files;
pub use timestamps::{SessionTimestamp, format_session_timestamp};
