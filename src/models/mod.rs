//! Data models for Pi coding agent session history.
//!
//! - [`SessionHeader`] - First record of a session file
//! - [`SessionRecord`] / [`TextContent`] - Raw message records as stored on disk
//! - [`Message`] / [`ParsedSession`] - Text-bearing messages kept after parsing
//! - [`Entry`] - One selectable line of the index (session summary or message)
//!
//! Raw records deserialize leniently via the helpers in `parsers::deserializers`,
//! so unexpected field shapes degrade to defaults instead of failing the line.

pub mod entry;
pub mod session;

pub use entry::{Entry, EntryRole, SortKey};
pub use session::{
    ContentBlock, Message, MESSAGE_RECORD_TYPE, ParsedSession, RawMessage, Role,
    SESSION_RECORD_TYPE, SessionHeader, SessionRecord, TextContent,
};
