//! JSONL parsers for Pi coding agent session files
//!
//! # Error Handling Strategy
//!
//! Session files are written by another program and may be truncated, hand-edited or
//! from a newer format version, so parsing degrades instead of failing:
//!
//! - **Invalid header**: A file whose first line is not a `session` record is reported
//!   as "no header" (`Ok(None)`). Callers skip it without surfacing an error.
//!
//! - **Individual line failures**: Invalid JSON, non-`message` records and foreign roles
//!   are skipped silently. Nothing is logged because the parser also runs inside the
//!   selector's preview pane, where stderr would corrupt the display.
//!
//! - **Lenient fields**: Header and message fields use the deserializers in
//!   [`deserializers`], so unexpected JSON types collapse to defaults.
//!
//! - **Error propagation**: Only I/O failures reach the caller, as `anyhow::Result`
//!   with the file path attached as context.

pub mod content;
pub mod deserializers;
pub mod session;

pub use content::extract_text;
pub use session::{
    parse_header, parse_session, parse_session_reader, read_session_cwd, read_session_header,
};
