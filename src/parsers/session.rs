use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{
    MESSAGE_RECORD_TYPE, Message, ParsedSession, Role, SESSION_RECORD_TYPE, SessionHeader,
    SessionRecord,
};
use crate::parsers::content::extract_text;
use crate::utils::flatten_whitespace;

/// Parse a session JSONL file into its header and text-bearing messages
///
/// Returns `Ok(None)` when the file is empty or its first line is not a valid
/// session header. Message lines that are not valid JSON, are not `message`
/// records, or carry a role other than user/assistant are skipped silently.
///
/// # Errors
///
/// Only I/O failures (open, read) are reported. Malformed content never is.
pub fn parse_session(path: &Path) -> Result<Option<ParsedSession>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;
    parse_session_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read session file: {}", path.display()))
}

/// Same as [`parse_session`] over any buffered reader
pub fn parse_session_reader<R: BufRead>(reader: R) -> Result<Option<ParsedSession>> {
    let mut lines = reader.split(b'\n');

    let Some(first_line) = lines.next() else {
        return Ok(None);
    };
    let Some(header) = parse_header(&first_line?) else {
        return Ok(None);
    };

    let mut messages = Vec::new();
    let mut user_index = 0;
    let mut assistant_index = 0;

    for line in lines {
        let line = line?;

        let Some(record) = parse_object::<SessionRecord>(&line) else {
            continue;
        };
        if record.record_type != MESSAGE_RECORD_TYPE {
            continue;
        }
        let Some(message) = record.message else {
            continue;
        };
        let Some(role) = Role::from_record(&message.role) else {
            continue;
        };

        // Every record of a role consumes an index, even when it has no text.
        let counter = match role {
            Role::User => &mut user_index,
            Role::Assistant => &mut assistant_index,
        };
        let index_within_role = *counter;
        *counter += 1;

        let text = extract_text(&message.content);
        if text.is_empty() {
            continue;
        }

        messages.push(Message { role, text: flatten_whitespace(text), index_within_role });
    }

    Ok(Some(ParsedSession { header, messages }))
}

/// Parse one line as a session header. `None` unless it is JSON with `type == "session"`.
pub fn parse_header(line: &[u8]) -> Option<SessionHeader> {
    parse_object::<SessionHeader>(line).filter(|header| header.record_type == SESSION_RECORD_TYPE)
}

/// Decode a line into `T` only if it is a JSON object. Derived struct
/// deserializers would otherwise also accept arrays, matching fields by position.
fn parse_object<T: DeserializeOwned>(line: &[u8]) -> Option<T> {
    match serde_json::from_slice::<Value>(line).ok()? {
        value @ Value::Object(_) => T::deserialize(value).ok(),
        _ => None,
    }
}

/// Read only the first line of a session file and parse it as a header
///
/// Returns `None` if the file cannot be opened or the header is invalid.
pub fn read_session_header(path: &Path) -> Option<SessionHeader> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    let mut first_line = Vec::new();
    reader.read_until(b'\n', &mut first_line).ok()?;
    parse_header(&first_line)
}

/// Working directory recorded in a session header, empty if unavailable
pub fn read_session_cwd(path: &Path) -> String {
    read_session_header(path).map(|h| h.working_directory).unwrap_or_default()
}
