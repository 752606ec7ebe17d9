use serde::Deserialize;
use serde_json::Value;

use crate::parsers::deserializers::{
    deserialize_lenient_string, deserialize_object, deserialize_version,
};

/// Record type of the first line of every session file
pub const SESSION_RECORD_TYPE: &str = "session";

/// Record type of lines carrying a conversation message
pub const MESSAGE_RECORD_TYPE: &str = "message";

pub(crate) const DEFAULT_SESSION_VERSION: i64 = 1;

/// Header record parsed from the first line of a session file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionHeader {
    #[serde(rename = "type", default, deserialize_with = "deserialize_lenient_string")]
    pub record_type: String,
    #[serde(default = "default_version", deserialize_with = "deserialize_version")]
    pub version: i64,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub timestamp: String,
    #[serde(rename = "cwd", default, deserialize_with = "deserialize_lenient_string")]
    pub working_directory: String,
}

fn default_version() -> i64 {
    DEFAULT_SESSION_VERSION
}

/// Any line after the header. Only `type == "message"` records are used.
#[derive(Debug, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type", default, deserialize_with = "deserialize_lenient_string")]
    pub record_type: String,
    #[serde(default, deserialize_with = "deserialize_object")]
    pub message: Option<RawMessage>,
}

#[derive(Debug, Deserialize)]
pub struct RawMessage {
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub role: String,
    #[serde(default)]
    pub content: TextContent,
}

/// The `content` field of a message: either plain text or an ordered list of blocks.
///
/// `Other` absorbs every remaining JSON shape so deserialization of a message
/// never fails because of its content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TextContent {
    Plain(String),
    Blocks(Vec<ContentBlock>),
    Other(Value),
}

impl Default for TextContent {
    fn default() -> Self {
        TextContent::Other(Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Typed {
        #[serde(rename = "type", default, deserialize_with = "deserialize_lenient_string")]
        kind: String,
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        text: String,
    },
    Opaque(Value),
}

/// Conversation role of a stored message. Every other role in a transcript is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn from_record(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A text-bearing message kept from a session file
///
/// `index_within_role` counts every record of the same role in file order,
/// including records dropped for having no text, so it is stable across re-parses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
    pub index_within_role: usize,
}

/// Result of parsing one session file that carried a valid header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSession {
    pub header: SessionHeader,
    pub messages: Vec<Message>,
}

impl ParsedSession {
    pub fn user_message_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::User).count()
    }

    pub fn first_user_text(&self) -> Option<&str> {
        self.messages.iter().find(|m| m.role == Role::User).map(|m| m.text.as_str())
    }
}
