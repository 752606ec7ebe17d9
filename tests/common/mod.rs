//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for creating test Pi agent directories (`<agent>/sessions/...`)
pub struct AgentDirBuilder {
    temp_dir: TempDir,
}

impl AgentDirBuilder {
    /// Create a new builder with an empty sessions directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("sessions"))
            .expect("Failed to create sessions dir");
        Self { temp_dir }
    }

    /// Path to the agent directory (value for `PI_CODING_AGENT_DIR`)
    pub fn agent_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path to the sessions directory inside the agent directory
    pub fn sessions_dir(&self) -> PathBuf {
        self.temp_dir.path().join("sessions")
    }

    /// Write a session file at `relative_path` below the sessions directory
    pub fn with_session(self, relative_path: &str, session: &SessionFileBuilder) -> Self {
        self.with_raw_file(relative_path, &session.to_jsonl())
    }

    /// Write arbitrary content at `relative_path` below the sessions directory
    pub fn with_raw_file(self, relative_path: &str, content: &str) -> Self {
        let path = self.sessions_dir().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create session subdir");
        }
        fs::write(&path, content).expect("Failed to write session file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for AgentDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one session JSONL file
pub struct SessionFileBuilder {
    timestamp: String,
    cwd: String,
    id: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    /// Create a new session with default header values
    pub fn new() -> Self {
        Self {
            timestamp: "2025-12-01T10:30:00.000Z".to_string(),
            cwd: "/work/project".to_string(),
            id: "0193f2a4-5b6c-7d8e-9f00-112233445566".to_string(),
            lines: Vec::new(),
        }
    }

    /// Set the header timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    /// Set the header working directory
    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self
    }

    /// Add a user message with plain string content
    pub fn user(self, text: &str) -> Self {
        self.message("user", json!(text))
    }

    /// Add an assistant message with a single text block
    pub fn assistant(self, text: &str) -> Self {
        self.message("assistant", json!([{"type": "text", "text": text}]))
    }

    /// Add a message with arbitrary role and content value
    pub fn message(self, role: &str, content: Value) -> Self {
        let record = json!({
            "type": "message",
            "id": format!("m{}", self.lines.len()),
            "message": {"role": role, "content": content}
        });
        self.raw_line(&record.to_string())
    }

    /// Add a non-message record (model change, compaction, ...)
    pub fn record(self, record_type: &str) -> Self {
        self.raw_line(&json!({"type": record_type}).to_string())
    }

    /// Add a raw line verbatim
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Header line as JSON
    pub fn header_json(&self) -> String {
        json!({
            "type": "session",
            "version": 3,
            "id": self.id,
            "timestamp": self.timestamp,
            "cwd": self.cwd
        })
        .to_string()
    }

    /// Full file content
    pub fn to_jsonl(&self) -> String {
        let mut out = self.header_json();
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out
    }
}

impl Default for SessionFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create an agent directory with a few realistic sessions
pub fn realistic_agent_dir() -> TempDir {
    AgentDirBuilder::new()
        .with_session(
            "--work-webapp--/2025-12-01T10-30-00-000Z_a.jsonl",
            &SessionFileBuilder::new()
                .cwd("/work/webapp")
                .record("model_change")
                .user("Fix the login bug")
                .assistant("The session token is never refreshed.")
                .user("Please add a test")
                .assistant("Added tests/login.rs")
                .user("Thanks!"),
        )
        .with_session(
            "--work-cli--/2025-11-20T08-00-00-000Z_b.jsonl",
            &SessionFileBuilder::new()
                .timestamp("2025-11-20T08:00:00.000Z")
                .cwd("/work/cli")
                .user("Add a --json flag")
                .assistant("Done"),
        )
        .build()
}
