use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the Pi agent directory
pub const AGENT_DIR_ENV: &str = "PI_CODING_AGENT_DIR";

const SESSIONS_SUBDIR: &str = "sessions";

/// Get the Pi sessions directory
///
/// `$PI_CODING_AGENT_DIR/sessions` when the variable is set and non-empty,
/// otherwise `~/.pi/agent/sessions`.
pub fn get_sessions_dir() -> Result<PathBuf> {
    resolve_sessions_dir(env::var_os(AGENT_DIR_ENV), dirs::home_dir)
}

pub(crate) fn resolve_sessions_dir(
    agent_dir: Option<OsString>,
    home_dir: impl FnOnce() -> Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = agent_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir).join(SESSIONS_SUBDIR));
    }

    let home = home_dir().context("Could not determine home directory")?;
    Ok(home.join(".pi").join("agent").join(SESSIONS_SUBDIR))
}
