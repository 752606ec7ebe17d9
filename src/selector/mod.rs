//! Interaction with the external `fzf` selector
//!
//! The selector receives one tab-separated line per entry
//! (`file, role, index, display`), shows only the display field and calls back
//! into this binary's `preview` command for the preview pane.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

const SELECTOR_PROGRAM: &str = "fzf";
const SELECTOR_INSTALL_HINT: &str = "fzf not found — install it: https://github.com/junegunn/fzf";
const HEADER: &str = "Pi Sessions — search all messages · Enter to resume · Esc to cancel";

/// Arguments passed to fzf. `preview_command` is run by fzf's shell for the preview pane.
pub fn selector_args(preview_command: &str) -> Vec<String> {
    [
        "--delimiter",
        "\t",
        "--with-nth",
        "4",
        "--preview",
        preview_command,
        "--preview-window",
        "right:50%:wrap",
        "--header",
        HEADER,
        "--prompt",
        "π › ",
        "--height",
        "80%",
        "--layout",
        "reverse",
        "--border",
        "rounded",
        "--ansi",
    ]
    .iter()
    .map(|arg| arg.to_string())
    .collect()
}

/// Preview command line for the given executable: `<exe> preview {1} {2} {3}`
pub fn preview_command(executable: &str) -> String {
    format!("{} preview {{1}} {{2}} {{3}}", shell_quote(executable))
}

/// Quote a word for POSIX shells, leaving simple words untouched
pub fn shell_quote(word: &str) -> String {
    let is_plain = !word.is_empty()
        && word.chars().all(|c| c.is_ascii_alphanumeric() || "/._-+:@%".contains(c));
    if is_plain { word.to_string() } else { format!("'{}'", word.replace('\'', r"'\''")) }
}

/// Run fzf over `lines` and return the selected line
///
/// Returns `Ok(None)` when the user cancels or nothing matches (non-zero exit).
///
/// # Errors
///
/// Returns an error if fzf is not installed or its output cannot be collected.
pub fn run_selector(lines: &[String], preview_command: &str) -> Result<Option<String>> {
    let spawned = Command::new(SELECTOR_PROGRAM)
        .args(selector_args(preview_command))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn();

    let mut child = match spawned {
        Ok(child) => child,
        Err(e) if e.kind() == ErrorKind::NotFound => bail!(SELECTOR_INSTALL_HINT),
        Err(e) => return Err(e).context("Failed to launch fzf"),
    };

    {
        let mut stdin = child.stdin.take().context("Failed to open fzf stdin")?;
        let input = lines.join("\n");
        // fzf may exit before reading everything, e.g. on an early Esc.
        match stdin.write_all(input.as_bytes()) {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => {
                return Err(e).context("Failed to write entries to fzf");
            }
            _ => {}
        }
    }

    let output = child.wait_with_output().context("Failed to wait for fzf")?;
    if !output.status.success() {
        return Ok(None);
    }

    let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(Some(selected).filter(|s| !s.is_empty()))
}

/// Session file named by a selected line (its first tab-separated field)
pub fn selected_session_file(line: &str) -> Option<PathBuf> {
    line.split('\t').next().filter(|field| !field.is_empty()).map(PathBuf::from)
}
