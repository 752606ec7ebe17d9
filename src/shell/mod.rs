//! Shell integration snippets printed by `init`
//!
//! Each snippet defines a widget bound to Alt+P that runs the picker, changes into
//! the selected session's working directory and starts `pi --session <file>`.

use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Fish,
    Bash,
    Zsh,
}

impl Shell {
    pub const ALL: [Shell; 3] = [Shell::Fish, Shell::Bash, Shell::Zsh];

    pub fn name(&self) -> &'static str {
        match self {
            Shell::Fish => "fish",
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
        }
    }

    pub fn init_script(&self) -> &'static str {
        match self {
            Shell::Fish => FISH_INIT,
            Shell::Bash => BASH_INIT,
            Shell::Zsh => ZSH_INIT,
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shell::ALL
            .into_iter()
            .find(|shell| shell.name() == s)
            .ok_or_else(|| anyhow!("Unknown shell: {} (supported: fish, bash, zsh)", s))
    }
}

const FISH_INIT: &str = r#"# Pi Sessions — shell integration for fish
# Add to ~/.config/fish/config.fish:
#   pi-chat-fzf init fish | source

function pi-chat-fzf-widget --description "Fuzzy find and resume a Pi session"
    set -l result (pi-chat-fzf 2>/dev/null)
    if test -z "$result"
        commandline -f repaint
        return
    end

    set -l session_file (echo "$result" | cut -f1)
    set -l target_cwd (echo "$result" | cut -f2)

    if test -n "$target_cwd" -a -d "$target_cwd"
        cd "$target_cwd"
    end

    commandline "pi --session $session_file"
    commandline -f execute
end

bind \ep pi-chat-fzf-widget
"#;

const BASH_INIT: &str = r#"# Pi Sessions — shell integration for bash
# Add to ~/.bashrc:
#   eval "$(pi-chat-fzf init bash)"

pi-chat-fzf-widget() {
    local result
    result=$(pi-chat-fzf 2>/dev/null)
    [[ -z "$result" ]] && return

    local session_file target_cwd
    session_file=$(echo "$result" | cut -f1)
    target_cwd=$(echo "$result" | cut -f2)

    [[ -n "$target_cwd" && -d "$target_cwd" ]] && cd "$target_cwd"
    READLINE_LINE="pi --session $session_file"
    READLINE_POINT=${#READLINE_LINE}
}

bind -x '"\ep": pi-chat-fzf-widget'
"#;

const ZSH_INIT: &str = r#"# Pi Sessions — shell integration for zsh
# Add to ~/.zshrc:
#   eval "$(pi-chat-fzf init zsh)"

pi-chat-fzf-widget() {
    local result
    result=$(pi-chat-fzf 2>/dev/null)
    [[ -z "$result" ]] && return

    local session_file target_cwd
    session_file=$(echo "$result" | cut -f1)
    target_cwd=$(echo "$result" | cut -f2)

    [[ -n "$target_cwd" && -d "$target_cwd" ]] && cd "$target_cwd"
    BUFFER="pi --session $session_file"
    CURSOR=${#BUFFER}
    zle accept-line
}

zle -N pi-chat-fzf-widget
bindkey '\ep' pi-chat-fzf-widget
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_shells() {
        for shell in Shell::ALL {
            assert_eq!(shell.name().parse::<Shell>().unwrap(), shell);
        }
    }

    #[test]
    fn test_parse_unknown_shell() {
        let err = "powershell".parse::<Shell>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown shell: powershell (supported: fish, bash, zsh)");
    }

    #[test]
    fn test_scripts_bind_alt_p_and_resume_session() {
        for shell in Shell::ALL {
            let script = shell.init_script();
            assert!(script.contains("pi-chat-fzf-widget"), "{shell}");
            assert!(script.contains(r"\ep"), "{shell}");
            assert!(script.contains("pi --session $session_file"), "{shell}");
            assert!(script.contains(&format!("pi-chat-fzf init {}", shell)), "{shell}");
        }
    }
}
