//! Terminal output sanitization utilities
//!
//! # Security: Terminal Injection Prevention
//!
//! Transcript text is user-controlled and the selector runs with `--ansi`, so escape
//! sequences embedded in a message would be interpreted when the list or the preview
//! pane is drawn. Malicious sequences could:
//! - Clear the screen or move the cursor
//! - Change terminal colors or styles
//! - Trigger unexpected terminal behavior
//!
//! Every display string and preview line built from transcript text goes through
//! [`strip_ansi_codes`].

/// Strips terminal escape sequences and stray control characters from transcript text
///
/// Handles CSI sequences (`ESC [ ... final-byte`), OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`, used for window titles and hyperlinks) and two-character
/// escapes. Other control characters are dropped except tab, newline and carriage return.
///
/// # Examples
///
/// ```
/// use pi_chat_fzf::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            match chars.next() {
                Some('[') => {
                    // Parameters and intermediates run until a final byte in @..=~
                    for next in chars.by_ref() {
                        if ('@'..='~').contains(&next) {
                            break;
                        }
                    }
                }
                Some(']') => {
                    while let Some(next) = chars.next() {
                        if next == '\x07' {
                            break;
                        }
                        if next == '\x1b' && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                _ => {}
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}
