/// Collapse every run of whitespace (spaces, tabs, newlines) into one space and trim
pub fn flatten_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Longest prefix of `text` holding at most `max_chars` characters
///
/// Counts Unicode scalar values, so multi-byte characters are never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Like [`truncate_chars`] but appends `...` when something was cut off
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let truncated = truncate_chars(text, max_chars);
    if truncated.len() < text.len() { format!("{}...", truncated) } else { text.to_string() }
}
