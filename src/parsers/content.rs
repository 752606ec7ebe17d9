use crate::models::{ContentBlock, TextContent};

const TEXT_BLOCK_KIND: &str = "text";

/// Extract the text of a message content field
///
/// Plain strings are trimmed. For block lists the first `text` block whose trimmed
/// text is non-empty wins. Every other shape yields an empty string.
pub fn extract_text(content: &TextContent) -> &str {
    match content {
        TextContent::Plain(text) => text.trim(),
        TextContent::Blocks(blocks) => blocks
            .iter()
            .find_map(|block| match block {
                ContentBlock::Typed { kind, text } if kind == TEXT_BLOCK_KIND => {
                    Some(text.trim()).filter(|t| !t.is_empty())
                }
                _ => None,
            })
            .unwrap_or(""),
        TextContent::Other(_) => "",
    }
}
