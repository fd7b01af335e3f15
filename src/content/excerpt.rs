//! Post excerpt extraction

use super::markdown::rich_text_to_plain;
use crate::notion::Block;

/// Shown when a post has no paragraph to summarize
const FALLBACK_EXCERPT: &str = "Click to read more...";

/// Maximum excerpt length, including the trailing ellipsis
const MAX_EXCERPT_LEN: usize = 200;

/// Build a short excerpt from the first paragraph of a post
///
/// Keeps the first two sentences of the paragraph's plain text and
/// truncates to 200 characters when they run longer.
pub fn excerpt_from_blocks(blocks: &[Block]) -> String {
    let first_paragraph = blocks.iter().find_map(|block| match block {
        Block::Paragraph { paragraph } => Some(rich_text_to_plain(&paragraph.rich_text)),
        _ => None,
    });

    let Some(text) = first_paragraph else {
        return FALLBACK_EXCERPT.to_string();
    };

    let excerpt = first_sentences(&text, 2);
    truncate_with_ellipsis(&excerpt, MAX_EXCERPT_LEN)
}

/// Split on sentence-ending punctuation and keep the first `count` sentences
///
/// A run of terminators (like "...") closes a single sentence. Text with
/// no terminator at all is kept whole; a trailing unterminated fragment
/// after a complete sentence is dropped.
fn first_sentences(text: &str, count: usize) -> String {
    let mut sentences: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);

        let at_boundary = matches!(ch, '.' | '!' | '?')
            && !matches!(chars.peek(), Some('.' | '!' | '?'));
        if at_boundary {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();

            if sentences.len() == count {
                break;
            }
        }
    }

    if sentences.is_empty() {
        text.to_string()
    } else {
        sentences.join(" ")
    }
}

/// Truncate to `max` characters, keeping `max - 3` plus an ellipsis
fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max - 3).collect();
    format!("{}...", head)
}
