//! Notion block to markdown conversion

use crate::notion::{Block, RichText};

/// Convert a sequence of content blocks to a single markdown string
///
/// Blocks render independently and are joined by blank lines; blocks
/// that render to nothing are filtered out, so the output never carries
/// a blank line of its own.
pub fn blocks_to_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(block_to_markdown)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one block, `None` when it has nothing to show
fn block_to_markdown(block: &Block) -> Option<String> {
    match block {
        Block::Paragraph { paragraph } => prefixed("", &paragraph.rich_text),
        Block::Heading1 { heading_1 } => prefixed("# ", &heading_1.rich_text),
        Block::Heading2 { heading_2 } => prefixed("## ", &heading_2.rich_text),
        Block::Heading3 { heading_3 } => prefixed("### ", &heading_3.rich_text),
        Block::BulletedListItem { bulleted_list_item } => {
            prefixed("- ", &bulleted_list_item.rich_text)
        }
        // Every numbered item uses a literal `1.`; markdown renderers renumber
        Block::NumberedListItem { numbered_list_item } => {
            prefixed("1. ", &numbered_list_item.rich_text)
        }
        Block::Quote { quote } => prefixed("> ", &quote.rich_text),
        Block::Code { code } => {
            let text = rich_text_to_plain(&code.rich_text);
            if text.is_empty() {
                None
            } else {
                Some(format!("```{}\n{}\n```", code.language, text))
            }
        }
        Block::Unsupported => None,
    }
}

fn prefixed(prefix: &str, spans: &[RichText]) -> Option<String> {
    let text = rich_text_to_markdown(spans);
    if text.is_empty() {
        None
    } else {
        Some(format!("{}{}", prefix, text))
    }
}

/// Concatenate rich text spans, applying markdown for each span's annotations
///
/// Wrap order is fixed: code, bold, italic, strikethrough, then link.
/// Underline has no markdown equivalent and is dropped. Nesting is plain
/// string concatenation, so overlapping annotations nest in that order.
pub fn rich_text_to_markdown(spans: &[RichText]) -> String {
    spans.iter().map(span_to_markdown).collect()
}

fn span_to_markdown(span: &RichText) -> String {
    let mut text = span.plain_text.clone();

    if span.annotations.code {
        text = format!("`{}`", text);
    }
    if span.annotations.bold {
        text = format!("**{}**", text);
    }
    if span.annotations.italic {
        text = format!("*{}*", text);
    }
    if span.annotations.strikethrough {
        text = format!("~~{}~~", text);
    }

    if let Some(href) = &span.href {
        text = format!("[{}]({})", text, href);
    }

    text
}

/// Concatenate spans' plain text, ignoring annotations and links
pub fn rich_text_to_plain(spans: &[RichText]) -> String {
    spans.iter().map(|s| s.plain_text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notion::{Annotations, CodeContent, RichTextContent};

    fn span(text: &str) -> RichText {
        RichText {
            plain_text: text.to_string(),
            href: None,
            annotations: Annotations::default(),
        }
    }

    fn styled(text: &str, annotations: Annotations) -> RichText {
        RichText {
            plain_text: text.to_string(),
            href: None,
            annotations,
        }
    }

    fn paragraph(spans: Vec<RichText>) -> Block {
        Block::Paragraph {
            paragraph: RichTextContent { rich_text: spans },
        }
    }

    #[test]
    fn test_annotations_wrap_in_fixed_order() {
        let all = Annotations {
            bold: true,
            italic: true,
            strikethrough: true,
            underline: true,
            code: true,
        };
        let md = rich_text_to_markdown(&[styled("x", all)]);
        assert_eq!(md, "~~***`x`***~~");
    }

    #[test]
    fn test_underline_is_dropped() {
        let underline = Annotations {
            underline: true,
            ..Annotations::default()
        };
        assert_eq!(rich_text_to_markdown(&[styled("x", underline)]), "x");
    }

    #[test]
    fn test_link_wraps_styled_text() {
        let mut span = styled(
            "here",
            Annotations {
                bold: true,
                ..Annotations::default()
            },
        );
        span.href = Some("https://example.com".to_string());
        assert_eq!(
            rich_text_to_markdown(&[span]),
            "[**here**](https://example.com)"
        );
    }

    #[test]
    fn test_spans_concatenate() {
        let bold = Annotations {
            bold: true,
            ..Annotations::default()
        };
        let md = rich_text_to_markdown(&[span("plain "), styled("bold", bold)]);
        assert_eq!(md, "plain **bold**");
    }

    #[test]
    fn test_block_prefixes() {
        let blocks = vec![
            Block::Heading1 {
                heading_1: RichTextContent {
                    rich_text: vec![span("Title")],
                },
            },
            Block::Heading2 {
                heading_2: RichTextContent {
                    rich_text: vec![span("Sub")],
                },
            },
            Block::Heading3 {
                heading_3: RichTextContent {
                    rich_text: vec![span("Subsub")],
                },
            },
            Block::BulletedListItem {
                bulleted_list_item: RichTextContent {
                    rich_text: vec![span("first")],
                },
            },
            Block::Quote {
                quote: RichTextContent {
                    rich_text: vec![span("wise words")],
                },
            },
        ];

        assert_eq!(
            blocks_to_markdown(&blocks),
            "# Title\n\n## Sub\n\n### Subsub\n\n- first\n\n> wise words"
        );
    }

    #[test]
    fn test_numbered_items_always_use_one() {
        let item = |text: &str| Block::NumberedListItem {
            numbered_list_item: RichTextContent {
                rich_text: vec![span(text)],
            },
        };
        let md = blocks_to_markdown(&[item("first"), item("second"), item("third")]);
        assert_eq!(md, "1. first\n\n1. second\n\n1. third");
    }

    #[test]
    fn test_code_block_is_fenced_with_language() {
        let block = Block::Code {
            code: CodeContent {
                rich_text: vec![span("fn main() {}")],
                language: "rust".to_string(),
            },
        };
        assert_eq!(
            blocks_to_markdown(&[block]),
            "```rust\nfn main() {}\n```"
        );
    }

    #[test]
    fn test_empty_blocks_are_filtered() {
        let blocks = vec![
            paragraph(vec![span("before")]),
            paragraph(vec![]),
            Block::Unsupported,
            paragraph(vec![span("after")]),
        ];
        let md = blocks_to_markdown(&blocks);
        assert_eq!(md, "before\n\nafter");
        assert!(!md.contains("\n\n\n"));
    }

    #[test]
    fn test_transform_is_idempotent() {
        let blocks = vec![
            paragraph(vec![span("one.")]),
            Block::Heading1 {
                heading_1: RichTextContent {
                    rich_text: vec![span("two")],
                },
            },
        ];
        assert_eq!(blocks_to_markdown(&blocks), blocks_to_markdown(&blocks));
    }
}
