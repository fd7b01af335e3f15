//! Typed models for Notion API responses
//!
//! Only the properties and block variants the blog renders are modeled.
//! Unknown block types decode into [`Block::Unsupported`] and are skipped
//! by the renderer; a database row whose properties do not decode is
//! dropped from listings by the caller.

use serde::Deserialize;

/// One page (database row) returned by a database query
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    pub properties: PageProperties,
}

/// The four properties every blog post row must carry
#[derive(Debug, Clone, Deserialize)]
pub struct PageProperties {
    #[serde(rename = "Title")]
    pub title: TitleProperty,

    #[serde(rename = "Date")]
    pub date: DateProperty,

    #[serde(rename = "Slug")]
    pub slug: SlugProperty,

    #[serde(rename = "Published")]
    pub published: CheckboxProperty,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateProperty {
    pub date: Option<DateValue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateValue {
    /// ISO-8601, may carry a time component
    pub start: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlugProperty {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckboxProperty {
    pub checkbox: bool,
}

/// A rich text span with style annotations and an optional link
#[derive(Debug, Clone, Deserialize)]
pub struct RichText {
    pub plain_text: String,

    #[serde(default)]
    pub href: Option<String>,

    #[serde(default)]
    pub annotations: Annotations,
}

/// Style annotations on a rich text span
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

/// One structural unit of a page's content
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "paragraph")]
    Paragraph { paragraph: RichTextContent },

    #[serde(rename = "heading_1")]
    Heading1 { heading_1: RichTextContent },

    #[serde(rename = "heading_2")]
    Heading2 { heading_2: RichTextContent },

    #[serde(rename = "heading_3")]
    Heading3 { heading_3: RichTextContent },

    #[serde(rename = "bulleted_list_item")]
    BulletedListItem { bulleted_list_item: RichTextContent },

    #[serde(rename = "numbered_list_item")]
    NumberedListItem { numbered_list_item: RichTextContent },

    #[serde(rename = "code")]
    Code { code: CodeContent },

    #[serde(rename = "quote")]
    Quote { quote: RichTextContent },

    /// Any block type the blog does not render
    #[serde(other)]
    Unsupported,
}

/// Payload of text-bearing blocks
#[derive(Debug, Clone, Deserialize)]
pub struct RichTextContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

/// Payload of code blocks
#[derive(Debug, Clone, Deserialize)]
pub struct CodeContent {
    #[serde(default)]
    pub rich_text: Vec<RichText>,

    #[serde(default)]
    pub language: String,
}

/// Paginated envelope of a database query
///
/// Rows are kept as raw JSON so one malformed row drops that row only,
/// not the whole response.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<serde_json::Value>,

    #[serde(default)]
    pub next_cursor: Option<String>,

    #[serde(default)]
    pub has_more: bool,
}

/// Paginated envelope of a block-children listing
#[derive(Debug, Deserialize)]
pub struct BlockChildrenResponse {
    pub results: Vec<Block>,

    #[serde(default)]
    pub next_cursor: Option<String>,

    #[serde(default)]
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_paragraph_block() {
        let value = json!({
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "plain_text": "Hello",
                    "href": null,
                    "annotations": { "bold": true }
                }]
            }
        });

        let block: Block = serde_json::from_value(value).unwrap();
        match block {
            Block::Paragraph { paragraph } => {
                assert_eq!(paragraph.rich_text[0].plain_text, "Hello");
                assert!(paragraph.rich_text[0].annotations.bold);
                assert!(!paragraph.rich_text[0].annotations.italic);
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_code_block() {
        let value = json!({
            "type": "code",
            "code": {
                "rich_text": [{ "plain_text": "fn main() {}" }],
                "language": "rust"
            }
        });

        let block: Block = serde_json::from_value(value).unwrap();
        match block {
            Block::Code { code } => {
                assert_eq!(code.language, "rust");
                assert_eq!(code.rich_text[0].plain_text, "fn main() {}");
            }
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_block_type_is_unsupported() {
        let value = json!({
            "type": "image",
            "image": { "external": { "url": "https://example.com/a.png" } }
        });

        let block: Block = serde_json::from_value(value).unwrap();
        assert!(matches!(block, Block::Unsupported));
    }

    #[test]
    fn test_decode_query_response_keeps_raw_rows() {
        let value = json!({
            "results": [{ "id": "abc", "properties": {} }, 42],
            "next_cursor": null,
            "has_more": false
        });

        let response: QueryResponse = serde_json::from_value(value).unwrap();
        assert_eq!(response.results.len(), 2);
        assert!(!response.has_more);
    }
}
