//! Content pipeline - validates posts and converts blocks to markdown

mod excerpt;
mod markdown;
mod post;

pub use excerpt::excerpt_from_blocks;
pub use markdown::{blocks_to_markdown, rich_text_to_markdown, rich_text_to_plain};
pub use post::Post;
