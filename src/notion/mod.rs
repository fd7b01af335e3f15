//! Notion API client and typed response models

mod client;
mod error;
mod types;

pub use client::NotionClient;
pub use error::NotionError;
pub use types::{
    Annotations, Block, BlockChildrenResponse, CodeContent, DateValue, Page, PageProperties,
    QueryResponse, RichText, RichTextContent,
};
