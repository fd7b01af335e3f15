//! Validated post model

use chrono::NaiveDate;
use serde_json::Value;

use crate::notion::Page;

/// A blog post row that passed validation
///
/// Read-only and sourced externally; rows that fail validation are
/// dropped from listings, never surfaced as errors.
#[derive(Debug, Clone)]
pub struct Post {
    /// Page id, needed to fetch the post's content blocks
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// URL-friendly identifier
    pub slug: String,

    /// Always true for a validated post
    pub published: bool,
}

impl Post {
    /// Decode and validate a raw page object from a database query
    ///
    /// Returns `None` when the row does not match the expected schema,
    /// is missing any of title, date or slug, or is not published.
    pub fn from_value(value: &Value) -> Option<Self> {
        let page: Page = serde_json::from_value(value.clone()).ok()?;
        Self::from_page(page)
    }

    /// Validate an already-decoded page
    pub fn from_page(page: Page) -> Option<Self> {
        let props = page.properties;

        let title = props.title.title.first()?.plain_text.clone();
        if title.is_empty() {
            return None;
        }

        let date = parse_date(&props.date.date?.start)?;

        let slug = props.slug.rich_text.first()?.plain_text.clone();
        if slug.is_empty() {
            return None;
        }

        if !props.published.checkbox {
            return None;
        }

        Some(Self {
            id: page.id,
            title,
            date,
            slug,
            published: true,
        })
    }
}

/// Parse the date portion of an ISO-8601 value, ignoring any time component
fn parse_date(start: &str) -> Option<NaiveDate> {
    let date_part = start.get(..10).unwrap_or(start);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
