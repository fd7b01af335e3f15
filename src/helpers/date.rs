//! Date helper functions

use chrono::{Datelike, NaiveDate};

/// Format a date in full English form (like "January 1, 2024")
///
/// The day is unpadded, matching `toLocaleDateString`-style output.
pub fn full_date(date: &NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}
