//! Helper functions shared by commands and route handlers

mod date;

pub use date::*;
