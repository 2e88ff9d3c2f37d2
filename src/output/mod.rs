//! Output module for writing the harvested link list
//!
//! This module handles:
//! - Rendering enriched links as a Markdown link list
//! - Writing that list to disk

mod error;
mod markdown;

pub use error::{OutputError, OutputResult};
pub use markdown::{format_markdown, write_markdown, write_entries};
