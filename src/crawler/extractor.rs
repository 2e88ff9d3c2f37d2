//! Extraction of links and metadata from parsed documents
//!
//! Everything here is a pure function of a [`Document`]: no network access and
//! no shared state.

use crate::crawler::document::{attribute, Document};
use crate::link::Link;
use crate::url::external_href;
use std::collections::HashSet;

/// Tags consulted for a page title, highest priority first
const TITLE_TAGS: [&str; 7] = ["title", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Extracts a title for the page
///
/// Checks `<title>`, then `<h1>` through `<h6>`, taking the text of the first
/// element of each tag and stopping at the first one that is not blank.
///
/// # Example
///
/// ```
/// use link_harvest::crawler::{extract_title, Document};
///
/// let doc = Document::parse("<html><head><title>Hi</title></head><body><h1>Big</h1></body></html>");
/// assert_eq!(extract_title(&doc), Some("Hi".to_string()));
/// ```
pub fn extract_title(document: &Document) -> Option<String> {
    TITLE_TAGS.iter().find_map(|tag| document.first_text(tag))
}

/// Extracts the `content` of the first `<meta name="description">`
pub fn extract_description(document: &Document) -> Option<String> {
    document
        .elements("meta")
        .iter()
        .find(|meta| attribute(meta, "name") == Some("description"))
        .and_then(|meta| attribute(meta, "content"))
        .map(str::to_string)
}

/// Collects the outbound links of the root page, in document order
///
/// Anchors that are relative, non-HTTP, malformed or point back at
/// `root_host` are dropped. Each surviving anchor becomes a [`Link`] titled
/// with its text and carrying the cleaned href from [`external_href`], so
/// stray whitespace or line breaks in the attribute never reach the output.
/// With `dedupe` set only the first anchor for each cleaned href is kept;
/// otherwise every occurrence is.
pub fn extract_links(document: &Document, root_host: &str, dedupe: bool) -> Vec<Link> {
    let mut seen = HashSet::new();

    document
        .anchors()
        .into_iter()
        .filter_map(|(href, text)| Some((external_href(&href, root_host)?, text)))
        .filter(|(href, _)| !dedupe || seen.insert(href.clone()))
        .map(|(href, text)| Link::new(href, text))
        .collect()
}
