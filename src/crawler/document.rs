//! Parsed HTML documents
//!
//! A thin wrapper over `scraper::Html` exposing only what link harvesting
//! needs: elements by tag name, attributes, and normalized text.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses an HTML string
    ///
    /// HTML parsing is error-tolerant: malformed markup still yields a
    /// document, possibly with fewer elements than intended.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns every element with the given tag name, in document order
    pub fn elements(&self, tag: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(tag) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the first element with the given tag name
    pub fn first_element(&self, tag: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(tag).ok()?;
        self.html.select(&selector).next()
    }

    /// Returns the normalized text of the first element with the given tag
    ///
    /// Only the first element is considered; if its text is blank the result
    /// is `None` even when a later element of the same tag has text.
    pub fn first_text(&self, tag: &str) -> Option<String> {
        self.first_element(tag).and_then(|element| element_text(&element))
    }

    /// Returns `(href, normalized text)` for every `<a>` carrying an `href`
    pub fn anchors(&self) -> Vec<(String, Option<String>)> {
        self.elements("a[href]")
            .into_iter()
            .filter_map(|element| {
                let href = element.value().attr("href")?;
                Some((href.to_string(), element_text(&element)))
            })
            .collect()
    }
}

/// Looks up an attribute on an element
pub fn attribute<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Returns the normalized text content of an element
pub fn element_text(element: &ElementRef<'_>) -> Option<String> {
    normalize_text(&element.text().collect::<String>())
}

/// Normalizes text content for use as a title
///
/// Line breaks are replaced with spaces so that words on separate lines stay
/// separated, then surrounding whitespace is trimmed. Blank input yields
/// `None`. Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use link_harvest::crawler::normalize_text;
///
/// assert_eq!(
///     normalize_text("   Hello, \rWorld\n!  "),
///     Some("Hello,  World !".to_string())
/// );
/// assert_eq!(normalize_text(" \r\n "), None);
/// ```
pub fn normalize_text(input: &str) -> Option<String> {
    let normalized = input.replace(['\r', '\n'], " ");
    let trimmed = normalized.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
