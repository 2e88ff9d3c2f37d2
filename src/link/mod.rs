//! Link model
//!
//! A [`Link`] is the value that flows through the whole pipeline: created from
//! an anchor on the root page, enriched once with the data fetched from its
//! target, then handed to the writer.

/// A hyperlink found on the root page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    href: String,
    title: Option<String>,
    description: Option<String>,
}

impl Link {
    /// Creates a link with an optional title taken from the anchor text
    pub fn new(href: impl Into<String>, title: Option<String>) -> Self {
        Self {
            href: href.into(),
            title,
            description: None,
        }
    }

    /// The absolute URL this link points at
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The text to show for this link: its title, or the href when untitled
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.href)
    }

    /// Consumes the link and returns its enriched form
    ///
    /// The title already carried by the link (anchor text) wins over
    /// `fetched_title`; when neither is present the href is used, so an
    /// enriched link always has a non-empty title.
    pub fn enrich(self, fetched_title: Option<String>, description: Option<String>) -> Self {
        let non_blank = |t: &String| !t.trim().is_empty();
        let title = self
            .title
            .filter(non_blank)
            .or(fetched_title.filter(non_blank))
            .unwrap_or_else(|| self.href.clone());

        Self {
            href: self.href,
            title: Some(title),
            description,
        }
    }

    /// Consumes the link and returns a placeholder recording why enrichment failed
    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.enrich(None, Some(reason.into()))
    }
}
