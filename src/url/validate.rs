use crate::url::extract_domain;
use crate::UrlError;
use url::Url;

/// Decides whether an anchor's href should be collected from the root page
///
/// # Rules
///
/// **Rejected** (silently, these are not errors):
/// - empty or whitespace-only hrefs
/// - anything not starting with an `http://` or `https://` scheme: relative
///   paths, `mailto:`, `javascript:`, `tel:`, fragment-only links
/// - hrefs that fail to parse as a URL
/// - hrefs whose host equals `root_host` (case-insensitive, no subdomain
///   folding)
///
/// # Examples
///
/// ```
/// use link_harvest::url::is_external_link;
///
/// assert!(is_external_link("http://other.com/page", "example.com"));
/// assert!(!is_external_link("http://EXAMPLE.com/page", "example.com"));
/// assert!(!is_external_link("/about", "example.com"));
/// ```
pub fn is_external_link(href: &str, root_host: &str) -> bool {
    external_href(href, root_host).is_some()
}

/// Returns the cleaned href when it passes [`is_external_link`]
///
/// Cleaning follows what a URL parser does to an attribute value before
/// parsing it: leading and trailing spaces and control characters are
/// trimmed, and embedded tabs and line breaks are removed. The cleaned string
/// is what gets stored and written, never the raw attribute.
///
/// ```
/// use link_harvest::url::external_href;
///
/// assert_eq!(
///     external_href("  http://other.com/a\nb ", "example.com"),
///     Some("http://other.com/ab".to_string())
/// );
/// assert_eq!(external_href("/about", "example.com"), None);
/// ```
pub fn external_href(href: &str, root_host: &str) -> Option<String> {
    let href = clean_href(href);
    if href.is_empty() || !has_http_scheme(&href) {
        return None;
    }

    let url = Url::parse(&href).ok()?;
    let host = extract_domain(&url)?;
    (!host.eq_ignore_ascii_case(root_host)).then_some(href)
}

fn clean_href(href: &str) -> String {
    href.trim_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Checks the scheme prefix without allocating
fn has_http_scheme(href: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        href.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Parses and checks the URL the run starts from
///
/// # Returns
///
/// * `Ok(Url)` - An absolute HTTP(S) URL with a host
/// * `Err(UrlError)` - The URL is malformed, not HTTP(S), or has no host
pub fn parse_root_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str.trim()).map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingDomain);
    }

    Ok(url)
}
