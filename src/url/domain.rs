use url::Url;

/// Extracts the lowercase host from a URL
///
/// Hosts are compared exactly after lowercasing: `www.example.com` and
/// `example.com` are different hosts.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use link_harvest::url::extract_domain;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("example.com".to_string()));
///
/// let url = Url::parse("mailto:someone@example.com").unwrap();
/// assert_eq!(extract_domain(&url), None);
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_domain() {
        let url = Url::parse("http://example.com/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_subdomain_is_kept() {
        let url = Url::parse("https://www.example.com/post").unwrap();
        assert_eq!(extract_domain(&url), Some("www.example.com".to_string()));
    }

    #[test]
    fn test_port_is_dropped() {
        let url = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(extract_domain(&url), Some("127.0.0.1".to_string()));
    }

    #[test]
    fn test_mixed_case_lowercased() {
        let url = Url::parse("https://Example.COM/").unwrap();
        assert_eq!(extract_domain(&url), Some("example.com".to_string()));
    }

    #[test]
    fn test_no_host() {
        let url = Url::parse("javascript:void(0)").unwrap();
        assert_eq!(extract_domain(&url), None);
    }
}
