use crate::url::matcher::has_http_scheme;
use crate::UrlError;
use url::Url;

/// Prefixes `http://` to a URL that does not already carry an HTTP(S) scheme
///
/// # Examples
///
/// ```
/// use download_all::url::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com/docs/index.html"), "http://example.com/docs/index.html");
/// assert_eq!(ensure_scheme("https://example.com/"), "https://example.com/");
/// ```
pub fn ensure_scheme(url_str: &str) -> String {
    let trimmed = url_str.trim();
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

/// Parses a parent page URL and checks that it names a host
///
/// # Arguments
///
/// * `url_str` - The URL as given on the command line, scheme already ensured
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - The URL does not parse or has no host
pub fn parse_page_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost(url_str.to_string())),
    }
}

/// Derives the site path from a parent page URL
///
/// Everything up to and including the last `/` is kept, so
/// `http://example.com/docs/index.html` becomes `http://example.com/docs/`.
/// A bare host such as `http://example.com` becomes `http://example.com/`.
///
/// # Examples
///
/// ```
/// use download_all::url::derive_site_path;
///
/// assert_eq!(derive_site_path("http://example.com/docs/index.html"), "http://example.com/docs/");
/// assert_eq!(derive_site_path("http://example.com/docs/"), "http://example.com/docs/");
/// ```
pub fn derive_site_path(parent_url: &str) -> String {
    let after_scheme = parent_url.find("://").map(|idx| idx + 3).unwrap_or(0);

    match parent_url[after_scheme..].rfind('/') {
        Some(idx) => parent_url[..after_scheme + idx + 1].to_string(),
        None => format!("{}/", parent_url),
    }
}

/// Makes sure an explicitly supplied site path ends in `/`
pub fn normalize_site_path(site_path: &str) -> String {
    let trimmed = site_path.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// Resolves a collected href against the site path
///
/// Hrefs that already carry an HTTP(S) scheme are returned unchanged. Every
/// other href is appended to the site path verbatim; no `..` or `/` handling
/// is performed, so `/root.html` resolves to `<site_path>/root.html`.
///
/// # Examples
///
/// ```
/// use download_all::url::resolve_href;
///
/// assert_eq!(
///     resolve_href("page2.html", "http://example.com/docs/"),
///     "http://example.com/docs/page2.html"
/// );
/// assert_eq!(
///     resolve_href("http://other.com/x.html", "http://example.com/docs/"),
///     "http://other.com/x.html"
/// );
/// ```
pub fn resolve_href(href: &str, site_path: &str) -> String {
    if has_http_scheme(href) {
        href.to_string()
    } else {
        format!("{}{}", site_path, href)
    }
}
