/// Suffix an href must end with to be collected
pub const QUALIFYING_SUFFIX: &str = "html";

/// Checks if an anchor href qualifies as a linked page
///
/// The check is a literal, case-sensitive suffix match on the raw href. It
/// is not an extension check: `page.html`, `page.xhtml` and `somehtml` all
/// qualify, while `page.HTML` and `page.html#top` do not.
///
/// # Examples
///
/// ```
/// use download_all::url::is_qualifying_href;
///
/// assert!(is_qualifying_href("chapter1.html"));
/// assert!(is_qualifying_href("notes.xhtml"));
/// assert!(!is_qualifying_href("chapter1.htm"));
/// assert!(!is_qualifying_href("chapter1.HTML"));
/// ```
pub fn is_qualifying_href(href: &str) -> bool {
    href.ends_with(QUALIFYING_SUFFIX)
}

/// Checks if a string already starts with an `http://` or `https://` scheme
///
/// The scheme comparison is case-insensitive.
///
/// # Examples
///
/// ```
/// use download_all::url::has_http_scheme;
///
/// assert!(has_http_scheme("http://example.com/a.html"));
/// assert!(has_http_scheme("HTTPS://example.com/a.html"));
/// assert!(!has_http_scheme("a.html"));
/// assert!(!has_http_scheme("ftp://example.com/a.html"));
/// ```
pub fn has_http_scheme(candidate: &str) -> bool {
    starts_with_ignore_case(candidate, "http://") || starts_with_ignore_case(candidate, "https://")
}

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate
        .get(..prefix.len())
        .map(|head| head.eq_ignore_ascii_case(prefix))
        .unwrap_or(false)
}
